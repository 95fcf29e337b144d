//! Deserializable in-memory catalog product.

use std::collections::BTreeMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use storefront_core::{DomainResult, ProductId};

use crate::product::{
    AvailabilityModel, BadgeFlags, CatalogReader, CustomAttributes, ImageRef, PriceModel,
    ProductKind, VariationAttribute,
};

/// Catalog product snapshot held entirely in memory.
///
/// Loaded from JSON exports of the catalog for tests, benchmarks and local
/// tooling. Every capability succeeds; missing data is modelled as absent
/// fields rather than errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: ProductKind,
    #[serde(default)]
    pub variation_attributes: Vec<VariationAttribute>,
    #[serde(default)]
    pub variants: Vec<CatalogProduct>,
    #[serde(default)]
    pub availability: Option<AvailabilityModel>,
    #[serde(default)]
    pub custom: CustomAttributes,
    #[serde(default)]
    pub badges: Option<BadgeFlags>,
    #[serde(default)]
    pub is_test_racket: bool,
    #[serde(default)]
    pub min_order_quantity: Option<u32>,
    /// Images keyed by view type (`large`, `small`, ...).
    #[serde(default)]
    pub images: BTreeMap<String, Vec<ImageRef>>,
    #[serde(default)]
    pub price: PriceModel,
}

impl CatalogProduct {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("failed to parse catalog product JSON")
    }

    pub fn from_value(value: serde_json::Value) -> anyhow::Result<Self> {
        let product: Self =
            serde_json::from_value(value).context("failed to decode catalog product")?;
        Ok(product)
    }

    /// Parse a JSON array of products (a catalog export).
    pub fn list_from_json(raw: &str) -> anyhow::Result<Vec<Self>> {
        serde_json::from_str(raw).context("failed to parse catalog export JSON")
    }
}

impl CatalogReader for CatalogProduct {
    fn id(&self) -> &ProductId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_master(&self) -> DomainResult<bool> {
        Ok(self.kind == ProductKind::Master)
    }

    fn is_variant(&self) -> DomainResult<bool> {
        Ok(self.kind == ProductKind::Variant)
    }

    fn is_variation_group(&self) -> DomainResult<bool> {
        Ok(self.kind == ProductKind::VariationGroup)
    }

    fn variation_attributes(&self) -> DomainResult<Vec<VariationAttribute>> {
        Ok(self.variation_attributes.clone())
    }

    fn variants(&self) -> DomainResult<Vec<&dyn CatalogReader>> {
        Ok(self
            .variants
            .iter()
            .map(|v| v as &dyn CatalogReader)
            .collect())
    }

    fn availability(&self) -> DomainResult<AvailabilityModel> {
        Ok(self.availability.unwrap_or_default())
    }

    fn custom(&self) -> DomainResult<CustomAttributes> {
        Ok(self.custom.clone())
    }

    fn badges(&self) -> DomainResult<Option<BadgeFlags>> {
        Ok(self.badges.clone())
    }

    fn is_test_racket(&self) -> DomainResult<bool> {
        Ok(self.is_test_racket)
    }

    fn min_order_quantity(&self) -> Option<u32> {
        self.min_order_quantity
    }

    fn images(&self, view_type: &str) -> DomainResult<Vec<ImageRef>> {
        Ok(self.images.get(view_type).cloned().unwrap_or_default())
    }

    fn price(&self) -> DomainResult<PriceModel> {
        Ok(self.price.clone())
    }
}
