use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainResult, ProductId};

/// Free-form custom attribute bag of a catalog product.
pub type CustomAttributes = BTreeMap<String, serde_json::Value>;

/// Badge flags (badge name -> enabled).
pub type BadgeFlags = BTreeMap<String, bool>;

/// Catalog classification of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductKind {
    Master,
    Variant,
    VariationGroup,
    #[default]
    Standard,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Master => "master",
            ProductKind::Variant => "variant",
            ProductKind::VariationGroup => "variationGroup",
            ProductKind::Standard => "standard",
        }
    }
}

/// One selectable value on a variation axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationValue {
    /// Variant the value points at (absent when no purchasable variant exists).
    #[serde(default)]
    pub variant_id: Option<ProductId>,
    pub display_value: String,
    /// Navigable URL of the value (absent when not linkable).
    #[serde(default)]
    pub url: Option<String>,
}

/// A variation axis (`size`, `color`, ...) and its values in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationAttribute {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub values: Vec<VariationValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Available-to-sell quantity.
    #[serde(rename = "ATS")]
    pub ats: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityModel {
    #[serde(default)]
    pub inventory_record: Option<InventoryRecord>,
    #[serde(default)]
    pub orderable: bool,
}

impl AvailabilityModel {
    /// ATS of the inventory record, if there is one.
    pub fn ats(&self) -> Option<u32> {
        self.inventory_record.map(|r| r.ats)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub url: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub title: String,
}

/// Amount in the smallest currency unit (e.g. cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: u64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceModel {
    #[serde(default)]
    pub sales: Option<Money>,
    #[serde(default)]
    pub list: Option<Money>,
}

/// Read-only view of a catalog product.
///
/// Every capability that depends on the shape of the underlying object is
/// fallible: a caller may hand the pipeline a variation-model substitute that
/// cannot answer every question a full product can. Decorators treat an `Err`
/// here as a collaborator failure and fall back to their defaults.
pub trait CatalogReader: Send + Sync {
    fn id(&self) -> &ProductId;

    fn name(&self) -> &str;

    fn is_master(&self) -> DomainResult<bool>;

    fn is_variant(&self) -> DomainResult<bool>;

    fn is_variation_group(&self) -> DomainResult<bool>;

    /// Variation axes in catalog order.
    fn variation_attributes(&self) -> DomainResult<Vec<VariationAttribute>>;

    /// Sibling variant records in catalog order (possibly empty).
    fn variants(&self) -> DomainResult<Vec<&dyn CatalogReader>>;

    fn availability(&self) -> DomainResult<AvailabilityModel>;

    fn custom(&self) -> DomainResult<CustomAttributes>;

    /// `None` when the product carries no badge information at all.
    fn badges(&self) -> DomainResult<Option<BadgeFlags>>;

    fn is_test_racket(&self) -> DomainResult<bool>;

    fn min_order_quantity(&self) -> Option<u32>;

    fn images(&self, view_type: &str) -> DomainResult<Vec<ImageRef>>;

    fn price(&self) -> DomainResult<PriceModel>;

    fn kind(&self) -> DomainResult<ProductKind> {
        if self.is_variant()? {
            Ok(ProductKind::Variant)
        } else if self.is_variation_group()? {
            Ok(ProductKind::VariationGroup)
        } else if self.is_master()? {
            Ok(ProductKind::Master)
        } else {
            Ok(ProductKind::Standard)
        }
    }
}
