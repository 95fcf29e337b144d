use serde::{Deserialize, Serialize};

use storefront_catalog::{CatalogReader, SessionStore};
use storefront_core::PromotionId;
use storefront_decorators::RequestedQuantity;

/// A customization option of a product (engraving, grip size, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub selected_value: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Product customization context of the request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptionModel {
    #[serde(default)]
    pub options: Vec<ProductOption>,
}

/// Request-scoped inputs of a composition.
#[derive(Clone, Default)]
pub struct ComposeOptions<'a> {
    /// Coarse product-type tag (`rackets`, `clothing`, ...).
    pub product_type: Option<String>,
    /// Selected variation; replaces the product wherever attributes, variants
    /// or stock must reflect the selection rather than the master.
    pub variation_model: Option<&'a dyn CatalogReader>,
    pub quantity: Option<RequestedQuantity>,
    /// Pre-fetched active promotion ids; when absent they come from the
    /// session's promotion cache.
    pub promotions: Option<Vec<PromotionId>>,
    pub option_model: Option<OptionModel>,
    /// Large tiles also carry the full attribute list.
    pub is_large_tile: bool,
    /// Session the promotion cache memoizes into.
    pub session: Option<&'a dyn SessionStore>,
}

impl<'a> ComposeOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }

    pub fn with_variation_model(mut self, variation_model: &'a dyn CatalogReader) -> Self {
        self.variation_model = Some(variation_model);
        self
    }

    pub fn with_quantity(mut self, quantity: RequestedQuantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_promotions(mut self, promotions: Vec<PromotionId>) -> Self {
        self.promotions = Some(promotions);
        self
    }

    pub fn with_option_model(mut self, option_model: OptionModel) -> Self {
        self.option_model = Some(option_model);
        self
    }

    pub fn with_large_tile(mut self, is_large_tile: bool) -> Self {
        self.is_large_tile = is_large_tile;
        self
    }

    pub fn with_session(mut self, session: &'a dyn SessionStore) -> Self {
        self.session = Some(session);
        self
    }
}

impl core::fmt::Debug for ComposeOptions<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ComposeOptions")
            .field("product_type", &self.product_type)
            .field("variation_model", &self.variation_model.map(|p| p.id()))
            .field("quantity", &self.quantity)
            .field("promotions", &self.promotions)
            .field("option_model", &self.option_model)
            .field("is_large_tile", &self.is_large_tile)
            .field("session", &self.session.map(|s| s.session_id()))
            .finish()
    }
}
