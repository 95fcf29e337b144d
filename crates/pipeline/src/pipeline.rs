use std::sync::Arc;

use storefront_catalog::{CatalogReader, PromotionSource};
use storefront_core::Logger;

use crate::config::PipelineConfig;
use crate::decorator::{DecoratorContext, DecoratorListName};
use crate::options::ComposeOptions;
use crate::view_model::ViewModel;

/// Applies named decorator lists to catalog products.
///
/// Holds the collaborators shared by every composition; request-scoped inputs
/// arrive through [`ComposeOptions`]. A pipeline is cheap to share across
/// threads; compositions do not coordinate with each other.
#[derive(Clone)]
pub struct DecoratorPipeline {
    promotion_source: Arc<dyn PromotionSource>,
    logger: Arc<dyn Logger>,
    config: PipelineConfig,
}

impl DecoratorPipeline {
    pub fn new(promotion_source: Arc<dyn PromotionSource>, logger: Arc<dyn Logger>) -> Self {
        Self {
            promotion_source,
            logger,
            config: PipelineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build the view-model of `product` with the decorators of `kind`.
    ///
    /// Decorators run in list order. A decorator that fails is logged and its
    /// field gets the decorator's default, so the returned view-model always
    /// carries every field of the list.
    pub fn compose(
        &self,
        product: Option<&dyn CatalogReader>,
        kind: DecoratorListName,
        options: &ComposeOptions<'_>,
    ) -> ViewModel {
        let product_label = product
            .map(|p| p.id().to_string())
            .unwrap_or_else(|| "<none>".to_string());
        let _span = tracing::debug_span!("compose", kind = kind.as_str(), product = %product_label)
            .entered();

        let ctx = DecoratorContext {
            options,
            config: &self.config,
            promotion_source: &*self.promotion_source,
            logger: &*self.logger,
            badge_limit: match kind {
                DecoratorListName::Tile => self.config.tile_badge_limit,
                _ => None,
            },
        };

        let decorators = kind.decorators(options.is_large_tile);
        let mut vm = ViewModel::default();
        let mut degraded = 0usize;

        for decorator in &decorators {
            if let Err(err) = decorator.apply(&mut vm, product, &ctx) {
                degraded += 1;
                self.logger.error(&format!(
                    "decorator `{}` failed for product {product_label}: {err}; using default",
                    decorator.name()
                ));
                decorator.assign_default(&mut vm, &self.config);
            }
        }

        tracing::debug!(decorators = decorators.len(), degraded, "view-model composed");
        vm
    }
}

impl core::fmt::Debug for DecoratorPipeline {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DecoratorPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
