//! Decorators and the named decorator lists.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_catalog::{CatalogReader, PriceModel, PromotionSource};
use storefront_core::{DomainError, DomainResult, Logger, PromotionId};
use storefront_decorators::highlights::{display_value, title_for};
use storefront_decorators::{
    badges, highlights, quantity, variants, BadgeProfile, HighlightAttribute, Highlights,
    PromotionCache, QuantityBounds,
};

use crate::config::PipelineConfig;
use crate::options::ComposeOptions;
use crate::view_model::{ImageSet, PriceView, ProductIdentity, ViewModel};

/// A decorator; each one owns exactly one view-model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decorator {
    Identity,
    Images,
    Price,
    Promotions,
    Badges,
    VariationAttributes,
    Variants,
    TeamwearVariants,
    Highlights,
    Attributes,
    Quantity,
    Options,
}

/// Named, ordered decorator lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecoratorListName {
    /// Lightweight list/grid tile.
    Tile,
    /// Complete product detail page.
    FullDetail,
    /// Teamwear variation group.
    Teamwear,
}

impl DecoratorListName {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecoratorListName::Tile => "tile",
            DecoratorListName::FullDetail => "fullDetail",
            DecoratorListName::Teamwear => "teamwear",
        }
    }

    /// Decorators of this list, in execution order.
    pub fn decorators(&self, is_large_tile: bool) -> Vec<Decorator> {
        match self {
            DecoratorListName::Tile => {
                let mut list = vec![
                    Decorator::Identity,
                    Decorator::Images,
                    Decorator::Price,
                    Decorator::Promotions,
                    Decorator::Badges,
                    Decorator::Variants,
                    Decorator::Highlights,
                ];
                if is_large_tile {
                    list.push(Decorator::Attributes);
                }
                list.push(Decorator::Quantity);
                list
            }
            DecoratorListName::FullDetail => vec![
                Decorator::Identity,
                Decorator::Images,
                Decorator::Price,
                Decorator::Promotions,
                Decorator::Badges,
                Decorator::VariationAttributes,
                Decorator::Variants,
                Decorator::Highlights,
                Decorator::Attributes,
                Decorator::Quantity,
                Decorator::Options,
            ],
            DecoratorListName::Teamwear => vec![
                Decorator::Identity,
                Decorator::Images,
                Decorator::Price,
                Decorator::Promotions,
                Decorator::Badges,
                Decorator::VariationAttributes,
                Decorator::TeamwearVariants,
                Decorator::Variants,
                Decorator::Quantity,
                Decorator::Options,
            ],
        }
    }
}

impl FromStr for DecoratorListName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tile" => Ok(DecoratorListName::Tile),
            "fullDetail" | "full" => Ok(DecoratorListName::FullDetail),
            "teamwear" => Ok(DecoratorListName::Teamwear),
            other => Err(DomainError::validation(format!(
                "unknown decorator list: {other}"
            ))),
        }
    }
}

/// Everything a decorator may read besides the product.
pub struct DecoratorContext<'a> {
    pub options: &'a ComposeOptions<'a>,
    pub config: &'a PipelineConfig,
    pub promotion_source: &'a dyn PromotionSource,
    pub logger: &'a dyn Logger,
    pub badge_limit: Option<usize>,
}

impl<'a> DecoratorContext<'a> {
    /// The selected variation if the request carries one, else `product`.
    pub fn variation_product<'p>(
        &self,
        product: Option<&'p dyn CatalogReader>,
    ) -> Option<&'p dyn CatalogReader>
    where
        'a: 'p,
    {
        self.options.variation_model.or(product)
    }

    /// Active promotion ids: pre-fetched ones, else the session cache, else
    /// a fresh uncached lookup.
    pub fn active_promotion_ids(&self) -> DomainResult<Vec<PromotionId>> {
        if let Some(ids) = &self.options.promotions {
            return Ok(ids.clone());
        }
        let cache = PromotionCache::new(self.promotion_source);
        match self.options.session {
            Some(session) => cache.active_promotion_ids(session),
            None => Ok(cache.compute()?.promotion_ids),
        }
    }
}

impl Decorator {
    pub const ALL: [Decorator; 12] = [
        Decorator::Identity,
        Decorator::Images,
        Decorator::Price,
        Decorator::Promotions,
        Decorator::Badges,
        Decorator::VariationAttributes,
        Decorator::Variants,
        Decorator::TeamwearVariants,
        Decorator::Highlights,
        Decorator::Attributes,
        Decorator::Quantity,
        Decorator::Options,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Decorator::Identity => "identity",
            Decorator::Images => "images",
            Decorator::Price => "price",
            Decorator::Promotions => "promotions",
            Decorator::Badges => "badges",
            Decorator::VariationAttributes => "variationAttributes",
            Decorator::Variants => "variants",
            Decorator::TeamwearVariants => "teamwearVariants",
            Decorator::Highlights => "highlights",
            Decorator::Attributes => "attributes",
            Decorator::Quantity => "quantity",
            Decorator::Options => "options",
        }
    }

    /// Compute this decorator's field and write it into `vm`.
    ///
    /// An absent product is not an error: the field gets its default.
    pub fn apply(
        &self,
        vm: &mut ViewModel,
        product: Option<&dyn CatalogReader>,
        ctx: &DecoratorContext<'_>,
    ) -> DomainResult<()> {
        match self {
            Decorator::Identity => {
                let identity = match product {
                    Some(p) => ProductIdentity {
                        id: Some(p.id().clone()),
                        product_name: p.name().to_string(),
                        product_type: p.kind()?.as_str().to_string(),
                    },
                    None => ProductIdentity::unknown(),
                };
                vm.set_identity(identity)
            }
            Decorator::Images => {
                let images = match product {
                    Some(p) => ImageSet {
                        large: p.images("large")?,
                        small: p.images("small")?,
                    },
                    None => ImageSet::default(),
                };
                vm.set_images(images)
            }
            Decorator::Price => {
                let price = match product {
                    Some(p) => price_view(p.price()?),
                    None => PriceView::default(),
                };
                vm.set_price(price)
            }
            Decorator::Promotions => {
                let messages = match product {
                    Some(p) => {
                        let ids = ctx.active_promotion_ids()?;
                        if ids.is_empty() {
                            Vec::new()
                        } else {
                            ctx.promotion_source.product_promotions(p.id(), &ids)?
                        }
                    }
                    None => Vec::new(),
                };
                vm.set_promotions(messages)
            }
            Decorator::Badges => {
                let profile = product.map(BadgeProfile::from_product).transpose()?;
                vm.set_badges(badges::rank(profile.as_ref(), ctx.badge_limit))
            }
            Decorator::VariationAttributes => {
                let attributes = match ctx.variation_product(product) {
                    Some(p) => p.variation_attributes()?,
                    None => Vec::new(),
                };
                vm.set_variation_attributes(attributes)
            }
            Decorator::Variants => {
                let projections = match ctx.variation_product(product) {
                    Some(p) => variants::project(p)?,
                    None => Vec::new(),
                };
                vm.set_variants(projections)
            }
            Decorator::TeamwearVariants => {
                // only meaningful once variation attributes are known
                let projections = match (ctx.variation_product(product), vm.variation_attributes()) {
                    (Some(p), Some(attributes)) if !attributes.is_empty() => {
                        if p.is_variation_group()? {
                            variants::project_all(p, attributes)?
                        } else {
                            Vec::new()
                        }
                    }
                    _ => Vec::new(),
                };
                vm.set_teamwear_variants(projections)
            }
            Decorator::Highlights => {
                let resolved = highlights::resolve(
                    product,
                    ctx.options.product_type.as_deref(),
                    ctx.config.highlight_limit,
                    ctx.logger,
                )?;
                vm.set_highlights(resolved)
            }
            Decorator::Attributes => {
                let attributes = match product {
                    Some(p) => all_attributes(p)?,
                    None => Vec::new(),
                };
                vm.set_attributes(attributes)
            }
            Decorator::Quantity => {
                let bounds = quantity::resolve(
                    ctx.variation_product(product),
                    ctx.options.quantity.as_ref(),
                    ctx.config.default_max_order_quantity,
                    ctx.logger,
                )?;
                vm.set_quantity(bounds)
            }
            Decorator::Options => {
                let options = ctx
                    .options
                    .option_model
                    .as_ref()
                    .map(|m| m.options.clone())
                    .unwrap_or_default();
                vm.set_options(options)
            }
        }
    }

    /// Write this decorator's safe default, unless the field is already set.
    pub fn assign_default(&self, vm: &mut ViewModel, config: &PipelineConfig) {
        if vm.is_set(*self) {
            return;
        }
        let _ = match self {
            Decorator::Identity => vm.set_identity(ProductIdentity::unknown()),
            Decorator::Images => vm.set_images(ImageSet::default()),
            Decorator::Price => vm.set_price(PriceView::default()),
            Decorator::Promotions => vm.set_promotions(Vec::new()),
            Decorator::Badges => vm.set_badges(Vec::new()),
            Decorator::VariationAttributes => vm.set_variation_attributes(Vec::new()),
            Decorator::Variants => vm.set_variants(Vec::new()),
            Decorator::TeamwearVariants => vm.set_teamwear_variants(Vec::new()),
            Decorator::Highlights => vm.set_highlights(Highlights::absent()),
            Decorator::Attributes => vm.set_attributes(Vec::new()),
            Decorator::Quantity => {
                vm.set_quantity(QuantityBounds::fallback(config.default_max_order_quantity))
            }
            Decorator::Options => vm.set_options(Vec::new()),
        };
    }
}

fn price_view(model: PriceModel) -> PriceView {
    let PriceModel { sales, list } = model;
    let sales = sales.or_else(|| list.clone());
    let list = match (&sales, list) {
        (Some(s), Some(l)) if l.currency == s.currency && l.amount > s.amount => Some(l),
        _ => None,
    };
    PriceView { sales, list }
}

fn all_attributes(product: &dyn CatalogReader) -> DomainResult<Vec<HighlightAttribute>> {
    Ok(product
        .custom()?
        .iter()
        .filter_map(|(id, value)| {
            Some(HighlightAttribute {
                id: id.clone(),
                title: title_for(id).unwrap_or(id.as_str()).to_string(),
                value: display_value(value)?,
            })
        })
        .collect())
}
