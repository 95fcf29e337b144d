//! The accumulator decorators write into.

use serde::Serialize;

use storefront_catalog::{ImageRef, Money, PromotionMessage, VariationAttribute};
use storefront_core::{DomainError, DomainResult, ProductId};
use storefront_decorators::{
    BadgeDescriptor, HighlightAttribute, Highlights, QuantityBounds, VariantProjection,
};

use crate::decorator::Decorator;
use crate::options::ProductOption;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdentity {
    pub id: Option<ProductId>,
    pub product_name: String,
    pub product_type: String,
}

impl ProductIdentity {
    pub fn unknown() -> Self {
        Self {
            id: None,
            product_name: String::new(),
            product_type: "unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ImageSet {
    pub large: Vec<ImageRef>,
    pub small: Vec<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PriceView {
    pub sales: Option<Money>,
    /// Strike-through price; only present when above the sales price.
    pub list: Option<Money>,
}

fn assign<T>(slot: &mut Option<T>, decorator: Decorator, value: T) -> DomainResult<()> {
    if slot.is_some() {
        return Err(DomainError::conflict(format!(
            "view-model field `{}` already set",
            decorator.name()
        )));
    }
    *slot = Some(value);
    Ok(())
}

macro_rules! view_model {
    ($( $(#[$attr:meta])* $field:ident, $setter:ident: $ty:ty => $decorator:ident; )*) => {
        /// Product view-model.
        ///
        /// Every field is written at most once, by the decorator that owns it.
        /// Fields the decorator list of a composition does not include stay
        /// unset and are omitted from the serialized form.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct ViewModel {
            $( $(#[$attr])* $field: Option<$ty>, )*
        }

        impl ViewModel {
            $(
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }

                pub fn $setter(&mut self, value: $ty) -> DomainResult<()> {
                    assign(&mut self.$field, Decorator::$decorator, value)
                }
            )*

            /// Whether the field owned by `decorator` has been written.
            pub fn is_set(&self, decorator: Decorator) -> bool {
                match decorator {
                    $( Decorator::$decorator => self.$field.is_some(), )*
                }
            }
        }
    };
}

view_model! {
    #[serde(flatten)]
    identity, set_identity: ProductIdentity => Identity;
    #[serde(skip_serializing_if = "Option::is_none")]
    images, set_images: ImageSet => Images;
    #[serde(skip_serializing_if = "Option::is_none")]
    price, set_price: PriceView => Price;
    #[serde(skip_serializing_if = "Option::is_none")]
    promotions, set_promotions: Vec<PromotionMessage> => Promotions;
    #[serde(skip_serializing_if = "Option::is_none")]
    badges, set_badges: Vec<BadgeDescriptor> => Badges;
    #[serde(skip_serializing_if = "Option::is_none")]
    variation_attributes, set_variation_attributes: Vec<VariationAttribute> => VariationAttributes;
    #[serde(skip_serializing_if = "Option::is_none")]
    variants, set_variants: Vec<VariantProjection> => Variants;
    #[serde(skip_serializing_if = "Option::is_none")]
    teamwear_variants, set_teamwear_variants: Vec<VariantProjection> => TeamwearVariants;
    #[serde(skip_serializing_if = "Option::is_none")]
    highlights, set_highlights: Highlights => Highlights;
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes, set_attributes: Vec<HighlightAttribute> => Attributes;
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity, set_quantity: QuantityBounds => Quantity;
    #[serde(skip_serializing_if = "Option::is_none")]
    options, set_options: Vec<ProductOption> => Options;
}
