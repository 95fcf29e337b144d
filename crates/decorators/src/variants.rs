//! Size-variant projection for quick-pick and out-of-stock controls.

use serde::{Deserialize, Serialize};

use storefront_catalog::{CatalogReader, VariationAttribute};
use storefront_core::{DomainResult, ProductId, ValueObject};

/// The only variation axis exposed to quick-pick controls.
pub const SIZE_ATTRIBUTE_ID: &str = "size";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantProjection {
    pub id: ProductId,
    pub label: String,
    pub stock: u32,
}

impl ValueObject for VariantProjection {}

/// Project the size axis of `product` onto `{id, label, stock}` entries.
///
/// Values without a variant id or URL are not purchasable and are skipped.
/// A value whose variant cannot be found among the siblings is kept with
/// `stock = 0`. Output follows the catalog's value order.
pub fn project(product: &dyn CatalogReader) -> DomainResult<Vec<VariantProjection>> {
    let attributes = product.variation_attributes()?;
    let Some(size) = attributes.iter().find(|a| a.id == SIZE_ATTRIBUTE_ID) else {
        return Ok(Vec::new());
    };

    let siblings = product.variants()?;
    let mut projections = Vec::with_capacity(size.values.len());

    for value in &size.values {
        let Some(variant_id) = value.variant_id.as_ref() else {
            continue;
        };
        if value.url.is_none() {
            continue;
        }

        let stock = match siblings.iter().find(|v| v.id() == variant_id) {
            Some(variant) => sibling_stock(*variant),
            None => 0,
        };

        projections.push(VariantProjection {
            id: variant_id.clone(),
            label: value.display_value.clone(),
            stock,
        });
    }

    Ok(projections)
}

/// Project every sibling variant of a variation group, labelled by the display
/// values (across all axes) that point at it.
///
/// Variants no axis value points at have no label and are dropped.
pub fn project_all(
    product: &dyn CatalogReader,
    attributes: &[VariationAttribute],
) -> DomainResult<Vec<VariantProjection>> {
    let siblings = product.variants()?;
    let mut projections = Vec::with_capacity(siblings.len());

    for variant in siblings {
        let label = attributes
            .iter()
            .flat_map(|a| a.values.iter())
            .filter(|v| v.variant_id.as_ref() == Some(variant.id()))
            .map(|v| v.display_value.as_str())
            .collect::<Vec<_>>()
            .join(" / ");
        if label.is_empty() {
            continue;
        }

        projections.push(VariantProjection {
            id: variant.id().clone(),
            label,
            stock: sibling_stock(variant),
        });
    }

    Ok(projections)
}

/// ATS of a sibling variant; 0 when it has no inventory record or its
/// availability cannot be read.
fn sibling_stock(variant: &dyn CatalogReader) -> u32 {
    match variant.availability() {
        Ok(availability) => availability.ats().unwrap_or(0),
        Err(err) => {
            tracing::debug!(
                variant = %variant.id(),
                error = %err,
                "variant availability unreadable; stock 0"
            );
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_catalog::{
        AvailabilityModel, BadgeFlags, CatalogProduct, CustomAttributes, ImageRef, PriceModel,
    };
    use storefront_core::DomainError;

    /// Product tree whose nodes can refuse `availability`.
    struct Node {
        inner: CatalogProduct,
        children: Vec<Node>,
        availability_fails: bool,
    }

    impl Node {
        fn from_product(mut inner: CatalogProduct, failing: &[&str]) -> Self {
            let children = std::mem::take(&mut inner.variants)
                .into_iter()
                .map(|v| Node::from_product(v, failing))
                .collect();
            let availability_fails = failing.contains(&inner.id.as_str());
            Self {
                inner,
                children,
                availability_fails,
            }
        }
    }

    impl CatalogReader for Node {
        fn id(&self) -> &ProductId {
            self.inner.id()
        }

        fn name(&self) -> &str {
            self.inner.name()
        }

        fn is_master(&self) -> DomainResult<bool> {
            self.inner.is_master()
        }

        fn is_variant(&self) -> DomainResult<bool> {
            self.inner.is_variant()
        }

        fn is_variation_group(&self) -> DomainResult<bool> {
            self.inner.is_variation_group()
        }

        fn variation_attributes(&self) -> DomainResult<Vec<VariationAttribute>> {
            self.inner.variation_attributes()
        }

        fn variants(&self) -> DomainResult<Vec<&dyn CatalogReader>> {
            Ok(self.children.iter().map(|c| c as &dyn CatalogReader).collect())
        }

        fn availability(&self) -> DomainResult<AvailabilityModel> {
            if self.availability_fails {
                return Err(DomainError::unsupported("availability"));
            }
            self.inner.availability()
        }

        fn custom(&self) -> DomainResult<CustomAttributes> {
            self.inner.custom()
        }

        fn badges(&self) -> DomainResult<Option<BadgeFlags>> {
            self.inner.badges()
        }

        fn is_test_racket(&self) -> DomainResult<bool> {
            self.inner.is_test_racket()
        }

        fn min_order_quantity(&self) -> Option<u32> {
            self.inner.min_order_quantity()
        }

        fn images(&self, view_type: &str) -> DomainResult<Vec<ImageRef>> {
            self.inner.images(view_type)
        }

        fn price(&self) -> DomainResult<PriceModel> {
            self.inner.price()
        }
    }

    fn racket_master() -> CatalogProduct {
        CatalogProduct::from_value(json!({
            "id": "R-100",
            "kind": "master",
            "variationAttributes": [
                {
                    "id": "color",
                    "values": [{"variantId": "R-100-1", "displayValue": "Red", "url": "/c/red"}]
                },
                {
                    "id": "size",
                    "values": [
                        {"variantId": "R-100-1", "displayValue": "G1", "url": "/p/R-100-1"},
                        {"variantId": null, "displayValue": "G2", "url": "/p/none"},
                        {"variantId": "R-100-3", "displayValue": "G3", "url": null},
                        {"variantId": "R-100-4", "displayValue": "G4", "url": "/p/R-100-4"},
                        {"variantId": "R-100-9", "displayValue": "G5", "url": "/p/R-100-9"}
                    ]
                }
            ],
            "variants": [
                {"id": "R-100-1", "kind": "variant", "availability": {"inventoryRecord": {"ATS": 4}}},
                {"id": "R-100-3", "kind": "variant", "availability": {"inventoryRecord": {"ATS": 2}}},
                {"id": "R-100-4", "kind": "variant"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn incomplete_values_are_dropped_in_catalog_order() {
        let projections = project(&racket_master()).unwrap();

        // five values, one without id, one without url
        assert_eq!(projections.len(), 5 - 2);
        let labels: Vec<&str> = projections.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["G1", "G4", "G5"]);
    }

    #[test]
    fn stock_comes_from_matched_variant_inventory() {
        let projections = project(&racket_master()).unwrap();
        assert_eq!(projections[0].stock, 4);
        // matched variant without inventory record
        assert_eq!(projections[1].stock, 0);
        // no sibling record at all: still listed, not orderable
        assert_eq!(projections[2].id.as_str(), "R-100-9");
        assert_eq!(projections[2].stock, 0);
    }

    #[test]
    fn products_without_size_axis_project_nothing() {
        let product = CatalogProduct::from_value(json!({
            "id": "B-1",
            "variationAttributes": [{"id": "color", "values": []}]
        }))
        .unwrap();
        assert!(project(&product).unwrap().is_empty());
    }

    #[test]
    fn project_all_joins_labels_across_axes() {
        let product = racket_master();
        let attributes = product.variation_attributes().unwrap();

        let projections = project_all(&product, &attributes).unwrap();

        assert_eq!(projections.len(), 3);
        assert_eq!(projections[0].label, "Red / G1");
        assert_eq!(projections[0].stock, 4);
        // linked or not, a value naming the variant labels it
        assert_eq!(projections[1].label, "G3");
        assert_eq!(projections[1].stock, 2);
        assert_eq!(projections[2].id.as_str(), "R-100-4");
        assert_eq!(projections[2].label, "G4");
    }

    #[test]
    fn unreadable_sibling_keeps_other_sizes() {
        let master = Node::from_product(racket_master(), &["R-100-1"]);

        let projections = project(&master).unwrap();
        let stock: Vec<(&str, u32)> = projections
            .iter()
            .map(|p| (p.label.as_str(), p.stock))
            .collect();
        assert_eq!(stock, vec![("G1", 0), ("G4", 0), ("G5", 0)]);

        let attributes = master.variation_attributes().unwrap();
        let projections = project_all(&master, &attributes).unwrap();
        let stock: Vec<(&str, u32)> = projections
            .iter()
            .map(|p| (p.id.as_str(), p.stock))
            .collect();
        assert_eq!(stock, vec![("R-100-1", 0), ("R-100-3", 2), ("R-100-4", 0)]);
    }
}
