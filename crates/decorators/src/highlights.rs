//! Attribute highlights per product type.

use serde::{Deserialize, Serialize, Serializer};

use storefront_catalog::{CatalogReader, CustomAttributes};
use storefront_core::{DomainResult, Logger, ValueObject};

/// Attributes surfaced as highlights, per coarse product type, in display order.
const HIGHLIGHT_TABLE: &[(&str, &[(&str, &str)])] = &[
    (
        "rackets",
        &[
            ("headSize", "Head size"),
            ("weight", "Weight"),
            ("balance", "Balance"),
            ("stringPattern", "String pattern"),
            ("length", "Length"),
            ("stiffness", "Stiffness"),
        ],
    ),
    (
        "clothing",
        &[
            ("material", "Material"),
            ("fit", "Fit"),
            ("gender", "Gender"),
            ("sleeveLength", "Sleeve length"),
        ],
    ),
    (
        "shoes",
        &[
            ("surface", "Court surface"),
            ("cushioning", "Cushioning"),
            ("width", "Width"),
            ("dropMm", "Drop"),
        ],
    ),
    (
        "strings",
        &[
            ("gauge", "Gauge"),
            ("material", "Material"),
            ("structure", "Structure"),
            ("setLength", "Set length"),
        ],
    ),
    (
        "bags",
        &[
            ("racketCapacity", "Racket capacity"),
            ("thermoCompartment", "Thermo compartment"),
            ("volume", "Volume"),
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightAttribute {
    pub id: String,
    pub title: String,
    pub value: String,
}

impl ValueObject for HighlightAttribute {}

/// Resolved highlights: `false` when there is no product, otherwise the
/// (possibly empty) attribute set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlights(Option<Vec<HighlightAttribute>>);

impl Highlights {
    pub fn absent() -> Self {
        Self(None)
    }

    pub fn from_attributes(attributes: Vec<HighlightAttribute>) -> Self {
        Self(Some(attributes))
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    pub fn attributes(&self) -> &[HighlightAttribute] {
        self.0.as_deref().unwrap_or(&[])
    }
}

impl Serialize for Highlights {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            None => serializer.serialize_bool(false),
            Some(attributes) => attributes.serialize(serializer),
        }
    }
}

/// Attribute-to-title table for a product type; unknown types have none.
pub fn table_for(product_type: &str) -> &'static [(&'static str, &'static str)] {
    HIGHLIGHT_TABLE
        .iter()
        .find(|(ty, _)| *ty == product_type)
        .map(|(_, attributes)| *attributes)
        .unwrap_or(&[])
}

/// Display title of an attribute across all product types, if it has one.
pub fn title_for(attribute: &str) -> Option<&'static str> {
    HIGHLIGHT_TABLE
        .iter()
        .flat_map(|(_, attributes)| attributes.iter())
        .find(|(id, _)| *id == attribute)
        .map(|(_, title)| *title)
}

/// Render a custom attribute value for display; `None` for empty values.
pub fn display_value(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    let rendered = match value {
        Value::Null => return None,
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => return None,
    };

    (!rendered.is_empty()).then_some(rendered)
}

/// Pick the product whose attributes stand for `product` in highlights.
///
/// A variant stands for itself. A master or variation group with exactly one
/// variant is represented by that variant. Everything else stands for itself.
pub fn representative(product: &dyn CatalogReader) -> DomainResult<&dyn CatalogReader> {
    if product.is_variant()? {
        return Ok(product);
    }
    if product.is_master()? || product.is_variation_group()? {
        let variants = product.variants()?;
        if let [only] = variants.as_slice() {
            return Ok(*only);
        }
    }
    Ok(product)
}

/// Resolve the highlight attributes of `product` for `product_type`.
pub fn resolve(
    product: Option<&dyn CatalogReader>,
    product_type: Option<&str>,
    limit: usize,
    logger: &dyn Logger,
) -> DomainResult<Highlights> {
    let Some(product) = product else {
        return Ok(Highlights::absent());
    };

    let source = match representative(product) {
        Ok(source) => source,
        Err(err) => {
            logger.warn(&format!(
                "highlights: could not resolve representative of {}: {err}; using product itself",
                product.id()
            ));
            product
        }
    };

    let table = product_type.map(table_for).unwrap_or(&[]);
    if table.is_empty() {
        return Ok(Highlights::from_attributes(Vec::new()));
    }

    let custom = source.custom()?;
    Ok(Highlights::from_attributes(collect(table, &custom, limit)))
}

fn collect(
    table: &[(&str, &str)],
    custom: &CustomAttributes,
    limit: usize,
) -> Vec<HighlightAttribute> {
    table
        .iter()
        .filter_map(|(id, title)| {
            let value = display_value(custom.get(*id)?)?;
            Some(HighlightAttribute {
                id: (*id).to_string(),
                title: (*title).to_string(),
                value,
            })
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_catalog::CatalogProduct;
    use storefront_core::NoopLogger;

    fn ids(highlights: &Highlights) -> Vec<(&str, &str)> {
        highlights
            .attributes()
            .iter()
            .map(|h| (h.id.as_str(), h.value.as_str()))
            .collect()
    }

    #[test]
    fn no_product_resolves_to_false() {
        let highlights = resolve(None, Some("rackets"), 5, &NoopLogger).unwrap();
        assert!(highlights.is_absent());
        assert_eq!(serde_json::to_value(&highlights).unwrap(), json!(false));
    }

    #[test]
    fn single_variant_group_uses_the_variant() {
        let group = CatalogProduct::from_value(json!({
            "id": "G-1",
            "kind": "variationGroup",
            "custom": {"headSize": "630 cm²"},
            "variants": [{"id": "V-1", "kind": "variant", "custom": {"headSize": "645 cm²", "weight": 300}}]
        }))
        .unwrap();

        let highlights = resolve(Some(&group), Some("rackets"), 5, &NoopLogger).unwrap();
        assert_eq!(ids(&highlights), vec![("headSize", "645 cm²"), ("weight", "300")]);
    }

    #[test]
    fn master_with_several_variants_uses_its_own_attributes() {
        let master = CatalogProduct::from_value(json!({
            "id": "M-1",
            "kind": "master",
            "custom": {"balance": "320 mm"},
            "variants": [
                {"id": "V-1", "kind": "variant", "custom": {"headSize": "645 cm²"}},
                {"id": "V-2", "kind": "variant", "custom": {"headSize": "630 cm²"}}
            ]
        }))
        .unwrap();

        let highlights = resolve(Some(&master), Some("rackets"), 5, &NoopLogger).unwrap();
        assert_eq!(ids(&highlights), vec![("balance", "320 mm")]);
    }

    #[test]
    fn unknown_product_type_yields_empty_set() {
        let product = CatalogProduct::from_value(json!({"id": "X", "custom": {"weight": 1}})).unwrap();
        let highlights = resolve(Some(&product), Some("golf"), 5, &NoopLogger).unwrap();
        assert!(!highlights.is_absent());
        assert!(highlights.attributes().is_empty());
        assert_eq!(serde_json::to_value(&highlights).unwrap(), json!([]));
    }

    #[test]
    fn output_is_bounded_and_skips_empty_values() {
        let product = CatalogProduct::from_value(json!({
            "id": "R",
            "custom": {
                "headSize": "", "weight": 290, "balance": null,
                "stringPattern": "16x19", "length": "27 in", "stiffness": 66
            }
        }))
        .unwrap();
        let highlights = resolve(Some(&product), Some("rackets"), 2, &NoopLogger).unwrap();
        assert_eq!(ids(&highlights), vec![("weight", "290"), ("stringPattern", "16x19")]);
    }

    #[test]
    fn display_value_renders_scalars_and_lists() {
        assert_eq!(display_value(&json!(true)), Some("Yes".into()));
        assert_eq!(display_value(&json!(["poly", null, "nylon"])), Some("poly, nylon".into()));
        assert_eq!(display_value(&json!({"a": 1})), None);
        assert_eq!(display_value(&json!("  ")), None);
    }

    #[test]
    fn titles_are_shared_across_types() {
        assert_eq!(title_for("gauge"), Some("Gauge"));
        assert_eq!(title_for("colorCode"), None);
    }
}
