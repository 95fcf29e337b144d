//! Order quantity bounds.

use serde::{Deserialize, Serialize};

use storefront_catalog::CatalogReader;
use storefront_core::{DomainResult, Logger, ValueObject};

/// Ceiling used when the product is not a specific variant.
pub const DEFAULT_MAX_ORDER_QUANTITY: u32 = 9;

/// Quantity as requested by the shopper (query string or JSON body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestedQuantity {
    Count(i64),
    Text(String),
}

impl RequestedQuantity {
    /// Positive quantity, if the request carries one.
    ///
    /// Text is read up to the first non-digit, so `"2.5"` is 2 and `"3 pcs"`
    /// is 3.
    pub fn positive(&self) -> Option<u32> {
        let parsed = match self {
            RequestedQuantity::Count(n) => *n,
            RequestedQuantity::Text(s) => leading_integer(s)?,
        };
        u32::try_from(parsed).ok().filter(|n| *n > 0)
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let value = rest[..digits].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

impl From<i64> for RequestedQuantity {
    fn from(value: i64) -> Self {
        RequestedQuantity::Count(value)
    }
}

impl From<&str> for RequestedQuantity {
    fn from(value: &str) -> Self {
        RequestedQuantity::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityBounds {
    pub selected: u32,
    pub min: u32,
    pub max: u32,
}

impl QuantityBounds {
    /// Bounds when nothing but the ceiling is known.
    pub fn fallback(default_max: u32) -> Self {
        Self {
            selected: 1,
            min: 1,
            max: default_max,
        }
    }
}

impl ValueObject for QuantityBounds {}

/// Compute selected/min/max quantities for `product`.
///
/// A requested quantity below the minimum (including zero and garbage) falls
/// back to the minimum. Variants are capped by their ATS; everything else by
/// `default_max`.
pub fn resolve(
    product: Option<&dyn CatalogReader>,
    requested: Option<&RequestedQuantity>,
    default_max: u32,
    logger: &dyn Logger,
) -> DomainResult<QuantityBounds> {
    let Some(product) = product else {
        let selected = requested.and_then(RequestedQuantity::positive).unwrap_or(1);
        return Ok(QuantityBounds {
            selected,
            min: 1,
            max: default_max,
        });
    };

    let min = product.min_order_quantity().unwrap_or(1).max(1);
    let selected = requested
        .and_then(RequestedQuantity::positive)
        .filter(|q| *q >= min)
        .unwrap_or(min);

    let max = if product.is_variant()? {
        match product.availability()?.ats() {
            Some(ats) => ats,
            None => {
                logger.warn(&format!(
                    "quantity: variant {} has no inventory record; max set to 0",
                    product.id()
                ));
                0
            }
        }
    } else {
        default_max
    };

    Ok(QuantityBounds { selected, min, max })
}
