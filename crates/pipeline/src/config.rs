//! Pipeline tunables.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_decorators::quantity::DEFAULT_MAX_ORDER_QUANTITY;

const ENV_MAX_ORDER_QUANTITY: &str = "STOREFRONT_MAX_ORDER_QUANTITY";
const ENV_TILE_BADGE_LIMIT: &str = "STOREFRONT_TILE_BADGE_LIMIT";
const ENV_HIGHLIGHT_LIMIT: &str = "STOREFRONT_HIGHLIGHT_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Quantity ceiling for products that are not a specific variant.
    pub default_max_order_quantity: u32,
    /// Badges shown on a tile; `None` shows all of them.
    pub tile_badge_limit: Option<usize>,
    /// Highlight attributes surfaced per product.
    pub highlight_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_max_order_quantity: DEFAULT_MAX_ORDER_QUANTITY,
            tile_badge_limit: Some(2),
            highlight_limit: 5,
        }
    }
}

impl PipelineConfig {
    /// Defaults overridden by `STOREFRONT_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `STOREFRONT_*` keys.
    ///
    /// Unparsable values are logged and ignored. A tile badge limit of
    /// `unlimited` lifts the cap.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tile_badge_limit = match lookup(ENV_TILE_BADGE_LIMIT) {
            Some(raw) if raw.trim().eq_ignore_ascii_case("unlimited") => None,
            Some(raw) => {
                let fallback = defaults.tile_badge_limit.unwrap_or(2);
                Some(parse_or(ENV_TILE_BADGE_LIMIT, &raw, fallback))
            }
            None => defaults.tile_badge_limit,
        };

        Self {
            default_max_order_quantity: lookup(ENV_MAX_ORDER_QUANTITY)
                .map(|raw| {
                    parse_or(ENV_MAX_ORDER_QUANTITY, &raw, defaults.default_max_order_quantity)
                })
                .unwrap_or(defaults.default_max_order_quantity),
            tile_badge_limit,
            highlight_limit: lookup(ENV_HIGHLIGHT_LIMIT)
                .map(|raw| parse_or(ENV_HIGHLIGHT_LIMIT, &raw, defaults.highlight_limit))
                .unwrap_or(defaults.highlight_limit),
        }
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + core::fmt::Debug,
{
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(key, value = raw, ?default, "invalid configuration value; using default");
        default
    })
}
