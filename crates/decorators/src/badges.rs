//! Badge ranking.

use serde::{Deserialize, Serialize};

use storefront_catalog::{BadgeFlags, CatalogReader};
use storefront_core::{DomainResult, ValueObject};

/// Fixed priority table: (flag name, badge type, rank). Lower rank wins.
const BADGE_PRIORITY: [(&str, &str, u8); 6] = [
    ("dealOfDay", "deal-of-day", 1),
    ("exclusive", "exclusive", 2),
    ("sale", "sale", 3),
    ("preOrder", "pre-order", 4),
    ("new", "new", 5),
    ("discount", "discount", 6),
];

/// Flags never shown on non-sellable sample items.
const TEST_RACKET_SUPPRESSED: [&str; 2] = ["sale", "discount"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeDescriptor {
    #[serde(rename = "type")]
    pub badge_type: String,
    pub rank: u8,
}

impl ValueObject for BadgeDescriptor {}

/// Badge-relevant slice of a product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BadgeProfile {
    pub badges: Option<BadgeFlags>,
    pub is_test_racket: bool,
}

impl BadgeProfile {
    pub fn from_product(product: &dyn CatalogReader) -> DomainResult<Self> {
        Ok(Self {
            badges: product.badges()?,
            is_test_racket: product.is_test_racket()?,
        })
    }
}

/// Rank the enabled badges of `profile`, keeping at most `limit` of them.
pub fn rank(profile: Option<&BadgeProfile>, limit: Option<usize>) -> Vec<BadgeDescriptor> {
    let Some(profile) = profile else {
        return Vec::new();
    };
    let Some(flags) = profile.badges.as_ref() else {
        return Vec::new();
    };
    let limit = limit.unwrap_or(usize::MAX);

    BADGE_PRIORITY
        .iter()
        .filter(|(flag, _, _)| flags.get(*flag).copied().unwrap_or(false))
        .filter(|(flag, _, _)| !(profile.is_test_racket && TEST_RACKET_SUPPRESSED.contains(flag)))
        .take(limit)
        .map(|(_, badge_type, rank)| BadgeDescriptor {
            badge_type: (*badge_type).to_string(),
            rank: *rank,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(flags: &[&str], is_test_racket: bool) -> BadgeProfile {
        BadgeProfile {
            badges: Some(flags.iter().map(|f| (f.to_string(), true)).collect()),
            is_test_racket,
        }
    }

    fn types(badges: &[BadgeDescriptor]) -> Vec<&str> {
        badges.iter().map(|b| b.badge_type.as_str()).collect()
    }

    #[test]
    fn deal_of_day_outranks_pre_order() {
        let badges = rank(Some(&profile(&["preOrder", "dealOfDay"], false)), None);
        assert_eq!(badges[0].badge_type, "deal-of-day");
        assert_eq!(types(&badges), vec!["deal-of-day", "pre-order"]);
    }

    #[test]
    fn test_racket_drops_sale_and_discount_but_keeps_exclusive() {
        let badges = rank(
            Some(&profile(&["sale", "exclusive", "discount"], true)),
            None,
        );
        assert_eq!(types(&badges), vec!["exclusive"]);
    }

    #[test]
    fn absent_product_or_badges_yield_nothing() {
        assert!(rank(None, None).is_empty());
        assert!(rank(Some(&BadgeProfile::default()), Some(3)).is_empty());
    }

    #[test]
    fn limit_caps_output() {
        let all = profile(&["dealOfDay", "exclusive", "sale", "preOrder", "new", "discount"], false);
        assert_eq!(rank(Some(&all), None).len(), 6);
        assert_eq!(types(&rank(Some(&all), Some(2))), vec!["deal-of-day", "exclusive"]);
        assert!(rank(Some(&all), Some(0)).is_empty());
    }

    #[test]
    fn false_flags_and_unknown_flags_are_ignored() {
        let mut flags = BadgeFlags::new();
        flags.insert("new".into(), false);
        flags.insert("clearance".into(), true);
        flags.insert("exclusive".into(), true);
        let profile = BadgeProfile {
            badges: Some(flags),
            is_test_racket: false,
        };
        assert_eq!(types(&rank(Some(&profile), None)), vec!["exclusive"]);
    }

    #[test]
    fn descriptor_serializes_type_key() {
        let json = serde_json::to_value(BadgeDescriptor {
            badge_type: "sale".into(),
            rank: 3,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"type": "sale", "rank": 3}));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const FLAGS: [&str; 7] = [
            "dealOfDay", "exclusive", "sale", "preOrder", "new", "discount", "clearance",
        ];

        proptest! {
            /// Property: output is ascending by rank, bounded by limit, and
            /// never carries sale/discount for test rackets.
            #[test]
            fn ranking_is_sorted_bounded_and_policy_compliant(
                enabled in proptest::collection::vec(any::<bool>(), FLAGS.len()),
                is_test_racket in any::<bool>(),
                limit in proptest::option::of(0usize..8),
            ) {
                let flags: BadgeFlags = FLAGS
                    .iter()
                    .zip(enabled.iter())
                    .map(|(f, on)| (f.to_string(), *on))
                    .collect();
                let profile = BadgeProfile { badges: Some(flags), is_test_racket };

                let badges = rank(Some(&profile), limit);

                prop_assert!(badges.windows(2).all(|w| w[0].rank < w[1].rank));
                if let Some(limit) = limit {
                    prop_assert!(badges.len() <= limit);
                }
                if is_test_racket {
                    prop_assert!(badges.iter().all(|b| b.badge_type != "sale" && b.badge_type != "discount"));
                }
            }
        }
    }
}
