//! Session-scoped memoization of active promotion ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_catalog::{PromotionSource, SessionStore};
use storefront_core::{DomainResult, PromotionId, ValueObject};

/// Session key the snapshot is stored under.
pub const PROMOTION_CACHE_KEY: &str = "storefront.activePromotionIds";

/// Active promotion ids as computed for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionSnapshot {
    pub promotion_ids: Vec<PromotionId>,
    pub computed_at: DateTime<Utc>,
}

impl ValueObject for PromotionSnapshot {}

/// Lazily computed, per-session cache of active promotion ids.
///
/// The snapshot lives in the session store, so its lifetime is the session's.
/// Read-compute-write is not locked: two racing requests of one session both
/// compute and the last write wins, which is harmless because the computation
/// has no side effects.
pub struct PromotionCache<'a> {
    source: &'a dyn PromotionSource,
}

impl<'a> PromotionCache<'a> {
    pub fn new(source: &'a dyn PromotionSource) -> Self {
        Self { source }
    }

    /// Active promotion ids for `session`, computing them on first access.
    pub fn active_promotion_ids(&self, session: &dyn SessionStore) -> DomainResult<Vec<PromotionId>> {
        Ok(self.snapshot(session)?.promotion_ids)
    }

    /// Cached snapshot for `session`, computing and storing it on a miss.
    pub fn snapshot(&self, session: &dyn SessionStore) -> DomainResult<PromotionSnapshot> {
        if let Some(stored) = session.get(PROMOTION_CACHE_KEY) {
            match serde_json::from_value::<PromotionSnapshot>(stored) {
                Ok(snapshot) => return Ok(snapshot),
                Err(err) => tracing::debug!(
                    session = %session.session_id(),
                    error = %err,
                    "discarding undecodable promotion snapshot"
                ),
            }
        }

        let snapshot = self.compute()?;
        match serde_json::to_value(&snapshot) {
            Ok(value) => session.set(PROMOTION_CACHE_KEY, value),
            Err(err) => tracing::warn!(error = %err, "failed to encode promotion snapshot"),
        }
        Ok(snapshot)
    }

    /// Ids of the source's active promotions, uncached, in source order.
    pub fn compute(&self) -> DomainResult<PromotionSnapshot> {
        let promotion_ids = self
            .source
            .active_promotions()?
            .into_iter()
            .map(|p| p.id)
            .collect();
        Ok(PromotionSnapshot {
            promotion_ids,
            computed_at: Utc::now(),
        })
    }

    /// Drop the snapshot so the next read recomputes it.
    pub fn invalidate(&self, session: &dyn SessionStore) {
        session.remove(PROMOTION_CACHE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_catalog::{InMemoryPromotionSource, InMemorySessionStore, Promotion};

    fn promotion(id: &str) -> Promotion {
        Promotion {
            id: PromotionId::new(id).unwrap(),
            name: id.to_string(),
            callout: None,
            product_ids: Vec::new(),
        }
    }

    fn ids(values: &[PromotionId]) -> Vec<&str> {
        values.iter().map(PromotionId::as_str).collect()
    }

    #[test]
    fn second_read_in_session_does_not_query_source() {
        let source = InMemoryPromotionSource::new(vec![promotion("b"), promotion("a")]);
        let session = InMemorySessionStore::default();
        let cache = PromotionCache::new(&source);

        let first = cache.active_promotion_ids(&session).unwrap();
        let second = cache.active_promotion_ids(&session).unwrap();

        assert_eq!(source.active_calls(), 1);
        assert_eq!(first, second);
        // source order, not re-sorted
        assert_eq!(ids(&first), vec!["b", "a"]);
    }

    #[test]
    fn sessions_are_cached_independently() {
        let source = InMemoryPromotionSource::new(vec![promotion("a")]);
        let cache = PromotionCache::new(&source);

        cache.active_promotion_ids(&InMemorySessionStore::default()).unwrap();
        cache.active_promotion_ids(&InMemorySessionStore::default()).unwrap();

        assert_eq!(source.active_calls(), 2);
    }

    #[test]
    fn snapshot_is_stale_until_invalidated() {
        let source = InMemoryPromotionSource::new(vec![promotion("a")]);
        let session = InMemorySessionStore::default();
        let cache = PromotionCache::new(&source);

        cache.active_promotion_ids(&session).unwrap();
        source.replace(vec![promotion("c")]);
        assert_eq!(ids(&cache.active_promotion_ids(&session).unwrap()), vec!["a"]);

        cache.invalidate(&session);
        assert_eq!(ids(&cache.active_promotion_ids(&session).unwrap()), vec!["c"]);
        assert_eq!(source.active_calls(), 2);
    }

    #[test]
    fn undecodable_slot_is_recomputed() {
        let source = InMemoryPromotionSource::new(vec![promotion("a")]);
        let session = InMemorySessionStore::default();
        session.set(PROMOTION_CACHE_KEY, json!("garbage"));

        let cache = PromotionCache::new(&source);
        assert_eq!(ids(&cache.active_promotion_ids(&session).unwrap()), vec!["a"]);
        assert_eq!(source.active_calls(), 1);
        assert!(session.get(PROMOTION_CACHE_KEY).unwrap().is_object());
    }
}
