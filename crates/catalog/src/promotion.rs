use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ProductId, PromotionId};

/// Campaign promotion as exposed by the promotion engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: PromotionId,
    #[serde(default)]
    pub name: String,
    /// Short text shown next to qualifying products.
    #[serde(default)]
    pub callout: Option<String>,
    /// Qualifying products; empty means the promotion applies site-wide.
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
}

impl Promotion {
    pub fn applies_to(&self, product: &ProductId) -> bool {
        self.product_ids.is_empty() || self.product_ids.contains(product)
    }
}

/// Promotion message rendered for a single product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionMessage {
    pub promotion_id: PromotionId,
    pub callout: String,
}

/// Promotion engine capability.
pub trait PromotionSource: Send + Sync {
    /// Currently active promotions, in promotion-priority order.
    fn active_promotions(&self) -> DomainResult<Vec<Promotion>>;

    /// Messages of the given promotions that apply to `product`, in the order
    /// of `promotions`.
    fn product_promotions(
        &self,
        product: &ProductId,
        promotions: &[PromotionId],
    ) -> DomainResult<Vec<PromotionMessage>>;
}

impl<P> PromotionSource for std::sync::Arc<P>
where
    P: PromotionSource + ?Sized,
{
    fn active_promotions(&self) -> DomainResult<Vec<Promotion>> {
        (**self).active_promotions()
    }

    fn product_promotions(
        &self,
        product: &ProductId,
        promotions: &[PromotionId],
    ) -> DomainResult<Vec<PromotionMessage>> {
        (**self).product_promotions(product, promotions)
    }
}

/// In-memory promotion engine for tests/dev.
///
/// Counts calls to `active_promotions` so callers can assert on memoization.
#[derive(Debug, Default)]
pub struct InMemoryPromotionSource {
    promotions: RwLock<Vec<Promotion>>,
    active_calls: AtomicUsize,
}

impl InMemoryPromotionSource {
    pub fn new(promotions: Vec<Promotion>) -> Self {
        Self {
            promotions: RwLock::new(promotions),
            active_calls: AtomicUsize::new(0),
        }
    }

    /// Replace the active promotion set (operator schedule change).
    pub fn replace(&self, promotions: Vec<Promotion>) {
        if let Ok(mut current) = self.promotions.write() {
            *current = promotions;
        }
    }

    /// Number of `active_promotions` calls served so far.
    pub fn active_calls(&self) -> usize {
        self.active_calls.load(Ordering::SeqCst)
    }
}

impl PromotionSource for InMemoryPromotionSource {
    fn active_promotions(&self) -> DomainResult<Vec<Promotion>> {
        self.active_calls.fetch_add(1, Ordering::SeqCst);
        let promotions = self
            .promotions
            .read()
            .map_err(|_| DomainError::collaborator("promotion store poisoned"))?;
        Ok(promotions.clone())
    }

    fn product_promotions(
        &self,
        product: &ProductId,
        promotions: &[PromotionId],
    ) -> DomainResult<Vec<PromotionMessage>> {
        let known = self
            .promotions
            .read()
            .map_err(|_| DomainError::collaborator("promotion store poisoned"))?;

        Ok(promotions
            .iter()
            .filter_map(|id| known.iter().find(|p| &p.id == id))
            .filter(|p| p.applies_to(product))
            .map(|p| PromotionMessage {
                promotion_id: p.id.clone(),
                callout: p.callout.clone().unwrap_or_else(|| p.name.clone()),
            })
            .collect())
    }
}
