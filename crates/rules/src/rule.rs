use serde::{Deserialize, Serialize};
use supplant_core::ProductId;

/// One product's removal rule: when `trigger` is added to a cart, every
/// product in `removals` is taken out of it.
///
/// A value of this type is always normalized. Both constructors drop
/// non-positive ids, collapse duplicates to their first occurrence, and
/// exclude the trigger itself, so a rule can never make a product remove
/// the line it just created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalRule {
    trigger: ProductId,
    removals: Vec<ProductId>,
}

impl RemovalRule {
    /// Rule with no removals.
    pub fn empty(trigger: ProductId) -> Self {
        Self {
            trigger,
            removals: Vec::new(),
        }
    }

    /// Build from already-typed ids (the read path). Stored data may predate
    /// the write-boundary guarantees, so the same filters apply again here.
    pub fn from_stored(trigger: ProductId, ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut removals = Vec::new();
        for id in ids {
            if id != trigger && !removals.contains(&id) {
                removals.push(id);
            }
        }
        Self { trigger, removals }
    }

    /// Build from raw selected integers (the write path). Values arrive from
    /// lossy form coercion and may be zero, negative, or repeated.
    pub fn normalized(trigger: ProductId, raw: impl IntoIterator<Item = i64>) -> Self {
        Self::from_stored(trigger, raw.into_iter().filter_map(ProductId::from_raw))
    }

    pub fn trigger(&self) -> ProductId {
        self.trigger
    }

    pub fn removals(&self) -> &[ProductId] {
        &self.removals
    }

    pub fn into_removals(self) -> Vec<ProductId> {
        self.removals
    }

    pub fn is_empty(&self) -> bool {
        self.removals.is_empty()
    }

    /// Does this rule remove `product` from the cart?
    pub fn removes(&self, product: ProductId) -> bool {
        self.removals.contains(&product)
    }
}
