//! Rule persistence over the host metadata store.

use supplant_core::ProductId;
use tracing::debug;

use crate::encoding;
use crate::metadata::MetadataStore;
use crate::rule::RemovalRule;

/// Metadata key holding a product's removal list. The same string names the
/// admin form field bound to it. Kept byte-identical across deployments so
/// previously stored rows keep working.
pub const REMOVAL_IDS_KEY: &str = "_remove_product_ids";

/// Reads and writes removal rules through the host's metadata storage.
#[derive(Debug, Clone)]
pub struct RuleStore<S> {
    meta: S,
}

impl<S: MetadataStore> RuleStore<S> {
    pub fn new(meta: S) -> Self {
        Self { meta }
    }

    /// The removal rule configured for `trigger`.
    ///
    /// Missing key, empty value, and malformed tokens all degrade to an
    /// empty rule; this path never fails the caller. Stored data that
    /// predates the write-boundary normalization is re-filtered here, so
    /// the returned rule never names the trigger itself.
    pub fn rule_for(&self, trigger: ProductId) -> RemovalRule {
        match self.meta.get(trigger, REMOVAL_IDS_KEY) {
            Some(raw) => RemovalRule::from_stored(trigger, encoding::parse_list(&raw)),
            None => RemovalRule::empty(trigger),
        }
    }

    /// Removal ids configured for `trigger`, possibly empty.
    pub fn removal_ids(&self, trigger: ProductId) -> Vec<ProductId> {
        self.rule_for(trigger).into_removals()
    }

    /// Replace the rule for `trigger` with the normalized form of `raw_ids`.
    ///
    /// When the normalized list is empty the key is deleted outright; an
    /// empty string is never stored. Exactly one metadata write or delete
    /// per call. Returns the rule as persisted.
    pub fn set_removal_ids(
        &self,
        trigger: ProductId,
        raw_ids: impl IntoIterator<Item = i64>,
    ) -> RemovalRule {
        let rule = RemovalRule::normalized(trigger, raw_ids);
        if rule.is_empty() {
            self.meta.delete(trigger, REMOVAL_IDS_KEY);
            debug!(%trigger, "cleared removal rule");
        } else {
            self.meta
                .put(trigger, REMOVAL_IDS_KEY, encoding::encode_list(rule.removals()));
            debug!(%trigger, removals = rule.removals().len(), "stored removal rule");
        }
        rule
    }
}
