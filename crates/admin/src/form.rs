//! Product-save form binding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use supplant_core::ProductId;
use supplant_rules::{MetadataStore, REMOVAL_IDS_KEY, RemovalRule, RuleStore, encoding};
use tracing::debug;

/// Submitted form data: field name to the list of values posted under it.
///
/// Multi-selects post zero or more values under one name; a field with no
/// selection is normally absent from the submission entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    fields: HashMap<String, Vec<String>>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's submitted values.
    pub fn with_field(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.fields.insert(name.into(), values);
        self
    }

    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).map(Vec::as_slice)
    }
}

/// Hook for the host's "product form saved" event.
///
/// Reads the removal selection from `form` (an absent field counts as an
/// empty selection), coerces each value leniently, and replaces the stored
/// rule for `product_id`. Returns the rule as persisted.
pub fn on_product_saved<S: MetadataStore>(
    rules: &RuleStore<S>,
    product_id: ProductId,
    form: &FormSubmission,
) -> RemovalRule {
    let submitted = form.values(REMOVAL_IDS_KEY).unwrap_or(&[]);
    let rule = rules.set_removal_ids(product_id, submitted.iter().map(|v| encoding::coerce_int(v)));
    debug!(
        product = %product_id,
        submitted = submitted.len(),
        kept = rule.removals().len(),
        "bound removal selection"
    );
    rule
}
