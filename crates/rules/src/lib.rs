//! `supplant-rules` — removal rule storage and normalization.
//!
//! A removal rule lives on its trigger product as a single metadata value.
//! This crate owns the wire encoding of that value, the normalization
//! guarantees (positive ids, no duplicates, never the trigger itself), and
//! the seam to the host's metadata storage.

pub mod encoding;
pub mod metadata;
pub mod rule;
pub mod store;

pub use metadata::{InMemoryMetadataStore, MetadataStore};
pub use rule::RemovalRule;
pub use store::{REMOVAL_IDS_KEY, RuleStore};
