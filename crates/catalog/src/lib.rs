//! `supplant-catalog` — the host product catalog behind a narrow seam.
//!
//! The embedding platform owns the catalog. This crate models only what the
//! admin surface needs from it: listing published products for the removal
//! selector.

pub mod catalog;
pub mod in_memory;

pub use catalog::{Catalog, CatalogError, ProductSummary};
pub use in_memory::InMemoryCatalog;
