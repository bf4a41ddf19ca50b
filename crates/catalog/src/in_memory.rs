use std::sync::RwLock;

use supplant_core::ProductId;

use crate::catalog::{Catalog, CatalogError, ProductSummary};

/// In-memory catalog for tests/dev.
///
/// Entries keep insertion order, which stands in for whatever listing order
/// the host catalog applies.
#[derive(Debug)]
pub struct InMemoryCatalog {
    inner: RwLock<Vec<Entry>>,
}

#[derive(Debug, Clone)]
struct Entry {
    summary: ProductSummary,
    published: bool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Add a publicly visible product.
    pub fn add_published(&self, summary: ProductSummary) {
        self.add(summary, true);
    }

    /// Add a product that is not publicly visible (draft, archived).
    pub fn add_unpublished(&self, summary: ProductSummary) {
        self.add(summary, false);
    }

    fn add(&self, summary: ProductSummary, published: bool) {
        if let Ok(mut entries) = self.inner.write() {
            entries.push(Entry { summary, published });
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for InMemoryCatalog {
    fn published_excluding(
        &self,
        excluded: ProductId,
    ) -> Result<Vec<ProductSummary>, CatalogError> {
        let entries = match self.inner.read() {
            Ok(e) => e,
            Err(_) => return Ok(vec![]),
        };

        Ok(entries
            .iter()
            .filter(|e| e.published && e.summary.id != excluded)
            .map(|e| e.summary.clone())
            .collect())
    }
}
