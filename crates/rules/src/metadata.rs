//! Per-product metadata storage seam.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use supplant_core::ProductId;

/// Host metadata storage abstraction: string values keyed by product and
/// meta key.
///
/// Each call is one atomic storage operation. The host owns durability and
/// failure handling for this data; from this side the calls do not fail.
pub trait MetadataStore: Send + Sync {
    fn get(&self, product_id: ProductId, key: &str) -> Option<String>;
    fn put(&self, product_id: ProductId, key: &str, value: String);
    fn delete(&self, product_id: ProductId, key: &str);
}

impl<S> MetadataStore for Arc<S>
where
    S: MetadataStore + ?Sized,
{
    fn get(&self, product_id: ProductId, key: &str) -> Option<String> {
        (**self).get(product_id, key)
    }

    fn put(&self, product_id: ProductId, key: &str, value: String) {
        (**self).put(product_id, key, value)
    }

    fn delete(&self, product_id: ProductId, key: &str) {
        (**self).delete(product_id, key)
    }
}

/// In-memory metadata store for tests/dev.
#[derive(Debug)]
pub struct InMemoryMetadataStore {
    inner: RwLock<HashMap<(ProductId, String), String>>,
}

impl InMemoryMetadataStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryMetadataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn get(&self, product_id: ProductId, key: &str) -> Option<String> {
        let map = self.inner.read().ok()?;
        map.get(&(product_id, key.to_owned())).cloned()
    }

    fn put(&self, product_id: ProductId, key: &str, value: String) {
        if let Ok(mut map) = self.inner.write() {
            map.insert((product_id, key.to_owned()), value);
        }
    }

    fn delete(&self, product_id: ProductId, key: &str) {
        if let Ok(mut map) = self.inner.write() {
            map.remove(&(product_id, key.to_owned()));
        }
    }
}
