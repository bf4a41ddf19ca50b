use std::sync::RwLock;

use supplant_core::{LineKey, ProductId};

use crate::cart::{CartError, CartLine, CartStore};

/// In-memory cart for tests/dev.
///
/// Lines keep insertion order, matching how host carts report their
/// contents.
#[derive(Debug)]
pub struct InMemoryCart {
    inner: RwLock<Vec<CartLine>>,
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Append a line for `product_id` under a freshly generated key.
    pub fn add_line(&self, product_id: ProductId) -> LineKey {
        let key = LineKey::generate();
        self.add_line_with_key(key.clone(), product_id);
        key
    }

    /// Append a line under a caller-chosen key (deterministic tests).
    pub fn add_line_with_key(&self, key: LineKey, product_id: ProductId) {
        if let Ok(mut lines) = self.inner.write() {
            lines.push(CartLine::new(key, product_id));
        }
    }

    /// Product ids of the current lines, in insertion order.
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.lines().into_iter().map(|l| l.product_id).collect()
    }
}

impl Default for InMemoryCart {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore for InMemoryCart {
    fn lines(&self) -> Vec<CartLine> {
        match self.inner.read() {
            Ok(lines) => lines.clone(),
            Err(_) => vec![],
        }
    }

    fn remove_line(&self, key: &LineKey) -> Result<(), CartError> {
        let mut lines = self
            .inner
            .write()
            .map_err(|_| CartError::backend("cart lock poisoned"))?;

        match lines.iter().position(|l| l.key == *key) {
            Some(idx) => {
                lines.remove(idx);
                Ok(())
            }
            None => Err(CartError::LineNotFound(key.clone())),
        }
    }
}
