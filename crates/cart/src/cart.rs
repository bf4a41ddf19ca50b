use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use supplant_core::{LineKey, ProductId};
use thiserror::Error;

/// One entry in a shopping cart.
///
/// Enforcement only ever reads `product_id` and removes whole lines by key.
/// Quantities, prices, and the rest of the line stay with the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub key: LineKey,
    pub product_id: ProductId,
}

impl CartLine {
    pub fn new(key: LineKey, product_id: ProductId) -> Self {
        Self { key, product_id }
    }
}

/// Payload of the host's "item added to cart" hook.
///
/// `item_data` is whatever the host attached to the added line (variation
/// attributes, quantity, session extras). It is carried through unchanged;
/// enforcement never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemAdded {
    pub product_id: ProductId,
    pub item_data: serde_json::Value,
    pub occurred_at: DateTime<Utc>,
}

/// Cart mutation failure.
///
/// Raised by the host backend and propagated unchanged to the caller; there
/// is no retry at this layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("no cart line with key {0}")]
    LineNotFound(LineKey),

    #[error("cart backend failure: {0}")]
    Backend(String),
}

impl CartError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Host cart abstraction.
///
/// Both calls are atomic single operations against the host's cart state.
pub trait CartStore: Send + Sync {
    /// Snapshot of the current lines, in the cart's insertion order.
    fn lines(&self) -> Vec<CartLine>;

    /// Remove the line with `key` from the cart.
    fn remove_line(&self, key: &LineKey) -> Result<(), CartError>;
}

impl<C> CartStore for Arc<C>
where
    C: CartStore + ?Sized,
{
    fn lines(&self) -> Vec<CartLine> {
        (**self).lines()
    }

    fn remove_line(&self, key: &LineKey) -> Result<(), CartError> {
        (**self).remove_line(key)
    }
}
