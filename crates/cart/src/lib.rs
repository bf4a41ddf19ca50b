//! `supplant-cart` — the host shopping cart behind a narrow seam.
//!
//! The embedding platform owns cart/session state. This crate models the
//! slice the enforcement path needs: a snapshot of the current lines,
//! removal of a line by key, and the add-to-cart hook payload.

pub mod cart;
pub mod in_memory;

pub use cart::{CartError, CartItemAdded, CartLine, CartStore};
pub use in_memory::InMemoryCart;
