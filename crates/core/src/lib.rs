//! `supplant-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod request;

pub use error::{DomainError, DomainResult};
pub use id::{LineKey, ProductId};
pub use request::RequestContext;
