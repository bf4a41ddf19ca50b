use std::sync::Arc;

use serde::{Deserialize, Serialize};
use supplant_core::ProductId;
use thiserror::Error;

/// What the admin surface knows about one catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
}

impl ProductSummary {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Catalog lookup failure.
///
/// Raised by the host backend and propagated unchanged to the caller; there
/// is no retry or fallback at this layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog backend failure: {0}")]
    Backend(String),
}

impl CatalogError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Host catalog abstraction.
pub trait Catalog: Send + Sync {
    /// Every published product except `excluded`, in catalog order.
    fn published_excluding(
        &self,
        excluded: ProductId,
    ) -> Result<Vec<ProductSummary>, CatalogError>;
}

impl<C> Catalog for Arc<C>
where
    C: Catalog + ?Sized,
{
    fn published_excluding(
        &self,
        excluded: ProductId,
    ) -> Result<Vec<ProductSummary>, CatalogError> {
        (**self).published_excluding(excluded)
    }
}
