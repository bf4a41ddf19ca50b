//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a catalog product.
///
/// Host catalogs issue positive integers starting at 1; zero is reserved as
/// the "no product" sentinel and is never a valid id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw id, rejecting the zero sentinel.
    pub fn new(id: u64) -> Result<Self, DomainError> {
        if id == 0 {
            return Err(DomainError::invalid_id("ProductId: zero"));
        }
        Ok(Self(id))
    }

    /// Wrap a loosely-coerced integer, or `None` when it is not a valid id.
    ///
    /// Admin form values and stored rule data pass through lossy integer
    /// coercion first, so this is the lenient entry point: non-positive
    /// values are not errors there, they are simply dropped.
    pub fn from_raw(raw: i64) -> Option<Self> {
        u64::try_from(raw).ok().filter(|id| *id > 0).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl TryFrom<u64> for ProductId {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = u64::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Self::new(id)
    }
}

/// Key of one cart line. Owned and issued by the cart backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineKey(String);

impl LineKey {
    /// Wrap a host-issued key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Generate a fresh key.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing keys explicitly in tests
    /// for determinism.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for LineKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<String> for LineKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for LineKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<LineKey> for String {
    fn from(value: LineKey) -> Self {
        value.0
    }
}
