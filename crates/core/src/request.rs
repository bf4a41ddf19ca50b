//! Request execution context supplied by the embedding host.

use serde::{Deserialize, Serialize};

/// Where a host request is executing.
///
/// The host owns dispatch; handlers receive this value instead of reading
/// ambient globals, so the same code path runs identically under storefront,
/// admin, and background requests and can be exercised in tests.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestContext {
    admin: bool,
    background: bool,
}

impl RequestContext {
    pub fn new(admin: bool, background: bool) -> Self {
        Self { admin, background }
    }

    /// Shopper-facing storefront request. Equivalent to `Self::default()`.
    pub fn storefront() -> Self {
        Self::new(false, false)
    }

    /// Synchronous request inside the host's admin interface.
    pub fn admin_screen() -> Self {
        Self::new(true, false)
    }

    /// Background request (async callback) originating from the admin
    /// interface.
    pub fn admin_background() -> Self {
        Self::new(true, true)
    }

    pub fn is_admin(self) -> bool {
        self.admin
    }

    pub fn is_background(self) -> bool {
        self.background
    }
}
