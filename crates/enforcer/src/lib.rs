//! `supplant-enforcer` — cart enforcement for removal rules.
//!
//! Listens to the host's add-to-cart hook, looks up the removal rule of the
//! added product, and strips the supplanted lines from the cart.

pub mod enforce;
pub mod guard;

pub use enforce::CartEnforcer;
pub use guard::AdminGuard;
