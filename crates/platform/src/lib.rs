//! `supplant-platform` — in-memory host wiring.
//!
//! Emulates the storefront host for tests, demos, and benches: catalog,
//! cart, and metadata collaborators wired to the enforcer and the admin
//! surface, with both hooks dispatched in host order.

pub mod storefront;

pub use storefront::Storefront;
