//! `supplant-admin` — the rule-editing surface.
//!
//! Builds the data behind the removal selector on the product edit screen
//! and binds submitted form data back to the rule store. Rendering itself
//! stays with the host; this crate produces plain view models.

pub mod form;
pub mod options;

pub use form::{FormSubmission, on_product_saved};
pub use options::{ProductOption, RemovalField, product_options, removal_field};
