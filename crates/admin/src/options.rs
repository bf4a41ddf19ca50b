//! Product selector options and the removal field view model.

use serde::{Deserialize, Serialize};
use supplant_catalog::{Catalog, CatalogError};
use supplant_core::ProductId;
use supplant_rules::{MetadataStore, REMOVAL_IDS_KEY, RuleStore};

// Fixed field copy, part of the admin contract.
pub const FIELD_LABEL: &str = "Remove Product(s) from Cart:";
pub const FIELD_DESCRIPTION: &str =
    "Select products that should be removed from the cart when this product is added.";
pub const FIELD_PLACEHOLDER: &str = "Select products...";

/// One selectable product in the removal field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub value: ProductId,
    pub label: String,
}

/// Options for `editing`'s removal selector: every published product except
/// the one being edited, labeled `"{id}: {name}"`, in catalog order.
pub fn product_options<C>(
    catalog: &C,
    editing: ProductId,
) -> Result<Vec<ProductOption>, CatalogError>
where
    C: Catalog + ?Sized,
{
    let products = catalog.published_excluding(editing)?;
    Ok(products
        .into_iter()
        .map(|p| ProductOption {
            value: p.id,
            label: format!("{}: {}", p.id, p.name),
        })
        .collect())
}

/// The removal multi-select, ready for the host to render.
///
/// `name` is the same string as the metadata key the selection round-trips
/// through on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalField {
    pub name: String,
    pub label: String,
    pub description: String,
    pub desc_tip: bool,
    pub placeholder: String,
    pub options: Vec<ProductOption>,
    pub selected: Vec<ProductId>,
}

/// Build the removal field for the product being edited: options from the
/// catalog, selection from the stored rule.
pub fn removal_field<C, S>(
    catalog: &C,
    rules: &RuleStore<S>,
    editing: ProductId,
) -> Result<RemovalField, CatalogError>
where
    C: Catalog + ?Sized,
    S: MetadataStore,
{
    Ok(RemovalField {
        name: REMOVAL_IDS_KEY.to_string(),
        label: FIELD_LABEL.to_string(),
        description: FIELD_DESCRIPTION.to_string(),
        desc_tip: true,
        placeholder: FIELD_PLACEHOLDER.to_string(),
        options: product_options(catalog, editing)?,
        selected: rules.removal_ids(editing),
    })
}
