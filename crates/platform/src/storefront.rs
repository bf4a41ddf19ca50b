use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use supplant_admin::{FormSubmission, RemovalField};
use supplant_cart::{CartError, CartItemAdded, InMemoryCart};
use supplant_catalog::{CatalogError, InMemoryCatalog, ProductSummary};
use supplant_core::{LineKey, ProductId, RequestContext};
use supplant_enforcer::{AdminGuard, CartEnforcer};
use supplant_rules::{InMemoryMetadataStore, RemovalRule, RuleStore};
use tracing::debug;

type Meta = Arc<InMemoryMetadataStore>;

/// One storefront process in memory.
///
/// Holds the collaborators a real host would own and dispatches the two
/// hooks the way the host does: the removal field and save binding on the
/// product edit lifecycle, the enforcer on the add-to-cart lifecycle.
pub struct Storefront {
    meta: Meta,
    catalog: Arc<InMemoryCatalog>,
    cart: Arc<InMemoryCart>,
    rules: RuleStore<Meta>,
    enforcer: CartEnforcer<Meta>,
}

impl Storefront {
    pub fn new() -> Self {
        let meta: Meta = Arc::new(InMemoryMetadataStore::new());
        let rules = RuleStore::new(Arc::clone(&meta));
        let enforcer = CartEnforcer::new(rules.clone());
        Self {
            meta,
            catalog: Arc::new(InMemoryCatalog::new()),
            cart: Arc::new(InMemoryCart::new()),
            rules,
            enforcer,
        }
    }

    pub fn with_admin_guard(mut self, guard: AdminGuard) -> Self {
        self.enforcer = self.enforcer.with_admin_guard(guard);
        self
    }

    /// Put a published product into the catalog.
    pub fn stock_product(&self, id: ProductId, name: &str) {
        self.catalog.add_published(ProductSummary::new(id, name));
    }

    pub fn catalog(&self) -> &InMemoryCatalog {
        &self.catalog
    }

    pub fn cart(&self) -> &InMemoryCart {
        &self.cart
    }

    pub fn rules(&self) -> &RuleStore<Meta> {
        &self.rules
    }

    /// Raw metadata storage, for staging data the way foreign integrations
    /// would.
    pub fn metadata(&self) -> &InMemoryMetadataStore {
        &self.meta
    }

    /// Render data for the removal selector on `editing`'s edit screen.
    pub fn removal_field(&self, editing: ProductId) -> Result<RemovalField, CatalogError> {
        supplant_admin::removal_field(&*self.catalog, &self.rules, editing)
    }

    /// Host lifecycle: a product edit form was submitted.
    pub fn save_product_form(&self, product_id: ProductId, form: &FormSubmission) -> RemovalRule {
        supplant_admin::on_product_saved(&self.rules, product_id, form)
    }

    /// Host lifecycle: a request in `ctx` adds `product_id` to the cart.
    ///
    /// The line is inserted first, then the add-to-cart hook fires against
    /// the updated cart, exactly as the host dispatches it.
    pub fn add_to_cart(
        &self,
        ctx: RequestContext,
        product_id: ProductId,
    ) -> Result<LineKey, CartError> {
        let key = self.cart.add_line(product_id);
        let event = CartItemAdded {
            product_id,
            item_data: json!({ "key": key.as_str() }),
            occurred_at: Utc::now(),
        };
        debug!(product = %product_id, "dispatching add-to-cart hook");
        self.enforcer.on_cart_item_added(ctx, &*self.cart, event)?;
        Ok(key)
    }

    /// Product ids currently in the cart, in insertion order.
    pub fn cart_product_ids(&self) -> Vec<ProductId> {
        self.cart.product_ids()
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}
