use supplant_cart::{CartError, CartItemAdded, CartStore};
use supplant_core::{LineKey, ProductId, RequestContext};
use supplant_rules::{MetadataStore, RuleStore};
use tracing::{debug, info};

use crate::guard::AdminGuard;

/// Applies removal rules to a cart when items are added.
///
/// One instance serves the whole host process. Carts arrive per call
/// because the host scopes them to the active session.
#[derive(Debug, Clone)]
pub struct CartEnforcer<S> {
    rules: RuleStore<S>,
    guard: AdminGuard,
}

impl<S: MetadataStore> CartEnforcer<S> {
    pub fn new(rules: RuleStore<S>) -> Self {
        Self {
            rules,
            guard: AdminGuard::default(),
        }
    }

    pub fn with_admin_guard(mut self, guard: AdminGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn admin_guard(&self) -> AdminGuard {
        self.guard
    }

    /// Hook for the host's "item added to cart" event.
    ///
    /// The payload is returned unchanged in every case; removal is a side
    /// effect on the cart, not a transformation of the add-to-cart result.
    /// Guard-suppressed requests do nothing at all. A cart backend failure
    /// propagates to the host's request handling untouched.
    pub fn on_cart_item_added<C>(
        &self,
        ctx: RequestContext,
        cart: &C,
        added: CartItemAdded,
    ) -> Result<CartItemAdded, CartError>
    where
        C: CartStore + ?Sized,
    {
        if self.guard.suppresses(ctx) {
            debug!(product = %added.product_id, "enforcement suppressed for admin request");
            return Ok(added);
        }

        let removed = self.sweep(cart, added.product_id)?;
        if !removed.is_empty() {
            info!(
                trigger = %added.product_id,
                removed = removed.len(),
                "removed supplanted cart lines"
            );
        }
        Ok(added)
    }

    /// Remove every line whose product the rule for `trigger` names, in the
    /// cart's insertion order. Returns the removed keys. Stops at the first
    /// cart failure.
    pub fn sweep<C>(&self, cart: &C, trigger: ProductId) -> Result<Vec<LineKey>, CartError>
    where
        C: CartStore + ?Sized,
    {
        let rule = self.rules.rule_for(trigger);
        if rule.is_empty() {
            return Ok(vec![]);
        }

        let mut removed = Vec::new();
        for line in cart.lines() {
            if rule.removes(line.product_id) {
                cart.remove_line(&line.key)?;
                removed.push(line.key);
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use serde_json::json;
    use supplant_cart::{CartLine, InMemoryCart};
    use supplant_rules::InMemoryMetadataStore;

    use super::*;

    fn pid(id: u64) -> ProductId {
        ProductId::new(id).unwrap()
    }

    fn added(product: ProductId) -> CartItemAdded {
        CartItemAdded {
            product_id: product,
            item_data: json!({ "quantity": 1 }),
            occurred_at: Utc::now(),
        }
    }

    fn setup() -> (RuleStore<Arc<InMemoryMetadataStore>>, CartEnforcer<Arc<InMemoryMetadataStore>>) {
        let rules = RuleStore::new(Arc::new(InMemoryMetadataStore::new()));
        let enforcer = CartEnforcer::new(rules.clone());
        (rules, enforcer)
    }

    #[test]
    fn removes_only_the_ruled_lines() {
        let (rules, enforcer) = setup();
        rules.set_removal_ids(pid(10), [20, 30]);

        let cart = InMemoryCart::new();
        cart.add_line(pid(20));
        cart.add_line(pid(30));
        cart.add_line(pid(40));
        cart.add_line(pid(10));

        enforcer
            .on_cart_item_added(RequestContext::storefront(), &cart, added(pid(10)))
            .unwrap();

        let ids: Vec<u64> = cart.product_ids().iter().map(|p| p.get()).collect();
        assert_eq!(ids, vec![40, 10]);
    }

    #[test]
    fn payload_is_returned_unchanged() {
        let (rules, enforcer) = setup();
        rules.set_removal_ids(pid(10), [20]);

        let cart = InMemoryCart::new();
        cart.add_line(pid(20));

        let event = added(pid(10));
        let returned = enforcer
            .on_cart_item_added(RequestContext::storefront(), &cart, event.clone())
            .unwrap();
        assert_eq!(returned, event);
    }

    #[test]
    fn product_without_a_rule_leaves_the_cart_untouched() {
        let (_rules, enforcer) = setup();

        let cart = InMemoryCart::new();
        cart.add_line(pid(1));
        cart.add_line(pid(2));
        cart.add_line(pid(3));

        enforcer
            .on_cart_item_added(RequestContext::storefront(), &cart, added(pid(99)))
            .unwrap();

        assert_eq!(cart.product_ids(), vec![pid(1), pid(2), pid(3)]);
    }

    #[test]
    fn duplicate_lines_of_a_ruled_product_are_all_removed() {
        let (rules, enforcer) = setup();
        rules.set_removal_ids(pid(10), [20]);

        let cart = InMemoryCart::new();
        cart.add_line(pid(20));
        cart.add_line(pid(40));
        cart.add_line(pid(20));

        let removed = enforcer.sweep(&cart, pid(10)).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(cart.product_ids(), vec![pid(40)]);
    }

    #[test]
    fn removal_follows_cart_insertion_order() {
        let (rules, enforcer) = setup();
        rules.set_removal_ids(pid(1), [5, 2]);

        let cart = InMemoryCart::new();
        let first = LineKey::new("line-2");
        let second = LineKey::new("line-5");
        cart.add_line_with_key(first.clone(), pid(2));
        cart.add_line_with_key(LineKey::new("line-9"), pid(9));
        cart.add_line_with_key(second.clone(), pid(5));

        let removed = enforcer.sweep(&cart, pid(1)).unwrap();
        assert_eq!(removed, vec![first, second]);
    }

    #[test]
    fn second_pass_removes_nothing_more() {
        let (rules, enforcer) = setup();
        rules.set_removal_ids(pid(10), [20, 30]);

        let cart = InMemoryCart::new();
        cart.add_line(pid(20));
        cart.add_line(pid(30));
        cart.add_line(pid(10));

        let event = added(pid(10));
        enforcer
            .on_cart_item_added(RequestContext::storefront(), &cart, event.clone())
            .unwrap();
        let after_first = cart.product_ids();

        enforcer
            .on_cart_item_added(RequestContext::storefront(), &cart, event)
            .unwrap();
        assert_eq!(cart.product_ids(), after_first);
    }

    #[test]
    fn foreign_self_referencing_rule_cannot_remove_the_trigger_line() {
        let meta = Arc::new(InMemoryMetadataStore::new());
        let rules = RuleStore::new(Arc::clone(&meta));
        let enforcer = CartEnforcer::new(rules);

        // Written behind the store's back, as a foreign integration might.
        meta.put(pid(10), supplant_rules::REMOVAL_IDS_KEY, "10,20".to_string());

        let cart = InMemoryCart::new();
        cart.add_line(pid(10));

        enforcer
            .on_cart_item_added(RequestContext::storefront(), &cart, added(pid(10)))
            .unwrap();
        assert_eq!(cart.product_ids(), vec![pid(10)]);
    }

    #[test]
    fn default_guard_suppresses_synchronous_admin_requests() {
        let (rules, enforcer) = setup();
        rules.set_removal_ids(pid(10), [20]);

        let cart = InMemoryCart::new();
        cart.add_line(pid(20));

        enforcer
            .on_cart_item_added(RequestContext::admin_screen(), &cart, added(pid(10)))
            .unwrap();
        assert_eq!(cart.product_ids(), vec![pid(20)]);

        enforcer
            .on_cart_item_added(RequestContext::admin_background(), &cart, added(pid(10)))
            .unwrap();
        assert!(cart.product_ids().is_empty());
    }

    #[test]
    fn guard_off_enforces_everywhere() {
        let (rules, enforcer) = setup();
        let enforcer = enforcer.with_admin_guard(AdminGuard::Off);
        rules.set_removal_ids(pid(10), [20]);

        let cart = InMemoryCart::new();
        cart.add_line(pid(20));

        enforcer
            .on_cart_item_added(RequestContext::admin_screen(), &cart, added(pid(10)))
            .unwrap();
        assert!(cart.product_ids().is_empty());
    }

    /// Cart double whose removal always fails.
    struct FailingCart;

    impl CartStore for FailingCart {
        fn lines(&self) -> Vec<CartLine> {
            vec![CartLine::new(LineKey::new("stuck"), pid(20))]
        }

        fn remove_line(&self, _key: &LineKey) -> Result<(), CartError> {
            Err(CartError::backend("session write refused"))
        }
    }

    #[test]
    fn cart_failure_propagates_unchanged() {
        let (rules, enforcer) = setup();
        rules.set_removal_ids(pid(10), [20]);

        let err = enforcer
            .on_cart_item_added(RequestContext::storefront(), &FailingCart, added(pid(10)))
            .unwrap_err();
        assert_eq!(err, CartError::backend("session write refused"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: a sweep removes exactly the lines the rule names
            /// and leaves the rest in order; a second sweep is a no-op.
            #[test]
            fn sweep_removes_exactly_the_ruled_lines(
                trigger in 1u64..30,
                raw_rule in proptest::collection::vec(1i64..30, 0..8),
                contents in proptest::collection::vec(1u64..30, 0..12)
            ) {
                let (rules, enforcer) = setup();
                let trigger = ProductId::new(trigger).unwrap();
                let rule = rules.set_removal_ids(trigger, raw_rule);

                let cart = InMemoryCart::new();
                for id in &contents {
                    cart.add_line(ProductId::new(*id).unwrap());
                }

                let removed = enforcer.sweep(&cart, trigger).unwrap();
                let expected_left: Vec<ProductId> = contents
                    .iter()
                    .map(|id| ProductId::new(*id).unwrap())
                    .filter(|id| !rule.removes(*id))
                    .collect();

                prop_assert_eq!(
                    removed.len(),
                    contents.len() - expected_left.len()
                );
                prop_assert_eq!(cart.product_ids(), expected_left);

                let again = enforcer.sweep(&cart, trigger).unwrap();
                prop_assert!(again.is_empty());
            }
        }
    }
}
