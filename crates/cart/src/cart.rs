use storefront_catalog::{Product, StockLevels};
use storefront_core::{Entity, Money, ProductId, TaxRate};

use crate::line::CartLine;
use crate::outcome::{CartOutcome, CartRejection};

/// A shopping cart: ordered lines plus a tax rate fixed at construction.
///
/// Subtotal, tax and total are recomputed from the lines on every call; the
/// cart stores no running totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    tax_rate: TaxRate,
}

impl Cart {
    pub fn new(tax_rate: TaxRate) -> Self {
        Self {
            lines: Vec::new(),
            tax_rate,
        }
    }

    /// Add `quantity` units of `product`.
    ///
    /// If the product already has a line, its quantity grows by `quantity`
    /// without a stock check (checkout re-verifies stock). A new line is only
    /// created when the product currently has at least `quantity` units.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> CartOutcome {
        let product_id = product.id();
        if quantity == 0 {
            tracing::warn!(product_id = %product_id, "add to cart rejected: zero quantity");
            return CartOutcome::Rejected(CartRejection::InvalidQuantity {
                product_id: product_id.clone(),
            });
        }

        if let Some(line) = self.line_mut(product_id) {
            let from = line.quantity();
            let Some(to) = from.checked_add(quantity) else {
                tracing::warn!(product_id = %product_id, from, quantity, "add to cart rejected: quantity overflow");
                return CartOutcome::Rejected(CartRejection::InvalidQuantity {
                    product_id: product_id.clone(),
                });
            };
            line.set_quantity(to);
            tracing::debug!(product_id = %product_id, from, to, "cart line increased");
            return CartOutcome::QuantityChanged {
                product_id: product_id.clone(),
                from,
                to,
            };
        }

        if !product.has_stock(quantity) {
            tracing::warn!(
                product_id = %product_id,
                requested = quantity,
                available = product.stock(),
                "add to cart rejected: not enough stock"
            );
            return CartOutcome::Rejected(CartRejection::InsufficientStock {
                product_id: product_id.clone(),
                name: product.name().to_string(),
                requested: u64::from(quantity),
                available: product.stock(),
            });
        }

        self.lines.push(CartLine::new(product, quantity));
        tracing::debug!(product_id = %product_id, quantity, "cart line added");
        CartOutcome::Added {
            product_id: product_id.clone(),
            quantity,
        }
    }

    /// Remove the line for `product_id`, if any.
    pub fn remove_item(&mut self, product_id: &ProductId) -> CartOutcome {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id() != product_id);
        if self.lines.len() == before {
            return CartOutcome::NotInCart {
                product_id: product_id.clone(),
            };
        }
        tracing::debug!(product_id = %product_id, "cart line removed");
        CartOutcome::Removed {
            product_id: product_id.clone(),
        }
    }

    /// Replace the quantity of an existing line.
    ///
    /// `new_quantity <= 0` removes the line. A quantity above the product's
    /// current stock is rejected and the line is left unchanged.
    pub fn update_quantity(
        &mut self,
        stock: &impl StockLevels,
        product_id: &ProductId,
        new_quantity: i64,
    ) -> CartOutcome {
        let Some(index) = self.position(product_id) else {
            return CartOutcome::NotInCart {
                product_id: product_id.clone(),
            };
        };

        if new_quantity <= 0 {
            return self.remove_item(product_id);
        }

        let available = stock.available(product_id).unwrap_or(0);
        let quantity = match u32::try_from(new_quantity) {
            Ok(quantity) if quantity <= available => quantity,
            _ => {
                let line = &self.lines[index];
                tracing::warn!(
                    product_id = %product_id,
                    requested = new_quantity,
                    available,
                    "quantity update rejected: not enough stock"
                );
                return CartOutcome::Rejected(CartRejection::InsufficientStock {
                    product_id: product_id.clone(),
                    name: line.name().to_string(),
                    requested: new_quantity.unsigned_abs(),
                    available,
                });
            }
        };

        let line = &mut self.lines[index];
        let from = line.quantity();
        line.set_quantity(quantity);
        tracing::debug!(product_id = %product_id, from, to = quantity, "cart line quantity replaced");
        CartOutcome::QuantityChanged {
            product_id: product_id.clone(),
            from,
            to: quantity,
        }
    }

    /// Σ(quantity × unit price) over all lines.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// `subtotal × tax rate`.
    pub fn tax(&self) -> Money {
        self.tax_rate.apply(self.subtotal())
    }

    /// `subtotal + tax`.
    pub fn total(&self) -> Money {
        let subtotal = self.subtotal();
        subtotal + self.tax_rate.apply(subtotal)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Owned copy of the lines; changing it does not affect the cart.
    pub fn items(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn quantity_of(&self, product_id: &ProductId) -> Option<u32> {
        self.position(product_id).map(|i| self.lines[i].quantity())
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product_id() == product_id)
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id() == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use storefront_catalog::Catalog;

    fn pid(code: &str) -> ProductId {
        ProductId::new(code).unwrap()
    }

    fn test_catalog() -> Catalog {
        Catalog::from_products([
            Product::new(pid("P001"), "Laptop", "", Money::from_cents(99_999), 10).unwrap(),
            Product::new(pid("P002"), "Smartphone", "", Money::from_cents(69_999), 15).unwrap(),
            Product::new(pid("P003"), "Headphones", "", Money::from_cents(19_999), 20).unwrap(),
        ])
    }

    fn test_cart() -> Cart {
        Cart::new(TaxRate::from_basis_points(800).unwrap())
    }

    fn product<'a>(catalog: &'a Catalog, code: &str) -> &'a Product {
        catalog.get_product(&pid(code)).unwrap()
    }

    #[test]
    fn add_item_creates_line_and_computes_totals() {
        let catalog = test_catalog();
        let mut cart = test_cart();

        let outcome = cart.add_item(product(&catalog, "P001"), 2);
        assert_eq!(
            outcome,
            CartOutcome::Added {
                product_id: pid("P001"),
                quantity: 2
            }
        );
        assert_eq!(cart.subtotal(), Money::from_cents(199_998));
        assert_eq!(cart.tax().amount(), Decimal::new(1_599_984, 4));
        assert_eq!(cart.total().amount(), Decimal::new(21_599_784, 4));
        assert_eq!(cart.total().to_string(), "$2159.98");
    }

    #[test]
    fn add_more_than_stock_is_rejected_and_nothing_changes() {
        let catalog = test_catalog();
        let mut cart = test_cart();

        let outcome = cart.add_item(product(&catalog, "P001"), 11);
        match outcome.rejection() {
            Some(CartRejection::InsufficientStock {
                requested,
                available,
                ..
            }) => {
                assert_eq!(*requested, 11);
                assert_eq!(*available, 10);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }
        assert!(cart.is_empty());
        assert_eq!(catalog.available(&pid("P001")), Some(10));
    }

    #[test]
    fn add_zero_is_rejected() {
        let catalog = test_catalog();
        let mut cart = test_cart();
        let outcome = cart.add_item(product(&catalog, "P001"), 0);
        assert!(matches!(
            outcome,
            CartOutcome::Rejected(CartRejection::InvalidQuantity { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn adding_existing_product_merges_into_one_line() {
        let catalog = test_catalog();
        let mut cart = test_cart();
        let _ = cart.add_item(product(&catalog, "P002"), 3);
        let outcome = cart.add_item(product(&catalog, "P002"), 4);

        assert_eq!(
            outcome,
            CartOutcome::QuantityChanged {
                product_id: pid("P002"),
                from: 3,
                to: 7
            }
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(&pid("P002")), Some(7));
    }

    #[test]
    fn increasing_existing_line_skips_stock_check() {
        let catalog = test_catalog();
        let mut cart = test_cart();
        let _ = cart.add_item(product(&catalog, "P001"), 8);
        let outcome = cart.add_item(product(&catalog, "P001"), 8);

        assert!(outcome.is_applied());
        assert_eq!(cart.quantity_of(&pid("P001")), Some(16));
    }

    #[test]
    fn merge_past_line_capacity_is_rejected() {
        let big = Product::new(pid("P009"), "Bolt", "", Money::from_cents(1), u32::MAX).unwrap();
        let mut cart = test_cart();
        let _ = cart.add_item(&big, u32::MAX - 1);

        let outcome = cart.add_item(&big, 2);
        assert_eq!(
            outcome,
            CartOutcome::Rejected(CartRejection::InvalidQuantity {
                product_id: pid("P009")
            })
        );
        assert_eq!(cart.quantity_of(&pid("P009")), Some(u32::MAX - 1));
    }

    #[test]
    fn totals_at_price_and_quantity_limits_do_not_overflow() {
        let dearest = Product::new(pid("P010"), "Yacht", "", Product::max_price(), u32::MAX).unwrap();
        let mut cart = Cart::new(TaxRate::from_basis_points(10_000).unwrap());
        assert!(cart.add_item(&dearest, u32::MAX).is_applied());

        let expected = Product::max_price().amount() * Decimal::from(u32::MAX);
        assert_eq!(cart.subtotal().amount(), expected);
        assert_eq!(cart.total().amount(), expected * Decimal::TWO);
    }

    #[test]
    fn remove_item_deletes_line() {
        let catalog = test_catalog();
        let mut cart = test_cart();
        let _ = cart.add_item(product(&catalog, "P001"), 1);
        let _ = cart.add_item(product(&catalog, "P003"), 1);

        assert!(cart.remove_item(&pid("P001")).is_applied());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.subtotal(), Money::from_cents(19_999));
        assert_eq!(
            cart.remove_item(&pid("P001")),
            CartOutcome::NotInCart {
                product_id: pid("P001")
            }
        );
    }

    #[test]
    fn update_quantity_replaces_quantity() {
        let catalog = test_catalog();
        let mut cart = test_cart();
        let _ = cart.add_item(product(&catalog, "P003"), 2);

        let outcome = cart.update_quantity(&catalog, &pid("P003"), 5);
        assert_eq!(
            outcome,
            CartOutcome::QuantityChanged {
                product_id: pid("P003"),
                from: 2,
                to: 5
            }
        );
        assert_eq!(cart.subtotal(), Money::from_cents(99_995));
    }

    #[test]
    fn update_quantity_to_zero_or_less_removes_line() {
        let catalog = test_catalog();
        let mut cart = test_cart();
        let _ = cart.add_item(product(&catalog, "P001"), 1);
        let _ = cart.add_item(product(&catalog, "P002"), 1);

        assert!(matches!(
            cart.update_quantity(&catalog, &pid("P001"), 0),
            CartOutcome::Removed { .. }
        ));
        assert!(matches!(
            cart.update_quantity(&catalog, &pid("P002"), -3),
            CartOutcome::Removed { .. }
        ));
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::ZERO);
    }

    #[test]
    fn update_quantity_above_stock_is_rejected() {
        let catalog = test_catalog();
        let mut cart = test_cart();
        let _ = cart.add_item(product(&catalog, "P001"), 2);

        let outcome = cart.update_quantity(&catalog, &pid("P001"), 11);
        assert!(matches!(
            outcome,
            CartOutcome::Rejected(CartRejection::InsufficientStock { available: 10, .. })
        ));
        assert_eq!(cart.quantity_of(&pid("P001")), Some(2));
    }

    #[test]
    fn update_quantity_for_missing_line_is_a_no_op() {
        let catalog = test_catalog();
        let mut cart = test_cart();
        let outcome = cart.update_quantity(&catalog, &pid("P001"), 1);
        assert!(matches!(outcome, CartOutcome::NotInCart { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn items_returns_an_independent_copy() {
        let catalog = test_catalog();
        let mut cart = test_cart();
        let _ = cart.add_item(product(&catalog, "P001"), 1);

        let mut items = cart.items();
        items.clear();
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn clear_resets_totals() {
        let catalog = test_catalog();
        let mut cart = test_cart();
        let _ = cart.add_item(product(&catalog, "P001"), 3);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::ZERO);
        assert_eq!(cart.tax(), Money::ZERO);
        assert_eq!(cart.total(), Money::ZERO);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, u32),
        Update(usize, i64),
        Remove(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..3, 0u32..25).prop_map(|(p, q)| Op::Add(p, q)),
            (0usize..3, -3i64..25).prop_map(|(p, q)| Op::Update(p, q)),
            (0usize..3).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of mutations the subtotal equals
        /// Σ(quantity × price), at most one line exists per product, and no
        /// line holds zero units.
        #[test]
        fn subtotal_matches_lines(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let catalog = test_catalog();
            let codes = ["P001", "P002", "P003"];
            let mut cart = test_cart();

            for op in ops {
                match op {
                    Op::Add(p, q) => { let _ = cart.add_item(product(&catalog, codes[p]), q); }
                    Op::Update(p, q) => { let _ = cart.update_quantity(&catalog, &pid(codes[p]), q); }
                    Op::Remove(p) => { let _ = cart.remove_item(&pid(codes[p])); }
                }

                let expected: Money = cart
                    .lines()
                    .iter()
                    .map(|line| {
                        let price = catalog.get_product(line.product_id()).unwrap().price();
                        price.times(line.quantity())
                    })
                    .sum();
                prop_assert_eq!(cart.subtotal(), expected);
                prop_assert_eq!(cart.total(), cart.subtotal() + cart.tax());

                let mut ids: Vec<_> = cart.lines().iter().map(|l| l.product_id().clone()).collect();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), cart.len());
                prop_assert!(cart.lines().iter().all(|l| l.quantity() > 0));
            }
        }

        /// Property: a newly created line never exceeds stock at the time of the call.
        #[test]
        fn new_lines_never_exceed_stock(p in 0usize..3, q in 0u32..40) {
            let catalog = test_catalog();
            let codes = ["P001", "P002", "P003"];
            let mut cart = test_cart();
            let target = product(&catalog, codes[p]);

            let outcome = cart.add_item(target, q);
            match outcome {
                CartOutcome::Added { quantity, .. } => prop_assert!(quantity <= target.stock()),
                CartOutcome::Rejected(_) => prop_assert!(cart.is_empty()),
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
        }
    }
}
