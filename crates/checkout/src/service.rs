//! Checkout orchestration.
//!
//! ```text
//! Cart
//!   ↓
//! 1. Re-verify stock for every line          (read-only)
//!   ↓
//! 2. Authorize payment for the cart total    (read-only)
//!   ↓
//! 3. Decrement stock for every line          (catalog mutated)
//!   ↓
//! 4. Snapshot lines + totals into an Order
//!   ↓
//! 5. Empty the cart
//! ```
//!
//! No card is charged for items out of stock, and a declined card never moves
//! inventory. Steps 1 and 2 are the only fallible ones; if either fails the
//! catalog and cart are untouched.
//!
//! `process_order` holds `&mut` borrows of both the catalog and the cart for
//! the whole sequence, so nothing else can change stock between the check in
//! step 1 and the commit in step 3. Sharing a catalog between concurrent
//! checkouts would need steps 1 and 3 merged into one atomic operation.

use storefront_cart::Cart;
use storefront_catalog::{Catalog, StockLevels};
use storefront_core::{CustomerId, Entity};
use storefront_orders::Order;
use storefront_payments::{FormatCheckAuthorizer, PaymentAuthorizer, PaymentDetails};

use crate::clock::{Clock, SystemClock};
use crate::error::CheckoutError;
use crate::ids::{OrderIdGenerator, UuidV7Generator};

/// Runs checkouts against a catalog.
///
/// Generic over the payment authorizer, the order id generator and the
/// clock so each can be swapped (a real gateway, deterministic ids, a fixed
/// time) without touching the workflow.
#[derive(Debug)]
pub struct CheckoutService<A, G, C = SystemClock> {
    authorizer: A,
    ids: G,
    clock: C,
}

impl<A, G> CheckoutService<A, G, SystemClock>
where
    A: PaymentAuthorizer,
    G: OrderIdGenerator,
{
    pub fn new(authorizer: A, ids: G) -> Self {
        Self {
            authorizer,
            ids,
            clock: SystemClock,
        }
    }
}

impl Default for CheckoutService<FormatCheckAuthorizer, UuidV7Generator, SystemClock> {
    fn default() -> Self {
        Self::new(FormatCheckAuthorizer, UuidV7Generator)
    }
}

impl<A, G, C> CheckoutService<A, G, C>
where
    A: PaymentAuthorizer,
    G: OrderIdGenerator,
    C: Clock,
{
    /// Replace the clock used for order timestamps.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> CheckoutService<A, G, C2> {
        CheckoutService {
            authorizer: self.authorizer,
            ids: self.ids,
            clock,
        }
    }

    pub fn authorizer(&self) -> &A {
        &self.authorizer
    }

    /// Check out `cart` for `customer_id`, paying with `payment`.
    ///
    /// On success the catalog's stock has been reduced by the cart's
    /// quantities, the cart is empty, and the returned order holds the cart's
    /// lines and totals as they were at checkout. On error nothing changed.
    pub fn process_order(
        &self,
        catalog: &mut Catalog,
        cart: &mut Cart,
        customer_id: &CustomerId,
        payment: &PaymentDetails,
    ) -> Result<Order, CheckoutError> {
        let span = tracing::info_span!("checkout", customer_id = %customer_id, lines = cart.len());
        let _entered = span.enter();

        verify_stock(catalog, cart)?;

        let total = cart.total();
        let authorization = self.authorizer.authorize(payment, total)?;

        for line in cart.lines() {
            let applied = catalog.update_stock(line.product_id(), line.quantity());
            debug_assert!(applied, "stock for {} was verified before commit", line.product_id());
        }

        let order = Order::place(self.ids.next_id(), customer_id.clone(), cart, self.clock.now());
        cart.clear();

        tracing::info!(
            order_id = %order.id(),
            total = %order.total(),
            card = %authorization.card_last_four,
            "order placed"
        );
        Ok(order)
    }
}

/// Every line must still be covered by current stock. Reports the first line
/// that is not.
fn verify_stock(catalog: &Catalog, cart: &Cart) -> Result<(), CheckoutError> {
    for line in cart.lines() {
        if catalog.check_stock(line.product_id(), line.quantity()) {
            continue;
        }
        let available = catalog.available(line.product_id()).unwrap_or(0);
        tracing::warn!(
            product_id = %line.product_id(),
            requested = line.quantity(),
            available,
            "checkout rejected: not enough stock"
        );
        return Err(CheckoutError::InsufficientStock {
            product_id: line.product_id().clone(),
            name: line.name().to_string(),
            requested: line.quantity(),
            available,
        });
    }
    Ok(())
}
