use thiserror::Error;

use storefront_core::ProductId;
use storefront_payments::PaymentDecline;

/// Why a checkout did not produce an order.
///
/// Either way the catalog and the cart are exactly as they were before the
/// attempt, so the caller can fix the problem and retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// A cart line asks for more units than the catalog holds (or the product
    /// is no longer in the catalog, in which case `available` is 0).
    #[error("Not enough stock for product: {name} (requested {requested}, {available} available)")]
    InsufficientStock {
        product_id: ProductId,
        name: String,
        requested: u32,
        available: u32,
    },

    /// The payment method was declined.
    #[error("Payment processing failed: {0}")]
    PaymentDeclined(#[from] PaymentDecline),
}
