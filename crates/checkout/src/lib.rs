//! Checkout workflow.
//!
//! Turns a cart into an order: re-verify stock, authorize payment, commit
//! stock, snapshot the order, empty the cart. See [`CheckoutService`].

pub mod clock;
pub mod error;
pub mod ids;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CheckoutError;
pub use ids::{OrderIdGenerator, SequentialIdGenerator, UuidV7Generator};
pub use service::CheckoutService;
