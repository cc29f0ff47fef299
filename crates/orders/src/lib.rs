//! Orders domain module.
//!
//! An [`Order`] is the immutable record of a completed checkout. Its lines and
//! totals are copied out of the cart when the order is placed; only the status
//! moves afterwards.

pub mod order;

pub use order::{Order, OrderLine, OrderStatus};
