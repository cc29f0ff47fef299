//! Shopping cart.
//!
//! A cart collects lines against catalog products and derives subtotal, tax
//! and total from those lines on demand. Expected rejections (not enough
//! stock, zero quantity) come back as [`CartOutcome::Rejected`] values.

pub mod cart;
pub mod line;
pub mod outcome;

pub use cart::Cart;
pub use line::CartLine;
pub use outcome::{CartOutcome, CartRejection};
