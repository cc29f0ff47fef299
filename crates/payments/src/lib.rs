//! Payment authorization.
//!
//! [`PaymentAuthorizer`] is the seam a real gateway would plug into. The only
//! implementation here, [`FormatCheckAuthorizer`], accepts any amount once the
//! card details are well formed.

pub mod authorizer;
pub mod details;

pub use authorizer::{Authorization, FormatCheckAuthorizer, PaymentAuthorizer, PaymentDecline};
pub use details::PaymentDetails;
