use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use storefront_core::Money;

use crate::details::PaymentDetails;

/// Minimum number of characters in a card number.
pub const MIN_CARD_NUMBER_LEN: usize = 13;

// Static patterns; compilation cannot fail.
static CVV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("CVV pattern compiles"));

static EXPIRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").expect("expiry pattern compiles")
});

/// Why a payment was declined.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentDecline {
    #[error("Invalid card number: must be at least 13 digits (got {length})")]
    CardNumberTooShort { length: usize },

    #[error("Invalid CVV: must be 3 or 4 digits")]
    InvalidCvv,

    #[error("Invalid expiry date: must be in MM/YY format")]
    InvalidExpiry,
}

/// Record of an accepted charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorization {
    pub amount: Money,
    pub card_last_four: String,
}

/// Charges a payment method.
///
/// Implementations must not have side effects when they decline.
pub trait PaymentAuthorizer {
    fn authorize(&self, details: &PaymentDetails, amount: Money)
    -> Result<Authorization, PaymentDecline>;
}

impl<T: PaymentAuthorizer + ?Sized> PaymentAuthorizer for &T {
    fn authorize(
        &self,
        details: &PaymentDetails,
        amount: Money,
    ) -> Result<Authorization, PaymentDecline> {
        (**self).authorize(details, amount)
    }
}

impl<T: PaymentAuthorizer + ?Sized> PaymentAuthorizer for Box<T> {
    fn authorize(
        &self,
        details: &PaymentDetails,
        amount: Money,
    ) -> Result<Authorization, PaymentDecline> {
        (**self).authorize(details, amount)
    }
}

/// Stand-in for a payment gateway: validates the shape of the card details
/// and accepts any amount.
///
/// Checks run in order: card number length, CVV, expiry.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatCheckAuthorizer;

impl FormatCheckAuthorizer {
    pub fn new() -> Self {
        Self
    }

    fn validate(details: &PaymentDetails) -> Result<(), PaymentDecline> {
        let length = details.card_number().chars().count();
        if length < MIN_CARD_NUMBER_LEN {
            return Err(PaymentDecline::CardNumberTooShort { length });
        }
        if !CVV_PATTERN.is_match(details.cvv()) {
            return Err(PaymentDecline::InvalidCvv);
        }
        if !EXPIRY_PATTERN.is_match(details.expiry()) {
            return Err(PaymentDecline::InvalidExpiry);
        }
        Ok(())
    }
}

impl PaymentAuthorizer for FormatCheckAuthorizer {
    fn authorize(
        &self,
        details: &PaymentDetails,
        amount: Money,
    ) -> Result<Authorization, PaymentDecline> {
        if let Err(decline) = Self::validate(details) {
            tracing::warn!(reason = %decline, card = %details.last_four(), "payment declined");
            return Err(decline);
        }

        tracing::info!(%amount, card = %details.last_four(), "payment authorized");
        Ok(Authorization {
            amount,
            card_last_four: details.last_four().to_string(),
        })
    }
}
