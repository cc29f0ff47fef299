//! Errors for malformed storefront values and forbidden state changes.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// A value that can never be valid, or a state change an entity refuses.
///
/// Running out of stock or a declined card are not `DomainError`s; the cart
/// and checkout crates report those as their own outcomes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Blank product name, negative price, tax rate outside [0, 1], ...
    #[error("validation failed: {0}")]
    Validation(String),

    /// A product, customer or order identifier that does not parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A transition the entity's lifecycle forbids.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_detail() {
        assert_eq!(
            DomainError::validation("name cannot be empty").to_string(),
            "validation failed: name cannot be empty"
        );
        assert_eq!(
            DomainError::invalid_id("ProductId: empty").to_string(),
            "invalid identifier: ProductId: empty"
        );
    }
}
