use rust_decimal::Decimal;
use serde::Serialize;

use storefront_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// Highest accepted unit price, in whole currency units. Any cart line at or
/// below it, summed and taxed, stays well inside `Decimal`'s range.
const MAX_PRICE_UNITS: i64 = 1_000_000_000;

/// A sellable product.
///
/// Everything except the stock level is fixed once the product exists; only
/// the owning [`Catalog`](crate::Catalog) can change stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Money,
    stock: u32,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        stock: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if price.is_negative() {
            return Err(DomainError::validation(format!(
                "price cannot be negative (product {id})"
            )));
        }
        if price > Self::max_price() {
            return Err(DomainError::validation(format!(
                "price cannot exceed {} (product {id})",
                Self::max_price()
            )));
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            price,
            stock,
        })
    }

    pub fn max_price() -> Money {
        Money::new(Decimal::from(MAX_PRICE_UNITS))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// True when at least `quantity` units are on hand.
    pub fn has_stock(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }

    pub(crate) fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(code: &str) -> ProductId {
        ProductId::new(code).unwrap()
    }

    #[test]
    fn new_product_keeps_its_attributes() {
        let p = Product::new(pid("P001"), "Laptop", "High-performance laptop", Money::from_cents(99_999), 10)
            .unwrap();
        assert_eq!(p.id().as_str(), "P001");
        assert_eq!(p.name(), "Laptop");
        assert_eq!(p.price(), Money::from_cents(99_999));
        assert_eq!(p.stock(), 10);
        assert!(p.has_stock(10));
        assert!(!p.has_stock(11));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Product::new(pid("P001"), "  ", "", Money::ZERO, 1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("name")));
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = Product::new(pid("P001"), "Laptop", "", Money::from_cents(-1), 1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("negative")));
    }

    #[test]
    fn price_is_capped() {
        let at_cap = Product::new(pid("P001"), "Yacht", "", Product::max_price(), 1);
        assert!(at_cap.is_ok());

        let over = Product::max_price() + Money::from_cents(1);
        let err = Product::new(pid("P001"), "Yacht", "", over, 1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("cannot exceed")));
    }

    #[test]
    fn free_products_are_allowed() {
        assert!(Product::new(pid("P009"), "Sticker", "", Money::ZERO, 100).is_ok());
    }
}
