use serde::Serialize;

use storefront_catalog::Product;
use storefront_core::{Entity, Money, ProductId};

/// One product + quantity entry in a cart.
///
/// Carries the product's immutable attributes (id, name, unit price) so
/// totals can be computed without going back to the catalog. Stock is always
/// read from the catalog, never from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    product_id: ProductId,
    name: String,
    unit_price: Money,
    quantity: u32,
}

impl CartLine {
    pub(crate) fn new(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id().clone(),
            name: product.name().to_string(),
            unit_price: product.price(),
            quantity,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price × quantity`.
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
