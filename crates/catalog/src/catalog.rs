use std::collections::BTreeMap;

use storefront_core::{Entity, ProductId};

use crate::product::Product;

/// Read access to current stock levels.
///
/// The cart only needs to ask "how many of this product are on hand right
/// now?"; it never sees the catalog itself.
pub trait StockLevels {
    /// Units on hand, or `None` if the product is unknown.
    fn available(&self, id: &ProductId) -> Option<u32>;
}

/// In-memory product catalog keyed by product id.
///
/// Iteration is in ascending id order so listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from an initial product set. Later duplicates replace
    /// earlier ones.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::new();
        for product in products {
            catalog.add_product(product);
        }
        catalog
    }

    /// Insert a product, replacing any existing product with the same id.
    pub fn add_product(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id(), stock = product.stock(), "product added to catalog");
        self.products.insert(product.id().clone(), product);
    }

    pub fn get_product(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// True iff the product exists and at least `quantity` units are on hand.
    pub fn check_stock(&self, id: &ProductId, quantity: u32) -> bool {
        self.products
            .get(id)
            .is_some_and(|product| product.has_stock(quantity))
    }

    /// Remove `quantity_sold` units from stock.
    ///
    /// Unknown products are ignored. A decrement that would take stock below
    /// zero is refused and stock is left as it was; callers are expected to
    /// have checked with [`Catalog::check_stock`] first. Returns whether the
    /// decrement was applied.
    pub fn update_stock(&mut self, id: &ProductId, quantity_sold: u32) -> bool {
        let Some(product) = self.products.get_mut(id) else {
            tracing::warn!(product_id = %id, "stock update for unknown product ignored");
            return false;
        };

        match product.stock().checked_sub(quantity_sold) {
            Some(remaining) => {
                product.set_stock(remaining);
                tracing::debug!(product_id = %id, quantity_sold, remaining, "stock decremented");
                true
            }
            None => {
                tracing::warn!(
                    product_id = %id,
                    quantity_sold,
                    stock = product.stock(),
                    "stock update refused: would go negative"
                );
                false
            }
        }
    }

    /// All products, ordered by id.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl StockLevels for Catalog {
    fn available(&self, id: &ProductId) -> Option<u32> {
        self.products.get(id).map(Product::stock)
    }
}
