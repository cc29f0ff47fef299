//! JSON catalog loading.
//!
//! A catalog file is a JSON array of product records:
//!
//! ```json
//! [
//!   { "id": "P001", "name": "Laptop", "description": "High-performance laptop",
//!     "price": 999.99, "stock": 10 }
//! ]
//! ```
//!
//! `description` may be omitted; `price` may be a number or a decimal string.

use std::collections::BTreeSet;
use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;

use storefront_core::{Entity, Money, ProductId};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::product::Product;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProductRecord {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    price: Decimal,
    stock: u32,
}

impl ProductRecord {
    fn into_product(self, index: usize) -> Result<Product, CatalogError> {
        let invalid = |source| CatalogError::InvalidProduct { index, source };
        let id = ProductId::new(self.id).map_err(invalid)?;
        Product::new(id, self.name, self.description, Money::new(self.price), self.stock)
            .map_err(invalid)
    }
}

impl Catalog {
    /// Load a catalog from a JSON document read from `reader`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    /// Load a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    fn from_records(records: Vec<ProductRecord>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        let mut products = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let product = record.into_product(index)?;
            if !seen.insert(product.id().clone()) {
                return Err(CatalogError::DuplicateProduct(product.id().clone()));
            }
            products.push(product);
        }
        tracing::info!(products = products.len(), "catalog loaded");
        Ok(Self::from_products(products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StockLevels;

    #[test]
    fn loads_numeric_and_string_prices() {
        let json = r#"[
            {"id": "P001", "name": "Laptop", "description": "High-performance laptop", "price": 999.99, "stock": 10},
            {"id": "P004", "name": "Smart Watch", "price": "249.99", "stock": 8}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();

        let laptop = catalog.get_product(&ProductId::new("P001").unwrap()).unwrap();
        assert_eq!(laptop.price(), Money::from_cents(99_999));
        assert_eq!(laptop.description(), "High-performance laptop");

        let watch = catalog.get_product(&ProductId::new("P004").unwrap()).unwrap();
        assert_eq!(watch.price(), Money::from_cents(24_999));
        assert_eq!(watch.description(), "");
        assert_eq!(catalog.available(watch.id()), Some(8));
    }

    #[test]
    fn reader_and_str_loaders_agree() {
        let json = r#"[{"id": "P001", "name": "Laptop", "price": 1, "stock": 1}]"#;
        let from_reader = Catalog::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(from_reader, Catalog::from_json_str(json).unwrap());
    }

    #[test]
    fn negative_stock_is_malformed_json() {
        let json = r#"[{"id": "P001", "name": "Laptop", "price": 1, "stock": -1}]"#;
        assert!(matches!(Catalog::from_json_str(json), Err(CatalogError::Json(_))));
    }

    #[test]
    fn invalid_record_reports_its_index() {
        let json = r#"[
            {"id": "P001", "name": "Laptop", "price": 1, "stock": 1},
            {"id": "P002", "name": "Phone", "price": -5, "stock": 1}
        ]"#;
        match Catalog::from_json_str(json) {
            Err(CatalogError::InvalidProduct { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidProduct, got {other:?}"),
        }
    }

    #[test]
    fn price_beyond_the_cap_is_an_invalid_record() {
        let json = r#"[{"id": "P001", "name": "Laptop", "price": "10000000000000000000000000000", "stock": 10}]"#;
        match Catalog::from_json_str(json) {
            Err(CatalogError::InvalidProduct { index: 0, source }) => {
                assert!(source.to_string().contains("cannot exceed"));
            }
            other => panic!("expected InvalidProduct, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": "P001", "name": "Laptop", "price": 1, "stock": 1},
            {"id": "P001", "name": "Laptop again", "price": 2, "stock": 2}
        ]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::DuplicateProduct(id)) if id.as_str() == "P001"
        ));
    }
}
