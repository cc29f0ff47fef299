//! Catalog bootstrap: the demo product set, or a JSON file when configured.

use std::fs::File;
use std::io::BufReader;

use anyhow::Context;

use storefront_catalog::{Catalog, Product};
use storefront_core::{DomainResult, Money, ProductId};

use crate::config::AppConfig;

/// `(id, name, description, price in cents, stock)`
const SAMPLE_PRODUCTS: [(&str, &str, &str, i64, u32); 4] = [
    ("P001", "Laptop", "High-performance laptop", 99_999, 10),
    ("P002", "Smartphone", "Latest smartphone model", 69_999, 15),
    ("P003", "Headphones", "Noise-cancelling headphones", 19_999, 20),
    ("P004", "Smart Watch", "Fitness tracking smartwatch", 24_999, 8),
];

/// The demo store's products.
pub fn sample_products() -> DomainResult<Vec<Product>> {
    SAMPLE_PRODUCTS
        .iter()
        .map(|&(id, name, description, cents, stock)| {
            Product::new(ProductId::new(id)?, name, description, Money::from_cents(cents), stock)
        })
        .collect()
}

/// Build the catalog the session starts with.
pub fn load_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    let Some(path) = &config.catalog_path else {
        let products = sample_products().context("building sample products")?;
        return Ok(Catalog::from_products(products));
    };

    let file = File::open(path).with_context(|| format!("opening catalog {}", path.display()))?;
    let catalog = Catalog::from_json_reader(BufReader::new(file))
        .with_context(|| format!("loading catalog {}", path.display()))?;
    tracing::info!(path = %path.display(), products = catalog.len(), "catalog file loaded");
    Ok(catalog)
}
