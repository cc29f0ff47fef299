//! Product catalog.
//!
//! The catalog is the only owner of product stock. It starts from whatever
//! products the caller hands it (directly or through the JSON loader); it has
//! no built-in sample data.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod product;

pub use catalog::{Catalog, StockLevels};
pub use error::CatalogError;
pub use product::Product;
