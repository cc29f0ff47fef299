use thiserror::Error;

use storefront_core::{DomainError, ProductId};

/// Failure to build a catalog from external data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid product at index {index}: {source}")]
    InvalidProduct {
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error("product '{0}' is listed more than once")]
    DuplicateProduct(ProductId),
}
