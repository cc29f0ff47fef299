use storefront_core::ProductId;

/// Result of a cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum CartOutcome {
    /// A new line was created.
    Added { product_id: ProductId, quantity: u32 },
    /// An existing line's quantity changed (by an add or an explicit update).
    QuantityChanged {
        product_id: ProductId,
        from: u32,
        to: u32,
    },
    /// The line was removed.
    Removed { product_id: ProductId },
    /// There is no line for this product; nothing changed.
    NotInCart { product_id: ProductId },
    /// The request was refused; nothing changed.
    Rejected(CartRejection),
}

impl CartOutcome {
    /// True if the cart was modified.
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            CartOutcome::Added { .. } | CartOutcome::QuantityChanged { .. } | CartOutcome::Removed { .. }
        )
    }

    pub fn rejection(&self) -> Option<&CartRejection> {
        match self {
            CartOutcome::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}

/// Why a cart mutation was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartRejection {
    /// Fewer units are on hand than were requested.
    InsufficientStock {
        product_id: ProductId,
        name: String,
        requested: u64,
        available: u32,
    },
    /// Zero units, or more than one cart line can hold.
    InvalidQuantity { product_id: ProductId },
}

impl core::fmt::Display for CartRejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CartRejection::InsufficientStock {
                name,
                requested,
                available,
                ..
            } => write!(
                f,
                "Not enough stock available for {name} (requested {requested}, {available} in stock)"
            ),
            CartRejection::InvalidQuantity { product_id } => {
                write!(f, "Invalid quantity for {product_id}")
            }
        }
    }
}
