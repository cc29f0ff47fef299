use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_cart::{Cart, CartLine};
use storefront_core::{CustomerId, DomainError, DomainResult, Entity, Money, OrderId, ProductId};

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether an order in this status may move to `next`.
    ///
    /// `Processing → Shipped → Delivered`; anything not yet delivered can be
    /// cancelled.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Processing, OrderStatus::Shipped)
                | (OrderStatus::Shipped, OrderStatus::Delivered)
                | (OrderStatus::Processing, OrderStatus::Cancelled)
                | (OrderStatus::Shipped, OrderStatus::Cancelled)
        )
    }

    pub fn is_final(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// Order line: product, quantity, unit price at the time of purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl OrderLine {
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id().clone(),
            name: line.name().to_string(),
            unit_price: line.unit_price(),
            quantity: line.quantity(),
        }
    }
}

/// A placed order.
///
/// Only [`Order::place`] builds one, so its totals always match its lines.
/// Orders serialize for export but are never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    lines: Vec<OrderLine>,
    subtotal: Money,
    tax: Money,
    total: Money,
    placed_at: DateTime<Utc>,
    status: OrderStatus,
}

impl Order {
    /// Snapshot `cart` into a new order in `Processing` status.
    ///
    /// Lines and totals are read from the cart in one go, so the order's
    /// totals always describe exactly its own lines. Later changes to the
    /// cart do not reach the order.
    pub fn place(
        id: OrderId,
        customer_id: CustomerId,
        cart: &Cart,
        placed_at: DateTime<Utc>,
    ) -> Self {
        let lines = cart.lines().iter().map(OrderLine::from).collect();
        Self {
            id,
            customer_id,
            lines,
            subtotal: cart.subtotal(),
            tax: cart.tax(),
            total: cart.total(),
            placed_at,
            status: OrderStatus::Processing,
        }
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn tax(&self) -> Money {
        self.tax
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Move the order to `next`.
    ///
    /// Transitions outside the lifecycle are rejected and leave the status
    /// unchanged.
    pub fn transition(&mut self, next: OrderStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::invariant(format!(
                "order {} cannot move from {} to {}",
                self.id, self.status, next
            )));
        }
        tracing::info!(order_id = %self.id, from = %self.status, to = %next, "order status changed");
        self.status = next;
        Ok(())
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
