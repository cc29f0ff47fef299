//! Plain-text rendering of catalog, cart and order state.

use std::fmt::Write as _;

use storefront_cart::{Cart, CartLine};
use storefront_catalog::{Catalog, Product};
use storefront_core::Entity;
use storefront_orders::{Order, OrderLine};

const RULE: &str = "-----------------------";

pub fn product(product: &Product) -> String {
    format!(
        "{} - {} ({}, {} in stock)",
        product.id(),
        product.name(),
        product.price(),
        product.stock()
    )
}

pub fn catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Available Products:");
    let _ = writeln!(out, "{RULE}");
    for p in catalog.products() {
        let _ = writeln!(out, "{}", product(p));
    }
    let _ = writeln!(out, "{RULE}");
    out
}

pub fn cart_line(line: &CartLine) -> String {
    format!("{} x{} = {}", line.name(), line.quantity(), line.line_total())
}

pub fn cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your shopping cart is empty.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Shopping Cart Contents:");
    let _ = writeln!(out, "{RULE}");
    for line in cart.lines() {
        let _ = writeln!(out, "{}", cart_line(line));
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Subtotal: {}", cart.subtotal());
    let _ = writeln!(out, "Tax ({}): {}", cart.tax_rate(), cart.tax());
    let _ = writeln!(out, "Total: {}", cart.total());
    out
}

pub fn order_line(line: &OrderLine) -> String {
    format!("{} x{} = {}", line.name, line.quantity, line.line_total())
}

pub fn order(order: &Order) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Order Details:");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Order ID: {}", order.id());
    let _ = writeln!(out, "Date: {}", order.placed_at().format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(out, "Status: {}", order.status());
    let _ = writeln!(out, "Items:");
    for line in order.lines() {
        let _ = writeln!(out, "  {}", order_line(line));
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Subtotal: {}", order.subtotal());
    let _ = writeln!(out, "Tax: {}", order.tax());
    let _ = writeln!(out, "Total: {}", order.total());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use storefront_core::{CustomerId, Money, OrderId, ProductId, TaxRate};

    fn laptop() -> Product {
        Product::new(ProductId::new("P001").unwrap(), "Laptop", "", Money::from_cents(99_999), 10).unwrap()
    }

    #[test]
    fn product_line_shows_price_and_stock() {
        assert_eq!(product(&laptop()), "P001 - Laptop ($999.99, 10 in stock)");
    }

    #[test]
    fn empty_cart_message() {
        let cart = Cart::new(TaxRate::ZERO);
        assert_eq!(super::cart(&cart), "Your shopping cart is empty.\n");
    }

    #[test]
    fn cart_summary_rounds_for_display() {
        let mut c = Cart::new(TaxRate::from_basis_points(800).unwrap());
        let _ = c.add_item(&laptop(), 2);
        let text = cart(&c);
        assert!(text.contains("Laptop x2 = $1999.98"));
        assert!(text.contains("Subtotal: $1999.98"));
        assert!(text.contains("Tax (8.0%): $160.00"));
        assert!(text.contains("Total: $2159.98"));
    }

    #[test]
    fn order_summary_lists_items_and_status() {
        let mut c = Cart::new(TaxRate::from_basis_points(800).unwrap());
        let _ = c.add_item(&laptop(), 1);
        let o = Order::place(
            OrderId::new(),
            CustomerId::new("CUST001").unwrap(),
            &c,
            Utc.with_ymd_and_hms(2025, 12, 24, 18, 30, 0).unwrap(),
        );
        let text = order(&o);
        assert!(text.contains(&format!("Order ID: {}", o.id())));
        assert!(text.contains("Date: 2025-12-24 18:30:00 UTC"));
        assert!(text.contains("Status: Processing"));
        assert!(text.contains("  Laptop x1 = $999.99"));
        assert!(text.contains("Total: $1079.99"));
    }
}
