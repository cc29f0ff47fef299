//! Menu choices.

pub const MENU: &str = "\
E-Commerce System Menu:
1. View Products
2. Add Product to Cart
3. View Cart
4. Update Cart Item Quantity
5. Remove Item from Cart
6. Checkout
7. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewProducts,
    AddToCart,
    ViewCart,
    UpdateQuantity,
    RemoveItem,
    Checkout,
    Exit,
}

impl MenuChoice {
    /// Parse a menu number (`1`–`7`), ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::ViewProducts),
            2 => Some(Self::AddToCart),
            3 => Some(Self::ViewCart),
            4 => Some(Self::UpdateQuantity),
            5 => Some(Self::RemoveItem),
            6 => Some(Self::Checkout),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}
