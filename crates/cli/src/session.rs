//! The interactive shopping session: menu loop over any reader and writer.

use std::io::{self, BufRead, Write};

use storefront_cart::{Cart, CartOutcome};
use storefront_catalog::Catalog;
use storefront_checkout::{CheckoutError, CheckoutService, Clock, OrderIdGenerator};
use storefront_core::{CustomerId, ProductId};
use storefront_payments::{PaymentAuthorizer, PaymentDetails};

use crate::menu::{MENU, MenuChoice};
use crate::render;

/// One shopper at one terminal.
pub struct Session<R, W, A, G, C> {
    input: R,
    output: W,
    catalog: Catalog,
    cart: Cart,
    checkout: CheckoutService<A, G, C>,
    customer_id: CustomerId,
}

impl<R, W, A, G, C> Session<R, W, A, G, C>
where
    R: BufRead,
    W: Write,
    A: PaymentAuthorizer,
    G: OrderIdGenerator,
    C: Clock,
{
    pub fn new(
        input: R,
        output: W,
        catalog: Catalog,
        cart: Cart,
        checkout: CheckoutService<A, G, C>,
        customer_id: CustomerId,
    ) -> Self {
        Self {
            input,
            output,
            catalog,
            cart,
            checkout,
            customer_id,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Run the menu loop until the shopper exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let keep_going = match MenuChoice::parse(&line) {
                Some(MenuChoice::ViewProducts) => {
                    write!(self.output, "{}", render::catalog(&self.catalog))?;
                    true
                }
                Some(MenuChoice::AddToCart) => self.add_to_cart()?,
                Some(MenuChoice::ViewCart) => {
                    write!(self.output, "{}", render::cart(&self.cart))?;
                    true
                }
                Some(MenuChoice::UpdateQuantity) => self.update_quantity()?,
                Some(MenuChoice::RemoveItem) => self.remove_item()?,
                Some(MenuChoice::Checkout) => self.checkout()?,
                Some(MenuChoice::Exit) => false,
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        writeln!(self.output, "Thank you for shopping with us!")?;
        self.output.flush()
    }

    /// Print `label`, then read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_product_id(&mut self, label: &str) -> io::Result<Option<Option<ProductId>>> {
        Ok(self.prompt(label)?.map(|raw| ProductId::new(raw).ok()))
    }

    // Each handler returns `Ok(false)` when input ran out mid-command.

    fn add_to_cart(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_product_id("Enter product ID to add: ")? else {
            return Ok(false);
        };
        let Some(product) = id.as_ref().and_then(|id| self.catalog.get_product(id)).cloned() else {
            writeln!(self.output, "Product not found.")?;
            return Ok(true);
        };

        let Some(raw) = self.prompt("Enter quantity: ")? else {
            return Ok(false);
        };
        let Ok(quantity) = raw.parse::<u32>() else {
            writeln!(self.output, "Invalid quantity.")?;
            return Ok(true);
        };

        match self.cart.add_item(&product, quantity) {
            CartOutcome::Rejected(rejection) => writeln!(self.output, "{rejection}")?,
            _ => writeln!(self.output, "Product added to cart.")?,
        }
        Ok(true)
    }

    fn update_quantity(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_product_id("Enter product ID to update: ")? else {
            return Ok(false);
        };
        let Some(raw) = self.prompt("Enter new quantity: ")? else {
            return Ok(false);
        };
        let Ok(quantity) = raw.parse::<i64>() else {
            writeln!(self.output, "Invalid quantity.")?;
            return Ok(true);
        };
        let Some(id) = id else {
            writeln!(self.output, "Item not found in cart.")?;
            return Ok(true);
        };

        let message = match self.cart.update_quantity(&self.catalog, &id, quantity) {
            CartOutcome::Rejected(rejection) => rejection.to_string(),
            CartOutcome::Removed { .. } => "Item removed from cart.".to_string(),
            CartOutcome::NotInCart { .. } => "Item not found in cart.".to_string(),
            CartOutcome::Added { .. } | CartOutcome::QuantityChanged { .. } => {
                "Cart updated.".to_string()
            }
        };
        writeln!(self.output, "{message}")?;
        Ok(true)
    }

    fn remove_item(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_product_id("Enter product ID to remove: ")? else {
            return Ok(false);
        };
        let removed = id.is_some_and(|id| self.cart.remove_item(&id).is_applied());
        if removed {
            writeln!(self.output, "Item removed from cart.")?;
        } else {
            writeln!(self.output, "Item not found in cart.")?;
        }
        Ok(true)
    }

    fn read_payment_details(&mut self) -> io::Result<Option<PaymentDetails>> {
        let Some(card_number) = self.prompt("Card Number: ")? else {
            return Ok(None);
        };
        let Some(holder_name) = self.prompt("Card Holder Name: ")? else {
            return Ok(None);
        };
        let Some(expiry) = self.prompt("Expiry Date (MM/YY): ")? else {
            return Ok(None);
        };
        let Some(cvv) = self.prompt("CVV: ")? else {
            return Ok(None);
        };
        Ok(Some(PaymentDetails::new(card_number, holder_name, expiry, cvv)))
    }

    fn checkout(&mut self) -> io::Result<bool> {
        if self.cart.is_empty() {
            writeln!(self.output, "Your cart is empty. Nothing to checkout.")?;
            return Ok(true);
        }

        writeln!(self.output, "\nProceeding to checkout...")?;
        write!(self.output, "{}", render::cart(&self.cart))?;

        writeln!(self.output, "\nEnter payment details:")?;
        let Some(payment) = self.read_payment_details()? else {
            return Ok(false);
        };

        match self.checkout.process_order(
            &mut self.catalog,
            &mut self.cart,
            &self.customer_id,
            &payment,
        ) {
            Ok(order) => {
                writeln!(self.output, "\nOrder placed successfully!")?;
                write!(self.output, "{}", render::order(&order))?;
            }
            Err(CheckoutError::PaymentDeclined(decline)) => {
                writeln!(self.output, "{decline}")?;
                writeln!(
                    self.output,
                    "\nPayment failed. Please try again with valid payment details."
                )?;
            }
            Err(err) => writeln!(self.output, "Checkout failed: {err}")?,
        }
        Ok(true)
    }
}
