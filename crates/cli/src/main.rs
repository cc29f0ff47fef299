use std::io;

use anyhow::Context;

use storefront_cart::Cart;
use storefront_checkout::{CheckoutService, UuidV7Generator};
use storefront_cli::{AppConfig, Session, seed};
use storefront_payments::FormatCheckAuthorizer;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("reading configuration")?;
    storefront_observability::tracing::init(&config.log);

    let catalog = seed::load_catalog(&config)?;
    tracing::info!(
        products = catalog.len(),
        tax_rate = %config.tax_rate,
        customer_id = %config.customer_id,
        "storefront starting"
    );

    let checkout = CheckoutService::new(FormatCheckAuthorizer, UuidV7Generator);
    let mut session = Session::new(
        io::stdin().lock(),
        io::stdout().lock(),
        catalog,
        Cart::new(config.tax_rate),
        checkout,
        config.customer_id,
    );
    session.run().context("terminal session failed")?;
    Ok(())
}
