//! `storefront`: interactive text-menu front end for the storefront crates.
//!
//! Everything here is glue: reading configuration, seeding the catalog,
//! parsing menu input and rendering results. The business rules live in the
//! catalog, cart, payments, orders and checkout crates.

pub mod config;
pub mod menu;
pub mod render;
pub mod seed;
pub mod session;

pub use config::{AppConfig, ConfigError};
pub use session::Session;
