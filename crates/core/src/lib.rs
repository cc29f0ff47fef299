//! `storefront-core`: values shared by every storefront crate.
//!
//! Identifiers, exact money, tax rates and the domain error type. No IO and no
//! logging setup live here.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, OrderId, ProductId};
pub use money::{Money, TaxRate};
pub use value_object::ValueObject;
