//! Domain layer for InfoHub
//!
//! Value shapes exchanged between the gateway, its providers and the dashboard.
//! Nothing here performs I/O; every type is a transient request/response value.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod time;
pub mod value_objects;

pub use catalog::{CURRENCIES, CurrencyInfo};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
