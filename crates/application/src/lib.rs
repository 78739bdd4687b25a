//! Application layer - Use cases and orchestration
//!
//! Defines the ports the gateway needs from the outside world and the
//! services that validate input, call a port at most once, and shape the result.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
