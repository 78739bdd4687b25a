//! InfoHub terminal dashboard
//!
//! A tabbed view over the gateway: quote, weather and currency panels. Panels
//! are plain state machines; all I/O goes through [`effects::EffectRunner`].

pub mod cli;
pub mod dashboard;
pub mod effects;
pub mod gateway;
pub mod geolocation;
pub mod panels;
pub mod render;

pub use dashboard::{ActivePanel, Dashboard, Tab};
pub use effects::{Completion, Effect, EffectRunner, GatewayRequest};
pub use gateway::{GatewayClient, GatewayError, GatewayPort, HealthStatus};
pub use geolocation::{ConfiguredGeolocation, GeolocationOutcome, GeolocationPort, TimeoutGeolocation};
