//! Value Objects - Immutable, identity-less domain primitives

mod amount;
mod currency_code;
mod geo_location;
mod humidity;

pub use amount::Amount;
pub use currency_code::CurrencyCode;
pub use geo_location::GeoLocation;
pub use humidity::{Humidity, InvalidHumidity};
