//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    entities::{ConversionResult, round_celsius, round_dp},
    value_objects::{Amount, CurrencyCode, GeoLocation, Humidity},
};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_parse(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::parse(Some(&lat.to_string()), Some(&lon.to_string()));
            prop_assert!(loc.is_ok());
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn one_missing_coordinate_always_missing(value in "\\PC*") {
            prop_assert!(GeoLocation::parse(Some(&value), None).is_err());
            prop_assert!(GeoLocation::parse(None, Some(&value)).is_err());
        }
    }
}

// ============================================================================
// Amount / CurrencyCode Property Tests
// ============================================================================

mod amount_tests {
    use super::*;

    proptest! {
        #[test]
        fn non_positive_amounts_rejected(value in -1.0e9f64..=0.0f64) {
            prop_assert!(Amount::parse(&value.to_string()).is_err());
        }

        #[test]
        fn positive_amounts_accepted(value in 0.000_001f64..1.0e9f64) {
            let amount = Amount::parse(&value.to_string());
            prop_assert!(amount.is_ok());
        }

        #[test]
        fn alphabetic_garbage_rejected(value in "[a-zA-Z]{1,10}") {
            // `inf`, `infinity` and `nan` parse as floats but are not finite
            prop_assert!(Amount::parse(&value).is_err());
        }

        #[test]
        fn three_letters_always_valid(code in "[a-zA-Z]{3}") {
            let parsed = CurrencyCode::parse(&code);
            prop_assert!(parsed.is_ok());
            let parsed = parsed.unwrap();
            prop_assert_eq!(parsed.as_str(), code.to_ascii_uppercase());
        }
    }
}

// ============================================================================
// Rounding Property Tests
// ============================================================================

mod rounding_tests {
    use super::*;

    proptest! {
        #[test]
        fn two_place_rounding_within_half_cent(value in -1.0e6f64..1.0e6f64) {
            prop_assert!((round_dp(value, 2) - value).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn celsius_rounding_within_half_degree(value in -80.0f64..60.0f64) {
            prop_assert!((f64::from(round_celsius(value)) - value).abs() <= 0.5);
        }

        #[test]
        fn forward_and_backward_rates_invert(rate in 0.0001f64..10_000.0f64) {
            let amount = Amount::parse("1").unwrap();
            let at = chrono::Utc::now();
            let forward = ConversionResult::compute(
                amount, CurrencyCode::inr(), CurrencyCode::usd(), rate, at);
            let backward = ConversionResult::compute(
                amount, CurrencyCode::usd(), CurrencyCode::inr(), 1.0 / rate, at);
            // 6-place rounding bounds the drift of each side
            let product = forward.rate * backward.rate;
            let tolerance = 1e-6 * (forward.rate + backward.rate) + 1e-9;
            prop_assert!((product - 1.0).abs() <= tolerance);
        }

        #[test]
        fn humidity_clamp_never_exceeds_max(value in any::<u8>()) {
            prop_assert!(Humidity::clamped(value).value() <= Humidity::MAX);
        }
    }
}
