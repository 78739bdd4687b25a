//! Adapter tests against a mock provider
//!
//! Drives the application ports through the real HTTP clients, checking
//! the error mapping the gateway relies on.

use application::{
    ApplicationError,
    ports::{ExchangeRatePort, WeatherPort},
};
use domain::value_objects::{CurrencyCode, GeoLocation};
use infrastructure::{ExchangeAppConfig, ExchangeRateAdapter, WeatherAdapter, WeatherAppConfig};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn weather_adapter(mock_server: &MockServer) -> WeatherAdapter {
    let config = WeatherAppConfig {
        api_key: SecretString::from("test-key".to_string()),
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    WeatherAdapter::with_config(config.to_client_config()).expect("Failed to create adapter")
}

fn exchange_adapter(mock_server: &MockServer) -> ExchangeRateAdapter {
    let config = ExchangeAppConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    ExchangeRateAdapter::with_config(config.to_client_config()).expect("Failed to create adapter")
}

fn mumbai() -> serde_json::Value {
    serde_json::json!({
        "weather": [{"id": 721, "main": "Haze", "description": "haze", "icon": "50d"}],
        "main": {"temp": 30.5, "feels_like": 35.49, "humidity": 70},
        "wind": {"speed": 4.63},
        "sys": {"country": "IN"},
        "name": "Mumbai",
        "cod": 200
    })
}

#[tokio::test]
async fn weather_report_is_rounded() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Mumbai"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mumbai()))
        .mount(&mock_server)
        .await;

    let report = weather_adapter(&mock_server)
        .current_by_city("Mumbai")
        .await
        .unwrap();

    assert_eq!(report.city, "Mumbai");
    assert_eq!(report.country, "IN");
    assert_eq!(report.temperature, 31);
    assert_eq!(report.feels_like, 35);
    assert_eq!(report.humidity.value(), 70);
    assert!((report.wind_speed - 4.63).abs() < f64::EPSILON);
}

#[tokio::test]
async fn weather_not_found_maps_to_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&mock_server)
        .await;

    let err = weather_adapter(&mock_server)
        .current_by_city("Atlantis")
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn weather_bad_key_maps_to_unauthorized() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"cod": 401, "message": "Invalid API key."})),
        )
        .mount(&mock_server)
        .await;

    let err = weather_adapter(&mock_server)
        .current_by_location(&GeoLocation::new_delhi())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)), "got {err:?}");
}

#[tokio::test]
async fn rate_table_is_fetched_for_base() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest/EUR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "base": "EUR",
            "rates": {"EUR": 1, "USD": 1.08, "INR": 90.2}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let table = exchange_adapter(&mock_server)
        .rate_table(&CurrencyCode::eur())
        .await
        .unwrap();

    assert_eq!(table.base, CurrencyCode::eur());
    assert_eq!(table.rate(&CurrencyCode::usd()), Some(1.08));
}

#[tokio::test]
async fn rate_table_server_error_is_external() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest/INR"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = exchange_adapter(&mock_server)
        .rate_table(&CurrencyCode::inr())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::ExternalService(_)), "got {err:?}");
}
