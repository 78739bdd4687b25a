//! Gateway wired to the real adapters, with providers mocked by wiremock
#![allow(clippy::expect_used)]

use std::sync::Arc;

use axum_test::TestServer;
use infrastructure::{ExchangeRateAdapter, StaticQuoteSource, WeatherAdapter};
use integration_exchange::ExchangeConfig;
use integration_weather::WeatherConfig;
use presentation_http::{routes::create_router, state::AppState};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

async fn gateway(provider: &MockServer) -> TestServer {
    let weather = WeatherAdapter::with_config(WeatherConfig {
        api_key: "e2e-key".to_string(),
        base_url: provider.uri(),
        timeout_secs: 5,
    })
    .expect("weather adapter");
    let rates = ExchangeRateAdapter::with_config(ExchangeConfig {
        base_url: provider.uri(),
        timeout_secs: 5,
    })
    .expect("exchange adapter");

    let state = AppState::new(
        Arc::new(StaticQuoteSource::builtin()),
        Arc::new(weather),
        Arc::new(rates),
    );
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

#[tokio::test]
async fn convert_inr_to_usd_end_to_end() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest/INR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "base": "INR",
            "rates": {"USD": 0.012}
        })))
        .expect(1)
        .mount(&provider)
        .await;

    let server = gateway(&provider).await;
    let response = server
        .get("/api/currency/convert?amount=100&from=INR&to=USD")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["from"], "INR");
    assert_eq!(body["to"], "USD");
    assert_eq!(body["fromAmount"], 100.0);
    assert_eq!(body["toAmount"], 1.2);
    assert_eq!(body["rate"], 0.012);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn atlantis_is_not_found_end_to_end() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Atlantis"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .expect(1)
        .mount(&provider)
        .await;

    let server = gateway(&provider).await;
    let response = server.get("/api/weather?city=Atlantis").await;

    response.assert_status_not_found();
    response.assert_json(&json!({"error": "City not found. Please check the city name."}));
}

#[tokio::test]
async fn coords_weather_end_to_end() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "28.6139"))
        .and(query_param("lon", "77.209"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "weather": [{"description": "smoke", "icon": "50d"}],
            "main": {"temp": 24.5, "feels_like": 24.1, "humidity": 53},
            "wind": {"speed": 2.06},
            "sys": {"country": "IN"},
            "name": "New Delhi"
        })))
        .mount(&provider)
        .await;

    let server = gateway(&provider).await;
    let response = server
        .get("/api/weather/coords?lat=28.6139&lon=77.209")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "city": "New Delhi",
        "country": "IN",
        "temperature": 25,
        "feelsLike": 24,
        "description": "smoke",
        "humidity": 53,
        "windSpeed": 2.06,
        "icon": "50d"
    }));
}

#[tokio::test]
async fn missing_coordinates_never_reach_provider() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;

    let server = gateway(&provider).await;
    let response = server.get("/api/weather/coords?lat=28.6").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn provider_outage_on_convert_is_500_with_details() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest/USD"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&provider)
        .await;

    let server = gateway(&provider).await;
    let response = server
        .get("/api/currency/convert?amount=3&from=USD&to=EUR")
        .await;

    response.assert_status_internal_server_error();
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Could not fetch currency data. Please try again later."
    );
    assert!(body["details"].is_string());
}
