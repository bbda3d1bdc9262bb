//! Integration tests for ForecastClient against a mock WeatherAPI server.

use std::time::Duration;

use pronostico_weather::{ForecastClient, WeatherError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ForecastClient {
    ForecastClient::new_with_base_url("test-key", 5, "es", Duration::from_secs(5), base_url)
        .expect("client builds")
}

/// Helper to create a forecast day JSON entry
fn test_day(date: &str, max_c: f64, min_c: f64, rain: u8, text: &str, icon: &str) -> serde_json::Value {
    serde_json::json!({
        "date": date,
        "day": {
            "maxtemp_c": max_c,
            "mintemp_c": min_c,
            "daily_chance_of_rain": rain,
            "condition": { "text": text, "icon": icon }
        }
    })
}

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "location": { "name": "Madrid" },
        "forecast": {
            "forecastday": [
                test_day("2024-03-11", 25.0, 14.0, 10, "Sunny", "//cdn.example/icons/sun.png"),
                test_day("2024-03-12", 22.5, 12.1, 40, "Partly cloudy", "//cdn.example/icons/pc.png"),
                test_day("2024-03-13", 18.0, 9.8, 80, "Light rain", "//cdn.example/icons/rain.png"),
                test_day("2024-03-14", 19.3, 10.0, 60, "Cloudy", "//cdn.example/icons/cloud.png"),
                test_day("2024-03-15", 21.0, 11.5, 5, "Clear", "//cdn.example/icons/clear.png"),
            ]
        }
    })
}

#[tokio::test]
async fn test_fetch_forecast_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client.fetch_forecast(40.4168, -3.7038).await.unwrap();

    assert_eq!(response.location.name, "Madrid");
    assert_eq!(response.forecast.forecast_day.len(), 5);
    assert_eq!(response.forecast.forecast_day[0].date, "2024-03-11");
    assert_eq!(response.forecast.forecast_day[2].day.condition.text, "Light rain");
    assert_eq!(response.forecast.forecast_day[4].day.max_temp_c, 21.0);
}

#[tokio::test]
async fn test_fetch_forecast_sends_expected_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "40.4168,-3.7038"))
        .and(query_param("days", "5"))
        .and(query_param("aqi", "no"))
        .and(query_param("alerts", "no"))
        .and(query_param("lang", "es"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client.fetch_forecast(40.4168, -3.7038).await;

    assert!(response.is_ok());
}

#[tokio::test]
async fn test_non_2xx_status_is_terminal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key has been disabled"))
        .expect(1) // no retry
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_forecast(40.4168, -3.7038).await.unwrap_err();

    match err {
        WeatherError::Status { status } => assert_eq!(status, 403),
        other => panic!("expected Status error, got {:?}", other),
    }
    assert_eq!(err_message(403), "Error HTTP: 403");
}

fn err_message(status: u16) -> String {
    WeatherError::Status { status }.user_message()
}

#[tokio::test]
async fn test_server_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_forecast(40.4168, -3.7038).await.unwrap_err();

    assert!(matches!(err, WeatherError::Status { status: 500 }));
}

#[tokio::test]
async fn test_malformed_body_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_forecast(40.4168, -3.7038).await.unwrap_err();

    assert!(matches!(err, WeatherError::Network(_)));
}
