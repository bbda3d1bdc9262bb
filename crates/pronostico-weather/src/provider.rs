//! WeatherAPI.com client.

use std::time::Duration;

use reqwest::Client;
use tracing::instrument;

use crate::error::WeatherError;
use crate::types::ForecastResponse;

const WEATHER_API_BASE: &str = "https://api.weatherapi.com/v1";

/// HTTP client for the WeatherAPI.com forecast endpoint.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    api_key: String,
    base_url: String,
    forecast_days: u8,
    language: String,
}

impl ForecastClient {
    pub fn new(
        api_key: &str,
        forecast_days: u8,
        language: &str,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: WEATHER_API_BASE.to_string(),
            forecast_days,
            language: language.to_string(),
        })
    }

    /// Client pointed at an alternative base URL, for tests against a mock
    /// server.
    pub fn new_with_base_url(
        api_key: &str,
        forecast_days: u8,
        language: &str,
        timeout: Duration,
        base_url: &str,
    ) -> Result<Self, WeatherError> {
        let mut client = Self::new(api_key, forecast_days, language, timeout)?;
        client.base_url = base_url.to_string();
        Ok(client)
    }

    /// Fetch the multi-day forecast for the given coordinates.
    ///
    /// One best-effort request: non-2xx statuses and transport failures are
    /// terminal for the fetch, with no retry.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherError> {
        let url = format!("{}/forecast.json", self.base_url);
        let coordinates = format!("{},{}", latitude, longitude);
        let days = self.forecast_days.to_string();

        tracing::info!(
            "Fetching {}-day forecast for {:.4}, {:.4}",
            self.forecast_days,
            latitude,
            longitude
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", coordinates.as_str()),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
                ("lang", self.language.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Weather API returned HTTP {}", status);
            return Err(WeatherError::Status {
                status: status.as_u16(),
            });
        }

        let forecast = response.json::<ForecastResponse>().await?;
        Ok(forecast)
    }
}
