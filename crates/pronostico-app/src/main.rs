//! Pronostico: fetch the 5-day forecast for the configured location and
//! print it as a row of cards. One fetch per run; on failure a single
//! message replaces the whole output.

use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use pronostico_core::Config;
use pronostico_weather::{
    location, normalize_forecast, ConditionTranslations, ForecastClient, Locale, LocationError,
    Permission, Position, WeatherError,
};

mod render;

#[tokio::main]
async fn main() -> Result<()> {
    pronostico_core::init()?;

    let (config, _validation) = Config::load_validated()?;

    match run(&config).await {
        Ok(screen) => println!("{}", screen),
        Err(e) => {
            tracing::error!("Forecast run failed: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run(config: &Config) -> Result<String, WeatherError> {
    let configured = match (config.location.latitude, config.location.longitude) {
        (Some(latitude), Some(longitude)) => Some(Position {
            latitude,
            longitude,
        }),
        _ => None,
    };

    if location::request_permission(configured).await == Permission::Denied {
        return Err(LocationError::PermissionDenied.into());
    }
    let position = location::current_position(configured).await?;

    let client = ForecastClient::new(
        &config.weather.api_key,
        config.weather.forecast_days,
        &config.weather.language,
        Duration::from_secs(config.weather.timeout_secs),
    )?;
    let response = client.fetch_forecast(position.latitude, position.longitude).await?;

    let cards = normalize_forecast(
        &response.forecast.forecast_day,
        Local::now(),
        &Locale::spanish(),
        &ConditionTranslations::default(),
    )?;

    Ok(render::render_forecast(&response.location.name, &cards))
}
