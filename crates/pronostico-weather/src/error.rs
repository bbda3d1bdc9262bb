//! Typed errors for the forecast flow.
//!
//! Every variant maps to a single user-facing message via `user_message()`;
//! the app shows exactly one message and renders nothing else on failure.

use thiserror::Error;

/// Location source errors
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location error: {0}")]
    Other(String),
}

impl LocationError {
    /// User-facing message, in the app's display language.
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::PermissionDenied => "Permiso de ubicación denegado",
            LocationError::ServiceUnavailable => "Servicio de ubicación no disponible",
            LocationError::Other(_) => "No se pudo obtener la ubicación",
        }
    }
}

/// Normalizer errors: upstream data contract violations.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Empty forecast in API response")]
    EmptyForecast,
    #[error("Malformed forecast date {value:?}: {source}")]
    MalformedDate {
        value: String,
        source: chrono::ParseError,
    },
}

impl NormalizeError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NormalizeError::EmptyForecast => "El servicio no devolvió ningún pronóstico",
            NormalizeError::MalformedDate { .. } => "El pronóstico recibido tiene fechas inválidas",
        }
    }
}

/// Forecast flow errors
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather API returned HTTP {status}")]
    Status { status: u16 },
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("Forecast error: {0}")]
    Normalize(#[from] NormalizeError),
}

impl WeatherError {
    /// User-facing message, in the app's display language.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::Network(_) => "Error de red al obtener el pronóstico".to_string(),
            WeatherError::Status { status } => format!("Error HTTP: {}", status),
            WeatherError::Location(e) => e.user_message().to_string(),
            WeatherError::Normalize(e) => e.user_message().to_string(),
        }
    }
}
