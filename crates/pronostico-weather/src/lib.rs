//! Forecast domain for Pronostico
//!
//! Fetches a multi-day forecast from WeatherAPI.com and normalizes it into
//! display-ready, Spanish-localized daily cards.

pub mod error;
pub mod locale;
pub mod location;
pub mod normalize;
pub mod provider;
pub mod types;

pub use error::{LocationError, NormalizeError, WeatherError};
pub use locale::{ConditionTranslations, Locale};
pub use location::{Permission, Position};
pub use normalize::normalize_forecast;
pub use provider::ForecastClient;
pub use types::*;
