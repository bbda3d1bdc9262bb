use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that overrides the configured WeatherAPI key.
pub const API_KEY_ENV: &str = "PRONOSTICO_API_KEY";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// WeatherAPI settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Fixed coordinates used as the location source
    #[serde(default)]
    pub location: LocationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// WeatherAPI.com API key
    ///
    /// Prefer setting PRONOSTICO_API_KEY in the environment over writing
    /// the key into the config file.
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Forecast horizon in days
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// Response language passed to the API (condition texts)
    #[serde(default = "default_language")]
    pub language: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_key() -> String {
    "YOUR_WEATHERAPI_KEY".to_string()
}

fn default_forecast_days() -> u8 {
    5
}

fn default_language() -> String {
    "es".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl WeatherConfig {
    /// Check if the API key is configured (not a placeholder)
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.api_key.starts_with("YOUR_")
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            forecast_days: default_forecast_days(),
            language: default_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Coordinates the app treats as the device position.
///
/// When both fields are absent the app behaves as if location permission
/// was refused.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            location: LocationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist.
    ///
    /// The PRONOSTICO_API_KEY environment variable, when set, overrides the
    /// key from the file.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;

            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            let config = Self::default();
            config.save()?;
            config
        };

        config.apply_env_override();

        Ok(config)
    }

    /// Replace the configured API key with the PRONOSTICO_API_KEY
    /// environment value when one is set and non-empty.
    pub fn apply_env_override(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                self.weather.api_key = key;
            }
        }
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        if !validation.warnings.is_empty() {
            for warning in &validation.warnings {
                tracing::warn!("Config warning: {}", warning);
            }
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if !self.weather.is_configured() {
            result.add_error(
                "weather.api_key",
                format!("WeatherAPI key not configured - set it in the config file or via {}", API_KEY_ENV),
            );
        }

        if self.weather.forecast_days == 0 {
            result.add_error("weather.forecast_days", "Forecast horizon must be at least 1 day");
        } else if self.weather.forecast_days > 14 {
            result.add_warning(
                "weather.forecast_days",
                "Forecast horizon exceeds the 14 days WeatherAPI serves",
            );
        }

        if self.weather.language.is_empty() {
            result.add_warning("weather.language", "Empty language - API will return English");
        }

        if self.weather.timeout_secs == 0 {
            result.add_error("weather.timeout_secs", "Request timeout must be greater than 0");
        }

        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    result.add_error("location.latitude", "Latitude must be within -90..=90");
                }
                if !(-180.0..=180.0).contains(&lon) {
                    result.add_error("location.longitude", "Longitude must be within -180..=180");
                }
            }
            (None, None) => {
                result.add_warning(
                    "location",
                    "No coordinates configured - the app will report location permission as denied",
                );
            }
            _ => {
                result.add_error("location", "Latitude and longitude must be set together");
            }
        }

        result
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("pronostico");

        Ok(config_dir.join("config.toml"))
    }
}
