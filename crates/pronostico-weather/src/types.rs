use serde::Deserialize;

/// Top-level `forecast.json` response from WeatherAPI.com.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub location: ApiLocation,
    pub forecast: Forecast,
}

/// Resolved place the forecast applies to.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiLocation {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    #[serde(rename = "forecastday")]
    pub forecast_day: Vec<ForecastDay>,
}

/// One calendar day as received from the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    /// Calendar date, `YYYY-MM-DD`, no time zone information
    pub date: String,
    pub day: Day,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Day {
    #[serde(rename = "maxtemp_c")]
    pub max_temp_c: f64,
    #[serde(rename = "mintemp_c")]
    pub min_temp_c: f64,
    #[serde(rename = "daily_chance_of_rain")]
    pub rain_chance: u8,
    pub condition: Condition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    /// Upstream condition vocabulary, e.g. "Sunny", "Light rain"
    pub text: String,
    /// Protocol-relative icon reference, e.g. "//cdn.weatherapi.com/..."
    pub icon: String,
}

/// Display-ready daily forecast card.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCard {
    /// Locale-formatted date, e.g. "11/03/2024"
    pub formatted_date: String,
    /// "Hoy" for the first card when it matches the current date,
    /// otherwise the capitalized weekday name
    pub day_label: String,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub rain_chance: u8,
    /// Translated condition text, falling back to the upstream wording
    pub condition: String,
    /// Icon reference with an explicit https scheme
    pub icon_url: String,
}
