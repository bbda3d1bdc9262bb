//! Display locale data: weekday vocabulary, date format and the condition
//! translation table. Both are plain injected data so other locales or
//! vocabularies can be swapped in without touching the normalizer.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Target display locale for the normalized cards.
#[derive(Debug, Clone)]
pub struct Locale {
    /// Weekday names in the locale's native casing, Monday first
    weekday_names: [String; 7],
    /// chrono format string for the numeric date
    date_format: String,
    /// Label substituted for the first card's weekday when it is today
    today_marker: String,
}

impl Locale {
    pub fn new(
        weekday_names: [String; 7],
        date_format: impl Into<String>,
        today_marker: impl Into<String>,
    ) -> Self {
        Self {
            weekday_names,
            date_format: date_format.into(),
            today_marker: today_marker.into(),
        }
    }

    /// Spanish display locale, day/month/year numeric dates.
    pub fn spanish() -> Self {
        Self::new(
            [
                "lunes".to_string(),
                "martes".to_string(),
                "miércoles".to_string(),
                "jueves".to_string(),
                "viernes".to_string(),
                "sábado".to_string(),
                "domingo".to_string(),
            ],
            "%d/%m/%Y",
            "Hoy",
        )
    }

    /// Render the date in the locale's numeric format.
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    /// Weekday name for the civil date, first character capitalized.
    ///
    /// Spanish weekday names are lowercase by default; the upstream app
    /// uppercased the first letter for display.
    pub fn weekday_label(&self, date: NaiveDate) -> String {
        let name = &self.weekday_names[date.weekday().num_days_from_monday() as usize];
        capitalize_first(name)
    }

    pub fn today_marker(&self) -> &str {
        &self.today_marker
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::spanish()
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Condition-text translation table.
///
/// Total by construction: texts without an entry pass through verbatim.
#[derive(Debug, Clone)]
pub struct ConditionTranslations {
    entries: HashMap<String, String>,
}

impl ConditionTranslations {
    /// Table with no entries; every text passes through unchanged.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, text: impl Into<String>, translation: impl Into<String>) {
        self.entries.insert(text.into(), translation.into());
    }

    /// Translate an upstream condition text, falling back to the original.
    pub fn translate<'a>(&'a self, text: &'a str) -> &'a str {
        self.entries.get(text).map(String::as_str).unwrap_or(text)
    }
}

impl Default for ConditionTranslations {
    /// Built-in English → Spanish vocabulary for the WeatherAPI condition
    /// texts the app encounters most often.
    fn default() -> Self {
        Self::from_pairs([
            ("Sunny", "Soleado"),
            ("Clear", "Despejado"),
            ("Partly cloudy", "Parcialmente nublado"),
            ("Cloudy", "Nublado"),
            ("Overcast", "Cubierto"),
            ("Mist", "Neblina"),
            ("Patchy rain possible", "Posibilidad de lluvia"),
            ("Light rain", "Lluvia ligera"),
            ("Moderate rain", "Lluvia moderada"),
            ("Heavy rain", "Lluvia fuerte"),
        ])
    }
}
