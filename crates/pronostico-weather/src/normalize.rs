//! Forecast normalization: raw API payload → display-ready daily cards.

use chrono::{DateTime, Local, NaiveDate};

use crate::error::NormalizeError;
use crate::locale::{ConditionTranslations, Locale};
use crate::types::{DailyCard, ForecastDay};

/// Scheme prepended to the API's protocol-relative icon references.
const ICON_SCHEME: &str = "https:";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Turn the raw per-day forecast entries into localized display cards.
///
/// Pure function of its inputs: `now` is passed explicitly instead of read
/// from the clock. Output preserves length and order of the input.
///
/// The weekday name is derived from the civil date itself (the upstream app
/// rendered it at UTC midnight), while the "is today" check compares against
/// `now`'s local calendar day. The two references differ on purpose, for
/// parity with upstream behavior.
///
/// Fails with [`NormalizeError::EmptyForecast`] on empty input and
/// [`NormalizeError::MalformedDate`] when a date does not parse; malformed
/// dates are an upstream contract violation and are not papered over.
pub fn normalize_forecast(
    days: &[ForecastDay],
    now: DateTime<Local>,
    locale: &Locale,
    translations: &ConditionTranslations,
) -> Result<Vec<DailyCard>, NormalizeError> {
    if days.is_empty() {
        return Err(NormalizeError::EmptyForecast);
    }

    let today = now.date_naive();

    days.iter()
        .enumerate()
        .map(|(index, entry)| {
            let date = NaiveDate::parse_from_str(&entry.date, DATE_FORMAT).map_err(|source| {
                NormalizeError::MalformedDate {
                    value: entry.date.clone(),
                    source,
                }
            })?;

            let day_label = if index == 0 && date == today {
                locale.today_marker().to_string()
            } else {
                locale.weekday_label(date)
            };

            Ok(DailyCard {
                formatted_date: locale.format_date(date),
                day_label,
                max_temp_c: entry.day.max_temp_c,
                min_temp_c: entry.day.min_temp_c,
                rain_chance: entry.day.rain_chance,
                condition: translations.translate(&entry.day.condition.text).to_string(),
                icon_url: format!("{}{}", ICON_SCHEME, entry.day.condition.icon),
            })
        })
        .collect()
}
