//! Text renderer for the normalized forecast cards.

use pronostico_weather::DailyCard;

/// Render the forecast as a header plus one text card per day, in the
/// order the cards arrive.
pub fn render_forecast(location_name: &str, cards: &[DailyCard]) -> String {
    let days = if cards.len() == 1 { "día" } else { "días" };
    let mut output = format!(
        "Pronóstico {} {} - {}\n\n",
        cards.len(),
        days,
        location_name
    );

    for card in cards {
        output.push_str(&format!(
            "{} ({})\n  {}\n  {}\n  🌡️ {}°C / {}°C\n  🌧️ Probabilidad de lluvia: {}%\n\n",
            card.day_label,
            card.formatted_date,
            card.condition,
            card.icon_url,
            card.max_temp_c,
            card.min_temp_c,
            card.rain_chance
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(day_label: &str, date: &str, condition: &str) -> DailyCard {
        DailyCard {
            formatted_date: date.to_string(),
            day_label: day_label.to_string(),
            max_temp_c: 25.0,
            min_temp_c: 14.0,
            rain_chance: 10,
            condition: condition.to_string(),
            icon_url: "https://cdn.example/icons/sun.png".to_string(),
        }
    }

    #[test]
    fn test_header_singular_day() {
        let cards = vec![card("Hoy", "11/03/2024", "Soleado")];
        let output = render_forecast("Madrid", &cards);
        assert!(output.starts_with("Pronóstico 1 día - Madrid\n"));
    }

    #[test]
    fn test_header_plural_days() {
        let cards = vec![
            card("Hoy", "11/03/2024", "Soleado"),
            card("Martes", "12/03/2024", "Nublado"),
            card("Miércoles", "13/03/2024", "Neblina"),
            card("Jueves", "14/03/2024", "Cubierto"),
            card("Viernes", "15/03/2024", "Despejado"),
        ];
        let output = render_forecast("Madrid", &cards);
        assert!(output.starts_with("Pronóstico 5 días - Madrid\n"));
    }

    #[test]
    fn test_cards_render_in_order() {
        let cards = vec![
            card("Hoy", "11/03/2024", "Soleado"),
            card("Martes", "12/03/2024", "Nublado"),
        ];
        let output = render_forecast("Madrid", &cards);

        let first = output.find("Hoy (11/03/2024)").unwrap();
        let second = output.find("Martes (12/03/2024)").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_card_fields_present() {
        let cards = vec![card("Hoy", "11/03/2024", "Soleado")];
        let output = render_forecast("Madrid", &cards);

        assert!(output.contains("Soleado"));
        assert!(output.contains("https://cdn.example/icons/sun.png"));
        assert!(output.contains("25°C / 14°C"));
        assert!(output.contains("Probabilidad de lluvia: 10%"));
    }
}
