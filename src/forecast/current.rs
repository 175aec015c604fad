use chrono::{DateTime, Utc};

use crate::types::{CurrentConditions, Units};

/// A labeled line of the current-conditions panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionField {
    pub label: &'static str,
    pub value: String,
}

impl ConditionField {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Format an observation for display.
///
/// Values are already in `units`; only rounding and unit suffixes are applied.
pub fn format_current(current: &CurrentConditions, units: Units) -> Vec<ConditionField> {
    let degree = units.degree_letter();
    let visibility = current
        .visibility
        .map(|metres| format!("{}km", metres / 1000.0))
        .unwrap_or_else(|| "n/a".to_string());

    vec![
        ConditionField::new("Temperature", format!("{}°{degree}", whole(current.temperature))),
        ConditionField::new("Feels Like", format!("{}°{degree}", whole(current.feels_like))),
        ConditionField::new("Clouds Coverage", format!("{}%", current.clouds)),
        ConditionField::new(
            "Wind Speed",
            format!("{}{}", current.wind_speed, units.wind_speed_unit()),
        ),
        ConditionField::new("Humidity", format!("{}%", current.humidity)),
        ConditionField::new("Pressure", format!("{}mBar", current.pressure)),
        ConditionField::new("Visibility", visibility),
    ]
}

fn whole(value: f64) -> i64 {
    value.round() as i64
}

/// Sunrise and sunset as UTC date and time.
pub fn format_sun_times(current: &CurrentConditions) -> Vec<ConditionField> {
    vec![
        ConditionField::new("Sunrise", sun_time(current.sunrise)),
        ConditionField::new("Sunset", sun_time(current.sunset)),
    ]
}

fn sun_time(at: DateTime<Utc>) -> String {
    format!("Date: {} -- Time: {}", at.date_naive(), at.time().format("%H:%M:%S"))
}

/// Status text in title case, used as the icon caption.
pub fn status_caption(current: &CurrentConditions) -> String {
    current
        .status
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn observation() -> CurrentConditions {
        CurrentConditions {
            location: "London".to_string(),
            observed_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            status: "light intensity drizzle".to_string(),
            icon: Some("09d".to_string()),
            temperature: 7.6,
            feels_like: 4.4,
            clouds: 90.0,
            wind_speed: 4.1,
            humidity: 81.0,
            pressure: 1012.0,
            visibility: Some(10000.0),
            sunrise: Utc.with_ymd_and_hms(2024, 1, 15, 7, 58, 12).unwrap(),
            sunset: Utc.with_ymd_and_hms(2024, 1, 15, 16, 21, 5).unwrap(),
        }
    }

    #[test]
    fn test_format_current_celsius() {
        let fields = format_current(&observation(), Units::Celsius);
        let rendered: Vec<(&str, &str)> = fields
            .iter()
            .map(|field| (field.label, field.value.as_str()))
            .collect();

        assert_eq!(
            rendered,
            vec![
                ("Temperature", "8°C"),
                ("Feels Like", "4°C"),
                ("Clouds Coverage", "90%"),
                ("Wind Speed", "4.1m/s"),
                ("Humidity", "81%"),
                ("Pressure", "1012mBar"),
                ("Visibility", "10km"),
            ]
        );
    }

    #[test]
    fn test_format_current_fahrenheit() {
        let mut current = observation();
        current.temperature = 45.7;
        current.feels_like = -0.2;
        current.visibility = None;

        let fields = format_current(&current, Units::Fahrenheit);
        assert_eq!(fields[0].value, "46°F");
        assert_eq!(fields[1].value, "0°F");
        assert_eq!(fields[3].value, "4.1mph");
        assert_eq!(fields[6].value, "n/a");
    }

    #[test]
    fn test_sun_times() {
        let fields = format_sun_times(&observation());
        assert_eq!(fields[0].label, "Sunrise");
        assert_eq!(fields[0].value, "Date: 2024-01-15 -- Time: 07:58:12");
        assert_eq!(fields[1].value, "Date: 2024-01-15 -- Time: 16:21:05");
    }

    #[test]
    fn test_status_caption() {
        assert_eq!(status_caption(&observation()), "Light Intensity Drizzle");
    }
}
