/// Upcoming-weather flags for a forecast window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForecastAlerts {
    pub clouds: bool,
    pub rain: bool,
    pub snow: bool,
    pub hurricane: bool,
    pub tornado: bool,
    pub fog: bool,
    pub storm: bool,
}

pub const NO_ALERTS: &str = "No Upcoming Alerts!";

impl ForecastAlerts {
    /// Raise a flag for every condition code that falls in its range.
    ///
    /// Codes follow the OpenWeatherMap condition table.
    pub fn from_condition_codes<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        let mut alerts = Self::default();
        for code in codes {
            match code {
                200..=232 | 901 | 960..=961 => alerts.storm = true,
                300..=321 | 500..=531 => alerts.rain = true,
                600..=622 => alerts.snow = true,
                741 => alerts.fog = true,
                781 | 900 => alerts.tornado = true,
                801..=804 => alerts.clouds = true,
                902 | 962 => alerts.hurricane = true,
                _ => {}
            }
        }
        alerts
    }

    pub fn any(&self) -> bool {
        self.clouds
            || self.rain
            || self.snow
            || self.hurricane
            || self.tornado
            || self.fog
            || self.storm
    }

    /// One display line per raised flag, or a single "no alerts" line.
    pub fn messages(&self) -> Vec<&'static str> {
        let flagged = [
            (self.clouds, "Cloud Alert ⛅"),
            (self.rain, "Rain Alert 🌧️"),
            (self.snow, "Snow Alert ❄️"),
            (self.hurricane, "Hurricane Alert 🌀"),
            (self.tornado, "Tornado Alert 🌪️"),
            (self.fog, "Fog Alert 🌫️"),
            (self.storm, "Storm Alert 🌩️"),
        ];

        let lines: Vec<&'static str> = flagged
            .into_iter()
            .filter_map(|(raised, line)| raised.then_some(line))
            .collect();

        if lines.is_empty() {
            vec![NO_ALERTS]
        } else {
            lines
        }
    }
}
