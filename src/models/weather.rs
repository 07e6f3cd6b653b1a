use serde::Deserialize;

/// Current conditions for a city, as relayed by the backend.
///
/// The backend passes the weather provider's fields through without
/// validation, so every field may be absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherReading {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub feels_like_c: Option<f64>,
    #[serde(default)]
    pub humidity: Option<u32>,
    #[serde(default)]
    pub condition: Option<String>,
}

impl WeatherReading {
    /// "City, Country" with whichever parts are present
    pub fn location(&self) -> String {
        match (self.city.as_deref(), self.country.as_deref()) {
            (Some(city), Some(country)) => format!("{city}, {country}"),
            (Some(city), None) => city.to_string(),
            (None, Some(country)) => country.to_string(),
            (None, None) => "Unknown location".to_string(),
        }
    }

    pub fn icon(&self) -> &'static str {
        condition_icon(self.condition.as_deref().unwrap_or_default())
    }
}

/// Picks an icon for a free-text condition such as "light rain".
pub fn condition_icon(condition: &str) -> &'static str {
    let condition = condition.to_lowercase();

    if condition.contains("sunny") || condition.contains("clear") {
        "☀️"
    } else if condition.contains("cloud") {
        "☁️"
    } else if condition.contains("rain") {
        "🌧️"
    } else if condition.contains("storm") {
        "⛈️"
    } else if condition.contains("snow") {
        "❄️"
    } else if condition.contains("fog") || condition.contains("mist") {
        "🌫️"
    } else {
        "🌤️"
    }
}

/// Hex colour for a temperature band in °C
pub fn temperature_color(temp_c: f64) -> &'static str {
    if temp_c >= 35.0 {
        "#ef4444" // hot
    } else if temp_c >= 25.0 {
        "#f97316" // warm
    } else if temp_c >= 15.0 {
        "#22c55e" // mild
    } else if temp_c >= 5.0 {
        "#3b82f6" // cool
    } else {
        "#6366f1" // cold
    }
}

pub fn humidity_label(humidity: u32) -> &'static str {
    if humidity > 70 {
        "High humidity"
    } else if humidity > 40 {
        "Moderate"
    } else {
        "Low humidity"
    }
}
