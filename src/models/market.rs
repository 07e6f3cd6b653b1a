use super::error::AppError;
use serde::Deserialize;

/// Crops the market card can quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Crop {
    #[default]
    Wheat,
    Rice,
    Onion,
    Tomato,
}

impl Crop {
    /// Returns the value sent as the `crop` query parameter.
    pub fn value(&self) -> &'static str {
        match self {
            Crop::Wheat => "wheat",
            Crop::Rice => "rice",
            Crop::Onion => "onion",
            Crop::Tomato => "tomato",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Rice => "Rice",
            Crop::Onion => "Onion",
            Crop::Tomato => "Tomato",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Crop::Wheat => "🌾",
            Crop::Rice => "🍚",
            Crop::Onion => "🧅",
            Crop::Tomato => "🍅",
        }
    }

    /// All selectable crops, in selector order.
    pub fn all() -> &'static [Crop] {
        &[Crop::Wheat, Crop::Rice, Crop::Onion, Crop::Tomato]
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

impl std::str::FromStr for Crop {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wheat" => Ok(Crop::Wheat),
            "rice" => Ok(Crop::Rice),
            "onion" => Ok(Crop::Onion),
            "tomato" => Ok(Crop::Tomato),
            _ => Err(AppError::DataError(format!("Unknown crop: {s}"))),
        }
    }
}

/// A single price observation for a crop.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceQuote {
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub price_rupee_per_quintal: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub market: Option<String>,
}

impl PriceQuote {
    /// Rejects a quote that carries no price, which is how the backend
    /// reports a crop it has no rows for.
    pub fn require_price(self, crop: &str) -> Result<Self, AppError> {
        if self.price_rupee_per_quintal.is_some() {
            Ok(self)
        } else {
            Err(AppError::NotFound(format!("No price data for {crop}")))
        }
    }
}

/// Direction of a predicted price move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    #[serde(other)]
    Flat,
}

impl Trend {
    pub fn icon(&self) -> &'static str {
        match self {
            Trend::Up => "📈",
            Trend::Down => "📉",
            Trend::Flat => "📊",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Trend::Up => "#10b981",
            Trend::Down => "#ef4444",
            Trend::Flat => "#6b7280",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "Upward trend",
            Trend::Down => "Downward trend",
            Trend::Flat => "Steady trend",
        }
    }
}

/// A forecast price with an optional confidence score and trend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub future_in_days: Option<u32>,
    #[serde(default)]
    pub predicted_price: Option<f64>,
    /// Score in `0.0..=1.0`
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub trend: Option<Trend>,
}

impl Prediction {
    pub fn require_price(self, crop: &str) -> Result<Self, AppError> {
        if self.predicted_price.is_some() {
            Ok(self)
        } else {
            Err(AppError::NotFound(format!("No prediction available for {crop}")))
        }
    }

    /// Confidence as a whole percentage, clamped to 0..=100
    pub fn confidence_percent(&self) -> Option<u8> {
        self.confidence
            .map(|c| (c.clamp(0.0, 1.0) * 100.0).round() as u8)
    }
}
