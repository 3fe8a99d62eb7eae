//! Condition taxonomy for the weather display.
//!
//! Upstream condition text is free-form ("Patchy light drizzle",
//! "Partly cloudy"). The display reduces it to a fixed set of
//! simplified conditions, each with a label and a glyph.

use std::fmt;

/// Simplified weather condition shown in the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Snowy,
    Windy,
    Foggy,
    Drizzly,
    Hail,
    Thunderstorm,
    Tornado,
    Dusty,
    /// No keyword matched
    Unknown,
}

// Checked in order, first match wins. "partly cloudy" must come before
// "cloudy", which is a substring of it.
const KEYWORD_PATTERNS: &[(&str, Condition)] = &[
    ("sunny", Condition::Sunny),
    ("partly cloudy", Condition::PartlyCloudy),
    ("cloudy", Condition::Cloudy),
    ("rain", Condition::Rainy),
    ("snow", Condition::Snowy),
    ("wind", Condition::Windy),
    ("mist", Condition::Foggy),
    ("fog", Condition::Foggy),
    ("drizzle", Condition::Drizzly),
    ("hail", Condition::Hail),
    ("thunderstorm", Condition::Thunderstorm),
    ("tornado", Condition::Tornado),
    ("dust", Condition::Dusty),
];

impl Condition {
    /// Classify free-form condition text into a taxonomy member.
    ///
    /// Matching is case-insensitive substring matching and total: text
    /// matching no keyword classifies as [`Condition::Unknown`].
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        for (keyword, condition) in KEYWORD_PATTERNS {
            if lower.contains(keyword) {
                return *condition;
            }
        }
        Condition::Unknown
    }

    /// Human-readable label, e.g. "Partly Cloudy".
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Snowy => "Snowy",
            Condition::Windy => "Windy",
            Condition::Foggy => "Foggy",
            Condition::Drizzly => "Drizzly",
            Condition::Hail => "Hail",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Tornado => "Tornado",
            Condition::Dusty => "Dusty",
            Condition::Unknown => "Unknown",
        }
    }

    /// Glyph rendered next to the condition.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Condition::Sunny => "☀️",
            Condition::PartlyCloudy => "⛅️",
            Condition::Cloudy => "☁️",
            Condition::Rainy => "🌧️",
            Condition::Snowy => "❄️",
            Condition::Windy => "🌬️",
            Condition::Foggy => "🌁",
            Condition::Drizzly => "🌦️",
            Condition::Hail => "🌨️",
            Condition::Thunderstorm => "⛈️",
            Condition::Tornado => "🌪️",
            Condition::Dusty => "🌫️",
            Condition::Unknown => "🌫️",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
