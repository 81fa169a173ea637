//! Weather state kinds and their presentation attributes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four weather states the backdrop cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherKind {
    #[default]
    Rain,
    Forest,
    Winter,
    Fire,
}

impl WeatherKind {
    /// All states, in toggle order.
    pub const ALL: [WeatherKind; 4] = [
        WeatherKind::Rain,
        WeatherKind::Forest,
        WeatherKind::Winter,
        WeatherKind::Fire,
    ];

    /// Stable lowercase name, also the accepted `FromStr` spelling.
    pub fn name(self) -> &'static str {
        match self {
            WeatherKind::Rain => "rain",
            WeatherKind::Forest => "forest",
            WeatherKind::Winter => "winter",
            WeatherKind::Fire => "fire",
        }
    }

    /// Toggle-button glyph.
    pub fn icon(self) -> &'static str {
        match self {
            WeatherKind::Rain => "🌧️",
            WeatherKind::Forest => "🌲",
            WeatherKind::Winter => "❄️",
            WeatherKind::Fire => "🔥",
        }
    }

    /// Cyclic successor; the toggle button walks this order forever.
    pub fn next(self) -> WeatherKind {
        match self {
            WeatherKind::Rain => WeatherKind::Forest,
            WeatherKind::Forest => WeatherKind::Winter,
            WeatherKind::Winter => WeatherKind::Fire,
            WeatherKind::Fire => WeatherKind::Rain,
        }
    }

    /// Full-surface backdrop color painted before particles each frame.
    pub fn background_color(self) -> [f32; 3] {
        match self {
            WeatherKind::Rain => [0.0, 0.0, 0.0],
            WeatherKind::Forest => [0.106, 0.184, 0.122],
            WeatherKind::Winter => [0.094, 0.141, 0.188],
            WeatherKind::Fire => [0.122, 0.055, 0.039],
        }
    }

    /// Accent color handed to the theme sink for hover/highlight styling.
    pub fn accent_color(self) -> [f32; 3] {
        match self {
            WeatherKind::Rain => [0.090, 0.090, 0.090],
            WeatherKind::Forest => [0.361, 0.722, 0.361],
            WeatherKind::Winter => [0.0, 0.357, 0.588],
            WeatherKind::Fire => [1.0, 0.271, 0.0],
        }
    }

    /// Translucent panel tint handed to the theme sink.
    pub fn panel_color(self) -> [f32; 4] {
        match self {
            WeatherKind::Rain => [0.118, 0.118, 0.118, 0.88],
            WeatherKind::Forest => [0.137, 0.216, 0.137, 0.90],
            WeatherKind::Winter => [0.157, 0.235, 0.314, 0.90],
            WeatherKind::Fire => [0.235, 0.098, 0.039, 0.92],
        }
    }
}

impl fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeatherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rain" => Ok(WeatherKind::Rain),
            "forest" => Ok(WeatherKind::Forest),
            "winter" => Ok(WeatherKind::Winter),
            "fire" => Ok(WeatherKind::Fire),
            other => Err(format!(
                "unknown weather state '{other}' (expected rain, forest, winter, or fire)"
            )),
        }
    }
}
