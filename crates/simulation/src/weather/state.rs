//! Active weather state resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::types::WeatherKind;

/// The currently active weather state.
///
/// Selects which particle systems run each tick and which backdrop color is
/// painted. Written only by [`super::apply_weather_changes`]; everything else
/// reads it.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherState {
    pub current: WeatherKind,
}

impl WeatherState {
    pub fn new(initial: WeatherKind) -> Self {
        Self { current: initial }
    }

    pub fn is(&self, kind: WeatherKind) -> bool {
        self.current == kind
    }
}
