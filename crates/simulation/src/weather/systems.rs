//! Weather state transitions.

use bevy::prelude::*;

use crate::events::{SetWeather, WeatherChanged};
use crate::fire::FirePools;
use crate::forest::ForestPools;
use crate::rain::RainPools;
use crate::winter::WinterPools;

use super::state::WeatherState;

/// Applies pending [`SetWeather`] requests.
///
/// A transition is a hard cut: the new state is set, every pool of every
/// state is cleared (not just the outgoing state's), and [`WeatherChanged`]
/// is emitted for the theme sink and UI. There are no guard conditions; any
/// state is reachable from any other in one step, and re-selecting the
/// active state performs the same reset.
pub fn apply_weather_changes(
    mut requests: EventReader<SetWeather>,
    mut state: ResMut<WeatherState>,
    mut rain: ResMut<RainPools>,
    mut forest: ResMut<ForestPools>,
    mut winter: ResMut<WinterPools>,
    mut fire: ResMut<FirePools>,
    mut changed: EventWriter<WeatherChanged>,
) {
    for request in requests.read() {
        let old = state.current;
        state.current = request.0;

        rain.clear();
        forest.clear();
        winter.clear();
        fire.clear();

        info!("weather: {} -> {}", old, state.current);
        changed.send(WeatherChanged {
            old,
            new: state.current,
        });
    }
}
