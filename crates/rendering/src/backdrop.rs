//! Per-state backdrop paint.

use bevy::prelude::*;

use simulation::weather::WeatherState;

/// Paints the full surface in the active state's backdrop color each frame
/// by driving the camera clear color.
pub fn update_backdrop(weather: Res<WeatherState>, mut clear: ResMut<ClearColor>) {
    let [r, g, b] = weather.current.background_color();
    clear.0 = Color::srgb(r, g, b);
}
