//! Theme sink: per-state accent and panel colors for styling outside the
//! simulation core.

use bevy::prelude::*;

use simulation::events::WeatherChanged;
use simulation::weather::{WeatherKind, WeatherState};

/// Colors derived from the active weather state, consumed by the UI.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Theme {
    pub accent: Color,
    pub panel: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_kind(WeatherKind::default())
    }
}

impl Theme {
    pub fn for_kind(kind: WeatherKind) -> Self {
        let [r, g, b] = kind.accent_color();
        let [pr, pg, pb, pa] = kind.panel_color();
        Self {
            accent: Color::srgb(r, g, b),
            panel: Color::srgba(pr, pg, pb, pa),
        }
    }
}

/// Aligns the theme with a non-default initial state before the first frame.
pub fn init_theme(weather: Res<WeatherState>, mut theme: ResMut<Theme>) {
    *theme = Theme::for_kind(weather.current);
}

/// Applies transition notifications to the theme.
pub fn apply_theme_changes(mut changes: EventReader<WeatherChanged>, mut theme: ResMut<Theme>) {
    for change in changes.read() {
        *theme = Theme::for_kind(change.new);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_state_has_a_distinct_accent() {
        for a in WeatherKind::ALL {
            for b in WeatherKind::ALL {
                if a != b {
                    assert_ne!(Theme::for_kind(a).accent, Theme::for_kind(b).accent);
                }
            }
        }
    }

    #[test]
    fn test_default_theme_matches_default_state() {
        assert_eq!(Theme::default(), Theme::for_kind(WeatherKind::Rain));
    }
}
