//! Weather state machine.
//!
//! [`WeatherKind`] enumerates the four states; [`WeatherState`] holds the
//! active one. Transitions arrive as [`crate::events::SetWeather`] events and
//! are hard cuts: all particle pools are discarded, with no cross-fade.

pub mod state;
pub mod systems;
mod tests_types;
pub mod types;

pub use state::WeatherState;
pub use systems::apply_weather_changes;
pub use types::WeatherKind;
