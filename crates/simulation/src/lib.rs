//! Core particle simulation for the Nimbus ambient backdrop.
//!
//! Owns the weather state machine, the per-state particle pools, the
//! simulation clock, pointer tracking, and the deterministic RNG. Everything
//! here is headless: windowing, drawing, and UI live in the `rendering` and
//! `ui` crates and talk to this crate exclusively through the events in
//! [`events`] and the resources exported below.
//!
//! Per frame, the [`SimulationSet::Input`] chain applies pending input events
//! and advances the clock, then [`SimulationSet::Particles`] runs each weather
//! module's spawn/update systems. Systems belonging to an inactive state
//! return immediately, so exactly one simulation is live at a time.

use bevy::prelude::*;

pub mod clock;
pub mod events;
pub mod fire;
pub mod forest;
pub mod pointer;
pub mod rain;
pub mod sim_rng;
pub mod surface;
pub mod weather;
pub mod winter;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

/// Ordering labels for the per-tick pipeline.
///
/// `Input` (event application, clock) always completes before `Particles`
/// (spawn/update/recycle), so a state transition observed this tick clears
/// pools before any of them spawn.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Particles,
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<clock::SimClock>()
            .init_resource::<sim_rng::SimRng>()
            .init_resource::<pointer::PointerState>()
            .init_resource::<surface::SurfaceSize>()
            .init_resource::<weather::WeatherState>()
            .add_event::<events::PointerMoved>()
            .add_event::<events::PointerLeft>()
            .add_event::<events::SurfaceResized>()
            .add_event::<events::SetWeather>()
            .add_event::<events::BurstRequested>()
            .add_event::<events::WeatherChanged>()
            .configure_sets(
                Update,
                (SimulationSet::Input, SimulationSet::Particles).chain(),
            )
            .add_systems(
                Update,
                (
                    clock::tick_sim_clock,
                    pointer::apply_pointer_events,
                    surface::apply_surface_resize,
                    weather::apply_weather_changes,
                )
                    .chain()
                    .in_set(SimulationSet::Input),
            );

        app.add_plugins((
            rain::RainPlugin,
            forest::ForestPlugin,
            winter::WinterPlugin,
            fire::FirePlugin,
        ));
    }
}
