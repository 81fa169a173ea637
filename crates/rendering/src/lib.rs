//! Drawing-surface adapter for the simulation core.
//!
//! Owns the 2D camera, paints the per-state backdrop, draws the active
//! state's particles with gizmos, and translates window input (cursor,
//! clicks, resizes) into the core's abstract events. Input adapters run
//! before the simulation's input set; drawing runs after its particle set,
//! so every frame draws the state it just simulated.

use bevy::prelude::*;

pub mod backdrop;
pub mod camera;
pub mod draw;
pub mod input;
pub mod theme;

use simulation::SimulationSet;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClearColor>()
            .init_resource::<input::CursorPresence>()
            .init_resource::<theme::Theme>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    input::sync_initial_surface,
                    theme::init_theme,
                ),
            )
            .add_systems(
                Update,
                (
                    input::emit_pointer_events,
                    input::emit_surface_resized,
                    input::emit_burst_on_click,
                )
                    .before(SimulationSet::Input),
            )
            .add_systems(
                Update,
                (
                    backdrop::update_backdrop,
                    theme::apply_theme_changes,
                    draw::draw_rain,
                    draw::draw_forest,
                    draw::draw_winter,
                    draw::draw_fire,
                )
                    .after(SimulationSet::Particles),
            );
    }
}
