//! Winter state: snowfall that freezes solid near the pointer.
//!
//! A frozen flake hangs motionless for a fixed duration, then resumes
//! falling. Unfrozen flakes steer around frozen ones with a cheap one-sided
//! nudge instead of a real collision response.

pub mod systems;
mod tests;
pub mod types;

pub use systems::{advance_snowflake, spawn_snowflakes, update_snowflakes, FrozenFlake};
pub use types::{Snowflake, WinterPools, FLAKE_CAPACITY, FREEZE_DURATION_MS, FREEZE_RADIUS};

use bevy::prelude::*;

use crate::SimulationSet;

pub struct WinterPlugin;

impl Plugin for WinterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WinterPools>().add_systems(
            Update,
            (spawn_snowflakes, update_snowflakes)
                .chain()
                .in_set(SimulationSet::Particles),
        );
    }
}
