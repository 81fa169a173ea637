//! Rain state: falling drops that splash on the pointer or the ground.
//!
//! Drops are pooled and recycled in place after splashing; splash flecks are
//! short-lived and removed once faded. A drop splashes at most once per
//! fall: the pointer trigger and the ground trigger both set the same
//! `splash` flag, and a splashed drop is reset before the tick ends.

pub mod systems;
pub mod types;

pub use systems::{
    advance_raindrop, advance_splash, spawn_raindrops, update_raindrops, update_splashes,
    SplashSite,
};
pub use types::{RainPools, Raindrop, SplashParticle, DROP_CAPACITY, SPLASH_CAPACITY};

use bevy::prelude::*;

use crate::SimulationSet;

pub struct RainPlugin;

impl Plugin for RainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RainPools>().add_systems(
            Update,
            (spawn_raindrops, update_raindrops, update_splashes)
                .chain()
                .in_set(SimulationSet::Particles),
        );
    }
}
