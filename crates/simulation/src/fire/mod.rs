//! Fire state: two ember populations.
//!
//! Ambient embers rise continuously from the lower edge and self-recycle on
//! death, keeping a constant glow. Burst embers exist only in response to
//! click triggers: a small fast batch at the click site, removed outright
//! once faded.

pub mod systems;
pub mod types;

pub use systems::{
    advance_ambient, advance_burst, ambient_dead, spawn_burst_embers, update_ambient_embers,
    update_burst_embers,
};
pub use types::{
    AmbientFireParticle, FirePools, FireParticle, AMBIENT_CAPACITY, BURST_CAPACITY, BURST_COUNT,
};

use bevy::prelude::*;

use crate::SimulationSet;

pub struct FirePlugin;

impl Plugin for FirePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FirePools>().add_systems(
            Update,
            (update_ambient_embers, spawn_burst_embers, update_burst_embers)
                .chain()
                .in_set(SimulationSet::Particles),
        );
    }
}
