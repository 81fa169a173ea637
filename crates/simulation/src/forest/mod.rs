//! Forest state: leaves drifting down with a sinusoidal wobble, shoved away
//! from the pointer.
//!
//! A shove sets both velocity components along the pointer-to-leaf vector
//! and starts a short cooldown so a leaf skirting the radius edge doesn't
//! jitter. Between shoves the horizontal velocity drains away and the fall
//! speed relaxes back to the leaf's base speed.

pub mod systems;
pub mod types;

pub use systems::{advance_leaf, leaf_out_of_bounds, spawn_leaves, update_leaves};
pub use types::{ForestPools, Leaf, LEAF_CAPACITY, REPEL_RADIUS};

use bevy::prelude::*;

use crate::SimulationSet;

pub struct ForestPlugin;

impl Plugin for ForestPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ForestPools>().add_systems(
            Update,
            (spawn_leaves, update_leaves)
                .chain()
                .in_set(SimulationSet::Particles),
        );
    }
}
