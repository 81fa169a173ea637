//! Forest particle records, pool, and constants.

use bevy::prelude::*;
use rand::Rng;

use crate::sim_rng::SimRng;
use crate::surface::SurfaceSize;

// =============================================================================
// Constants
// =============================================================================

/// Maximum live leaves.
pub const LEAF_CAPACITY: usize = 70;

/// Pointer repulsion radius.
pub const REPEL_RADIUS: f32 = 40.0;

/// Speed of the shove applied along the pointer-to-leaf vector.
pub const REPEL_SPEED: f32 = 6.0;

/// Ticks before a shoved leaf can be shoved again. Without it a leaf
/// hovering at the radius edge re-triggers every tick and jitters.
pub const REPEL_COOLDOWN_TICKS: u32 = 10;

/// Wobble phase advance per tick (radians).
pub const WOBBLE_STEP: f32 = 0.01;

/// Horizontal wobble amplitude per tick.
pub const WOBBLE_AMPLITUDE: f32 = 0.5;

/// Per-tick decay of shove-induced horizontal velocity.
pub const HORIZONTAL_DRAG: f32 = 0.9;

/// Per-tick relaxation of vertical velocity back toward the base fall speed.
pub const FALL_RELAX: f32 = 0.95;

/// Horizontal margin beyond which a leaf recycles.
pub const SIDE_MARGIN: f32 = 50.0;

/// Vertical margin below the surface beyond which a leaf recycles.
pub const BOTTOM_MARGIN: f32 = 10.0;

// =============================================================================
// Particles
// =============================================================================

/// A drifting leaf. Recycled in place when it drifts out of bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Wobble phase; doubles as the drawn rotation.
    pub angle: f32,
    /// Base fall speed; the floor `vy` relaxes back to.
    pub speed: f32,
    pub vx: f32,
    pub vy: f32,
    pub repel_cooldown: u32,
}

impl Leaf {
    /// New leaf from the spawn distribution over the current surface.
    pub fn spawn(rng: &mut SimRng, surface: &SurfaceSize) -> Self {
        let mut leaf = Self {
            x: 0.0,
            y: 0.0,
            size: 0.0,
            angle: 0.0,
            speed: 0.0,
            vx: 0.0,
            vy: 0.0,
            repel_cooldown: 0,
        };
        leaf.reset(rng, surface);
        leaf
    }

    /// Re-randomize in place: back above the surface with fresh attributes.
    pub fn reset(&mut self, rng: &mut SimRng, surface: &SurfaceSize) {
        self.x = rng.0.gen::<f32>() * surface.width;
        self.y = -10.0 - rng.0.gen::<f32>() * surface.height;
        self.size = 8.0 + rng.0.gen::<f32>() * 6.0;
        self.speed = 2.0 + rng.0.gen::<f32>() * 1.5;
        self.angle = rng.0.gen::<f32>() * std::f32::consts::TAU;
        self.vx = 0.0;
        self.vy = self.speed;
        self.repel_cooldown = 0;
    }
}

// =============================================================================
// Pools
// =============================================================================

/// Pool owned by the forest state.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ForestPools {
    pub leaves: Vec<Leaf>,
}

impl ForestPools {
    pub fn clear(&mut self) {
        self.leaves.clear();
    }
}
