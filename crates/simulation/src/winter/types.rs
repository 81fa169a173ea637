//! Winter particle records, pool, and constants.

use bevy::prelude::*;
use rand::Rng;

use crate::sim_rng::SimRng;
use crate::surface::SurfaceSize;

// =============================================================================
// Constants
// =============================================================================

/// Maximum live snowflakes.
pub const FLAKE_CAPACITY: usize = 100;

/// A falling flake passing this close to the pointer freezes in place.
pub const FREEZE_RADIUS: f32 = 25.0;

/// How long a frozen flake stays immobile (simulated milliseconds).
pub const FREEZE_DURATION_MS: f64 = 3000.0;

/// Fraction of the separation vector applied when nudging an unfrozen flake
/// off an overlapping frozen one.
pub const NUDGE_FACTOR: f32 = 0.1;

/// Vertical margin below the surface beyond which a flake recycles.
pub const BOTTOM_MARGIN: f32 = 10.0;

// =============================================================================
// Particles
// =============================================================================

/// A falling snowflake. Freezes near the pointer; recycled in place when it
/// passes the lower bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    pub frozen: bool,
    /// Clock reading at the freeze instant; meaningless while unfrozen.
    pub frozen_at_ms: f64,
}

impl Snowflake {
    /// New flake from the spawn distribution over the current surface.
    pub fn spawn(rng: &mut SimRng, surface: &SurfaceSize) -> Self {
        let mut flake = Self {
            x: 0.0,
            y: 0.0,
            radius: 0.0,
            speed: 0.0,
            frozen: false,
            frozen_at_ms: 0.0,
        };
        flake.reset(rng, surface);
        flake
    }

    /// Re-randomize in place: back above the surface, thawed.
    pub fn reset(&mut self, rng: &mut SimRng, surface: &SurfaceSize) {
        self.x = rng.0.gen::<f32>() * surface.width;
        self.y = -10.0 - rng.0.gen::<f32>() * surface.height;
        self.radius = 2.0 + rng.0.gen::<f32>() * 2.0;
        self.speed = 0.5 + rng.0.gen::<f32>();
        self.frozen = false;
        self.frozen_at_ms = 0.0;
    }
}

// =============================================================================
// Pools
// =============================================================================

/// Pool owned by the winter state.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct WinterPools {
    pub flakes: Vec<Snowflake>,
}

impl WinterPools {
    pub fn clear(&mut self) {
        self.flakes.clear();
    }
}
