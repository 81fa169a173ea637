//! Fire particle records, pools, and constants.

use bevy::prelude::*;
use rand::Rng;

use crate::sim_rng::SimRng;
use crate::surface::SurfaceSize;

// =============================================================================
// Constants
// =============================================================================

/// Maximum live ambient embers.
pub const AMBIENT_CAPACITY: usize = 150;

/// Ambient embers topped up per tick while below capacity.
pub const AMBIENT_SPAWN_PER_TICK: usize = 2;

/// Maximum live burst embers. Click batches truncate at the ceiling.
pub const BURST_CAPACITY: usize = 100;

/// Burst embers spawned per click.
pub const BURST_COUNT: usize = 5;

/// Per-tick alpha decay shared by both ember kinds.
pub const EMBER_FADE: f32 = 0.001;

/// Vertical margin above the surface beyond which an ambient ember recycles.
pub const TOP_MARGIN: f32 = 10.0;

/// Clock frequency of the burst flicker (per simulated millisecond).
pub const FLICKER_TIME_FREQ: f64 = 0.005;

/// Height contribution to the burst flicker phase.
pub const FLICKER_Y_FREQ: f64 = 0.01;

/// Horizontal flicker amplitude per tick.
pub const FLICKER_AMPLITUDE: f32 = 0.1;

// =============================================================================
// Particles
// =============================================================================

/// A continuously rising ember. Self-recycles on death to keep the ambient
/// density constant.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientFireParticle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
    pub vx: f32,
    pub vy: f32,
}

impl AmbientFireParticle {
    /// New ember from the spawn distribution along the lower edge.
    pub fn spawn(rng: &mut SimRng, surface: &SurfaceSize) -> Self {
        let mut ember = Self {
            x: 0.0,
            y: 0.0,
            radius: 0.0,
            alpha: 0.0,
            vx: 0.0,
            vy: 0.0,
        };
        ember.reset(rng, surface);
        ember
    }

    /// Re-randomize in place: back below the lower edge.
    pub fn reset(&mut self, rng: &mut SimRng, surface: &SurfaceSize) {
        self.x = rng.0.gen::<f32>() * surface.width;
        self.y = surface.height + rng.0.gen::<f32>() * 50.0;
        self.radius = 0.5 + rng.0.gen::<f32>() * 1.5;
        self.alpha = 0.2 + rng.0.gen::<f32>() * 0.3;
        self.vx = (rng.0.gen::<f32>() - 0.5) * 0.2;
        self.vy = -0.5 - rng.0.gen::<f32>() * 0.5;
    }
}

/// A click-burst ember: faster, brighter, and removed (not recycled) once
/// fully faded.
#[derive(Debug, Clone, PartialEq)]
pub struct FireParticle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
    pub vx: f32,
    pub vy: f32,
}

impl FireParticle {
    /// New burst ember at the click site.
    pub fn spawn(x: f32, y: f32, rng: &mut SimRng) -> Self {
        Self {
            x,
            y,
            radius: 1.0 + rng.0.gen::<f32>() * 2.0,
            alpha: 1.0,
            vx: (rng.0.gen::<f32>() - 0.5) * 6.0,
            vy: -(2.0 + rng.0.gen::<f32>() * 2.0),
        }
    }
}

// =============================================================================
// Pools
// =============================================================================

/// Pools owned by the fire state.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct FirePools {
    pub ambient: Vec<AmbientFireParticle>,
    pub burst: Vec<FireParticle>,
}

impl FirePools {
    pub fn clear(&mut self) {
        self.ambient.clear();
        self.burst.clear();
    }
}
