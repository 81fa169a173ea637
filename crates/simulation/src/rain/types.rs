//! Rain particle records, pools, and constants.

use bevy::prelude::*;
use rand::Rng;

use crate::sim_rng::SimRng;
use crate::surface::SurfaceSize;

// =============================================================================
// Constants
// =============================================================================

/// Maximum live raindrops.
pub const DROP_CAPACITY: usize = 150;

/// Maximum live splash particles. Drops stop producing flecks at the
/// ceiling rather than growing the pool.
pub const SPLASH_CAPACITY: usize = 300;

/// A drop passing this close to the pointer splashes mid-air.
pub const POINTER_SPLASH_RADIUS: f32 = 30.0;

/// Splash particles spawned by a pointer hit.
pub const POINTER_SPLASH_COUNT: usize = 6;

/// Splash particles spawned by a ground hit.
pub const GROUND_SPLASH_COUNT: usize = 5;

/// Per-tick gravity added to splash vertical velocity.
pub const SPLASH_GRAVITY: f32 = 0.1;

/// Per-tick alpha decay of splash particles.
pub const SPLASH_FADE: f32 = 0.05;

// =============================================================================
// Particles
// =============================================================================

/// A falling raindrop. Splashed drops are reset in place, never removed, so
/// the pool holds a constant population once filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Raindrop {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub speed: f32,
    /// Set when the drop has splashed this tick; a splashed drop is never
    /// drawn and is reset before the tick ends.
    pub splash: bool,
}

impl Raindrop {
    /// New drop from the spawn distribution over the current surface.
    pub fn spawn(rng: &mut SimRng, surface: &SurfaceSize) -> Self {
        let mut drop = Self {
            x: 0.0,
            y: 0.0,
            length: 0.0,
            speed: 0.0,
            splash: false,
        };
        drop.reset(rng, surface);
        drop
    }

    /// Re-randomize in place: back above the surface with fresh attributes.
    pub fn reset(&mut self, rng: &mut SimRng, surface: &SurfaceSize) {
        self.x = rng.0.gen::<f32>() * surface.width;
        self.y = -10.0 - rng.0.gen::<f32>() * surface.height;
        self.length = 10.0 + rng.0.gen::<f32>() * 10.0;
        self.speed = 4.0 + rng.0.gen::<f32>() * 4.0;
        self.splash = false;
    }
}

/// A short-lived splash fleck, removed once fully faded.
#[derive(Debug, Clone, PartialEq)]
pub struct SplashParticle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub alpha: f32,
}

impl SplashParticle {
    pub fn spawn(x: f32, y: f32, rng: &mut SimRng) -> Self {
        Self {
            x,
            y,
            vx: (rng.0.gen::<f32>() - 0.5) * 2.0,
            vy: -rng.0.gen::<f32>() * 2.0,
            alpha: 1.0,
        }
    }
}

// =============================================================================
// Pools
// =============================================================================

/// Pools owned by the rain state.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct RainPools {
    pub drops: Vec<Raindrop>,
    pub splashes: Vec<SplashParticle>,
}

impl RainPools {
    pub fn clear(&mut self) {
        self.drops.clear();
        self.splashes.clear();
    }
}
