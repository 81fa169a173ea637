//! Rain spawn, fall, splash, and fade systems.

use bevy::prelude::*;

use crate::pointer::PointerState;
use crate::sim_rng::SimRng;
use crate::surface::SurfaceSize;
use crate::weather::{WeatherKind, WeatherState};

use super::types::{
    RainPools, Raindrop, SplashParticle, DROP_CAPACITY, GROUND_SPLASH_COUNT,
    POINTER_SPLASH_COUNT, POINTER_SPLASH_RADIUS, SPLASH_CAPACITY, SPLASH_FADE, SPLASH_GRAVITY,
};

// =============================================================================
// Pure helper functions (testable without ECS)
// =============================================================================

/// Where a drop splashed this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplashSite {
    /// Mid-air pointer hit, at the drop's current position.
    Pointer { x: f32, y: f32 },
    /// Ground contact, pinned just above the lower edge.
    Ground { x: f32, y: f32 },
}

impl SplashSite {
    /// Spawn point and batch size for this site.
    pub fn batch(self) -> (f32, f32, usize) {
        match self {
            SplashSite::Pointer { x, y } => (x, y, POINTER_SPLASH_COUNT),
            SplashSite::Ground { x, y } => (x, y, GROUND_SPLASH_COUNT),
        }
    }
}

/// Advance one drop a tick: fall, then test the two splash triggers (pointer
/// proximity first, then the lower edge). Returns the splash site if the
/// drop splashed; the caller spawns the batch and resets the drop.
pub fn advance_raindrop(
    drop: &mut Raindrop,
    pointer: Vec2,
    surface: &SurfaceSize,
) -> Option<SplashSite> {
    drop.y += drop.speed;

    if !drop.splash && Vec2::new(drop.x, drop.y).distance(pointer) < POINTER_SPLASH_RADIUS {
        drop.splash = true;
        return Some(SplashSite::Pointer {
            x: drop.x,
            y: drop.y,
        });
    }
    if !drop.splash && drop.y > surface.height - 5.0 {
        drop.splash = true;
        return Some(SplashSite::Ground {
            x: drop.x,
            y: surface.height - 2.0,
        });
    }
    None
}

/// Advance one splash fleck a tick: ballistic step plus fade.
pub fn advance_splash(splash: &mut SplashParticle) {
    splash.x += splash.vx;
    splash.y += splash.vy;
    splash.vy += SPLASH_GRAVITY;
    splash.alpha -= SPLASH_FADE;
}

// =============================================================================
// Systems
// =============================================================================

/// Spawns one drop per tick while the pool is below capacity.
pub fn spawn_raindrops(
    weather: Res<WeatherState>,
    mut rng: ResMut<SimRng>,
    surface: Res<SurfaceSize>,
    mut pools: ResMut<RainPools>,
) {
    if !weather.is(WeatherKind::Rain) {
        return;
    }
    if pools.drops.len() < DROP_CAPACITY {
        let drop = Raindrop::spawn(&mut rng, &surface);
        pools.drops.push(drop);
    }
}

/// Falls every drop, spawns splash batches at hit sites, and resets splashed
/// drops in place the same tick.
pub fn update_raindrops(
    weather: Res<WeatherState>,
    mut rng: ResMut<SimRng>,
    pointer: Res<PointerState>,
    surface: Res<SurfaceSize>,
    mut pools: ResMut<RainPools>,
) {
    if !weather.is(WeatherKind::Rain) {
        return;
    }
    let pointer = pointer.position();
    let RainPools { drops, splashes } = &mut *pools;
    for drop in drops.iter_mut() {
        if let Some(site) = advance_raindrop(drop, pointer, &surface) {
            let (x, y, count) = site.batch();
            for _ in 0..count {
                if splashes.len() >= SPLASH_CAPACITY {
                    break;
                }
                splashes.push(SplashParticle::spawn(x, y, &mut rng));
            }
            drop.reset(&mut rng, &surface);
        }
    }
}

/// Advances splash flecks and removes fully faded ones.
pub fn update_splashes(weather: Res<WeatherState>, mut pools: ResMut<RainPools>) {
    if !weather.is(WeatherKind::Rain) {
        return;
    }
    for splash in pools.splashes.iter_mut() {
        advance_splash(splash);
    }
    pools.splashes.retain(|s| s.alpha > 0.0);
}
