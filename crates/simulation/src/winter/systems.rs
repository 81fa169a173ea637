//! Snowfall, freeze/unfreeze, and collision-avoidance systems.

use bevy::prelude::*;

use crate::clock::SimClock;
use crate::pointer::PointerState;
use crate::sim_rng::SimRng;
use crate::surface::SurfaceSize;
use crate::weather::{WeatherKind, WeatherState};

use super::types::{
    Snowflake, WinterPools, BOTTOM_MARGIN, FLAKE_CAPACITY, FREEZE_DURATION_MS, FREEZE_RADIUS,
    NUDGE_FACTOR,
};

// =============================================================================
// Pure helper functions (testable without ECS)
// =============================================================================

/// Position and radius of a frozen flake, snapshotted before the update pass.
pub type FrozenFlake = (f32, f32, f32);

/// Advance one flake a tick.
///
/// Freeze bookkeeping first: a falling flake near the pointer freezes and
/// timestamps the instant; a frozen flake thaws once the freeze duration has
/// elapsed. Only unfrozen flakes move. While moving, overlap with any frozen
/// flake nudges this flake away by [`NUDGE_FACTOR`] of the separation vector
/// — a one-sided heuristic, not a mutual collision response.
pub fn advance_snowflake(
    flake: &mut Snowflake,
    pointer: Vec2,
    now_ms: f64,
    frozen_neighbors: &[FrozenFlake],
) {
    if !flake.frozen && Vec2::new(flake.x, flake.y).distance(pointer) < FREEZE_RADIUS {
        flake.frozen = true;
        flake.frozen_at_ms = now_ms;
    }
    if flake.frozen && now_ms - flake.frozen_at_ms > FREEZE_DURATION_MS {
        flake.frozen = false;
    }
    if flake.frozen {
        return;
    }

    flake.y += flake.speed;
    for &(ox, oy, oradius) in frozen_neighbors {
        let dx = flake.x - ox;
        let dy = flake.y - oy;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < flake.radius + oradius {
            flake.x += dx * NUDGE_FACTOR;
            flake.y += dy * NUDGE_FACTOR;
        }
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Spawns one flake per tick while the pool is below capacity.
pub fn spawn_snowflakes(
    weather: Res<WeatherState>,
    mut rng: ResMut<SimRng>,
    surface: Res<SurfaceSize>,
    mut pools: ResMut<WinterPools>,
) {
    if !weather.is(WeatherKind::Winter) {
        return;
    }
    if pools.flakes.len() < FLAKE_CAPACITY {
        let flake = Snowflake::spawn(&mut rng, &surface);
        pools.flakes.push(flake);
    }
}

/// Advances every flake against a snapshot of the frozen ones, recycling
/// flakes that pass the lower bound.
pub fn update_snowflakes(
    weather: Res<WeatherState>,
    clock: Res<SimClock>,
    mut rng: ResMut<SimRng>,
    pointer: Res<PointerState>,
    surface: Res<SurfaceSize>,
    mut pools: ResMut<WinterPools>,
) {
    if !weather.is(WeatherKind::Winter) {
        return;
    }
    let now_ms = clock.now_ms();
    let pointer = pointer.position();
    let frozen: Vec<FrozenFlake> = pools
        .flakes
        .iter()
        .filter(|f| f.frozen)
        .map(|f| (f.x, f.y, f.radius))
        .collect();
    for flake in pools.flakes.iter_mut() {
        advance_snowflake(flake, pointer, now_ms, &frozen);
        if flake.y > surface.height + BOTTOM_MARGIN {
            flake.reset(&mut rng, &surface);
        }
    }
}
