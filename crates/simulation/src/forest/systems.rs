//! Leaf drift, pointer repulsion, and recycling systems.

use bevy::prelude::*;

use crate::pointer::PointerState;
use crate::sim_rng::SimRng;
use crate::surface::SurfaceSize;
use crate::weather::{WeatherKind, WeatherState};

use super::types::{
    ForestPools, Leaf, BOTTOM_MARGIN, FALL_RELAX, HORIZONTAL_DRAG, LEAF_CAPACITY,
    REPEL_COOLDOWN_TICKS, REPEL_RADIUS, REPEL_SPEED, SIDE_MARGIN, WOBBLE_AMPLITUDE, WOBBLE_STEP,
};

// =============================================================================
// Pure helper functions (testable without ECS)
// =============================================================================

/// Advance one leaf a tick: wobble drift, pointer repulsion, damping.
///
/// Repulsion shoves the leaf along the normalized pointer-to-leaf vector. A
/// coincident pointer (`d == 0`) has no defined direction, so that frame
/// applies no repulsion. Horizontal velocity always decays and vertical
/// velocity relaxes back down to the base fall speed, never below it.
pub fn advance_leaf(leaf: &mut Leaf, pointer: Vec2) {
    leaf.angle += WOBBLE_STEP;
    leaf.x += leaf.angle.sin() * WOBBLE_AMPLITUDE + leaf.vx;
    leaf.y += leaf.vy;

    let dx = leaf.x - pointer.x;
    let dy = leaf.y - pointer.y;
    let d = (dx * dx + dy * dy).sqrt();

    if d < REPEL_RADIUS && d > 0.0 && leaf.repel_cooldown == 0 {
        leaf.vx = dx / d * REPEL_SPEED;
        leaf.vy = dy / d * REPEL_SPEED;
        leaf.repel_cooldown = REPEL_COOLDOWN_TICKS;
    }

    if leaf.repel_cooldown > 0 {
        leaf.repel_cooldown -= 1;
    }

    leaf.vx *= HORIZONTAL_DRAG;
    leaf.vy = (leaf.vy * FALL_RELAX).max(leaf.speed);
}

/// Out-of-bounds test for recycling: below the surface or past either side
/// margin.
pub fn leaf_out_of_bounds(leaf: &Leaf, surface: &SurfaceSize) -> bool {
    leaf.y > surface.height + BOTTOM_MARGIN
        || leaf.x < -SIDE_MARGIN
        || leaf.x > surface.width + SIDE_MARGIN
}

// =============================================================================
// Systems
// =============================================================================

/// Spawns one leaf per tick while the pool is below capacity.
pub fn spawn_leaves(
    weather: Res<WeatherState>,
    mut rng: ResMut<SimRng>,
    surface: Res<SurfaceSize>,
    mut pools: ResMut<ForestPools>,
) {
    if !weather.is(WeatherKind::Forest) {
        return;
    }
    if pools.leaves.len() < LEAF_CAPACITY {
        let leaf = Leaf::spawn(&mut rng, &surface);
        pools.leaves.push(leaf);
    }
}

/// Drifts every leaf and recycles the ones that left the surface.
pub fn update_leaves(
    weather: Res<WeatherState>,
    mut rng: ResMut<SimRng>,
    pointer: Res<PointerState>,
    surface: Res<SurfaceSize>,
    mut pools: ResMut<ForestPools>,
) {
    if !weather.is(WeatherKind::Forest) {
        return;
    }
    let pointer = pointer.position();
    for leaf in pools.leaves.iter_mut() {
        advance_leaf(leaf, pointer);
        if leaf_out_of_bounds(leaf, &surface) {
            leaf.reset(&mut rng, &surface);
        }
    }
}
