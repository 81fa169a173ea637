//! Gizmo drawing of the active state's particles.
//!
//! The simulation works in surface coordinates (top-left origin, y down);
//! gizmos draw in world space (centered origin, y up). [`to_world`] bridges
//! the two using the current surface size.

use std::f32::consts::FRAC_PI_4;

use bevy::prelude::*;

use simulation::fire::FirePools;
use simulation::forest::ForestPools;
use simulation::rain::RainPools;
use simulation::surface::SurfaceSize;
use simulation::weather::{WeatherKind, WeatherState};
use simulation::winter::WinterPools;

fn to_world(x: f32, y: f32, surface: &SurfaceSize) -> Vec2 {
    Vec2::new(x - surface.width * 0.5, surface.height * 0.5 - y)
}

/// Deterministic per-particle hash in `[0, 1)` for visual variation (ember
/// hue and glow), in place of per-draw RNG rolls.
fn jitter_hash(x: f32, y: f32) -> f32 {
    let seed = u64::from(x.to_bits()).wrapping_mul(0x517cc1b727220a95)
        ^ u64::from(y.to_bits()).wrapping_mul(0x6c62272e07bb0142);
    let mixed = seed.wrapping_mul(0x9e3779b97f4a7c15);
    let mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    let mixed = mixed ^ (mixed >> 27);
    (mixed % 1000) as f32 / 1000.0
}

/// Raindrops as vertical strokes, splash flecks as fading dots.
pub fn draw_rain(
    weather: Res<WeatherState>,
    surface: Res<SurfaceSize>,
    pools: Res<RainPools>,
    mut gizmos: Gizmos,
) {
    if !weather.is(WeatherKind::Rain) {
        return;
    }
    let stroke = Color::srgba(1.0, 1.0, 1.0, 0.5);
    for drop in &pools.drops {
        let top = to_world(drop.x, drop.y, &surface);
        let bottom = to_world(drop.x, drop.y + drop.length, &surface);
        gizmos.line_2d(top, bottom, stroke);
    }
    for splash in &pools.splashes {
        if splash.alpha <= 0.0 {
            continue;
        }
        let fill = Color::srgba(1.0, 1.0, 1.0, splash.alpha * 0.3);
        gizmos.circle_2d(to_world(splash.x, splash.y, &surface), 1.5, fill);
    }
}

/// Leaves as rotated ellipses; the wobble phase doubles as the rotation.
pub fn draw_forest(
    weather: Res<WeatherState>,
    surface: Res<SurfaceSize>,
    pools: Res<ForestPools>,
    mut gizmos: Gizmos,
) {
    if !weather.is(WeatherKind::Forest) {
        return;
    }
    // Muted leaf green.
    let fill = Color::srgb(0.482, 0.714, 0.380);
    for leaf in &pools.leaves {
        let isometry = Isometry2d::new(
            to_world(leaf.x, leaf.y, &surface),
            Rot2::radians(-leaf.angle),
        );
        gizmos.ellipse_2d(isometry, Vec2::new(leaf.size, leaf.size * 0.5), fill);
    }
}

/// Snowflakes as small eight-spoke stars; frozen flakes take an icy tint.
pub fn draw_winter(
    weather: Res<WeatherState>,
    surface: Res<SurfaceSize>,
    pools: Res<WinterPools>,
    mut gizmos: Gizmos,
) {
    if !weather.is(WeatherKind::Winter) {
        return;
    }
    for flake in &pools.flakes {
        let color = if flake.frozen {
            Color::srgba(0.784, 0.863, 1.0, 0.9)
        } else {
            Color::srgba(1.0, 1.0, 1.0, 0.8)
        };
        let center = to_world(flake.x, flake.y, &surface);
        for spoke in 0..4 {
            let dir = Vec2::from_angle(FRAC_PI_4 + spoke as f32 * FRAC_PI_4) * flake.radius;
            gizmos.line_2d(center - dir, center + dir, color);
        }
    }
}

/// Embers as warm translucent dots; burst embers shift hue per particle.
pub fn draw_fire(
    weather: Res<WeatherState>,
    surface: Res<SurfaceSize>,
    pools: Res<FirePools>,
    mut gizmos: Gizmos,
) {
    if !weather.is(WeatherKind::Fire) {
        return;
    }
    for ember in &pools.ambient {
        let green = (50.0 + jitter_hash(ember.x, ember.y) * 80.0) / 255.0;
        let fill = Color::srgba(1.0, green, 0.0, ember.alpha);
        gizmos.circle_2d(to_world(ember.x, ember.y, &surface), ember.radius, fill);
    }
    for ember in &pools.burst {
        if ember.alpha <= 0.0 {
            continue;
        }
        let hue = 20.0 + jitter_hash(ember.x, ember.y) * 30.0;
        let fill = Color::hsla(hue, 1.0, 0.6, ember.alpha);
        gizmos.circle_2d(to_world(ember.x, ember.y, &surface), ember.radius, fill);
    }
}
