//! Ember rise, burst, and fade systems.

use bevy::prelude::*;

use crate::clock::SimClock;
use crate::events::BurstRequested;
use crate::sim_rng::SimRng;
use crate::surface::SurfaceSize;
use crate::weather::{WeatherKind, WeatherState};

use super::types::{
    AmbientFireParticle, FirePools, FireParticle, AMBIENT_CAPACITY, AMBIENT_SPAWN_PER_TICK,
    BURST_CAPACITY, BURST_COUNT, EMBER_FADE, FLICKER_AMPLITUDE, FLICKER_TIME_FREQ, FLICKER_Y_FREQ,
    TOP_MARGIN,
};

// =============================================================================
// Pure helper functions (testable without ECS)
// =============================================================================

/// Advance one ambient ember a tick: drift up and fade.
pub fn advance_ambient(ember: &mut AmbientFireParticle) {
    ember.x += ember.vx;
    ember.y += ember.vy;
    ember.alpha -= EMBER_FADE;
}

/// Death predicate for ambient embers. Dead embers recycle instead of being
/// removed, so the caller resets them from the spawn distribution.
pub fn ambient_dead(ember: &AmbientFireParticle) -> bool {
    ember.alpha <= 0.0 || ember.y < -TOP_MARGIN
}

/// Advance one burst ember a tick: rise with a clock-phased horizontal
/// flicker, and fade.
pub fn advance_burst(ember: &mut FireParticle, now_ms: f64) {
    let phase = now_ms * FLICKER_TIME_FREQ + f64::from(ember.y) * FLICKER_Y_FREQ;
    ember.x += ember.vx + phase.sin() as f32 * FLICKER_AMPLITUDE;
    ember.y += ember.vy;
    ember.alpha -= EMBER_FADE;
}

// =============================================================================
// Systems
// =============================================================================

/// Tops up ambient embers and advances them, recycling dead ones from the
/// lower edge so the ambient density stays constant.
pub fn update_ambient_embers(
    weather: Res<WeatherState>,
    mut rng: ResMut<SimRng>,
    surface: Res<SurfaceSize>,
    mut pools: ResMut<FirePools>,
) {
    if !weather.is(WeatherKind::Fire) {
        return;
    }
    for _ in 0..AMBIENT_SPAWN_PER_TICK {
        if pools.ambient.len() < AMBIENT_CAPACITY {
            let ember = AmbientFireParticle::spawn(&mut rng, &surface);
            pools.ambient.push(ember);
        }
    }
    for ember in pools.ambient.iter_mut() {
        advance_ambient(ember);
        if ambient_dead(ember) {
            ember.reset(&mut rng, &surface);
        }
    }
}

/// Spawns a burst batch per request at the click site. Requests that arrive
/// while another state is active drain unacted.
pub fn spawn_burst_embers(
    mut requests: EventReader<BurstRequested>,
    weather: Res<WeatherState>,
    mut rng: ResMut<SimRng>,
    mut pools: ResMut<FirePools>,
) {
    for request in requests.read() {
        if !weather.is(WeatherKind::Fire) {
            continue;
        }
        for _ in 0..BURST_COUNT {
            if pools.burst.len() >= BURST_CAPACITY {
                break;
            }
            let ember = FireParticle::spawn(request.x, request.y, &mut rng);
            pools.burst.push(ember);
        }
    }
}

/// Advances burst embers and removes fully faded ones.
pub fn update_burst_embers(
    weather: Res<WeatherState>,
    clock: Res<SimClock>,
    mut pools: ResMut<FirePools>,
) {
    if !weather.is(WeatherKind::Fire) {
        return;
    }
    let now_ms = clock.now_ms();
    for ember in pools.burst.iter_mut() {
        advance_burst(ember, now_ms);
    }
    pools.burst.retain(|e| e.alpha > 0.0);
}
