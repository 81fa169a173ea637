//! Capacity and removal invariants, held across arbitrarily many ticks.

use crate::fire::{AMBIENT_CAPACITY, BURST_CAPACITY};
use crate::forest::LEAF_CAPACITY;
use crate::rain::{DROP_CAPACITY, SPLASH_CAPACITY};
use crate::test_harness::TestBackdrop;
use crate::weather::WeatherKind;
use crate::winter::FLAKE_CAPACITY;

#[test]
fn test_rain_pools_never_exceed_capacity() {
    let mut backdrop = TestBackdrop::new().with_weather(WeatherKind::Rain);
    // Keep the pointer mid-surface so mid-air splashes fire continuously.
    backdrop.move_pointer(400.0, 300.0);
    for _ in 0..500 {
        backdrop.tick(1);
        assert!(backdrop.rain().drops.len() <= DROP_CAPACITY);
        assert!(backdrop.rain().splashes.len() <= SPLASH_CAPACITY);
    }
    assert_eq!(backdrop.rain().drops.len(), DROP_CAPACITY);
}

#[test]
fn test_forest_pool_never_exceeds_capacity() {
    let mut backdrop = TestBackdrop::new().with_weather(WeatherKind::Forest);
    backdrop.move_pointer(400.0, 300.0);
    for _ in 0..500 {
        backdrop.tick(1);
        assert!(backdrop.forest().leaves.len() <= LEAF_CAPACITY);
    }
    assert_eq!(backdrop.forest().leaves.len(), LEAF_CAPACITY);
}

#[test]
fn test_winter_pool_never_exceeds_capacity() {
    let mut backdrop = TestBackdrop::new().with_weather(WeatherKind::Winter);
    backdrop.move_pointer(400.0, 300.0);
    for _ in 0..500 {
        backdrop.tick(1);
        assert!(backdrop.winter().flakes.len() <= FLAKE_CAPACITY);
    }
    assert_eq!(backdrop.winter().flakes.len(), FLAKE_CAPACITY);
}

#[test]
fn test_fire_pools_never_exceed_capacity() {
    let mut backdrop = TestBackdrop::new().with_weather(WeatherKind::Fire);
    for i in 0..500 {
        // A click every other tick tries to overfill the burst pool.
        if i % 2 == 0 {
            backdrop.burst(400.0, 300.0);
        }
        backdrop.tick(1);
        assert!(backdrop.fire().ambient.len() <= AMBIENT_CAPACITY);
        assert!(backdrop.fire().burst.len() <= BURST_CAPACITY);
    }
    assert_eq!(backdrop.fire().ambient.len(), AMBIENT_CAPACITY);
}

#[test]
fn test_faded_splashes_are_gone_next_tick() {
    let mut backdrop = TestBackdrop::new().with_weather(WeatherKind::Rain);
    backdrop.move_pointer(400.0, 300.0);
    for _ in 0..200 {
        backdrop.tick(1);
        assert!(
            backdrop.rain().splashes.iter().all(|s| s.alpha > 0.0),
            "no fully faded splash may survive a tick"
        );
    }
}

#[test]
fn test_faded_burst_embers_are_gone_next_tick() {
    let mut backdrop = TestBackdrop::new().with_weather(WeatherKind::Fire);
    backdrop.burst(400.0, 300.0);
    for _ in 0..200 {
        backdrop.tick(1);
        assert!(backdrop.fire().burst.iter().all(|e| e.alpha > 0.0));
    }
}

#[test]
fn test_ambient_embers_stay_within_alpha_bounds() {
    // Self-recycling keeps dead embers out of the pool entirely.
    let mut backdrop = TestBackdrop::new().with_weather(WeatherKind::Fire);
    for _ in 0..300 {
        backdrop.tick(1);
        assert!(backdrop.fire().ambient.iter().all(|e| e.alpha > 0.0));
    }
}
