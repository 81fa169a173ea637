//! Seeded runs must reproduce identical pool states.

use crate::test_harness::TestBackdrop;
use crate::weather::WeatherKind;

fn run_scripted(seed: u64) -> TestBackdrop {
    let mut backdrop = TestBackdrop::new()
        .with_seed(seed)
        .with_weather(WeatherKind::Rain);
    backdrop.move_pointer(400.0, 300.0);
    backdrop.tick(50);
    backdrop.set_weather(WeatherKind::Winter);
    backdrop.tick(50);
    backdrop
}

#[test]
fn test_same_seed_reproduces_identical_pools() {
    let a = run_scripted(2024);
    let b = run_scripted(2024);
    assert_eq!(a.rain(), b.rain());
    assert_eq!(a.winter(), b.winter());
}

#[test]
fn test_different_seeds_diverge() {
    let a = run_scripted(1);
    let b = run_scripted(2);
    assert_ne!(a.winter(), b.winter());
}
