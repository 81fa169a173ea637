//! Pointer and surface input plumbing.

use bevy::prelude::*;

use crate::pointer::OFF_SURFACE;
use crate::test_harness::TestBackdrop;

#[test]
fn test_pointer_tracks_latest_move() {
    let mut backdrop = TestBackdrop::new();
    assert_eq!(backdrop.pointer(), OFF_SURFACE);

    backdrop.move_pointer(10.0, 20.0);
    backdrop.move_pointer(30.0, 40.0);
    backdrop.tick(1);
    assert_eq!(backdrop.pointer(), Vec2::new(30.0, 40.0));
}

#[test]
fn test_pointer_leave_restores_sentinel() {
    let mut backdrop = TestBackdrop::new();
    backdrop.move_pointer(10.0, 20.0);
    backdrop.tick(1);
    backdrop.pointer_left();
    backdrop.tick(1);
    assert_eq!(backdrop.pointer(), OFF_SURFACE);
}

#[test]
fn test_resize_updates_surface_bounds() {
    let mut backdrop = TestBackdrop::new();
    backdrop.resize(1280.0, 720.0);
    backdrop.tick(1);
    let surface = backdrop.surface();
    assert_eq!((surface.width, surface.height), (1280.0, 720.0));
}

#[test]
fn test_clock_advances_fixed_step_per_tick() {
    let mut backdrop = TestBackdrop::new();
    let before = backdrop.clock_ms();
    backdrop.tick(10);
    assert_eq!(backdrop.clock_ms() - before, 160.0);
}
