//! 2D camera setup.

use bevy::prelude::*;

/// Spawns the single backdrop camera. World space is centered on the window
/// with y up; the draw systems convert from surface coordinates.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
