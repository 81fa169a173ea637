//! Last-known pointer position in surface coordinates.

use bevy::prelude::*;

use crate::events::{PointerLeft, PointerMoved};

/// Sentinel coordinate meaning "no pointer on the surface". Far enough away
/// that every interaction-radius test fails; consumers treat it as
/// infinitely distant rather than special-casing it.
pub const OFF_SURFACE: Vec2 = Vec2::new(-1000.0, -1000.0);

/// Latest observed pointer coordinate, or [`OFF_SURFACE`] when the pointer
/// has never entered or has left the surface.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PointerState {
    position: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: OFF_SURFACE,
        }
    }
}

impl PointerState {
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

/// Applies pending pointer events. A leave event in the same frame as move
/// events wins, matching the listener semantics of the original surface.
pub fn apply_pointer_events(
    mut moved: EventReader<PointerMoved>,
    mut left: EventReader<PointerLeft>,
    mut pointer: ResMut<PointerState>,
) {
    for event in moved.read() {
        pointer.position = Vec2::new(event.x, event.y);
    }
    if !left.is_empty() {
        left.clear();
        pointer.position = OFF_SURFACE;
    }
}
