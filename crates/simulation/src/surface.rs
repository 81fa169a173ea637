//! Drawing-surface dimensions shared by spawn bounds and bounds checks.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::events::SurfaceResized;

/// Logical size of the drawing surface, mirroring the primary window.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Applies resize events. In-flight particles keep positions computed from
/// the old bounds and self-correct on their next reset, since resets always
/// read the current size.
pub fn apply_surface_resize(
    mut events: EventReader<SurfaceResized>,
    mut surface: ResMut<SurfaceSize>,
) {
    for event in events.read() {
        surface.width = event.width;
        surface.height = event.height;
    }
}
