//! Translates window input into the simulation's abstract events.

use bevy::prelude::*;
use bevy::window::WindowResized;

use simulation::events::{BurstRequested, PointerLeft, PointerMoved, SurfaceResized};
use simulation::weather::{WeatherKind, WeatherState};

/// Whether the cursor was on the window last frame, so a leave event fires
/// once per exit instead of every frame the cursor is away.
#[derive(Resource, Default)]
pub struct CursorPresence {
    pub inside: bool,
}

/// Seeds the surface size from the window before the first tick, since a
/// resize event only arrives once the window actually changes.
pub fn sync_initial_surface(windows: Query<&Window>, mut out: EventWriter<SurfaceResized>) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    out.send(SurfaceResized {
        width: window.width(),
        height: window.height(),
    });
}

/// Mirrors the window cursor into pointer events. Window cursor coordinates
/// are already surface coordinates (top-left origin, y down).
pub fn emit_pointer_events(
    windows: Query<&Window>,
    mut presence: ResMut<CursorPresence>,
    mut moved: EventWriter<PointerMoved>,
    mut left: EventWriter<PointerLeft>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    match window.cursor_position() {
        Some(position) => {
            presence.inside = true;
            moved.send(PointerMoved {
                x: position.x,
                y: position.y,
            });
        }
        None => {
            if presence.inside {
                presence.inside = false;
                left.send(PointerLeft);
            }
        }
    }
}

/// Forwards window resizes as surface resizes.
pub fn emit_surface_resized(
    mut resizes: EventReader<WindowResized>,
    mut out: EventWriter<SurfaceResized>,
) {
    for resize in resizes.read() {
        out.send(SurfaceResized {
            width: resize.width,
            height: resize.height,
        });
    }
}

/// Left clicks while the fire state is active request an ember burst at the
/// cursor.
pub fn emit_burst_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    weather: Res<WeatherState>,
    mut bursts: EventWriter<BurstRequested>,
) {
    if !weather.is(WeatherKind::Fire) || !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    if let Some(position) = window.cursor_position() {
        bursts.send(BurstRequested {
            x: position.x,
            y: position.y,
        });
    }
}
