//! Abstract input events decoupling the core from windowing.
//!
//! The `rendering` crate translates window state (cursor, clicks, resizes)
//! into these events; the `ui` crate emits [`SetWeather`]. The core applies
//! them at the start of every tick, before any particle system runs.

use bevy::prelude::*;

use crate::weather::WeatherKind;

/// Pointer moved to `(x, y)` in surface coordinates.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerMoved {
    pub x: f32,
    pub y: f32,
}

/// Pointer left the surface.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerLeft;

/// The drawing surface was resized to the given logical dimensions.
#[derive(Event, Debug, Clone, Copy)]
pub struct SurfaceResized {
    pub width: f32,
    pub height: f32,
}

/// Request to switch the active weather state.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetWeather(pub WeatherKind);

/// Click-like trigger for a fire ember burst at `(x, y)`.
#[derive(Event, Debug, Clone, Copy)]
pub struct BurstRequested {
    pub x: f32,
    pub y: f32,
}

/// Fired after every state transition, for the theme sink and UI.
#[derive(Event, Debug, Clone, Copy)]
pub struct WeatherChanged {
    pub old: WeatherKind,
    pub new: WeatherKind,
}
