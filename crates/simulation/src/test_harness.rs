//! Headless integration-test harness.
//!
//! Wraps `bevy::app::App` + [`SimulationPlugin`](crate::SimulationPlugin)
//! behind a fluent builder for running scenario tests without a window or
//! renderer. One `App::update` is one simulation tick, exactly how the
//! windowed app drives the core.

use bevy::app::App;
use bevy::prelude::*;

use crate::clock::SimClock;
use crate::events::{
    BurstRequested, PointerLeft, PointerMoved, SetWeather, SurfaceResized, WeatherChanged,
};
use crate::fire::FirePools;
use crate::forest::ForestPools;
use crate::pointer::PointerState;
use crate::rain::RainPools;
use crate::sim_rng::SimRng;
use crate::surface::SurfaceSize;
use crate::weather::{WeatherKind, WeatherState};
use crate::winter::WinterPools;
use crate::SimulationPlugin;

/// A headless app wrapping the simulation for scenario tests.
pub struct TestBackdrop {
    app: App,
}

impl TestBackdrop {
    // -----------------------------------------------------------------------
    // Constructors / builders
    // -----------------------------------------------------------------------

    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        Self { app }
    }

    /// Replace the default RNG with one seeded from `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.app.insert_resource(SimRng::from_seed_u64(seed));
        self
    }

    /// Start in the given weather state instead of the default.
    pub fn with_weather(mut self, kind: WeatherKind) -> Self {
        self.app.insert_resource(WeatherState::new(kind));
        self
    }

    /// Override the default 800x600 surface.
    pub fn with_surface(mut self, width: f32, height: f32) -> Self {
        self.app.insert_resource(SurfaceSize { width, height });
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Advance the simulation by `n` ticks.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    // -----------------------------------------------------------------------
    // Input events (applied on the next tick)
    // -----------------------------------------------------------------------

    pub fn move_pointer(&mut self, x: f32, y: f32) {
        self.app.world_mut().send_event(PointerMoved { x, y });
    }

    pub fn pointer_left(&mut self) {
        self.app.world_mut().send_event(PointerLeft);
    }

    pub fn set_weather(&mut self, kind: WeatherKind) {
        self.app.world_mut().send_event(SetWeather(kind));
    }

    pub fn burst(&mut self, x: f32, y: f32) {
        self.app.world_mut().send_event(BurstRequested { x, y });
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.app.world_mut().send_event(SurfaceResized { width, height });
    }

    /// Drain pending transition notifications.
    pub fn drain_weather_changed(&mut self) -> Vec<WeatherChanged> {
        self.app
            .world_mut()
            .resource_mut::<Events<WeatherChanged>>()
            .drain()
            .collect()
    }

    // -----------------------------------------------------------------------
    // State access
    // -----------------------------------------------------------------------

    pub fn weather(&self) -> WeatherKind {
        self.app.world().resource::<WeatherState>().current
    }

    pub fn pointer(&self) -> Vec2 {
        self.app.world().resource::<PointerState>().position()
    }

    pub fn surface(&self) -> SurfaceSize {
        *self.app.world().resource::<SurfaceSize>()
    }

    pub fn clock_ms(&self) -> f64 {
        self.app.world().resource::<SimClock>().now_ms()
    }

    /// Place the simulation clock so that the *next* tick observes `now_ms`.
    pub fn set_next_tick_ms(&mut self, now_ms: f64) {
        self.app
            .world_mut()
            .resource_mut::<SimClock>()
            .set_ms(now_ms - SimClock::MS_PER_TICK);
    }

    pub fn rain(&self) -> &RainPools {
        self.app.world().resource::<RainPools>()
    }

    pub fn rain_mut(&mut self) -> Mut<'_, RainPools> {
        self.app.world_mut().resource_mut::<RainPools>()
    }

    pub fn forest(&self) -> &ForestPools {
        self.app.world().resource::<ForestPools>()
    }

    pub fn winter(&self) -> &WinterPools {
        self.app.world().resource::<WinterPools>()
    }

    pub fn winter_mut(&mut self) -> Mut<'_, WinterPools> {
        self.app.world_mut().resource_mut::<WinterPools>()
    }

    pub fn fire(&self) -> &FirePools {
        self.app.world().resource::<FirePools>()
    }
}

impl Default for TestBackdrop {
    fn default() -> Self {
        Self::new()
    }
}
