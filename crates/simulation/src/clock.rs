//! Monotonic simulation clock.
//!
//! Each tick advances a fixed amount of simulated time (one frame at the
//! nominal 60 Hz refresh rate), so timed behavior such as snowflake freezes
//! is deterministic: tests place the clock exactly instead of sleeping.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimClock {
    /// Simulated milliseconds since startup.
    pub now_ms: f64,
}

impl SimClock {
    /// Simulated milliseconds per tick.
    pub const MS_PER_TICK: f64 = 16.0;

    pub fn tick(&mut self) {
        self.now_ms += Self::MS_PER_TICK;
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Place the clock at an exact instant. The running app only ever
    /// advances via [`SimClock::tick`]; this is for tests.
    pub fn set_ms(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }
}

pub fn tick_sim_clock(mut clock: ResMut<SimClock>) {
    clock.tick();
}
