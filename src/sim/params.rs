//! User-adjustable parameters
//!
//! Generation rate and gravity are small integers stepped by UI buttons
//! and clamped independently to [0, 10].

use std::time::Duration;

/// Upper bound shared by both parameters
pub const PARAM_MAX: u8 = 10;

/// An increment/decrement signal from the UI
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Adjustment {
    IncreaseRate,
    DecreaseRate,
    IncreaseGravity,
    DecreaseGravity,
}

/// An integer stepped by ±1 and clamped to [0, PARAM_MAX]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dial(u8);

impl Dial {
    /// Values above the maximum are clamped
    pub fn new(value: u8) -> Self {
        Self(value.min(PARAM_MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn increase(&mut self) {
        self.0 = (self.0 + 1).min(PARAM_MAX);
    }

    pub fn decrease(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }
}

/// The two knobs the user can turn
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Params {
    /// Automatic spawns per second (0 = off)
    pub generation_rate: Dial,
    /// Gravity constant applied to falling shapes
    pub gravity: Dial,
}

impl Params {
    pub fn new(generation_rate: u8, gravity: u8) -> Self {
        Self {
            generation_rate: Dial::new(generation_rate),
            gravity: Dial::new(gravity),
        }
    }

    pub fn apply(&mut self, adjustment: Adjustment) {
        match adjustment {
            Adjustment::IncreaseRate => self.generation_rate.increase(),
            Adjustment::DecreaseRate => self.generation_rate.decrease(),
            Adjustment::IncreaseGravity => self.gravity.increase(),
            Adjustment::DecreaseGravity => self.gravity.decrease(),
        }
    }

    /// Time between automatic spawns, or `None` when the rate is zero
    pub fn spawn_interval(&self) -> Option<Duration> {
        match self.generation_rate.value() {
            0 => None,
            rate => Some(Duration::from_micros(1_000_000 / u64::from(rate))),
        }
    }

    pub fn gravity(&self) -> f32 {
        f32::from(self.gravity.value())
    }
}
