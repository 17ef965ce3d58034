//! Seamless looping logo rows.
//!
//! The host duplicates a row's children once, so the row is exactly twice as
//! wide as one copy. Sliding left by half the row width then lands on a frame
//! identical to the starting one, and the offset can snap back to zero
//! without a visible jump.

#[cfg(test)]
#[path = "marquee_test.rs"]
mod marquee_test;

use crate::trigger::TriggerEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeState {
    loop_distance: f64,
    cycle: f64,
    elapsed: f64,
    playing: bool,
}

impl MarqueeState {
    /// A playing marquee for a row whose duplicated content is
    /// `doubled_width` wide, looping every `cycle` seconds.
    #[must_use]
    pub fn new(doubled_width: f64, cycle: f64) -> Self {
        Self { loop_distance: half(doubled_width), cycle: cycle.max(0.0), elapsed: 0.0, playing: true }
    }

    #[must_use]
    pub fn loop_distance(&self) -> f64 {
        self.loop_distance
    }

    #[must_use]
    pub fn cycle(&self) -> f64 {
        self.cycle
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stop advancing. The offset is kept.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Play on entering the visible region, pause on leaving it.
    pub fn apply_trigger(&mut self, event: TriggerEvent) {
        if event.is_entering() {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Re-measure after a resize, keeping progress through the cycle.
    pub fn resize(&mut self, doubled_width: f64) {
        self.loop_distance = half(doubled_width);
    }

    /// Advance by `dt` seconds while playing. Returns whether the offset moved.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.playing || self.cycle <= 0.0 || !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        self.elapsed = (self.elapsed + dt) % self.cycle;
        true
    }

    /// Horizontal offset in pixels, within `(-loop_distance, 0]`.
    #[must_use]
    pub fn offset(&self) -> f64 {
        if self.cycle <= 0.0 || self.elapsed <= 0.0 {
            return 0.0;
        }
        -self.loop_distance * (self.elapsed / self.cycle)
    }
}

fn half(width: f64) -> f64 {
    if width.is_finite() { (width / 2.0).max(0.0) } else { 0.0 }
}
