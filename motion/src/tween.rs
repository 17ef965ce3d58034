//! Property tweens.
//!
//! A [`Tween`] describes where a target's properties should end up and how
//! to get there. A [`TweenRun`] is a tween in flight: it captures start values
//! from the [`StyleBook`] the first time it renders, then writes interpolated
//! values on every subsequent render.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

use crate::ease::Ease;
use crate::style::{Prop, StyleBook, TargetId, Value};

/// Declarative description of one property animation on one target.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: TargetId,
    pub props: Vec<(Prop, Value)>,
    /// Seconds for a single iteration.
    pub duration: f64,
    /// `None` inherits the owning timeline's (or animator's) default ease.
    pub ease: Option<Ease>,
    /// Extra iterations after the first.
    pub repeat: u32,
    /// Play odd iterations backwards.
    pub yoyo: bool,
}

impl Tween {
    /// Start a tween description for `target` with no properties yet.
    #[must_use]
    pub fn to(target: TargetId) -> Self {
        Self { target, props: Vec::new(), duration: 0.5, ease: None, repeat: 0, yoyo: false }
    }

    #[must_use]
    pub fn with(mut self, prop: Prop, value: impl Into<Value>) -> Self {
        let value = value.into();
        if let Some(slot) = self.props.iter_mut().find(|(p, _)| *p == prop) {
            slot.1 = value;
        } else {
            self.props.push((prop, value));
        }
        self
    }

    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    #[must_use]
    pub fn repeat(mut self, count: u32) -> Self {
        self.repeat = count;
        self
    }

    #[must_use]
    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Duration including repeats.
    #[must_use]
    pub fn total_duration(&self) -> f64 {
        self.duration * f64::from(self.repeat + 1)
    }

    /// Eased progress at `local` seconds after the tween started.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn ratio_at(&self, local: f64, ease: Ease) -> f64 {
        if self.duration <= 0.0 {
            return if self.yoyo && self.repeat % 2 == 1 { 0.0 } else { 1.0 };
        }
        let local = local.clamp(0.0, self.total_duration());
        let (iteration, progress) = if local >= self.total_duration() {
            (self.repeat, 1.0)
        } else {
            let iteration = (local / self.duration).floor();
            (iteration as u32, (local - iteration * self.duration) / self.duration)
        };
        if self.yoyo && iteration % 2 == 1 {
            ease.apply(1.0 - progress)
        } else {
            ease.apply(progress)
        }
    }
}

/// A tween being played.
#[derive(Debug, Clone)]
pub struct TweenRun {
    tween: Tween,
    ease: Ease,
    from: Vec<Option<Value>>,
    started: bool,
    done: bool,
}

impl TweenRun {
    #[must_use]
    pub fn new(tween: Tween, default_ease: Ease) -> Self {
        let ease = tween.ease.unwrap_or(default_ease);
        Self { tween, ease, from: Vec::new(), started: false, done: false }
    }

    #[must_use]
    pub fn target(&self) -> TargetId {
        self.tween.target
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Stop the run without writing anything further.
    pub fn kill(&mut self) {
        self.done = true;
    }

    /// Drop `props` from this run; a run left with nothing to animate is done.
    pub fn strip(&mut self, props: &[Prop]) {
        let mut index = 0;
        while index < self.tween.props.len() {
            if props.contains(&self.tween.props[index].0) {
                self.tween.props.remove(index);
                if index < self.from.len() {
                    self.from.remove(index);
                }
            } else {
                index += 1;
            }
        }
        if self.tween.props.is_empty() {
            self.done = true;
        }
    }

    /// Render at `local` seconds after the tween's start. Negative times
    /// render nothing. Returns the props written.
    pub fn render(&mut self, local: f64, book: &mut StyleBook) -> Vec<Prop> {
        if self.done || local < 0.0 {
            return Vec::new();
        }
        let target = self.tween.target;
        if !self.started {
            self.from = self.tween.props.iter().map(|(prop, _)| book.current(target, *prop)).collect();
            self.started = true;
        }
        let ratio = self.tween.ratio_at(local, self.ease);
        let mut written = Vec::with_capacity(self.tween.props.len());
        for ((prop, to), from) in self.tween.props.iter().zip(&self.from) {
            book.write(target, *prop, Value::interpolate(from.as_ref(), to, ratio));
            written.push(*prop);
        }
        if local >= self.tween.total_duration() {
            self.done = true;
        }
        written
    }
}
