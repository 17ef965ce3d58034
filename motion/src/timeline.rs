//! Timelines: tweens placed on one clock.
//!
//! Children are positioned when added, using the same position grammar the
//! site's animation config uses:
//!
//! | Position | Meaning |
//! |----------|---------|
//! | *(none)* | at the current end of the timeline |
//! | `1.5` | absolute time |
//! | `-=0.3` / `+=0.3` | relative to the current end of the timeline |
//! | `>` / `>-0.12` | relative to the end of the previously added child |
//! | `<` / `<0.1` | relative to the start of the previously added child |
//!
//! Negative resolved times clamp to zero.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::ease::Ease;
use crate::style::{Prop, StyleBook, TargetId, Value};
use crate::tween::{Tween, TweenRun};

/// Error returned when a position string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timeline position: {0:?}")]
pub struct PositionError(pub String);

/// Where a child is placed on its timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Position {
    #[default]
    End,
    At(f64),
    FromEnd(f64),
    AfterPrevious(f64),
    WithPrevious(f64),
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim();
        let number = |text: &str| -> Result<f64, PositionError> {
            if text.is_empty() {
                return Ok(0.0);
            }
            text.parse::<f64>().map_err(|_| PositionError(raw.to_owned()))
        };
        if s.is_empty() {
            return Ok(Self::End);
        }
        if let Some(rest) = s.strip_prefix("+=") {
            return Ok(Self::FromEnd(number(rest)?));
        }
        if let Some(rest) = s.strip_prefix("-=") {
            return Ok(Self::FromEnd(-number(rest)?));
        }
        if let Some(rest) = s.strip_prefix('>') {
            return Ok(Self::AfterPrevious(number(rest)?));
        }
        if let Some(rest) = s.strip_prefix('<') {
            return Ok(Self::WithPrevious(number(rest)?));
        }
        Ok(Self::At(number(s)?))
    }
}

impl TryFrom<String> for Position {
    type Error = PositionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What a child does when the playhead reaches it.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Tween(Tween),
    /// Instant property write.
    Set { target: TargetId, props: Vec<(Prop, Value)> },
    /// Launch an independent tween (it may outlive the timeline).
    Spawn(Tween),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Child {
    pub start: f64,
    pub step: Step,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    children: Vec<Child>,
    default_ease: Ease,
    end: f64,
    previous: Option<(f64, f64)>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::with_default_ease(Ease::default())
    }
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A timeline whose tweens without their own ease use `ease`.
    #[must_use]
    pub fn with_default_ease(ease: Ease) -> Self {
        Self { children: Vec::new(), default_ease: ease, end: 0.0, previous: None }
    }

    /// Append a tween at `position`.
    pub fn to(&mut self, tween: Tween, position: Position) -> &mut Self {
        let start = self.resolve(position);
        let end = start + tween.total_duration();
        self.place(start, end, Step::Tween(tween));
        self
    }

    /// Append an instant write at `position`.
    pub fn set(&mut self, target: TargetId, props: Vec<(Prop, Value)>, position: Position) -> &mut Self {
        let start = self.resolve(position);
        self.place(start, start, Step::Set { target, props });
        self
    }

    /// Launch `tween` independently when the previously added child ends.
    ///
    /// Spawned tweens do not extend the timeline or move the `>`/`<` anchors.
    pub fn then_spawn(&mut self, tween: Tween) -> &mut Self {
        let at = self.previous.map_or(self.end, |(_, end)| end);
        self.children.push(Child { start: at, step: Step::Spawn(tween) });
        self
    }

    fn place(&mut self, start: f64, end: f64, step: Step) {
        self.children.push(Child { start, step });
        self.previous = Some((start, end));
        self.end = self.end.max(end);
    }

    /// Resolve `position` against the current contents.
    #[must_use]
    pub fn resolve(&self, position: Position) -> f64 {
        let (prev_start, prev_end) = self.previous.unwrap_or((0.0, self.end));
        let at = match position {
            Position::End => self.end,
            Position::At(t) => t,
            Position::FromEnd(offset) => self.end + offset,
            Position::AfterPrevious(offset) => prev_end + offset,
            Position::WithPrevious(offset) => prev_start + offset,
        };
        at.max(0.0)
    }

    /// End of the last tween or set, ignoring spawned tweens.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end
    }

    /// Start of the previously added child.
    #[must_use]
    pub fn previous_start(&self) -> Option<f64> {
        self.previous.map(|(start, _)| start)
    }

    /// End of the previously added child.
    #[must_use]
    pub fn previous_end(&self) -> Option<f64> {
        self.previous.map(|(_, end)| end)
    }

    /// Start of the first tween that animates `target`.
    #[must_use]
    pub fn start_of(&self, target: TargetId) -> Option<f64> {
        self.children.iter().find_map(|child| match &child.step {
            Step::Tween(tween) if tween.target == target => Some(child.start),
            _ => None,
        })
    }
}

/// Output of one timeline render.
#[derive(Debug, Default)]
pub(crate) struct Rendered {
    pub written: Vec<(TargetId, Prop)>,
    pub spawned: Vec<Tween>,
}

#[derive(Debug)]
enum ChildRun {
    Tween { start: f64, run: TweenRun },
    Set { start: f64, target: TargetId, props: Vec<(Prop, Value)>, fired: bool },
    Spawn { start: f64, target: TargetId, tween: Option<Tween> },
}

/// A timeline being played.
#[derive(Debug)]
pub(crate) struct TimelineRun {
    children: Vec<ChildRun>,
    duration: f64,
}

impl TimelineRun {
    pub fn new(timeline: Timeline) -> Self {
        let Timeline { mut children, default_ease, end, .. } = timeline;
        children.sort_by(|a, b| a.start.total_cmp(&b.start));
        let children = children
            .into_iter()
            .map(|Child { start, step }| match step {
                Step::Tween(tween) => ChildRun::Tween { start, run: TweenRun::new(tween, default_ease) },
                Step::Set { target, props } => ChildRun::Set { start, target, props, fired: false },
                Step::Spawn(tween) => ChildRun::Spawn { start, target: tween.target, tween: Some(tween) },
            })
            .collect();
        Self { children, duration: end }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn render(&mut self, elapsed: f64, book: &mut StyleBook) -> Rendered {
        let mut out = Rendered::default();
        for child in &mut self.children {
            match child {
                ChildRun::Tween { start, run } => {
                    let target = run.target();
                    for prop in run.render(elapsed - *start, book) {
                        out.written.push((target, prop));
                    }
                }
                ChildRun::Set { start, target, props, fired } => {
                    if *fired || elapsed < *start {
                        continue;
                    }
                    for (prop, value) in props.iter() {
                        book.write(*target, *prop, value.clone());
                        out.written.push((*target, *prop));
                    }
                    *fired = true;
                }
                ChildRun::Spawn { start, tween, .. } => {
                    if elapsed >= *start
                        && let Some(tween) = tween.take()
                    {
                        out.spawned.push(tween);
                    }
                }
            }
        }
        out
    }

    /// Drop `props` of `target` from every child. Children left with nothing
    /// to write are stopped.
    pub fn kill_props(&mut self, target: TargetId, props: &[Prop]) {
        let keep = |prop: &Prop| !props.contains(prop);
        for child in &mut self.children {
            match child {
                ChildRun::Tween { run, .. } => {
                    if run.target() == target {
                        run.strip(props);
                    }
                }
                ChildRun::Set { target: set_target, props: values, fired, .. } => {
                    if *set_target == target {
                        values.retain(|(prop, _)| keep(prop));
                        if values.is_empty() {
                            *fired = true;
                        }
                    }
                }
                ChildRun::Spawn { target: spawn_target, tween, .. } => {
                    if *spawn_target == target {
                        if let Some(pending) = tween {
                            pending.props.retain(|(prop, _)| keep(prop));
                        }
                        if tween.as_ref().is_some_and(|pending| pending.props.is_empty()) {
                            tween.take();
                        }
                    }
                }
            }
        }
    }

    /// Stop every child that touches one of `targets`.
    pub fn kill_targets(&mut self, targets: &[TargetId]) {
        for child in &mut self.children {
            match child {
                ChildRun::Tween { run, .. } => {
                    if targets.contains(&run.target()) {
                        run.kill();
                    }
                }
                ChildRun::Set { target, fired, .. } => {
                    if targets.contains(target) {
                        *fired = true;
                    }
                }
                ChildRun::Spawn { target, tween, .. } => {
                    if targets.contains(target) {
                        tween.take();
                    }
                }
            }
        }
    }
}
