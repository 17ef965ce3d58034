//! The animation runtime.
//!
//! `Animator` owns the [`StyleBook`] plus every running tween and timeline.
//! The host calls [`Animator::tick`] once per animation frame with the elapsed
//! seconds, then writes the returned dirty properties to the page. Nothing here
//! knows about the DOM; the host maps [`TargetId`]s to elements.

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

use std::collections::BTreeSet;

use crate::ease::Ease;
use crate::style::{Prop, StyleBook, TargetId, Value};
use crate::timeline::{Timeline, TimelineRun};
use crate::tween::{Tween, TweenRun};

/// Handle for a running tween or timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

/// Result of one [`Animator::tick`].
#[derive(Debug, Default)]
pub struct Frame {
    /// Properties whose value changed since the previous frame.
    pub dirty: BTreeSet<(TargetId, Prop)>,
    /// Animations that reached their natural end this frame. Killed
    /// animations never appear here.
    pub completed: Vec<AnimationId>,
}

impl Frame {
    /// Dirty properties grouped by target, in target order.
    #[must_use]
    pub fn by_target(&self) -> Vec<(TargetId, Vec<Prop>)> {
        let mut grouped: Vec<(TargetId, Vec<Prop>)> = Vec::new();
        for &(target, prop) in &self.dirty {
            match grouped.last_mut() {
                Some((last, props)) if *last == target => props.push(prop),
                _ => grouped.push((target, vec![prop])),
            }
        }
        grouped
    }
}

#[derive(Debug)]
enum Running {
    Tween(TweenRun),
    Timeline(TimelineRun),
}

#[derive(Debug)]
struct Entry {
    id: AnimationId,
    running: Running,
    elapsed: f64,
    paused: bool,
    killed: bool,
}

/// Ticker-driven animation runtime.
#[derive(Debug)]
pub struct Animator {
    book: StyleBook,
    entries: Vec<Entry>,
    pending: BTreeSet<(TargetId, Prop)>,
    default_ease: Ease,
    next_id: u64,
}

impl Default for Animator {
    fn default() -> Self {
        Self {
            book: StyleBook::new(),
            entries: Vec::new(),
            pending: BTreeSet::new(),
            default_ease: Ease::default(),
            next_id: 1,
        }
    }
}

impl Animator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn book(&self) -> &StyleBook {
        &self.book
    }

    /// Write values immediately. They are reported dirty on the next tick.
    pub fn set(&mut self, target: TargetId, props: &[(Prop, Value)]) {
        for (prop, value) in props {
            self.book.write(target, *prop, value.clone());
            self.pending.insert((target, *prop));
        }
    }

    /// Start a standalone tween.
    ///
    /// Properties it animates are removed from other standalone tweens on the
    /// same target, so the newest tween owns them.
    pub fn to(&mut self, tween: Tween) -> AnimationId {
        let props = tween.props.iter().map(|(p, _)| *p).collect::<Vec<_>>();
        for entry in &mut self.entries {
            if let Running::Tween(run) = &mut entry.running
                && run.target() == tween.target
            {
                run.strip(&props);
                if run.is_done() {
                    entry.killed = true;
                }
            }
        }
        let run = TweenRun::new(tween, self.default_ease);
        self.push(Running::Tween(run))
    }

    /// Start a timeline.
    pub fn play(&mut self, timeline: Timeline) -> AnimationId {
        self.push(Running::Timeline(TimelineRun::new(timeline)))
    }

    fn push(&mut self, running: Running) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, running, elapsed: 0.0, paused: false, killed: false });
        id
    }

    /// Stop every tween on `targets`, including those nested in timelines.
    ///
    /// Values stay wherever the killed tweens last left them. Timelines keep
    /// running their other children.
    pub fn kill_tweens_of(&mut self, targets: &[TargetId]) {
        for entry in &mut self.entries {
            match &mut entry.running {
                Running::Tween(run) => {
                    if targets.contains(&run.target()) {
                        run.kill();
                        entry.killed = true;
                    }
                }
                Running::Timeline(run) => run.kill_targets(targets),
            }
        }
        self.entries.retain(|entry| !entry.killed);
    }

    /// Stop animating `props` on `target`, wherever they are animated.
    ///
    /// Other properties of the same tweens, and other targets, keep playing.
    pub fn kill_props_of(&mut self, target: TargetId, props: &[Prop]) {
        for entry in &mut self.entries {
            match &mut entry.running {
                Running::Tween(run) => {
                    if run.target() == target {
                        run.strip(props);
                        if run.is_done() {
                            entry.killed = true;
                        }
                    }
                }
                Running::Timeline(run) => run.kill_props(target, props),
            }
        }
        self.entries.retain(|entry| !entry.killed);
    }

    pub fn pause(&mut self, id: AnimationId) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.paused = true;
        }
    }

    pub fn resume(&mut self, id: AnimationId) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.paused = false;
        }
    }

    /// Whether `id` is still running (paused counts as running).
    #[must_use]
    pub fn is_active(&self, id: AnimationId) -> bool {
        self.entries.iter().any(|e| e.id == id && !e.killed)
    }

    /// Seconds `id` has played, if it is still running.
    #[must_use]
    pub fn elapsed(&self, id: AnimationId) -> Option<f64> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.elapsed)
    }

    /// Whether another tick would change anything.
    #[must_use]
    pub fn has_work(&self) -> bool {
        !self.pending.is_empty() || self.entries.iter().any(|e| !e.paused && !e.killed)
    }

    /// Advance every unpaused animation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> Frame {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut frame = Frame { dirty: std::mem::take(&mut self.pending), completed: Vec::new() };
        let mut spawned = Vec::new();

        for entry in &mut self.entries {
            if entry.paused || entry.killed {
                continue;
            }
            entry.elapsed += dt;
            let finished = match &mut entry.running {
                Running::Tween(run) => {
                    let target = run.target();
                    for prop in run.render(entry.elapsed, &mut self.book) {
                        frame.dirty.insert((target, prop));
                    }
                    run.is_done()
                }
                Running::Timeline(run) => {
                    let rendered = run.render(entry.elapsed, &mut self.book);
                    frame.dirty.extend(rendered.written);
                    spawned.extend(rendered.spawned);
                    entry.elapsed >= run.duration()
                }
            };
            if finished {
                frame.completed.push(entry.id);
                entry.killed = true;
            }
        }
        self.entries.retain(|entry| !entry.killed);

        for tween in spawned {
            self.to(tween);
        }
        frame
    }
}
