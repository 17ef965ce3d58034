//! Hero entrance sequence.
//!
//! The reveal runs once per page load:
//!
//! 1. hide the secondary title line and the dependent sections;
//! 2. slide the secondary line up;
//! 3. pop the split title in letter by letter, each letter bouncing once;
//! 4. pulse the letter wrapper;
//! 5. cascade the description, call to action, logo strip and navigation.
//!
//! Required structure is checked by [`HeroElements::validate`] before
//! anything is written, so a page missing part of the hero is left exactly as
//! it was. [`RevealSequence`] drives a built [`RevealPlan`] and owns the
//! optional page [`ScrollLock`], releasing it when the timeline completes.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use serde::Deserialize;

use crate::animator::{AnimationId, Animator, Frame};
use crate::ease::Ease;
use crate::lock::{ScrollLock, ScrollSurface};
use crate::style::{Prop, TargetId, Value};
use crate::timeline::{Position, Timeline};
use crate::tween::Tween;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RevealError {
    #[error("required hero element not found: {0}")]
    MissingElement(&'static str),
    #[error("hero reveal already started")]
    AlreadyStarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealPhase {
    Hidden,
    TitleRevealing,
    TitleSettled,
    DescriptionRevealing,
    CascadeRevealing,
    Complete,
}

/// Hero parts as found on the page. `T` is whatever the caller uses to
/// refer to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroElements<T> {
    pub title: Option<T>,
    pub inline_span: Option<T>,
    pub secondary: Option<T>,
    pub description: Option<T>,
    pub cta: Option<T>,
    pub logos: Option<T>,
    pub nav: Option<T>,
}

impl<T> Default for HeroElements<T> {
    fn default() -> Self {
        Self { title: None, inline_span: None, secondary: None, description: None, cta: None, logos: None, nav: None }
    }
}

impl<T> HeroElements<T> {
    /// Check the required parts exist.
    pub fn validate(self) -> Result<ValidatedHero<T>, RevealError> {
        Ok(ValidatedHero {
            title: self.title.ok_or(RevealError::MissingElement("hero title"))?,
            inline_span: self.inline_span.ok_or(RevealError::MissingElement("inline title span"))?,
            secondary: self.secondary.ok_or(RevealError::MissingElement("secondary title line"))?,
            description: self.description,
            cta: self.cta,
            logos: self.logos,
            nav: self.nav,
        })
    }
}

/// Hero parts with every required element present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedHero<T> {
    pub title: T,
    pub inline_span: T,
    pub secondary: T,
    pub description: Option<T>,
    pub cta: Option<T>,
    pub logos: Option<T>,
    pub nav: Option<T>,
}

impl<T> ValidatedHero<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ValidatedHero<U> {
        ValidatedHero {
            title: f(self.title),
            inline_span: f(self.inline_span),
            secondary: f(self.secondary),
            description: self.description.map(&mut f),
            cta: self.cta.map(&mut f),
            logos: self.logos.map(&mut f),
            nav: self.nav.map(&mut f),
        }
    }

    /// Like [`ValidatedHero::map`], stopping at the first error.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<ValidatedHero<U>, E> {
        Ok(ValidatedHero {
            title: f(self.title)?,
            inline_span: f(self.inline_span)?,
            secondary: f(self.secondary)?,
            description: self.description.map(&mut f).transpose()?,
            cta: self.cta.map(&mut f).transpose()?,
            logos: self.logos.map(&mut f).transpose()?,
            nav: self.nav.map(&mut f).transpose()?,
        })
    }
}

/// Offsets, durations and curves of the reveal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealTimings {
    /// Ease for tweens that name none.
    pub default_ease: Ease,

    pub secondary_from_y: f64,
    pub secondary_duration: f64,
    pub secondary_ease: Ease,

    pub letter_scale: f64,
    pub letter_duration: f64,
    pub letter_ease: Ease,
    pub letter_position: Position,
    pub bounce_y: f64,
    pub bounce_duration: f64,
    pub bounce_ease: Ease,

    pub wrapper_scale: f64,
    pub wrapper_duration: f64,
    pub wrapper_ease: Ease,
    pub wrapper_position: Position,

    /// Start offset for the description and call to action.
    pub content_from_y: f64,
    pub content_duration: f64,
    pub content_ease: Ease,
    pub description_position: Position,
    pub cta_show_position: Position,
    pub cta_position: Position,

    pub logos_from_y: f64,
    pub logos_duration: f64,
    pub logos_ease: Ease,
    pub logos_position: Position,

    pub nav_from_y: f64,
    pub nav_position: Position,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            default_ease: Ease::out(3),
            secondary_from_y: 100.0,
            secondary_duration: 0.7,
            secondary_ease: Ease::out(3),
            letter_scale: 1.04,
            letter_duration: 0.3,
            letter_ease: Ease::elastic(1.2, 0.5),
            letter_position: Position::AfterPrevious(-0.12),
            bounce_y: -5.0,
            bounce_duration: 0.2,
            bounce_ease: Ease::out(2),
            wrapper_scale: 1.1,
            wrapper_duration: 0.3,
            wrapper_ease: Ease::out(2),
            wrapper_position: Position::AfterPrevious(-0.15),
            content_from_y: 50.0,
            content_duration: 0.8,
            content_ease: Ease::out(3),
            description_position: Position::AfterPrevious(0.1),
            cta_show_position: Position::WithPrevious(0.0),
            cta_position: Position::WithPrevious(0.1),
            logos_from_y: 100.0,
            logos_duration: 1.0,
            logos_ease: Ease::elastic(1.0, 0.5),
            logos_position: Position::WithPrevious(0.2),
            nav_from_y: -50.0,
            nav_position: Position::WithPrevious(0.0),
        }
    }
}

/// Timeline times at which the reveal changes phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMarks {
    pub title_settled: f64,
    pub description: f64,
    pub cascade: f64,
    pub complete: f64,
}

/// Positions resolved against a chain of steps that may be partly absent.
///
/// Missing optional elements still occupy their slot, so whatever remains
/// keeps the timing it would have had on a complete page.
struct Cursor {
    start: f64,
    end: f64,
    timeline_end: f64,
}

impl Cursor {
    fn place(&mut self, position: Position, duration: f64) -> f64 {
        let at = match position {
            Position::End => self.timeline_end,
            Position::At(t) => t,
            Position::FromEnd(offset) => self.timeline_end + offset,
            Position::AfterPrevious(offset) => self.end + offset,
            Position::WithPrevious(offset) => self.start + offset,
        }
        .max(0.0);
        self.start = at;
        self.end = at + duration;
        self.timeline_end = self.timeline_end.max(self.end);
        at
    }
}

/// Everything needed to run the reveal.
#[derive(Debug, Clone)]
pub struct RevealPlan {
    /// Hidden starting states, written before the timeline starts.
    pub initial: Vec<(TargetId, Vec<(Prop, Value)>)>,
    pub timeline: Timeline,
    pub marks: RevealMarks,
}

impl RevealPlan {
    /// Lay out the reveal for `hero`, with `letters` inside `wrapper` as the
    /// split title.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn build(hero: &ValidatedHero<TargetId>, wrapper: TargetId, letters: &[TargetId], t: &RevealTimings) -> Self {
        let visible = || Value::keyword("visible");
        let mut initial = vec![(
            hero.secondary,
            vec![(Prop::Opacity, Value::Number(0.0)), (Prop::Y, Value::Number(t.secondary_from_y))],
        )];
        if let Some(nav) = hero.nav {
            initial.push((
                nav,
                vec![(Prop::Opacity, Value::Number(0.0)), (Prop::Y, Value::Number(t.nav_from_y)), (Prop::Visibility, visible())],
            ));
        }
        for target in [hero.description, hero.cta].into_iter().flatten() {
            initial.push((
                target,
                vec![
                    (Prop::Opacity, Value::Number(0.0)),
                    (Prop::Y, Value::Number(t.content_from_y)),
                    (Prop::Visibility, visible()),
                ],
            ));
        }
        if let Some(logos) = hero.logos {
            initial.push((
                logos,
                vec![(Prop::Opacity, Value::Number(0.0)), (Prop::Y, Value::Number(t.logos_from_y)), (Prop::Visibility, visible())],
            ));
        }
        initial.extend(letters.iter().map(|&letter| (letter, vec![(Prop::Opacity, Value::Number(0.0))])));

        let mut tl = Timeline::with_default_ease(t.default_ease);
        let secondary = Tween::to(hero.secondary)
            .with(Prop::Opacity, 1.0)
            .with(Prop::Y, 0.0)
            .duration(t.secondary_duration)
            .ease(t.secondary_ease);
        tl.to(secondary, Position::End);
        tl.set(hero.title, vec![(Prop::Opacity, Value::Number(1.0))], Position::End);

        for &letter in letters {
            let pop = Tween::to(letter)
                .with(Prop::Opacity, 1.0)
                .with(Prop::Scale, t.letter_scale)
                .duration(t.letter_duration)
                .ease(t.letter_ease);
            tl.to(pop, t.letter_position);
            tl.then_spawn(
                Tween::to(letter)
                    .with(Prop::Y, t.bounce_y)
                    .duration(t.bounce_duration)
                    .ease(t.bounce_ease)
                    .yoyo(true)
                    .repeat(1),
            );
        }

        let pulse = Tween::to(wrapper)
            .with(Prop::Scale, t.wrapper_scale)
            .duration(t.wrapper_duration)
            .ease(t.wrapper_ease)
            .yoyo(true)
            .repeat(1);
        tl.to(pulse, t.wrapper_position);
        let title_settled = tl.previous_end().unwrap_or(0.0);

        let mut cursor = Cursor {
            start: tl.previous_start().unwrap_or(0.0),
            end: title_settled,
            timeline_end: tl.duration(),
        };
        let content = |target| {
            Tween::to(target)
                .with(Prop::Opacity, 1.0)
                .with(Prop::Y, 0.0)
                .duration(t.content_duration)
                .ease(t.content_ease)
        };

        let description = cursor.place(t.description_position, t.content_duration);
        if let Some(target) = hero.description {
            tl.to(content(target), Position::At(description));
        }
        let show_cta = cursor.place(t.cta_show_position, 0.0);
        if let Some(target) = hero.cta {
            tl.set(target, vec![(Prop::Display, Value::keyword("block"))], Position::At(show_cta));
        }
        let cascade = cursor.place(t.cta_position, t.content_duration);
        if let Some(target) = hero.cta {
            tl.to(content(target), Position::At(cascade));
        }
        let drop_in = |target| {
            Tween::to(target)
                .with(Prop::Opacity, 1.0)
                .with(Prop::Y, 0.0)
                .duration(t.logos_duration)
                .ease(t.logos_ease)
        };
        let logos = cursor.place(t.logos_position, t.logos_duration);
        if let Some(target) = hero.logos {
            tl.to(drop_in(target), Position::At(logos));
        }
        let nav = cursor.place(t.nav_position, t.logos_duration);
        if let Some(target) = hero.nav {
            tl.to(drop_in(target), Position::At(nav));
        }

        let marks = RevealMarks { title_settled, description, cascade, complete: tl.duration() };
        Self { initial, timeline: tl, marks }
    }

    /// Write the hidden starting states.
    pub fn apply_initial(&self, anim: &mut Animator) {
        for (target, props) in &self.initial {
            anim.set(*target, props);
        }
    }

    /// Phase at `elapsed` seconds into the timeline.
    #[must_use]
    pub fn phase_at(&self, elapsed: f64) -> RevealPhase {
        let m = &self.marks;
        if elapsed >= m.complete {
            RevealPhase::Complete
        } else if elapsed >= m.cascade {
            RevealPhase::CascadeRevealing
        } else if elapsed >= m.description {
            RevealPhase::DescriptionRevealing
        } else if elapsed >= m.title_settled {
            RevealPhase::TitleSettled
        } else {
            RevealPhase::TitleRevealing
        }
    }
}

/// A reveal in progress.
#[derive(Debug)]
pub struct RevealSequence<S: ScrollSurface> {
    plan: RevealPlan,
    phase: RevealPhase,
    running: Option<AnimationId>,
    lock: Option<ScrollLock<S>>,
}

impl<S: ScrollSurface> RevealSequence<S> {
    #[must_use]
    pub fn new(plan: RevealPlan) -> Self {
        Self { plan, phase: RevealPhase::Hidden, running: None, lock: None }
    }

    #[must_use]
    pub fn plan(&self) -> &RevealPlan {
        &self.plan
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[must_use]
    pub fn lock_held(&self) -> bool {
        self.lock.as_ref().is_some_and(ScrollLock::is_held)
    }

    /// Hide everything and start the timeline. `lock` is held until the
    /// timeline completes.
    pub fn start(&mut self, anim: &mut Animator, lock: Option<ScrollLock<S>>) -> Result<AnimationId, RevealError> {
        if self.phase != RevealPhase::Hidden || self.running.is_some() {
            return Err(RevealError::AlreadyStarted);
        }
        self.plan.apply_initial(anim);
        let id = anim.play(self.plan.timeline.clone());
        self.running = Some(id);
        self.lock = lock;
        self.phase = RevealPhase::TitleRevealing;
        Ok(id)
    }

    /// Follow the timeline after a frame. Returns the new phase when it
    /// changed.
    pub fn observe(&mut self, anim: &Animator, frame: &Frame) -> Option<RevealPhase> {
        let id = self.running?;
        let next = match anim.elapsed(id) {
            Some(elapsed) if !frame.completed.contains(&id) => self.plan.phase_at(elapsed),
            // Completed, or gone without us seeing it finish.
            _ => RevealPhase::Complete,
        };
        if next == RevealPhase::Complete {
            self.running = None;
            if let Some(mut lock) = self.lock.take() {
                lock.release();
            }
        }
        if next == self.phase {
            return None;
        }
        self.phase = next;
        Some(next)
    }
}
