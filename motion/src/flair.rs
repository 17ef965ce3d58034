//! Pointer-following hover flair for buttons.
//!
//! A flair is a decorative child element that grows out of the point where
//! the pointer entered a button, follows the pointer while inside, and shrinks
//! out through whichever edge the pointer left by. Plain and big buttons are
//! two [`FlairConfig`]s of the same [`FlairButton`] state machine:
//!
//! ```text
//! Idle ──enter──▶ Entering ──settled──▶ Tracking
//!   ▲                │  ▲                  │
//!   │              leave └──────enter──────┤
//!   └──settled── Leaving ◀────leave────────┘
//! ```
//!
//! Every transition first kills tweens still running on the flair, and on
//! the surface only the properties the variant animates. The surface may be
//! animated by other effects at the same time (the hero CTA is also a big
//! button).

#[cfg(test)]
#[path = "flair_test.rs"]
mod flair_test;

use crate::animator::{AnimationId, Animator};
use crate::consts::{BIG_FLAIR_OVERLAP, EXIT_EDGE_HIGH, EXIT_EDGE_LOW, EXIT_OVERSHOOT};
use crate::ease::Ease;
use crate::geom::{Point, Rect, normalized_position};
use crate::style::{Prop, TargetId, Value};
use crate::timeline::{Position, Timeline};
use crate::tween::Tween;

/// Which button family a flair belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Plain,
    Big,
}

/// Which surface properties a variant animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// The button background crossfades and the flair takes its own color.
    pub background_crossfade: bool,
    /// The button border color fades.
    pub border_color: bool,
}

impl Variant {
    #[must_use]
    pub fn capabilities(self) -> Capabilities {
        match self {
            Self::Plain => Capabilities { background_crossfade: false, border_color: true },
            Self::Big => Capabilities { background_crossfade: true, border_color: false },
        }
    }
}

/// Durations (seconds) and curves for one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct FlairTimings {
    pub surface_enter: f64,
    pub surface_ease: Ease,
    pub flair_enter: f64,
    pub flair_ease: Ease,
    /// Fraction of `surface_enter` after which the flair starts growing.
    pub flair_delay_ratio: f64,
    pub follow: f64,
    pub follow_ease: Ease,
    pub leave: f64,
    pub leave_ease: Ease,
}

impl FlairTimings {
    #[must_use]
    pub fn plain() -> Self {
        Self {
            surface_enter: 0.3,
            surface_ease: Ease::out(2),
            flair_enter: 0.4,
            flair_ease: Ease::out(2),
            flair_delay_ratio: 0.0,
            follow: 0.4,
            follow_ease: Ease::out(2),
            leave: 0.3,
            leave_ease: Ease::out(2),
        }
    }

    #[must_use]
    pub fn big() -> Self {
        Self { flair_enter: 0.8, flair_ease: Ease::in_out(3), flair_delay_ratio: BIG_FLAIR_OVERLAP, ..Self::plain() }
    }
}

/// Surface and flair colors. Strings are CSS colors; the host resolves
/// `var(...)` references before building a [`FlairButton`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlairColors {
    pub surface_rest: String,
    pub surface_hover: String,
    pub flair_hover: Option<String>,
}

impl FlairColors {
    #[must_use]
    pub fn plain() -> Self {
        Self {
            surface_rest: "#ffffff".to_owned(),
            surface_hover: "rgba(255, 255, 255, 0.07)".to_owned(),
            flair_hover: None,
        }
    }

    #[must_use]
    pub fn big() -> Self {
        Self {
            surface_rest: "var(--_colors---brand)".to_owned(),
            surface_hover: "var(--_colors---background)".to_owned(),
            flair_hover: Some("#000000".to_owned()),
        }
    }

    /// Rewrite every color through `resolve`.
    #[must_use]
    pub fn resolved(&self, resolve: impl Fn(&str) -> String) -> Self {
        Self {
            surface_rest: resolve(&self.surface_rest),
            surface_hover: resolve(&self.surface_hover),
            flair_hover: self.flair_hover.as_deref().map(&resolve),
        }
    }
}

/// Everything that distinguishes one button family from another.
#[derive(Debug, Clone, PartialEq)]
pub struct FlairConfig {
    pub variant: Variant,
    pub timings: FlairTimings,
    pub colors: FlairColors,
}

impl FlairConfig {
    #[must_use]
    pub fn plain() -> Self {
        Self { variant: Variant::Plain, timings: FlairTimings::plain(), colors: FlairColors::plain() }
    }

    #[must_use]
    pub fn big() -> Self {
        Self { variant: Variant::Big, timings: FlairTimings::big(), colors: FlairColors::big() }
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.variant.capabilities()
    }

    /// The surface properties this variant animates.
    #[must_use]
    pub fn surface_props(&self) -> Vec<Prop> {
        let caps = self.capabilities();
        let mut props = Vec::with_capacity(2);
        if caps.background_crossfade {
            props.push(Prop::BackgroundColor);
        }
        if caps.border_color {
            props.push(Prop::BorderColor);
        }
        props
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlairPhase {
    Idle,
    Entering,
    Tracking,
    Leaving,
}

/// Observable per-button state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlairState {
    /// Last normalized pointer coordinate, `[0, 100]²`.
    pub position: Point,
    /// Pointer is inside the button.
    pub active: bool,
    pub phase: FlairPhase,
}

/// Where the flair heads when the pointer leaves at normalized `v`. Near an
/// edge it overshoots past that edge; in the middle band it stays put.
#[must_use]
pub fn exit_coordinate(v: f64) -> f64 {
    if v > EXIT_EDGE_HIGH {
        v + EXIT_OVERSHOOT
    } else if v < EXIT_EDGE_LOW {
        v - EXIT_OVERSHOOT
    } else {
        v
    }
}

/// One button's flair component.
#[derive(Debug, Clone)]
pub struct FlairButton {
    config: FlairConfig,
    surface: TargetId,
    flair: TargetId,
    state: FlairState,
    transition: Option<AnimationId>,
}

impl FlairButton {
    #[must_use]
    pub fn new(config: FlairConfig, surface: TargetId, flair: TargetId) -> Self {
        Self {
            config,
            surface,
            flair,
            state: FlairState { position: Point::new(0.0, 0.0), active: false, phase: FlairPhase::Idle },
            transition: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &FlairConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> FlairState {
        self.state
    }

    /// Write the resting state: flair collapsed, surface at its rest color.
    pub fn install(&self, anim: &mut Animator) {
        anim.set(self.flair, &[(Prop::Scale, Value::Number(0.0))]);
        let rest = self.rest_color();
        let values = self.config.surface_props().into_iter().map(|prop| (prop, rest.clone())).collect::<Vec<_>>();
        anim.set(self.surface, &values);
    }

    /// Current phase, advancing `Entering`/`Leaving` once their tweens end.
    pub fn phase(&mut self, anim: &Animator) -> FlairPhase {
        self.settle(anim);
        self.state.phase
    }

    fn settle(&mut self, anim: &Animator) {
        let running = self.transition.is_some_and(|id| anim.is_active(id));
        if running {
            return;
        }
        self.transition = None;
        self.state.phase = match self.state.phase {
            FlairPhase::Entering => FlairPhase::Tracking,
            FlairPhase::Leaving => FlairPhase::Idle,
            other => other,
        };
    }

    pub fn pointer_enter(&mut self, anim: &mut Animator, pointer: Point, rect: Rect) {
        let pos = normalized_position(pointer, rect);
        let t = &self.config.timings;
        self.kill_running(anim);
        anim.set(self.flair, &[(Prop::XPercent, Value::Number(pos.x)), (Prop::YPercent, Value::Number(pos.y))]);

        let mut tl = Timeline::new();
        tl.to(self.surface_tween(self.hover_color(), t.surface_enter, t.surface_ease), Position::At(0.0));

        let mut flair = Tween::to(self.flair).with(Prop::Scale, 1.0).duration(t.flair_enter).ease(t.flair_ease);
        if self.config.capabilities().background_crossfade
            && let Some(color) = &self.config.colors.flair_hover
        {
            flair = flair.with(Prop::BackgroundColor, Value::color_or_keyword(color));
        }
        tl.to(flair, Position::At(t.surface_enter * t.flair_delay_ratio));

        self.transition = Some(anim.play(tl));
        self.state = FlairState { position: pos, active: true, phase: FlairPhase::Entering };
    }

    /// Smoothly steer the flair toward the pointer. Ignored while inactive.
    pub fn pointer_move(&mut self, anim: &mut Animator, pointer: Point, rect: Rect) {
        if !self.state.active {
            return;
        }
        self.settle(anim);
        let pos = normalized_position(pointer, rect);
        let t = &self.config.timings;
        anim.to(
            Tween::to(self.flair)
                .with(Prop::XPercent, pos.x)
                .with(Prop::YPercent, pos.y)
                .duration(t.follow)
                .ease(t.follow_ease),
        );
        self.state.position = pos;
    }

    pub fn pointer_leave(&mut self, anim: &mut Animator, pointer: Point, rect: Rect) {
        let pos = normalized_position(pointer, rect);
        let t = &self.config.timings;
        self.kill_running(anim);

        let mut tl = Timeline::new();
        tl.to(self.surface_tween(self.rest_color(), t.leave, t.leave_ease), Position::At(0.0));
        let flair = Tween::to(self.flair)
            .with(Prop::XPercent, exit_coordinate(pos.x))
            .with(Prop::YPercent, exit_coordinate(pos.y))
            .with(Prop::Scale, 0.0)
            .duration(t.leave)
            .ease(t.leave_ease);
        tl.to(flair, Position::At(0.0));

        self.transition = Some(anim.play(tl));
        self.state = FlairState { position: pos, active: false, phase: FlairPhase::Leaving };
    }

    /// The flair element belongs to this button alone; the surface may be
    /// shared with other effects.
    fn kill_running(&self, anim: &mut Animator) {
        anim.kill_tweens_of(&[self.flair]);
        anim.kill_props_of(self.surface, &self.config.surface_props());
    }

    fn surface_tween(&self, color: Value, duration: f64, ease: Ease) -> Tween {
        self.config
            .surface_props()
            .into_iter()
            .fold(Tween::to(self.surface), |tween, prop| tween.with(prop, color.clone()))
            .duration(duration)
            .ease(ease)
    }

    fn rest_color(&self) -> Value {
        Value::color_or_keyword(&self.config.colors.surface_rest)
    }

    fn hover_color(&self) -> Value {
        Value::color_or_keyword(&self.config.colors.surface_hover)
    }
}
