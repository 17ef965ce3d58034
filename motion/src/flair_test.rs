#![allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use super::*;
use crate::style::Rgba;

const SURFACE: TargetId = TargetId(10);
const FLAIR: TargetId = TargetId(11);

fn rect() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 100.0)
}

fn plain() -> (Animator, FlairButton) {
    let mut anim = Animator::new();
    let button = FlairButton::new(FlairConfig::plain(), SURFACE, FLAIR);
    button.install(&mut anim);
    anim.tick(0.0);
    (anim, button)
}

fn big() -> (Animator, FlairButton) {
    let mut anim = Animator::new();
    let colors = FlairColors::big().resolved(|raw| match raw {
        "var(--_colors---brand)" => "#ff5500".to_owned(),
        "var(--_colors---background)" => "#111111".to_owned(),
        other => other.to_owned(),
    });
    let config = FlairConfig { colors, ..FlairConfig::big() };
    let button = FlairButton::new(config, SURFACE, FLAIR);
    button.install(&mut anim);
    anim.tick(0.0);
    (anim, button)
}

fn run_for(anim: &mut Animator, seconds: f64) {
    let steps = (seconds / 0.01).ceil() as usize;
    for _ in 0..steps {
        anim.tick(0.01);
    }
}

// =============================================================
// Exit coordinates
// =============================================================

#[test]
fn exit_coordinate_pushes_past_far_edge() {
    assert_eq!(exit_coordinate(95.0), 115.0);
    assert_eq!(exit_coordinate(100.0), 120.0);
}

#[test]
fn exit_coordinate_pushes_past_near_edge() {
    assert_eq!(exit_coordinate(5.0), -15.0);
    assert_eq!(exit_coordinate(0.0), -20.0);
}

#[test]
fn exit_coordinate_keeps_middle_band() {
    assert_eq!(exit_coordinate(50.0), 50.0);
    assert_eq!(exit_coordinate(10.0), 10.0);
    assert_eq!(exit_coordinate(90.0), 90.0);
}

// =============================================================
// Variants
// =============================================================

#[test]
fn variants_expose_distinct_capabilities() {
    assert_eq!(Variant::Plain.capabilities(), Capabilities { background_crossfade: false, border_color: true });
    assert_eq!(Variant::Big.capabilities(), Capabilities { background_crossfade: true, border_color: false });
    assert_eq!(FlairConfig::plain().surface_props(), vec![Prop::BorderColor]);
    assert_eq!(FlairConfig::big().surface_props(), vec![Prop::BackgroundColor]);
}

#[test]
fn big_timings_overlap_flair_into_background() {
    let t = FlairTimings::big();
    assert_eq!(t.flair_delay_ratio, 0.7);
    assert_eq!(t.surface_enter, 0.3);
}

#[test]
fn install_writes_resting_state() {
    let (anim, _button) = plain();
    assert_eq!(anim.book().number(FLAIR, Prop::Scale), Some(0.0));
    assert_eq!(anim.book().current(SURFACE, Prop::BorderColor), Some(Value::Color(Rgba::new(255.0, 255.0, 255.0, 1.0))));
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn enter_places_flair_instantly_then_grows() {
    let (mut anim, mut button) = plain();
    button.pointer_enter(&mut anim, Point::new(30.0, 80.0), rect());
    assert_eq!(anim.book().number(FLAIR, Prop::XPercent), Some(30.0));
    assert_eq!(anim.book().number(FLAIR, Prop::YPercent), Some(80.0));
    assert_eq!(button.phase(&anim), FlairPhase::Entering);
    assert!(button.state().active);

    run_for(&mut anim, 0.5);
    assert_eq!(anim.book().number(FLAIR, Prop::Scale), Some(1.0));
    assert_eq!(
        anim.book().current(SURFACE, Prop::BorderColor),
        Some(Value::Color(Rgba::new(255.0, 255.0, 255.0, 0.07)))
    );
    assert_eq!(button.phase(&anim), FlairPhase::Tracking);
}

#[test]
fn move_follows_smoothly_rather_than_jumping() {
    let (mut anim, mut button) = plain();
    button.pointer_enter(&mut anim, Point::new(10.0, 10.0), rect());
    run_for(&mut anim, 0.5);
    button.pointer_move(&mut anim, Point::new(60.0, 60.0), rect());
    anim.tick(0.05);
    let x = anim.book().number(FLAIR, Prop::XPercent).unwrap_or_default();
    assert!(x > 10.0 && x < 60.0, "flair should be between, got {x}");
    run_for(&mut anim, 0.5);
    assert_eq!(anim.book().number(FLAIR, Prop::XPercent), Some(60.0));
    assert_eq!(button.state().position, Point::new(60.0, 60.0));
}

#[test]
fn move_is_ignored_while_inactive() {
    let (mut anim, mut button) = plain();
    button.pointer_move(&mut anim, Point::new(60.0, 60.0), rect());
    assert!(!anim.has_work());
    assert_eq!(button.phase(&anim), FlairPhase::Idle);
}

#[test]
fn leave_shrinks_out_through_the_exit_edge() {
    let (mut anim, mut button) = plain();
    button.pointer_enter(&mut anim, Point::new(50.0, 50.0), rect());
    run_for(&mut anim, 0.5);
    button.pointer_leave(&mut anim, Point::new(95.0, 50.0), rect());
    assert_eq!(button.phase(&anim), FlairPhase::Leaving);
    run_for(&mut anim, 0.4);
    assert_eq!(anim.book().number(FLAIR, Prop::XPercent), Some(115.0));
    assert_eq!(anim.book().number(FLAIR, Prop::YPercent), Some(50.0));
    assert_eq!(anim.book().number(FLAIR, Prop::Scale), Some(0.0));
    assert_eq!(anim.book().current(SURFACE, Prop::BorderColor), Some(Value::Color(Rgba::new(255.0, 255.0, 255.0, 1.0))));
    assert_eq!(button.phase(&anim), FlairPhase::Idle);
}

#[test]
fn leave_during_enter_cancels_the_grow() {
    let (mut anim, mut button) = plain();
    button.pointer_enter(&mut anim, Point::new(50.0, 5.0), rect());
    anim.tick(0.1);
    button.pointer_leave(&mut anim, Point::new(50.0, 2.0), rect());
    run_for(&mut anim, 0.4);
    assert_eq!(anim.book().number(FLAIR, Prop::Scale), Some(0.0));
    assert_eq!(anim.book().number(FLAIR, Prop::YPercent), Some(-18.0));
    assert!(!anim.has_work());
}

#[test]
fn reenter_during_leave_restarts_cleanly() {
    let (mut anim, mut button) = plain();
    button.pointer_enter(&mut anim, Point::new(50.0, 50.0), rect());
    run_for(&mut anim, 0.5);
    button.pointer_leave(&mut anim, Point::new(99.0, 50.0), rect());
    anim.tick(0.1);
    button.pointer_enter(&mut anim, Point::new(20.0, 20.0), rect());
    assert_eq!(anim.book().number(FLAIR, Prop::XPercent), Some(20.0));
    assert_eq!(button.phase(&anim), FlairPhase::Entering);
    run_for(&mut anim, 0.5);
    assert_eq!(anim.book().number(FLAIR, Prop::Scale), Some(1.0));
    assert_eq!(button.phase(&anim), FlairPhase::Tracking);
}

#[test]
fn big_variant_crossfades_background_before_flair() {
    let (mut anim, mut button) = big();
    button.pointer_enter(&mut anim, Point::new(50.0, 50.0), rect());
    run_for(&mut anim, 0.15);
    assert_eq!(anim.book().number(FLAIR, Prop::Scale), Some(0.0), "flair waits for 70% of the crossfade");
    run_for(&mut anim, 1.0);
    assert_eq!(anim.book().number(FLAIR, Prop::Scale), Some(1.0));
    assert_eq!(anim.book().current(FLAIR, Prop::BackgroundColor), Some(Value::Color(Rgba::new(0.0, 0.0, 0.0, 1.0))));
    assert_eq!(
        anim.book().current(SURFACE, Prop::BackgroundColor),
        Some(Value::Color(Rgba::new(17.0, 17.0, 17.0, 1.0)))
    );
}

#[test]
fn big_variant_leave_restores_brand_background() {
    let (mut anim, mut button) = big();
    button.pointer_enter(&mut anim, Point::new(50.0, 50.0), rect());
    run_for(&mut anim, 1.2);
    button.pointer_leave(&mut anim, Point::new(3.0, 97.0), rect());
    run_for(&mut anim, 0.4);
    assert_eq!(anim.book().number(FLAIR, Prop::XPercent), Some(-17.0));
    assert_eq!(anim.book().number(FLAIR, Prop::YPercent), Some(117.0));
    assert_eq!(
        anim.book().current(SURFACE, Prop::BackgroundColor),
        Some(Value::Color(Rgba::new(255.0, 85.0, 0.0, 1.0)))
    );
}

#[test]
fn hover_leaves_other_surface_animations_running() {
    let (mut anim, mut button) = big();
    anim.set(SURFACE, &[(Prop::Opacity, Value::Number(0.0))]);
    let fade_in = anim.to(Tween::to(SURFACE).with(Prop::Opacity, 1.0).duration(1.0));
    anim.tick(0.2);

    button.pointer_enter(&mut anim, Point::new(50.0, 50.0), rect());
    anim.tick(0.1);
    button.pointer_leave(&mut anim, Point::new(50.0, 99.0), rect());
    assert!(anim.is_active(fade_in));

    run_for(&mut anim, 1.0);
    assert_eq!(anim.book().number(SURFACE, Prop::Opacity), Some(1.0));
    assert_eq!(
        anim.book().current(SURFACE, Prop::BackgroundColor),
        Some(Value::Color(Rgba::new(255.0, 85.0, 0.0, 1.0)))
    );
}
