#![allow(clippy::float_cmp)]

use super::*;
use crate::timeline::Position;

const A: TargetId = TargetId(1);
const B: TargetId = TargetId(2);

fn linear_x(target: TargetId, to: f64) -> Tween {
    Tween::to(target).with(Prop::X, to).duration(1.0).ease(Ease::Linear)
}

// =============================================================
// Frames
// =============================================================

#[test]
fn set_is_reported_on_next_tick() {
    let mut anim = Animator::new();
    anim.set(A, &[(Prop::Opacity, Value::Number(0.0))]);
    assert!(anim.has_work());
    let frame = anim.tick(0.0);
    assert!(frame.dirty.contains(&(A, Prop::Opacity)));
    assert!(!anim.has_work());
    assert!(anim.tick(0.016).dirty.is_empty());
}

#[test]
fn by_target_groups_dirty_props() {
    let mut anim = Animator::new();
    anim.set(A, &[(Prop::Opacity, Value::Number(0.0)), (Prop::Y, Value::Number(5.0))]);
    anim.set(B, &[(Prop::Scale, Value::Number(0.0))]);
    let grouped = anim.tick(0.0).by_target();
    assert_eq!(grouped, vec![(A, vec![Prop::Opacity, Prop::Y]), (B, vec![Prop::Scale])]);
}

#[test]
fn tween_completes_and_reports_once() {
    let mut anim = Animator::new();
    let id = anim.to(linear_x(A, 10.0));
    assert!(anim.tick(0.5).completed.is_empty());
    assert_eq!(anim.book().number(A, Prop::X), Some(5.0));
    assert_eq!(anim.tick(0.5).completed, vec![id]);
    assert!(!anim.is_active(id));
    assert!(anim.tick(0.5).completed.is_empty());
}

#[test]
fn invalid_deltas_are_ignored() {
    let mut anim = Animator::new();
    anim.to(linear_x(A, 10.0));
    anim.tick(f64::NAN);
    anim.tick(-3.0);
    assert_eq!(anim.book().number(A, Prop::X), Some(0.0));
}

// =============================================================
// Overwrite and kill
// =============================================================

#[test]
fn newer_tween_takes_over_shared_props() {
    let mut anim = Animator::new();
    let first = anim.to(linear_x(A, 100.0));
    anim.tick(0.5);
    let second = anim.to(linear_x(A, 0.0));
    assert!(!anim.is_active(first));
    assert!(anim.is_active(second));
    anim.tick(1.0);
    assert_eq!(anim.book().number(A, Prop::X), Some(0.0));
}

#[test]
fn overwrite_keeps_unrelated_props() {
    let mut anim = Animator::new();
    let first = anim.to(Tween::to(A).with(Prop::X, 10.0).with(Prop::Scale, 2.0).duration(1.0));
    anim.to(linear_x(A, 0.0));
    assert!(anim.is_active(first));
}

#[test]
fn kill_tweens_of_freezes_values_without_completing() {
    let mut anim = Animator::new();
    let id = anim.to(linear_x(A, 10.0));
    anim.tick(0.25);
    anim.kill_tweens_of(&[A]);
    assert!(!anim.is_active(id));
    let frame = anim.tick(1.0);
    assert!(frame.completed.is_empty());
    assert_eq!(anim.book().number(A, Prop::X), Some(2.5));
}

#[test]
fn kill_reaches_into_timelines() {
    let mut anim = Animator::new();
    let mut tl = Timeline::with_default_ease(Ease::Linear);
    tl.to(linear_x(A, 10.0), Position::At(0.0)).to(linear_x(B, 10.0), Position::At(0.0));
    let id = anim.play(tl);
    anim.tick(0.5);
    anim.kill_tweens_of(&[A]);
    assert!(anim.is_active(id));
    let frame = anim.tick(0.5);
    assert_eq!(frame.completed, vec![id]);
    assert_eq!(anim.book().number(A, Prop::X), Some(5.0));
    assert_eq!(anim.book().number(B, Prop::X), Some(10.0));
}

#[test]
fn kill_props_of_spares_other_props_on_the_same_target() {
    let mut anim = Animator::new();
    let mut tl = Timeline::with_default_ease(Ease::Linear);
    tl.to(linear_x(A, 10.0).with(Prop::Opacity, 1.0), Position::At(0.0));
    tl.set(A, vec![(Prop::Display, Value::keyword("block")), (Prop::BackgroundColor, Value::keyword("red"))], Position::At(0.8));
    let id = anim.play(tl);
    anim.set(A, &[(Prop::Opacity, Value::Number(0.0))]);
    anim.tick(0.5);

    anim.kill_props_of(A, &[Prop::X, Prop::BackgroundColor]);
    assert!(anim.is_active(id));
    let frame = anim.tick(0.5);
    assert_eq!(frame.completed, vec![id]);
    assert_eq!(anim.book().number(A, Prop::X), Some(5.0));
    assert_eq!(anim.book().number(A, Prop::Opacity), Some(1.0));
    assert_eq!(anim.book().current(A, Prop::Display), Some(Value::keyword("block")));
    assert_eq!(anim.book().current(A, Prop::BackgroundColor), None);
}

#[test]
fn kill_props_of_ends_a_tween_with_nothing_left() {
    let mut anim = Animator::new();
    let id = anim.to(linear_x(A, 10.0));
    let other = anim.to(linear_x(B, 10.0));
    anim.tick(0.25);
    anim.kill_props_of(A, &[Prop::X]);
    assert!(!anim.is_active(id));
    assert!(anim.is_active(other));
}

// =============================================================
// Pause, resume, spawn
// =============================================================

#[test]
fn pause_holds_elapsed_time() {
    let mut anim = Animator::new();
    let id = anim.to(linear_x(A, 10.0));
    anim.tick(0.2);
    anim.pause(id);
    anim.tick(5.0);
    assert_eq!(anim.elapsed(id), Some(0.2));
    assert!(anim.is_active(id));
    anim.resume(id);
    anim.tick(0.3);
    assert_eq!(anim.book().number(A, Prop::X), Some(5.0));
}

#[test]
fn spawned_tween_outlives_its_timeline() {
    let mut anim = Animator::new();
    let mut tl = Timeline::new();
    tl.to(linear_x(A, 1.0), Position::End);
    tl.then_spawn(Tween::to(A).with(Prop::Y, -5.0).duration(0.2).ease(Ease::Linear).yoyo(true).repeat(1));
    let id = anim.play(tl);

    let frame = anim.tick(1.0);
    assert_eq!(frame.completed, vec![id]);
    assert!(anim.has_work(), "bounce should still be running");

    anim.tick(0.2);
    assert_eq!(anim.book().number(A, Prop::Y), Some(-5.0));
    anim.tick(0.2);
    assert_eq!(anim.book().number(A, Prop::Y), Some(0.0));
    assert!(!anim.has_work());
}
