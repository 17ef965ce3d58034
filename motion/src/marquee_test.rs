#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn loop_distance_is_half_the_doubled_row() {
    let marquee = MarqueeState::new(2000.0, 100.0);
    assert_eq!(marquee.loop_distance(), 1000.0);
    assert!(marquee.is_playing());
    assert_eq!(marquee.offset(), 0.0);
}

#[test]
fn offset_moves_linearly_left() {
    let mut marquee = MarqueeState::new(2000.0, 100.0);
    marquee.tick(25.0);
    assert_eq!(marquee.offset(), -250.0);
}

#[test]
fn full_cycle_snaps_back_to_zero() {
    let mut marquee = MarqueeState::new(1200.0, 60.0);
    marquee.tick(60.0);
    assert_eq!(marquee.offset(), 0.0);
    marquee.tick(90.0);
    assert_eq!(marquee.offset(), -300.0);
}

#[test]
fn offset_stays_within_one_loop() {
    let mut marquee = MarqueeState::new(1000.0, 10.0);
    for _ in 0..1000 {
        marquee.tick(0.37);
        let offset = marquee.offset();
        assert!(offset <= 0.0 && offset > -500.0, "offset {offset} out of range");
    }
}

#[test]
fn pause_keeps_offset() {
    let mut marquee = MarqueeState::new(2000.0, 100.0);
    marquee.tick(10.0);
    marquee.apply_trigger(TriggerEvent::Leave);
    assert!(!marquee.tick(10.0));
    assert_eq!(marquee.offset(), -100.0);
    marquee.apply_trigger(TriggerEvent::EnterBack);
    marquee.tick(10.0);
    assert_eq!(marquee.offset(), -200.0);
}

#[test]
fn empty_row_never_moves() {
    let mut marquee = MarqueeState::new(0.0, 100.0);
    marquee.tick(30.0);
    assert_eq!(marquee.offset(), 0.0);
}
