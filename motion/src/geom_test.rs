#![allow(clippy::float_cmp)]

use super::*;

fn button() -> Rect {
    Rect::new(100.0, 50.0, 200.0, 40.0)
}

#[test]
fn map_range_scales_linearly() {
    assert_eq!(map_range(50.0, 0.0, 200.0, 0.0, 100.0), 25.0);
    assert_eq!(map_range(-20.0, 0.0, 200.0, 0.0, 100.0), -10.0);
}

#[test]
fn map_range_with_empty_input_returns_out_min() {
    assert_eq!(map_range(5.0, 3.0, 3.0, 0.0, 100.0), 0.0);
}

#[test]
fn normalized_position_inside_box() {
    let p = normalized_position(Point::new(150.0, 60.0), button());
    assert_eq!(p, Point::new(25.0, 25.0));
}

#[test]
fn normalized_position_edges_are_exact() {
    let rect = button();
    let top_left = normalized_position(Point::new(100.0, 50.0), rect);
    assert_eq!(top_left, Point::new(0.0, 0.0));
    let bottom_right = normalized_position(Point::new(300.0, 90.0), rect);
    assert_eq!(bottom_right, Point::new(100.0, 100.0));
}

#[test]
fn normalized_position_clamps_outside_box() {
    let rect = button();
    let p = normalized_position(Point::new(20.0, 500.0), rect);
    assert_eq!(p, Point::new(0.0, 100.0));
}

#[test]
fn normalized_position_stays_in_range_across_grid() {
    let rect = button();
    for i in 0..=20 {
        for j in 0..=20 {
            let pointer = Point::new(rect.left + f64::from(i) * 10.0, rect.top + f64::from(j) * 2.0);
            let p = normalized_position(pointer, rect);
            assert!((0.0..=100.0).contains(&p.x), "x out of range: {p:?}");
            assert!((0.0..=100.0).contains(&p.y), "y out of range: {p:?}");
        }
    }
}

#[test]
fn normalized_position_zero_sized_box_maps_to_origin() {
    let p = normalized_position(Point::new(10.0, 10.0), Rect::new(10.0, 10.0, 0.0, 0.0));
    assert_eq!(p, Point::new(0.0, 0.0));
}
