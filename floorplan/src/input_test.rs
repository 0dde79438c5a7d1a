#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{ZOOM_MAX, ZOOM_MIN};

// --- Gesture ---

#[test]
fn press_without_movement_is_a_click() {
    let mut g = Gesture::default();
    let mut cam = Camera::default();
    g.pointer_down(Point::new(10.0, 10.0));
    assert!(!g.pointer_move(Point::new(11.0, 11.0), &mut cam));
    assert_eq!(g.pointer_up(), Release::Click);
    assert_eq!(cam, Camera::default());
    assert_eq!(g, Gesture::Idle);
}

#[test]
fn drag_past_threshold_pans_by_total_travel() {
    let mut g = Gesture::default();
    let mut cam = Camera::default();
    g.pointer_down(Point::new(0.0, 0.0));
    assert!(g.pointer_move(Point::new(10.0, 0.0), &mut cam));
    assert!(g.is_panning());
    assert!(g.pointer_move(Point::new(15.0, 5.0), &mut cam));
    assert_eq!((cam.pan_x, cam.pan_y), (15.0, 5.0));
    assert_eq!(g.pointer_up(), Release::Pan);
}

#[test]
fn move_while_idle_does_nothing() {
    let mut g = Gesture::Idle;
    let mut cam = Camera::default();
    assert!(!g.pointer_move(Point::new(50.0, 50.0), &mut cam));
    assert_eq!(g.pointer_up(), Release::None);
}

#[test]
fn cancel_drops_the_press() {
    let mut g = Gesture::default();
    g.pointer_down(Point::new(1.0, 1.0));
    g.cancel();
    assert_eq!(g.pointer_up(), Release::None);
}

// --- Wheel ---

#[test]
fn wheel_up_zooms_in() {
    let mut cam = Camera::default();
    wheel_zoom(&mut cam, Point::new(0.0, 0.0), -100.0);
    assert!((cam.zoom - WHEEL_ZOOM_STEP).abs() < 1e-12);
}

#[test]
fn wheel_down_zooms_out() {
    let mut cam = Camera::default();
    wheel_zoom(&mut cam, Point::new(0.0, 0.0), 100.0);
    assert!((cam.zoom - 1.0 / WHEEL_ZOOM_STEP).abs() < 1e-12);
}

#[test]
fn wheel_zero_delta_is_ignored() {
    let mut cam = Camera::default();
    wheel_zoom(&mut cam, Point::new(5.0, 5.0), 0.0);
    assert_eq!(cam, Camera::default());
}

#[test]
fn wheel_stays_within_limits() {
    let mut cam = Camera::default();
    for _ in 0..100 {
        wheel_zoom(&mut cam, Point::new(0.0, 0.0), -1.0);
    }
    assert_eq!(cam.zoom, ZOOM_MAX);
    for _ in 0..100 {
        wheel_zoom(&mut cam, Point::new(0.0, 0.0), 1.0);
    }
    assert_eq!(cam.zoom, ZOOM_MIN);
}

// --- Tooltip ---

#[test]
fn tooltip_is_offset_from_pointer_inside_container() {
    let pos = tooltip_position(Point::new(300.0, 220.0), Point::new(100.0, 200.0));
    assert_eq!(pos, Point::new(215.0, 35.0));
}
