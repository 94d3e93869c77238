//! Tests for the slider year/offset mapping and drag gesture lifecycle.

use super::{DragGesture, YearScale};

const TRACK: f64 = 640.0;

#[test]
fn initial_thumb_position_is_proportional() {
    let scale = YearScale::new(1000, 2024);

    let offset = scale.offset_for_year(1512, TRACK);
    let expected = (1512.0 - 1000.0) / 1024.0 * TRACK;
    assert!((offset - expected).abs() < 1e-9);
}

#[test]
fn bounds_map_to_track_ends() {
    let scale = YearScale::new(1000, 2024);

    assert_eq!(scale.offset_for_year(1000, TRACK), 0.0);
    assert_eq!(scale.offset_for_year(2024, TRACK), TRACK);
}

#[test]
fn full_width_drag_releases_max_year() {
    let scale = YearScale::new(1000, 2024);

    let mut gesture = DragGesture::begin(0.0, TRACK);
    gesture.update(TRACK);
    assert_eq!(gesture.release(&scale), 2024);
}

#[test]
fn half_track_drag_releases_midpoint_year() {
    let scale = YearScale::new(1000, 2024);

    let mut gesture = DragGesture::begin(0.0, TRACK);
    gesture.update(TRACK / 2.0);
    let expected = 1000 + (0.5 * 1024.0_f64).round() as i32;
    assert_eq!(gesture.release(&scale), expected);
}

#[test]
fn no_year_is_produced_during_motion() {
    let scale = YearScale::new(2026, 2500);

    // A gesture only yields a year at release; every intermediate move
    // reports an offset for rendering and nothing else.
    let mut gesture = DragGesture::begin(100.0, TRACK);
    let offsets: Vec<f64> = [10.0, 55.0, -30.0, 200.0]
        .iter()
        .map(|dx| gesture.update(*dx))
        .collect();
    assert_eq!(offsets.len(), 4);

    let year = gesture.release(&scale);
    assert!((2026..=2500).contains(&year));
}

#[test]
fn drag_past_track_bounds_clamps() {
    let scale = YearScale::new(1000, 2024);

    let mut gesture = DragGesture::begin(300.0, TRACK);
    assert_eq!(gesture.update(10_000.0), TRACK);
    assert_eq!(gesture.release(&scale), 2024);

    let mut gesture = DragGesture::begin(300.0, TRACK);
    assert_eq!(gesture.update(-10_000.0), 0.0);
    assert_eq!(gesture.release(&scale), 1000);
}

#[test]
fn moves_are_cumulative_from_the_base_offset() {
    let scale = YearScale::new(1000, 2024);

    let base = scale.offset_for_year(1512, TRACK);
    let mut gesture = DragGesture::begin(base, TRACK);
    gesture.update(50.0);
    // A later smaller delta moves the thumb back toward the base.
    let offset = gesture.update(20.0);
    assert!((offset - (base + 20.0)).abs() < 1e-9);
    let _ = gesture.release(&scale);
}

#[test]
fn marker_step_follows_span() {
    assert_eq!(YearScale::new(0, 2000).marker_step(), 500);
    assert_eq!(YearScale::new(1000, 1800).marker_step(), 100);
    assert_eq!(YearScale::new(1900, 2100).marker_step(), 50);
}

#[test]
fn markers_never_pass_max_year() {
    let scale = YearScale::new(1000, 2024);
    let markers: Vec<i32> = scale.markers().collect();

    assert_eq!(markers, vec![1000, 1500, 2000]);
    assert!(markers.iter().all(|&m| m <= 2024));
}

#[test]
fn markers_include_max_year_when_aligned() {
    let scale = YearScale::new(1000, 2000);
    let markers: Vec<i32> = scale.markers().collect();
    assert_eq!(markers, vec![1000, 1100, 1200, 1300, 1400, 1500, 1600, 1700, 1800, 1900, 2000]);
}

#[test]
fn year_round_trips_through_offset() {
    let scale = YearScale::new(2026, 2500);
    for year in [2026, 2100, 2263, 2499, 2500] {
        let offset = scale.offset_for_year(year, TRACK);
        assert_eq!(scale.year_at_offset(offset, TRACK), year);
    }
}
