// Host-side tests for the viewport projector and played-ratio logic.

mod common;

use common::*;
use keyfall_core::*;

#[test]
fn falling_scenario_projects_note_onto_screen() {
    let settings = two_hands();
    let items = vec![note(5.0, 1.0, 60, 0)];
    let state = falling(4.5, &items, &settings);

    let viewport = Viewport::compute(&state);
    assert_eq!(viewport, Viewport { start: 1050.0, end: 450.0 });

    let span = project_item(&items[0], &state);
    assert_eq!(span.start, 550.0);
    assert_eq!(span.end, 450.0);
    assert!((0.0..=600.0).contains(&span.start));
    assert!((0.0..=600.0).contains(&span.end));
}

#[test]
fn measures_project_to_a_single_line() {
    let settings = two_hands();
    let items = vec![measure(3.0, 2)];
    for state in [falling(2.0, &items, &settings), sheet(2.0, &items, &settings)] {
        let span = project_item(&items[0], &state);
        assert_eq!(span.start, span.end);
    }
}

#[test]
fn falling_projection_is_monotonic_in_time() {
    let settings = two_hands();
    let items: Vec<Event> = (0..200).map(|i| note(i as f64 * 0.25, 0.5, 60, 0)).collect();
    let state = falling(7.3, &items, &settings);
    for pair in items.windows(2) {
        let a = project_item(&pair[0], &state);
        let b = project_item(&pair[1], &state);
        assert!(a.start > b.start, "earlier note must sit lower on screen");
    }
}

#[test]
fn sheet_projection_is_monotonic_in_time() {
    let settings = two_hands();
    let items: Vec<Event> = (0..200).map(|i| note(i as f64 * 0.25, 0.5, 60, 0)).collect();
    let state = sheet(7.3, &items, &settings);
    for pair in items.windows(2) {
        let a = project_item(&pair[0], &state);
        let b = project_item(&pair[1], &state);
        assert!(a.start < b.start, "earlier note must sit further left");
    }
}

#[test]
fn sheet_viewport_spans_area_right_of_play_line() {
    let settings = two_hands();
    let items = vec![];
    let state = sheet(2.0, &items, &settings);
    let viewport = Viewport::compute(&state);
    assert_eq!(viewport.start, 200.0);
    assert_eq!(viewport.end, 200.0 + 1040.0 - constants::STAFF_START_X);
}

#[test]
fn sheet_note_due_now_sits_on_play_line() {
    let settings = two_hands();
    let items = vec![note(3.0, 0.5, 64, 0)];
    let state = sheet(3.0, &items, &settings);
    let span = project_item(&items[0], &state);
    assert_eq!(span.start, 0.0);
    assert_eq!(span.end, 50.0);
}

#[test]
fn played_ratio_tracks_elapsed_fraction() {
    let settings = two_hands();
    let items = vec![note(2.0, 1.0, 60, 0)];
    let Event::Note(n) = &items[0] else {
        unreachable!()
    };
    let at = |t: f64| played_ratio(n, &falling(t, &items, &settings));
    assert_eq!(at(0.0), 0.0);
    assert_eq!(at(2.0), 0.0);
    assert!((at(2.25) - 0.25).abs() < 1e-9);
    assert!((at(2.5) - 0.5).abs() < 1e-9);
    assert_eq!(at(3.0), 1.0);
    assert_eq!(at(10.0), 1.0);
}

#[test]
fn played_ratio_of_zero_duration_note_is_a_step() {
    let settings = two_hands();
    let items = vec![note(2.0, 0.0, 60, 0)];
    let Event::Note(n) = &items[0] else {
        unreachable!()
    };
    assert_eq!(played_ratio(n, &falling(1.99, &items, &settings)), 0.0);
    assert_eq!(played_ratio(n, &falling(2.0, &items, &settings)), 1.0);
}

#[test]
fn visualization_ids_round_trip_and_reject_unknown() {
    for mode in [Visualization::FallingNotes, Visualization::Sheet] {
        assert_eq!(mode.to_string().parse::<Visualization>(), Ok(mode));
    }
    assert_eq!(
        "waterfall".parse::<Visualization>(),
        Err(VizError::UnknownVisualization("waterfall".to_string()))
    );
}

#[test]
fn zero_sized_canvas_still_projects() {
    let settings = two_hands();
    let items = vec![note(1.0, 1.0, 60, 0)];
    let state = GivenState {
        width: 0.0,
        height: 0.0,
        ..falling(0.0, &items, &settings)
    };
    let span = project_item(&items[0], &state);
    assert_eq!(span.start, -100.0);
    assert_eq!(span.end, -200.0);
}
