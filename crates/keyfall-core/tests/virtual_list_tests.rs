use keyfall_core::{ListWindow, VirtualList};
use std::ops::Range;

/// Ten cells, 100px each, laid out back to back.
fn cells() -> Vec<(f64, f64)> {
    (0..10).map(|i| (i as f64 * 100.0, 100.0)).collect()
}

fn brute_force(items: &[(f64, f64)], scroll: f64, viewport: f64) -> Range<usize> {
    let hits: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, (o, e))| o + e > scroll && *o < scroll + viewport)
        .map(|(i, _)| i)
        .collect();
    match (hits.first(), hits.last()) {
        (Some(&a), Some(&b)) => a..b + 1,
        _ => {
            let at = items.iter().take_while(|(o, e)| o + e <= scroll).count();
            at..at
        }
    }
}

#[test]
fn window_covers_partially_visible_cells() {
    let items = cells();
    let mut list = VirtualList::new();
    let window = list.update(&items, |c| *c, 250.0, 300.0);
    assert_eq!(
        window,
        ListWindow {
            range: 2..6,
            translate_px: -250.0
        }
    );
    assert_eq!(list.range(), 2..6);
}

#[test]
fn window_follows_scroll_in_both_directions() {
    let items = cells();
    let mut list = VirtualList::new();
    list.update(&items, |c| *c, 250.0, 300.0);
    assert_eq!(list.update(&items, |c| *c, 0.0, 300.0).range, 0..3);
    assert_eq!(list.update(&items, |c| *c, 900.0, 300.0).range, 9..10);
    assert_eq!(list.update(&items, |c| *c, 5000.0, 300.0).range, 10..10);
    assert_eq!(list.update(&items, |c| *c, 120.0, 100.0).range, 1..3);
}

#[test]
fn incremental_updates_match_a_full_scan() {
    let items = cells();
    let mut list = VirtualList::new();
    let scrolls = [0.0, 40.0, 99.0, 100.0, 350.0, 360.0, 720.0, 10.0, 600.0, 601.0, 0.0];
    for scroll in scrolls {
        for viewport in [50.0, 300.0, 1200.0] {
            let window = list.update(&items, |c| *c, scroll, viewport);
            assert_eq!(
                window.range,
                brute_force(&items, scroll, viewport),
                "scroll {scroll} viewport {viewport}"
            );
        }
    }
}

#[test]
fn empty_list_and_reset() {
    let empty: Vec<(f64, f64)> = Vec::new();
    let mut list = VirtualList::new();
    assert_eq!(list.update(&empty, |c| *c, 100.0, 300.0).range, 0..0);

    let items = cells();
    list.update(&items, |c| *c, 400.0, 300.0);
    list.reset();
    assert_eq!(list.range(), 0..0);
    // shrinking the list clamps the running range
    list.update(&items, |c| *c, 800.0, 300.0);
    assert_eq!(list.update(&items[..3], |c| *c, 800.0, 300.0).range, 3..3);
}
