//! Windowed visibility query over the time-sorted timeline.
//!
//! Projection is monotonic in `time` for a fixed frame, so the events that
//! can intersect the screen form one contiguous slice. The slice is found
//! with two boundary predicates from [`Projection`]: the first event that has
//! scrolled onto the screen opens it, the first event beyond the far edge
//! closes it.

use crate::event::Event;
use crate::hands::is_matching_hand;
use crate::state::GivenState;
use crate::viewport::{Projection, Span, Visualization};
use std::ops::Range;

/// Contiguous index range of `items` that may intersect the screen,
/// scanning forward from `from`.
pub fn visible_range(items: &[Event], projection: &Projection, from: usize) -> Range<usize> {
    let from = from.min(items.len());
    let Some(first) = items[from..]
        .iter()
        .position(|item| projection.is_entered(projection.project(item)))
        .map(|i| from + i)
    else {
        return items.len()..items.len();
    };
    let end = items[first..]
        .iter()
        .position(|item| projection.has_exited(projection.project(item)))
        .map_or(items.len(), |i| first + i);
    first..end
}

/// Events of `range` that are on screen and eligible under the hand filter,
/// paired with their projected span.
pub fn in_view<'s>(
    state: &'s GivenState<'s>,
    projection: Projection,
    range: Range<usize>,
) -> impl Iterator<Item = (&'s Event, Span)> + 's {
    let items: &'s [Event] = state.items;
    items[range].iter().filter_map(move |item| {
        let span = projection.project(item);
        (projection.is_entered(span) && is_matching_hand(item, state)).then_some((item, span))
    })
}

/// All events visible in the frame described by `state`.
pub fn get_items_in_view<'a>(state: &GivenState<'a>) -> Vec<&'a Event> {
    let projection = Projection::new(state);
    let range = visible_range(state.items, &projection, 0);
    let items: &'a [Event] = state.items;
    items[range]
        .iter()
        .filter(|item| projection.is_entered(projection.project(item)) && is_matching_hand(item, state))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct CursorKey {
    items_addr: usize,
    items_len: usize,
    visualization: Visualization,
    pps: f64,
    width: f64,
    height: f64,
    time: f64,
}

impl CursorKey {
    fn new(items: &[Event], projection: &Projection) -> Self {
        Self {
            items_addr: items.as_ptr() as usize,
            items_len: items.len(),
            visualization: projection.visualization,
            pps: projection.pps,
            width: projection.width,
            height: projection.height,
            time: projection.time,
        }
    }

    /// Same timeline and layout, with time not moving backwards. The timeline
    /// is identified by address and length only; callers that rewrite a
    /// buffer in place must `reset` the cursor.
    fn continues(&self, next: &CursorKey) -> bool {
        self.items_addr == next.items_addr
            && self.items_len == next.items_len
            && self.visualization == next.visualization
            && self.pps == next.pps
            && self.width == next.width
            && self.height == next.height
            && next.time >= self.time
    }
}

/// Carries the previous frame's first visible index forward.
///
/// While playback advances, events before that index can only move further
/// off screen, so the next scan starts there. A backwards jump in time or
/// any change of timeline or layout restarts the scan from the head.
#[derive(Clone, Debug, Default)]
pub struct ViewCursor {
    key: Option<CursorKey>,
    start: usize,
}

impl ViewCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(&mut self, items: &[Event], projection: &Projection) -> Range<usize> {
        let key = CursorKey::new(items, projection);
        let from = match &self.key {
            Some(prev) if prev.continues(&key) => self.start,
            Some(prev) => {
                if key.time < prev.time {
                    log::debug!(
                        "[view] seek detected ({:.3}s -> {:.3}s), rescanning from head",
                        prev.time,
                        key.time
                    );
                }
                0
            }
            None => 0,
        };
        let range = visible_range(items, projection, from);
        self.start = range.start;
        self.key = Some(key);
        range
    }

    /// Rescan from the head on the next call.
    pub fn reset(&mut self) {
        self.key = None;
        self.start = 0;
    }
}
