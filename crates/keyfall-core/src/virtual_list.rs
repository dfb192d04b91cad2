use std::ops::Range;

/// Window of a virtualized list for one frame.
///
/// - `range`: indices of the items that overlap the viewport
/// - `translate_px`: offset to apply to the list container (e.g. a CSS
///   `translateX`) so item positions stay in absolute list coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct ListWindow {
    pub range: Range<usize>,
    pub translate_px: f64,
}

/// Running index range over items laid out along one axis.
///
/// Items must be sorted by their offset and must not overlap. The range is
/// moved incrementally from the previous frame, so steady scrolling touches
/// only the items entering or leaving the window.
#[derive(Clone, Debug, Default)]
pub struct VirtualList {
    start: usize,
    end: usize,
}

impl VirtualList {
    pub fn new() -> Self {
        Self::default()
    }

    /// `span_of` returns the `(offset, extent)` of an item in list pixels.
    pub fn update<T>(
        &mut self,
        items: &[T],
        span_of: impl Fn(&T) -> (f64, f64),
        scroll_px: f64,
        viewport_px: f64,
    ) -> ListWindow {
        let len = items.len();
        let window_end = scroll_px + viewport_px;
        let item_end = |i: usize| {
            let (offset, extent) = span_of(&items[i]);
            offset + extent
        };
        let item_start = |i: usize| span_of(&items[i]).0;

        self.start = self.start.min(len);
        while self.start > 0 && item_end(self.start - 1) > scroll_px {
            self.start -= 1;
        }
        while self.start < len && item_end(self.start) <= scroll_px {
            self.start += 1;
        }

        self.end = self.end.clamp(self.start, len);
        while self.end > self.start && item_start(self.end - 1) >= window_end {
            self.end -= 1;
        }
        while self.end < len && item_start(self.end) < window_end {
            self.end += 1;
        }

        ListWindow {
            range: self.start..self.end,
            translate_px: -scroll_px,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn reset(&mut self) {
        self.start = 0;
        self.end = 0;
    }
}
