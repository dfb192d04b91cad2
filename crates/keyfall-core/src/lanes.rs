use crate::constants::{BLACK_KEY_WIDTH_RATIO, HIGHEST_NOTE, LOWEST_NOTE};

/// Horizontal pixel band assigned to one piano key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lane {
    pub left: f64,
    pub width: f64,
}

impl Lane {
    #[inline]
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Inclusive MIDI note range shown on the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PianoRange {
    pub low: u8,
    pub high: u8,
}

impl Default for PianoRange {
    fn default() -> Self {
        Self {
            low: LOWEST_NOTE,
            high: HIGHEST_NOTE,
        }
    }
}

impl PianoRange {
    /// Range covering `low..=high`, with the ends swapped if given in reverse.
    pub fn new(low: u8, high: u8) -> Self {
        Self {
            low: low.min(high),
            high: low.max(high),
        }
    }

    /// The same keys with `low <= high`.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::new(self.low, self.high)
    }

    /// Range covering `low..=high`, widened outward to white keys so black
    /// lanes never hang off either edge of the canvas.
    pub fn for_notes(low: u8, high: u8) -> Self {
        let Self { mut low, mut high } = Self::new(low, high);
        if is_black(low) {
            low -= 1;
        }
        if is_black(high) {
            high += 1;
        }
        Self { low, high }
    }

    #[inline]
    pub fn contains(&self, midi: u8) -> bool {
        (self.low..=self.high).contains(&midi)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.high.abs_diff(self.low) as usize + 1
    }

    /// Lane index of a note, if it falls within the range.
    #[inline]
    pub fn index_of(&self, midi: u8) -> Option<usize> {
        self.contains(midi).then(|| (midi - self.low) as usize)
    }

    pub fn white_key_count(&self) -> usize {
        (self.low..=self.high).filter(|&m| !is_black(m)).count()
    }
}

#[inline]
pub fn is_black(midi: u8) -> bool {
    matches!(midi % 12, 1 | 3 | 6 | 8 | 10)
}

/// Lay the keys of `range` out across `canvas_width`, one lane per key,
/// indexed by `midi - range.low`.
pub fn compute_lanes(canvas_width: f64, range: PianoRange) -> Vec<Lane> {
    let range = range.normalized();
    let white_width = canvas_width / range.white_key_count() as f64;
    let black_width = white_width * BLACK_KEY_WIDTH_RATIO;
    let mut lanes = Vec::with_capacity(range.len());
    let mut white_count = 0usize;
    for midi in range.low..=range.high {
        let boundary = white_width * white_count as f64;
        if is_black(midi) {
            lanes.push(Lane {
                left: boundary - black_width / 2.0,
                width: black_width,
            });
        } else {
            lanes.push(Lane {
                left: boundary,
                width: white_width,
            });
            white_count += 1;
        }
    }
    lanes
}

/// Lane layout memoized on canvas width.
#[derive(Debug, Default)]
pub struct LaneCache {
    range: PianoRange,
    width: Option<f64>,
    lanes: Vec<Lane>,
}

impl LaneCache {
    pub fn new(range: PianoRange) -> Self {
        Self {
            range: range.normalized(),
            width: None,
            lanes: Vec::new(),
        }
    }

    pub fn range(&self) -> PianoRange {
        self.range
    }

    /// Change the displayed key range; the next `lanes` call recomputes.
    pub fn set_range(&mut self, range: PianoRange) {
        let range = range.normalized();
        if range != self.range {
            self.range = range;
            self.width = None;
        }
    }

    /// Lanes for `width`, recomputed only when the width differs from the
    /// previous call.
    pub fn lanes(&mut self, width: f64) -> &[Lane] {
        if self.width != Some(width) {
            self.lanes = compute_lanes(width, self.range);
            self.width = Some(width);
            log::debug!(
                "[lanes] recomputed for width={width} range={}..={}",
                self.range.low,
                self.range.high
            );
        }
        &self.lanes
    }

    pub fn lane_for(&mut self, width: f64, midi: u8) -> Option<Lane> {
        let idx = self.range.index_of(midi)?;
        self.lanes(width).get(idx).copied()
    }
}
