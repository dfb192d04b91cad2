use crate::constants::{SHEET_FADE_WINDOW_PX, STAFF_START_X};
use crate::error::{Result, VizError};
use crate::event::{Event, Note};
use crate::state::GivenState;
use std::fmt;
use std::str::FromStr;

/// How the timeline is drawn.
///
/// `FallingNotes` scrolls vertically: "now" is the bottom edge and notes
/// fall towards it. `Sheet` scrolls horizontally past a fixed play line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visualization {
    #[default]
    FallingNotes,
    Sheet,
}

impl FromStr for Visualization {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "falling-notes" => Ok(Visualization::FallingNotes),
            "sheet" => Ok(Visualization::Sheet),
            other => Err(VizError::UnknownVisualization(other.to_string())),
        }
    }
}

impl fmt::Display for Visualization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Visualization::FallingNotes => "falling-notes",
            Visualization::Sheet => "sheet",
        })
    }
}

/// Song-time window currently on screen, in scroll-axis pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub start: f64,
    pub end: f64,
}

impl Viewport {
    pub fn compute(state: &GivenState) -> Self {
        let now = state.time * state.pps;
        match state.visualization {
            Visualization::FallingNotes => Viewport {
                start: now + state.height,
                end: now,
            },
            Visualization::Sheet => Viewport {
                start: now,
                end: now + (state.width - STAFF_START_X),
            },
        }
    }
}

/// Projected extent of an event along the scroll axis.
///
/// In falling-notes mode `start` is the bottom edge and `end` the top edge
/// (canvas y grows downwards). In sheet mode both are x offsets from the
/// play line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

/// Frame-constant projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub visualization: Visualization,
    pub time: f64,
    pub pps: f64,
    pub width: f64,
    pub height: f64,
    pub viewport: Viewport,
}

impl Projection {
    pub fn new(state: &GivenState) -> Self {
        Self {
            visualization: state.visualization,
            time: state.time,
            pps: state.pps,
            width: state.width,
            height: state.height,
            viewport: Viewport::compute(state),
        }
    }

    #[inline]
    pub fn project(&self, item: &Event) -> Span {
        self.project_at(item.time(), item.duration())
    }

    #[inline]
    pub fn project_at(&self, time: f64, duration: f64) -> Span {
        match self.visualization {
            Visualization::FallingNotes => {
                let start = self.viewport.start - time * self.pps;
                Span {
                    start,
                    end: start - duration * self.pps,
                }
            }
            Visualization::Sheet => {
                let start = time * self.pps - self.viewport.start;
                Span {
                    start,
                    end: start + duration * self.pps,
                }
            }
        }
    }

    /// The span has scrolled onto the screen.
    #[inline]
    pub fn is_entered(&self, span: Span) -> bool {
        match self.visualization {
            Visualization::FallingNotes => span.end <= self.height,
            Visualization::Sheet => span.end >= 0.0,
        }
    }

    /// The span (and every later event) lies beyond the far edge.
    #[inline]
    pub fn has_exited(&self, span: Span) -> bool {
        match self.visualization {
            Visualization::FallingNotes => span.start < 0.0,
            Visualization::Sheet => span.start > self.width,
        }
    }

    #[inline]
    pub fn played_ratio(&self, note: &Note) -> f64 {
        played_ratio_at(self.time, note)
    }

    /// Sheet mode: 1 while a note is at least a fade window ahead of the
    /// play line, falling to 0 as it becomes due.
    #[inline]
    pub fn approach(&self, span: Span) -> f64 {
        (span.start / SHEET_FADE_WINDOW_PX).clamp(0.0, 1.0)
    }
}

/// Project `item` into pixel space for the frame described by `state`.
pub fn project_item(item: &Event, state: &GivenState) -> Span {
    Projection::new(state).project(item)
}

/// Fraction of `note` that has crossed the hit line, clamped to `[0, 1]`.
pub fn played_ratio(note: &Note, state: &GivenState) -> f64 {
    played_ratio_at(state.time, note)
}

#[inline]
fn played_ratio_at(time: f64, note: &Note) -> f64 {
    let elapsed = time - note.time;
    if note.duration <= 0.0 {
        return if elapsed >= 0.0 { 1.0 } else { 0.0 };
    }
    (elapsed / note.duration).clamp(0.0, 1.0)
}
