//! Read-only layout queries for positioning host overlays.
//!
//! These mirror the geometry the renderer uses so the host can place DOM
//! elements (clef icons, a keyboard strip) without a render pass.

use crate::constants::{
    BASS_BOTTOM_ROW, PLAY_LINE_WIDTH, STAFF_GAP_LINES, STAFF_LEFT_PAD, STAFF_LINE_GAP,
    STAFF_START_X, TREBLE_BOTTOM_ROW,
};
use crate::error::{Result, VizError};
use crate::hands::Staff;
use crate::viewport::Visualization;
use serde::Serialize;
use std::str::FromStr;

/// Vertical geometry of the grand staff for a canvas height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffLayout {
    pub treble_top: f64,
    pub treble_bottom: f64,
    pub bass_top: f64,
    pub bass_bottom: f64,
    pub line_gap: f64,
    pub play_line_x: f64,
}

impl StaffLayout {
    /// Both staves centred vertically with a fixed gap between them.
    pub fn for_height(height: f64) -> Self {
        let middle = height / 2.0;
        let half_gap = STAFF_GAP_LINES * STAFF_LINE_GAP / 2.0;
        let treble_bottom = middle - half_gap;
        let bass_top = middle + half_gap;
        Self {
            treble_top: treble_bottom - 4.0 * STAFF_LINE_GAP,
            treble_bottom,
            bass_top,
            bass_bottom: bass_top + 4.0 * STAFF_LINE_GAP,
            line_gap: STAFF_LINE_GAP,
            play_line_x: STAFF_START_X,
        }
    }

    /// y of the five lines of a staff, top to bottom.
    pub fn lines(&self, staff: Staff) -> [f64; 5] {
        let top = match staff {
            Staff::Treble => self.treble_top,
            Staff::Bass => self.bass_top,
        };
        std::array::from_fn(|i| top + i as f64 * self.line_gap)
    }

    /// y of a staff row (see `Pitch::staff_row`) on the given staff.
    #[inline]
    pub fn row_y(&self, staff: Staff, row: i32) -> f64 {
        let (bottom_y, bottom_row) = match staff {
            Staff::Treble => (self.treble_bottom, TREBLE_BOTTOM_ROW),
            Staff::Bass => (self.bass_bottom, BASS_BOTTOM_ROW),
        };
        bottom_y - (row - bottom_row) as f64 * self.line_gap / 2.0
    }

    /// Rows of the ledger lines needed for `row`, empty when it sits on or
    /// inside the staff.
    pub fn ledger_rows(&self, staff: Staff, row: i32) -> impl Iterator<Item = i32> {
        let bottom = match staff {
            Staff::Treble => TREBLE_BOTTOM_ROW,
            Staff::Bass => BASS_BOTTOM_ROW,
        };
        let top = bottom + 8;
        let below = (row..bottom).filter(move |r| (bottom - r) % 2 == 0);
        let above = (top + 1..=row).filter(move |r| (r - top) % 2 == 0);
        below.chain(above)
    }
}

/// Overlay icons the host positions over the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    TrebleClef,
    BassClef,
}

impl FromStr for Icon {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "treble-clef" => Ok(Icon::TrebleClef),
            "bass-clef" => Ok(Icon::BassClef),
            other => Err(VizError::UnknownIcon(other.to_string())),
        }
    }
}

/// Top-left anchor for an icon, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
    pub height: f64,
}

/// Where an icon sits for a canvas of the given height. Clefs span their
/// staff plus one line-gap of overhang above and below.
pub fn icon_anchor(icon: Icon, height: f64) -> Anchor {
    let staff = StaffLayout::for_height(height);
    let top = match icon {
        Icon::TrebleClef => staff.treble_top,
        Icon::BassClef => staff.bass_top,
    };
    Anchor {
        x: STAFF_LEFT_PAD + staff.line_gap,
        y: top - staff.line_gap,
        height: staff.line_gap * 6.0,
    }
}

/// Layout metadata per visualization mode.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum OverlayLayout {
    /// The hit line is the bottom edge; lanes span the full width.
    FallingNotes { hit_line_y: f64, width: f64 },
    Sheet {
        staff: StaffLayout,
        treble: Anchor,
        bass: Anchor,
        play_line_width: f64,
    },
}

pub fn overlay_layout(visualization: Visualization, width: f64, height: f64) -> OverlayLayout {
    match visualization {
        Visualization::FallingNotes => OverlayLayout::FallingNotes {
            hit_line_y: height,
            width,
        },
        Visualization::Sheet => OverlayLayout::Sheet {
            staff: StaffLayout::for_height(height),
            treble: icon_anchor(Icon::TrebleClef, height),
            bass: icon_anchor(Icon::BassClef, height),
            play_line_width: PLAY_LINE_WIDTH,
        },
    }
}

/// String-keyed variant of [`overlay_layout`] for hosts that pass mode ids.
pub fn overlay_layout_for(mode: &str, width: f64, height: f64) -> Result<OverlayLayout> {
    Ok(overlay_layout(mode.parse()?, width, height))
}
