use crate::constants::SHEET_COLOR_FLOOR;
use crate::hands::Hand;

/// 8-bit sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    /// Parse `#rrggbb`; returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        Some(Rgb([channel(0)?, channel(2)?, channel(4)?]))
    }

    pub fn to_css(self) -> String {
        let [r, g, b] = self.0;
        format!("rgb({r}, {g}, {b})")
    }
}

// Default palette per hand and key colour
pub const RIGHT_WHITE_KEY: Rgb = Rgb([77, 208, 225]);
pub const RIGHT_BLACK_KEY: Rgb = Rgb([0, 151, 167]);
pub const LEFT_WHITE_KEY: Rgb = Rgb([255, 152, 0]);
pub const LEFT_BLACK_KEY: Rgb = Rgb([230, 81, 0]);
pub const MEASURE_LINE: Rgb = Rgb([88, 88, 100]);
pub const STAFF_LINE: Rgb = Rgb([30, 30, 30]);
pub const PLAY_LINE: Rgb = Rgb([255, 87, 34]);
pub const PARTICLE: Rgb = Rgb([255, 255, 255]);
pub const DEBUG_TEXT: Rgb = Rgb([0, 200, 83]);

/// Linear per-channel blend: `weight = 1` yields `c1`, `weight = 0` yields `c2`.
pub fn pick_hex(c1: Rgb, c2: Rgb, weight: f64) -> Rgb {
    let w1 = weight.clamp(0.0, 1.0);
    let w2 = 1.0 - w1;
    let mix = |i: usize| (c1.0[i] as f64 * w1 + c2.0[i] as f64 * w2).round() as u8;
    Rgb([mix(0), mix(1), mix(2)])
}

/// Base colour of a falling note for the given hand and key colour.
/// Unassigned tracks share the right-hand palette.
#[inline]
pub fn base_color(hand: Hand, black_key: bool) -> Rgb {
    match (hand, black_key) {
        (Hand::Left, false) => LEFT_WHITE_KEY,
        (Hand::Left, true) => LEFT_BLACK_KEY,
        (_, false) => RIGHT_WHITE_KEY,
        (_, true) => RIGHT_BLACK_KEY,
    }
}

/// Fill colour of a falling note given how much of it has been played.
///
/// A ratio of exactly 0 means the note has not reached the hit line yet (or
/// is far in the future) and is drawn at full saturation.
#[inline]
pub fn note_fill(base: Rgb, played_ratio: f64) -> Rgb {
    let weight = if played_ratio == 0.0 { 1.0 } else { played_ratio };
    pick_hex(base, Rgb::WHITE, weight)
}

/// Sheet-mode colour: `approach` is 1 far ahead of the play line and falls
/// to 0 once the note is due.
#[inline]
pub fn sheet_note_color(base: Rgb, approach: f64) -> Rgb {
    pick_hex(base, Rgb::BLACK, approach.max(SHEET_COLOR_FLOOR))
}
