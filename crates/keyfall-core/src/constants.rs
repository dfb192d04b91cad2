// Shared visual tuning constants used by the renderer and the web frontend.

// Keyboard range (A0..C8)
pub const LOWEST_NOTE: u8 = 21;
pub const HIGHEST_NOTE: u8 = 108;
pub const BLACK_KEY_WIDTH_RATIO: f64 = 0.55; // black lane width relative to a white lane

// Falling notes
pub const NOTE_CORNER_RADIUS: f64 = 5.0;
pub const MEASURE_LINE_WIDTH: f64 = 1.0;
pub const MEASURE_LABEL_OFFSET: [f64; 2] = [6.0, -4.0]; // label position relative to the rule
pub const MEASURE_FONT: &str = "12px system-ui";

// Sheet notation
pub const STAFF_START_X: f64 = 150.0; // x of the play line; notes scroll in from the right
pub const STAFF_LEFT_PAD: f64 = 24.0; // x of the bar connecting the two staves
pub const STAFF_LINE_GAP: f64 = 10.0; // distance between two adjacent staff lines
pub const STAFF_GAP_LINES: f64 = 4.0; // empty line-gaps between the treble and bass staff
pub const TREBLE_BOTTOM_ROW: i32 = 4 * 7 + 2; // E4 sits on the bottom treble line
pub const BASS_BOTTOM_ROW: i32 = 2 * 7 + 4; // G2 sits on the bottom bass line
pub const LEDGER_LINE_HALF_WIDTH: f64 = 10.0;
pub const NOTE_HEAD_WIDTH: f64 = 12.0; // one staff space at NOTE_FONT size
pub const PLAY_LINE_WIDTH: f64 = 4.0;
pub const PLAY_LINE_ALPHA: f64 = 0.35;
pub const NOTE_TAIL_ALPHA: f64 = 0.25;
pub const SHEET_FADE_WINDOW_PX: f64 = 120.0; // distance over which a note darkens before the line
pub const SHEET_COLOR_FLOOR: f64 = 0.15; // keeps tails from washing out at tiny ratios
pub const NOTE_HEAD_GLYPH: &str = "\u{E0A4}"; // SMuFL noteheadBlack
pub const SHARP_GLYPH: &str = "\u{E262}";
pub const FLAT_GLYPH: &str = "\u{E260}";
pub const NOTE_FONT: &str = "40px Bravura";
pub const ACCIDENTAL_OFFSET_X: f64 = -14.0;

// Particles
pub const PARTICLES_PER_NOTE: usize = 12;
pub const PARTICLE_TRAVEL_PX: f32 = 120.0; // particles respawn after rising this far
pub const PARTICLE_DX_RANGE: [f32; 2] = [-0.03, 0.03];
pub const PARTICLE_DY_RANGE: [f32; 2] = [0.8, 2.4];
pub const PARTICLE_SIZE_RANGE: [f32; 2] = [1.5, 3.0];
pub const PARTICLE_SEED: u64 = 0x6b65_7966_616c_6c00;

// Debug overlay
pub const DEBUG_FONT: &str = "12px monospace";
pub const DEBUG_LINE_HEIGHT: f64 = 14.0;
