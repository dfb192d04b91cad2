//! Per-frame state types shared with the web frontend.
//!
//! `GivenState` is supplied fresh by the host every animation frame and is
//! never retained. `DerivedState` is recomputed from it at the start of each
//! render; only the lane cache and the particle pool survive across frames.

use crate::event::Event;
use crate::hands::{HandFilter, HandSettings};
use crate::lanes::Lane;
use crate::viewport::{Viewport, Visualization};

/// Everything the host knows about the current frame.
///
/// - `time`: authoritative song time in seconds, read once per frame
/// - `width`/`height`: canvas backing-store size in pixels
/// - `pps`: scroll speed in pixels per second of song time
/// - `items`: the full timeline, sorted ascending by time
#[derive(Clone, Copy, Debug)]
pub struct GivenState<'a> {
    pub time: f64,
    pub visualization: Visualization,
    pub width: f64,
    pub height: f64,
    pub pps: f64,
    pub hand: HandFilter,
    pub hand_settings: &'a HandSettings,
    pub show_particles: bool,
    pub items: &'a [Event],
}

/// State derived from `GivenState` at the start of a frame.
#[derive(Clone, Copy, Debug)]
pub struct DerivedState<'l> {
    pub lanes: &'l [Lane],
    pub viewport: Viewport,
}
