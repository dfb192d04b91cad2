use crate::color::DEBUG_TEXT;
use crate::constants::{DEBUG_FONT, DEBUG_LINE_HEIGHT};
use crate::draw::Surface;
use crate::state::{DerivedState, GivenState};
use crate::viewport::Projection;
use crate::visible::in_view;
use std::ops::Range;

/// Development telemetry in the top-left corner. Presentation only.
pub(super) fn draw<S: Surface + ?Sized>(
    ctx: &mut S,
    state: &GivenState,
    derived: &DerivedState,
    projection: Projection,
    range: Range<usize>,
    frame_rate: Option<f64>,
) {
    let first = match in_view(state, projection, range.clone()).next() {
        Some((item, span)) => format!(
            "first t={:.3}s start={:.1} end={:.1}",
            item.time(),
            span.start,
            span.end
        ),
        None => "first -".to_string(),
    };
    let lines = [
        format!(
            "{} {}x{} t={:.3}s",
            state.visualization, state.width, state.height, state.time
        ),
        format!(
            "viewport {:.1}..{:.1} items {}..{}",
            derived.viewport.start, derived.viewport.end, range.start, range.end
        ),
        first,
        match frame_rate {
            Some(fps) => format!("{fps:.0} fps"),
            None => String::new(),
        },
    ];

    ctx.set_font(DEBUG_FONT);
    ctx.set_fill_style(&DEBUG_TEXT.to_css());
    for (i, text) in lines.iter().filter(|l| !l.is_empty()).enumerate() {
        ctx.fill_text(text, 8.0, DEBUG_LINE_HEIGHT * (i + 1) as f64);
    }
}
