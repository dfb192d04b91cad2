use crate::color::{base_color, note_fill, MEASURE_LINE};
use crate::constants::{MEASURE_FONT, MEASURE_LABEL_OFFSET, MEASURE_LINE_WIDTH, NOTE_CORNER_RADIUS};
use crate::draw::{line, rounded_rect, Surface};
use crate::event::{Event, Measure, Note};
use crate::hands::hand_for_track;
use crate::lanes::{is_black, PianoRange};
use crate::particles::ParticleSystem;
use crate::state::{DerivedState, GivenState};
use crate::viewport::{Projection, Span};
use crate::visible::in_view;
use std::ops::Range;

pub(super) fn draw<S: Surface + ?Sized>(
    ctx: &mut S,
    state: &GivenState,
    derived: &DerivedState,
    projection: Projection,
    range: Range<usize>,
    piano: PianoRange,
    particles: &mut ParticleSystem,
) {
    if state.show_particles {
        particles.begin_frame();
    }
    for (item, span) in in_view(state, projection, range) {
        match item {
            Event::Note(note) => {
                let Some(lane_idx) = piano.index_of(note.midi_note) else {
                    continue;
                };
                let ratio = projection.played_ratio(note);
                draw_note(ctx, state, derived, note, span, lane_idx, ratio);
                if state.show_particles && ratio > 0.0 && ratio < 1.0 {
                    particles.mark_active(note.midi_note, lane_idx);
                }
            }
            Event::Measure(measure) => draw_measure(ctx, state, measure, span),
        }
    }

    if state.show_particles {
        particles.end_frame();
        particles.advance();
        particles.draw(ctx, derived.lanes, state.height);
    } else {
        particles.release_all();
    }
}

fn draw_note<S: Surface + ?Sized>(
    ctx: &mut S,
    state: &GivenState,
    derived: &DerivedState,
    note: &Note,
    span: Span,
    lane_idx: usize,
    ratio: f64,
) {
    let Some(lane) = derived.lanes.get(lane_idx) else {
        return;
    };
    let hand = hand_for_track(state.hand_settings, note.track);
    let color = note_fill(base_color(hand, is_black(note.midi_note)), ratio);
    ctx.set_fill_style(&color.to_css());
    rounded_rect(
        ctx,
        lane.left,
        span.end,
        lane.width,
        span.start - span.end,
        NOTE_CORNER_RADIUS,
    );
}

fn draw_measure<S: Surface + ?Sized>(ctx: &mut S, state: &GivenState, measure: &Measure, span: Span) {
    let y = span.start;
    ctx.set_stroke_style(&MEASURE_LINE.to_css());
    ctx.set_line_width(MEASURE_LINE_WIDTH);
    line(ctx, 0.0, y, state.width, y);
    ctx.set_fill_style(&MEASURE_LINE.to_css());
    ctx.set_font(MEASURE_FONT);
    ctx.fill_text(
        &measure.number.to_string(),
        MEASURE_LABEL_OFFSET[0],
        y + MEASURE_LABEL_OFFSET[1],
    );
}
