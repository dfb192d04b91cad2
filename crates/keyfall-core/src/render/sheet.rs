use crate::color::{base_color, sheet_note_color, Rgb, PLAY_LINE, STAFF_LINE};
use crate::constants::{
    ACCIDENTAL_OFFSET_X, LEDGER_LINE_HALF_WIDTH, NOTE_HEAD_WIDTH, NOTE_TAIL_ALPHA,
    PLAY_LINE_ALPHA, PLAY_LINE_WIDTH, STAFF_LEFT_PAD, STAFF_START_X,
};
use crate::draw::{draw_accidental, draw_music_note, line, Surface};
use crate::event::{Event, Note};
use crate::hands::{hand_for_track, staff_for, Staff};
use crate::layout::StaffLayout;
use crate::state::GivenState;
use crate::viewport::{Projection, Span};
use crate::visible::in_view;
use std::ops::Range;

pub(super) fn draw<S: Surface + ?Sized>(
    ctx: &mut S,
    state: &GivenState,
    projection: Projection,
    range: Range<usize>,
) {
    let layout = StaffLayout::for_height(state.height);
    for (item, span) in in_view(state, projection, range) {
        // measure bars are never drawn on the staff
        let Event::Note(note) = item else {
            continue;
        };
        let hand = hand_for_track(state.hand_settings, note.track);
        let color = sheet_note_color(base_color(hand, false), projection.approach(span));
        draw_note(ctx, state, &layout, note, span, color);
    }
    draw_staff(ctx, state, &layout);
}

fn draw_note<S: Surface + ?Sized>(
    ctx: &mut S,
    state: &GivenState,
    layout: &StaffLayout,
    note: &Note,
    span: Span,
    color: Rgb,
) {
    let staff = staff_for(note, state.hand_settings);
    let row = note.pitch.staff_row();
    let x = STAFF_START_X + span.start;
    let y = layout.row_y(staff, row);

    ctx.set_global_alpha(NOTE_TAIL_ALPHA);
    ctx.set_fill_style(&color.to_css());
    ctx.fill_rect(
        x + NOTE_HEAD_WIDTH / 2.0,
        y - layout.line_gap / 4.0,
        state.pps * note.duration,
        layout.line_gap / 2.0,
    );
    ctx.set_global_alpha(1.0);

    let head_center = x + NOTE_HEAD_WIDTH / 2.0;
    ctx.set_stroke_style(&STAFF_LINE.to_css());
    ctx.set_line_width(1.0);
    for ledger in layout.ledger_rows(staff, row) {
        let ly = layout.row_y(staff, ledger);
        line(
            ctx,
            head_center - LEDGER_LINE_HALF_WIDTH,
            ly,
            head_center + LEDGER_LINE_HALF_WIDTH,
            ly,
        );
    }

    draw_accidental(ctx, x + ACCIDENTAL_OFFSET_X, y, note.pitch.alter, color);
    draw_music_note(ctx, x, y, color);
}

/// Static grand staff drawn over the notes: two five-line staves, the bar
/// joining them and the translucent play line.
fn draw_staff<S: Surface + ?Sized>(ctx: &mut S, state: &GivenState, layout: &StaffLayout) {
    ctx.set_stroke_style(&STAFF_LINE.to_css());
    ctx.set_line_width(1.0);
    for staff in [Staff::Treble, Staff::Bass] {
        for y in layout.lines(staff) {
            line(ctx, STAFF_LEFT_PAD, y, state.width, y);
        }
    }

    ctx.set_line_width(2.0);
    line(
        ctx,
        STAFF_LEFT_PAD,
        layout.treble_top,
        STAFF_LEFT_PAD,
        layout.bass_bottom,
    );

    ctx.set_global_alpha(PLAY_LINE_ALPHA);
    ctx.set_stroke_style(&PLAY_LINE.to_css());
    ctx.set_line_width(PLAY_LINE_WIDTH);
    line(
        ctx,
        layout.play_line_x,
        layout.treble_top - 2.0 * layout.line_gap,
        layout.play_line_x,
        layout.bass_bottom + 2.0 * layout.line_gap,
    );
    ctx.set_global_alpha(1.0);
}
