use crate::color::Rgb;
use crate::constants::{FLAT_GLYPH, NOTE_FONT, NOTE_HEAD_GLYPH, SHARP_GLYPH};

/// The subset of an immediate-mode 2D canvas the renderer draws with.
///
/// The web frontend implements this for `CanvasRenderingContext2d`; tests
/// implement it with a call recorder.
pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn set_fill_style(&mut self, css: &str);
    fn set_stroke_style(&mut self, css: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_font(&mut self, font: &str);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// Stroke a single segment with the current stroke style.
pub fn line<S: Surface + ?Sized>(ctx: &mut S, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}

/// Fill a rectangle with rounded corners. The radius shrinks to fit small
/// rectangles, so zero-height notes degrade to a flat line.
pub fn rounded_rect<S: Surface + ?Sized>(ctx: &mut S, x: f64, y: f64, w: f64, h: f64, radius: f64) {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.line_to(x + w - r, y);
    ctx.quadratic_curve_to(x + w, y, x + w, y + r);
    ctx.line_to(x + w, y + h - r);
    ctx.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
    ctx.line_to(x + r, y + h);
    ctx.quadratic_curve_to(x, y + h, x, y + h - r);
    ctx.line_to(x, y + r);
    ctx.quadratic_curve_to(x, y, x + r, y);
    ctx.close_path();
    ctx.fill();
}

/// Small filled square centred on `(x, y)`; far cheaper than an arc.
#[inline]
pub fn circle<S: Surface + ?Sized>(ctx: &mut S, x: f64, y: f64, size: f64) {
    ctx.fill_rect(x - size / 2.0, y - size / 2.0, size, size);
}

/// Draw a filled note head glyph with its centre at `(x, y)`.
pub fn draw_music_note<S: Surface + ?Sized>(ctx: &mut S, x: f64, y: f64, color: Rgb) {
    ctx.set_font(NOTE_FONT);
    ctx.set_fill_style(&color.to_css());
    ctx.fill_text(NOTE_HEAD_GLYPH, x, y);
}

/// Draw a sharp (`alter > 0`) or flat (`alter < 0`) glyph; naturals draw nothing.
pub fn draw_accidental<S: Surface + ?Sized>(ctx: &mut S, x: f64, y: f64, alter: i8, color: Rgb) {
    let glyph = match alter {
        a if a > 0 => SHARP_GLYPH,
        a if a < 0 => FLAT_GLYPH,
        _ => return,
    };
    ctx.set_font(NOTE_FONT);
    ctx.set_fill_style(&color.to_css());
    ctx.fill_text(glyph, x, y);
}
