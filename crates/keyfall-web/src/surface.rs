use keyfall_core::Surface;
use web_sys as web;

/// `Surface` backed by a browser 2D canvas context.
pub struct CanvasSurface(pub web::CanvasRenderingContext2d);

impl Surface for CanvasSurface {
    #[inline]
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.0.clear_rect(x, y, w, h);
    }
    #[inline]
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.0.fill_rect(x, y, w, h);
    }
    fn set_fill_style(&mut self, css: &str) {
        self.0.set_fill_style_str(css);
    }
    fn set_stroke_style(&mut self, css: &str) {
        self.0.set_stroke_style_str(css);
    }
    fn set_line_width(&mut self, width: f64) {
        self.0.set_line_width(width);
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.0.set_global_alpha(alpha);
    }
    fn set_font(&mut self, font: &str) {
        self.0.set_font(font);
    }
    fn begin_path(&mut self) {
        self.0.begin_path();
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.0.move_to(x, y);
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.0.line_to(x, y);
    }
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.0.quadratic_curve_to(cpx, cpy, x, y);
    }
    fn close_path(&mut self) {
        self.0.close_path();
    }
    fn fill(&mut self) {
        self.0.fill();
    }
    fn stroke(&mut self) {
        self.0.stroke();
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        // only fails for a detached context; the next frame retries anyway
        let _ = self.0.fill_text(text, x, y);
    }
}
