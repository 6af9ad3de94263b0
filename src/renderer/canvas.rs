//! Canvas 2D backend for [`RenderSurface`]

use web_sys::CanvasRenderingContext2d;

use super::RenderSurface;

/// `RenderSurface` over a browser 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

// Transform and arc calls only fail on non-finite input; the frame goes on.
impl RenderSurface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ctx.translate(x, y).ok();
    }

    fn rotate(&mut self, angle: f64) {
        self.ctx.rotate(angle).ok();
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.rect(x, y, w, h);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        self.ctx.arc(x, y, radius, start, end).ok();
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }
}
