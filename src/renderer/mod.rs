//! 2D rendering module
//!
//! Everything is drawn through [`RenderSurface`], a thin immediate-mode
//! interface shaped after the Canvas 2D context. The browser build backs it
//! with `CanvasRenderingContext2d`.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(test)]
pub(crate) mod recording;

pub use scene::{draw_ground, draw_landing_pad, draw_ship, draw_starfield};

/// Immediate-mode 2D drawing context
pub trait RenderSurface {
    /// Push the current transform and fill style
    fn save(&mut self);
    /// Pop the last saved transform and fill style
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    /// Rotate clockwise by `angle` radians
    fn rotate(&mut self, angle: f64);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);

    /// Any CSS color string
    fn set_fill_style(&mut self, style: &str);
    /// Fill the current path
    fn fill(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}
