//! Drawing-surface seam between the simulation and its host.
//!
//! The method set mirrors the subset of the Canvas 2D API the field needs, so
//! the web front-end can forward calls one-to-one while tests record them.

use crate::theme::Rgba;

pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn set_stroke_color(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}
