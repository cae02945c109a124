// Recording surface shared by the host-side tests.

#![allow(dead_code)]

use driftfield_core::{Rgba, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    ClearRect(f64, f64, f64, f64),
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    StrokeColor(Rgba),
    LineWidth(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc(f64, f64, f64, f64, f64),
    ClosePath,
    Stroke,
    StrokeRect(f64, f64, f64, f64),
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn take(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn stroke_colors(&self) -> Vec<Rgba> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::StrokeColor(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::ClearRect(x, y, w, h));
    }
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(Op::Translate(x, y));
    }
    fn rotate(&mut self, angle: f64) {
        self.ops.push(Op::Rotate(angle));
    }
    fn set_stroke_color(&mut self, color: Rgba) {
        self.ops.push(Op::StrokeColor(color));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        self.ops.push(Op::Arc(x, y, radius, start, end));
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::StrokeRect(x, y, w, h));
    }
}
