use crate::constants::{CONNECTION_DISTANCE, CONNECTION_MAX_OPACITY, LINE_WIDTH};
use crate::shape::Shape;
use crate::surface::Surface;
use crate::theme::Theme;
use glam::Vec2;

/// A proximity line between two shapes, by index into the shape slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Line opacity for two positions, or `None` when they are too far apart.
#[inline]
pub fn connection_opacity(a: Vec2, b: Vec2) -> Option<f32> {
    let dist = a.distance(b);
    (dist < CONNECTION_DISTANCE).then(|| (1.0 - dist / CONNECTION_DISTANCE) * CONNECTION_MAX_OPACITY)
}

/// Every unordered pair of shapes close enough to be linked. O(n²), which the
/// density formula keeps small.
pub fn connections(shapes: &[Shape]) -> impl Iterator<Item = Connection> + '_ {
    shapes.iter().enumerate().flat_map(move |(i, a)| {
        shapes[i + 1..].iter().enumerate().filter_map(move |(k, b)| {
            connection_opacity(a.position(), b.position()).map(|opacity| Connection {
                a: i,
                b: i + 1 + k,
                opacity,
            })
        })
    })
}

/// Stroke the proximity lines. Call before drawing shapes so the lines sit
/// beneath the outlines.
pub fn draw_connections<S: Surface + ?Sized>(surface: &mut S, shapes: &[Shape], theme: Theme) {
    for c in connections(shapes) {
        let from = shapes[c.a].position();
        let to = shapes[c.b].position();
        surface.begin_path();
        surface.move_to(from.x as f64, from.y as f64);
        surface.line_to(to.x as f64, to.y as f64);
        surface.set_stroke_color(theme.stroke(c.opacity));
        surface.set_line_width(LINE_WIDTH);
        surface.stroke();
    }
}
