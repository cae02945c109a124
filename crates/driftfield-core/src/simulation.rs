//! One-frame step over the field, driven by whatever schedules frames.

use crate::connections::draw_connections;
use crate::field::Field;
use crate::params::{FieldParams, ParamsError};
use crate::pointer::PointerTracker;
use crate::surface::Surface;
use crate::theme::Theme;

pub struct Simulation {
    field: Field,
    pointer: PointerTracker,
    pending_resize: Option<(u32, u32)>,
    frames: u64,
}

impl Simulation {
    pub fn new(field: Field) -> Self {
        let pointer = PointerTracker::new(field.params().pointer_smoothing);
        Self {
            field,
            pointer,
            pending_resize: None,
            frames: 0,
        }
    }

    pub fn seeded(width: u32, height: u32, params: FieldParams, seed: u64) -> Result<Self, ParamsError> {
        Field::new(width, height, params, seed).map(Self::new)
    }

    /// Record a new viewport extent. The field is rebuilt at the start of the
    /// next frame so a frame never sees a half-replaced population; the last
    /// request before a frame wins.
    #[inline]
    pub fn request_resize(&mut self, width: u32, height: u32) {
        self.pending_resize = Some((width, height));
    }

    #[inline]
    pub fn has_pending_resize(&self) -> bool {
        self.pending_resize.is_some()
    }

    #[inline]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    #[inline]
    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    #[inline]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Frames rendered so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Render one frame: clear, advance time, ease the pointer, draw
    /// connections from the previous positions, then update and draw each
    /// shape in order.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, theme: Theme) {
        if let Some((w, h)) = self.pending_resize.take() {
            self.field.resize(w, h);
        }
        surface.clear_rect(
            0.0,
            0.0,
            self.field.width() as f64,
            self.field.height() as f64,
        );
        self.field.advance();
        self.pointer.tick();

        draw_connections(surface, self.field.shapes(), theme);

        let time = self.field.time();
        let pointer = self.pointer.influence_point();
        for shape in self.field.shapes_mut() {
            shape.update(time, pointer);
            shape.draw(surface, theme);
        }
        self.frames += 1;
    }
}
