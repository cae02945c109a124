use crate::constants::{POINTER_SENTINEL, POINTER_SMOOTHING};
use glam::Vec2;

/// Exponentially smoothed pointer/touch position.
///
/// `tick` moves `smoothed` a fixed fraction of the remaining distance towards
/// `target` each frame; no velocity is stored.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    target: Vec2,
    smoothed: Vec2,
    smoothing: f32,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(POINTER_SMOOTHING)
    }
}

impl PointerTracker {
    pub const SENTINEL: Vec2 = Vec2::from_array(POINTER_SENTINEL);

    pub fn new(smoothing: f32) -> Self {
        Self {
            target: Self::SENTINEL,
            smoothed: Self::SENTINEL,
            smoothing,
        }
    }

    #[inline]
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    /// Park the target far outside any viewport so no shape is influenced.
    #[inline]
    pub fn clear_target(&mut self) {
        self.target = Self::SENTINEL;
    }

    #[inline]
    pub fn tick(&mut self) {
        self.smoothed += (self.target - self.smoothed) * self.smoothing;
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.target != Self::SENTINEL
    }

    /// Point shapes should react to this frame, if any.
    #[inline]
    pub fn influence_point(&self) -> Option<Vec2> {
        self.is_active().then_some(self.smoothed)
    }
}
