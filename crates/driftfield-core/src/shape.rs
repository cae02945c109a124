//! Decorative outline primitives and their per-frame motion.

use crate::constants::*;
use crate::surface::Surface;
use crate::theme::Theme;
use glam::Vec2;
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Stroke this outline centered on the surface origin.
    pub fn trace<S: Surface + ?Sized>(self, surface: &mut S, size: f64) {
        match self {
            ShapeKind::Circle => trace_circle(surface, size),
            ShapeKind::Square => trace_square(surface, size),
            ShapeKind::Triangle => trace_triangle(surface, size),
        }
    }
}

fn trace_circle<S: Surface + ?Sized>(surface: &mut S, size: f64) {
    surface.begin_path();
    surface.arc(0.0, 0.0, size / 2.0, 0.0, TAU);
    surface.stroke();
}

fn trace_square<S: Surface + ?Sized>(surface: &mut S, size: f64) {
    let half = size / 2.0;
    surface.stroke_rect(-half, -half, size, size);
}

// Isosceles, apex up.
fn trace_triangle<S: Surface + ?Sized>(surface: &mut S, size: f64) {
    let half = size / 2.0;
    surface.begin_path();
    surface.move_to(0.0, -half);
    surface.line_to(half, half);
    surface.line_to(-half, half);
    surface.close_path();
    surface.stroke();
}

/// Immutable per-shape parameters, sampled once at field (re)build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeParams {
    pub base: Vec2,
    pub base_size: f32,
    pub base_rotation: f32,
    pub rotation_speed: f32,
    pub kind: ShapeKind,
    pub phase: f32,
    pub float_speed: f32,
    pub opacity: f32,
}

impl ShapeParams {
    /// Sample parameters for a shape anchored inside a `width` x `height`
    /// viewport. A zero extent anchors on that axis at 0.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32) -> Self {
        let tau = TAU as f32;
        Self {
            base: Vec2::new(rng.gen::<f32>() * width as f32, rng.gen::<f32>() * height as f32),
            base_size: rng.gen::<f32>() * SIZE_SPAN + SIZE_MIN,
            base_rotation: rng.gen::<f32>() * tau,
            rotation_speed: (rng.gen::<f32>() - 0.5) * ROTATION_SPEED_SPAN,
            kind: ShapeKind::random(rng),
            phase: rng.gen::<f32>() * tau,
            float_speed: rng.gen::<f32>() * FLOAT_SPEED_SPAN + FLOAT_SPEED_MIN,
            opacity: rng.gen::<f32>() * OPACITY_SPAN + OPACITY_MIN,
        }
    }
}

/// Pointer contribution to one shape for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInfluence {
    pub force: f32,
    pub push: Vec2,
    pub size_growth: f32,
    pub rotation_boost: f32,
}

impl PointerInfluence {
    pub const NONE: Self = Self {
        force: 0.0,
        push: Vec2::ZERO,
        size_growth: 0.0,
        rotation_boost: 0.0,
    };

    /// Linear falloff from 1 at `base` to 0 at [`INFLUENCE_RADIUS`]
    /// (exclusive). The push points from the pointer through `base`; a pointer
    /// exactly on `base` has no direction and pushes nothing.
    pub fn at(base: Vec2, pointer: Option<Vec2>) -> Self {
        let Some(pointer) = pointer else {
            return Self::NONE;
        };
        let delta = pointer - base;
        let dist = delta.length();
        if !dist.is_finite() || dist >= INFLUENCE_RADIUS {
            return Self::NONE;
        }
        let force = 1.0 - dist / INFLUENCE_RADIUS;
        Self {
            force,
            push: -delta.normalize_or_zero() * force * PUSH_DISTANCE,
            size_growth: force * SIZE_GROWTH,
            rotation_boost: force * ROTATION_BOOST,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Shape {
    params: ShapeParams,
    position: Vec2,
    size: f32,
    rotation: f32,
}

impl Shape {
    pub fn new(params: ShapeParams) -> Self {
        Self {
            position: params.base,
            size: params.base_size,
            rotation: params.base_rotation,
            params,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32) -> Self {
        Self::new(ShapeParams::random(rng, width, height))
    }

    #[inline]
    pub fn params(&self) -> &ShapeParams {
        &self.params
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Float offset at simulated time `time`. The axes use different
    /// frequencies so the drift path is not a circle.
    pub fn float_offset(&self, time: f64) -> Vec2 {
        let speed = self.params.float_speed as f64;
        let phase = self.params.phase as f64;
        let x = (time * speed + phase).sin() * FLOAT_AMPLITUDE_X as f64;
        let y = (time * speed * FLOAT_Y_FREQUENCY_RATIO + phase).cos() * FLOAT_AMPLITUDE_Y as f64;
        Vec2::new(x as f32, y as f32)
    }

    /// Recompute the transient position, size and rotation.
    pub fn update(&mut self, time: f64, pointer: Option<Vec2>) -> PointerInfluence {
        let p = &self.params;
        let influence = PointerInfluence::at(p.base, pointer);
        self.position = p.base + self.float_offset(time) + influence.push;
        self.size = p.base_size + influence.size_growth;
        self.rotation =
            p.base_rotation + (time * p.rotation_speed as f64) as f32 + influence.rotation_boost;
        influence
    }

    /// Stroke the outline at its last computed state.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, theme: Theme) {
        surface.save();
        surface.translate(self.position.x as f64, self.position.y as f64);
        surface.rotate(self.rotation as f64);
        surface.set_stroke_color(theme.stroke(self.params.opacity));
        surface.set_line_width(LINE_WIDTH);
        self.params.kind.trace(surface, self.size as f64);
        surface.restore();
    }
}
