//! The shape field: viewport extent, shape population and simulated time.

use crate::constants::MAX_SHAPES;
use crate::params::{FieldParams, ParamsError};
use crate::shape::Shape;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Density formula: one shape per `area_per_shape` px², never fewer than
/// `min_shapes` and never more than [`MAX_SHAPES`].
#[inline]
pub fn shape_count(width: u32, height: u32, params: &FieldParams) -> usize {
    let by_area = (width as u64 * height as u64) / params.area_per_shape.max(1);
    usize::try_from(by_area)
        .unwrap_or(usize::MAX)
        .max(params.min_shapes)
        .min(MAX_SHAPES)
}

pub struct Field {
    width: u32,
    height: u32,
    shapes: Vec<Shape>,
    time: f64,
    generation: u64,
    params: FieldParams,
    rng: StdRng,
}

impl Field {
    pub fn new(width: u32, height: u32, params: FieldParams, seed: u64) -> Result<Self, ParamsError> {
        Self::with_rng(width, height, params, StdRng::seed_from_u64(seed))
    }

    /// Seed from the OS/browser entropy source.
    pub fn from_entropy(width: u32, height: u32, params: FieldParams) -> Result<Self, ParamsError> {
        Self::with_rng(width, height, params, StdRng::from_entropy())
    }

    fn with_rng(
        width: u32,
        height: u32,
        params: FieldParams,
        rng: StdRng,
    ) -> Result<Self, ParamsError> {
        params.validate()?;
        let mut field = Self {
            width: 0,
            height: 0,
            shapes: Vec::new(),
            time: 0.0,
            generation: 0,
            params,
            rng,
        };
        field.resize(width, height);
        Ok(field)
    }

    /// Adopt a new extent and replace the whole population with freshly
    /// sampled shapes. Simulated time carries over.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        let count = shape_count(width, height, &self.params);
        let mut shapes = Vec::with_capacity(count);
        for _ in 0..count {
            shapes.push(Shape::random(&mut self.rng, width, height));
        }
        self.shapes = shapes;
        self.generation += 1;
        log::debug!(
            "[field] rebuilt {} shapes for {}x{} (generation {})",
            count,
            width,
            height,
            self.generation
        );
    }

    #[inline]
    pub fn advance(&mut self) {
        self.time += self.params.time_step;
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Number of rebuilds so far; the initial build is generation 1.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn shapes_mut(&mut self) -> &mut [Shape] {
        &mut self.shapes
    }
}
