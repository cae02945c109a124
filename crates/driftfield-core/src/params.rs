//! Runtime-tunable field parameters.
//!
//! Defaults come from [`crate::constants`]; hosts may override the density
//! knobs (the web front-end reads them from canvas data attributes).

use crate::constants::{
    AREA_PER_SHAPE, MAX_SHAPES, MIN_AREA_PER_SHAPE, MIN_SHAPES, POINTER_SMOOTHING, TIME_STEP,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("min_shapes must be at least 1")]
    NoShapes,
    #[error("min_shapes must be at most {max}, got {0}", max = MAX_SHAPES)]
    TooManyShapes(usize),
    #[error("area_per_shape must be non-zero")]
    ZeroArea,
    #[error("area_per_shape must be at least {min}, got {0}", min = MIN_AREA_PER_SHAPE)]
    AreaTooSmall(u64),
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("pointer_smoothing must be in (0, 1], got {0}")]
    Smoothing(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub min_shapes: usize,
    pub area_per_shape: u64,
    pub time_step: f64,
    pub pointer_smoothing: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            min_shapes: MIN_SHAPES,
            area_per_shape: AREA_PER_SHAPE,
            time_step: TIME_STEP,
            pointer_smoothing: POINTER_SMOOTHING,
        }
    }
}

impl FieldParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.min_shapes == 0 {
            return Err(ParamsError::NoShapes);
        }
        if self.min_shapes > MAX_SHAPES {
            return Err(ParamsError::TooManyShapes(self.min_shapes));
        }
        if self.area_per_shape == 0 {
            return Err(ParamsError::ZeroArea);
        }
        if self.area_per_shape < MIN_AREA_PER_SHAPE {
            return Err(ParamsError::AreaTooSmall(self.area_per_shape));
        }
        positive("time_step", self.time_step)?;
        let s = self.pointer_smoothing;
        if s.is_nan() || s <= 0.0 || s > 1.0 {
            return Err(ParamsError::Smoothing(s));
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NotPositive { name, value })
    }
}
