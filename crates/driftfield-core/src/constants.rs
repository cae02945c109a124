// Shared tuning constants for the drifting shape field.

// Density
pub const MIN_SHAPES: usize = 15; // floor on the shape count for tiny viewports
pub const AREA_PER_SHAPE: u64 = 25_000; // px² of viewport per generated shape
pub const MAX_SHAPES: usize = 800; // hard cap; connections are O(n²)
pub const MIN_AREA_PER_SHAPE: u64 = 5_000; // densest allowed override

// Time
pub const TIME_STEP: f64 = 0.01; // simulated time added per frame (not wall-clock)

// Pointer
pub const POINTER_SENTINEL: [f32; 2] = [-1000.0, -1000.0]; // "no pointer" target
pub const POINTER_SMOOTHING: f32 = 0.1; // fraction of remaining distance per tick

// Shape sampling
pub const SIZE_MIN: f32 = 20.0;
pub const SIZE_SPAN: f32 = 40.0; // size in [SIZE_MIN, SIZE_MIN + SIZE_SPAN)
pub const ROTATION_SPEED_SPAN: f32 = 0.005; // centered on zero
pub const FLOAT_SPEED_MIN: f32 = 0.1;
pub const FLOAT_SPEED_SPAN: f32 = 0.3;
pub const OPACITY_MIN: f32 = 0.15;
pub const OPACITY_SPAN: f32 = 0.15;

// Floating motion
pub const FLOAT_AMPLITUDE_X: f32 = 15.0;
pub const FLOAT_AMPLITUDE_Y: f32 = 10.0;
pub const FLOAT_Y_FREQUENCY_RATIO: f64 = 0.7; // keeps float paths from being circular

// Pointer influence
pub const INFLUENCE_RADIUS: f32 = 300.0; // exclusive
pub const PUSH_DISTANCE: f32 = 50.0; // max displacement away from the pointer
pub const SIZE_GROWTH: f32 = 15.0;
pub const ROTATION_BOOST: f32 = 0.5; // radians

// Connections
pub const CONNECTION_DISTANCE: f32 = 250.0; // exclusive
pub const CONNECTION_MAX_OPACITY: f32 = 0.15;

// Stroke
pub const LINE_WIDTH: f64 = 1.0;
pub const DARK_STROKE_RGB: [u8; 3] = [180, 170, 160];
pub const LIGHT_STROKE_RGB: [u8; 3] = [140, 130, 115];
