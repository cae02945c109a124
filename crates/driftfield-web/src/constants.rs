// DOM hooks and host-side tuning for the web front-end.

// Elements and attributes
pub const CANVAS_ID: &str = "particle-canvas";
pub const THEME_ATTRIBUTE: &str = "data-theme"; // on <html>, "dark" | "light" | absent
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const MIN_SHAPES_ATTRIBUTE: &str = "data-min-shapes"; // optional, on the canvas
pub const AREA_PER_SHAPE_ATTRIBUTE: &str = "data-area-per-shape"; // optional, on the canvas

// Diagnostics
pub const FPS_REPORT_INTERVAL_SEC: f32 = 5.0;
