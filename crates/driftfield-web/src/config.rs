use driftfield_core::FieldParams;
use std::str::FromStr;

/// Parse an optional attribute value, logging and ignoring malformed input.
pub fn parse_override<T: FromStr>(name: &str, raw: Option<&str>) -> Option<T> {
    let raw = raw?.trim();
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring {}={:?}: not a number", name, raw);
            None
        }
    }
}

/// Apply density overrides on top of the defaults. Invalid combinations fall
/// back to the defaults entirely.
pub fn field_params(min_shapes: Option<&str>, area_per_shape: Option<&str>) -> FieldParams {
    let mut params = FieldParams::default();
    if let Some(n) = parse_override::<usize>("min-shapes", min_shapes) {
        params.min_shapes = n;
    }
    if let Some(a) = parse_override::<u64>("area-per-shape", area_per_shape) {
        params.area_per_shape = a;
    }
    match params.validate() {
        Ok(()) => params,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            FieldParams::default()
        }
    }
}
