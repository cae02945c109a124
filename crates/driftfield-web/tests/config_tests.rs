// Host-side tests for canvas attribute overrides.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use config::*;
use driftfield_core::FieldParams;

#[test]
fn missing_attributes_keep_defaults() {
    assert_eq!(field_params(None, None), FieldParams::default());
}

#[test]
fn overrides_apply_when_valid() {
    let p = field_params(Some("40"), Some(" 10000 "));
    assert_eq!(p.min_shapes, 40);
    assert_eq!(p.area_per_shape, 10_000);
    assert_eq!(p.time_step, FieldParams::default().time_step);
}

#[test]
fn malformed_values_are_ignored_individually() {
    let p = field_params(Some("lots"), Some("5000"));
    assert_eq!(p.min_shapes, FieldParams::default().min_shapes);
    assert_eq!(p.area_per_shape, 5_000);
    assert_eq!(parse_override::<u64>("x", Some("-3")), None);
    assert_eq!(parse_override::<u64>("x", None), None);
}

#[test]
fn invalid_combination_falls_back_to_defaults() {
    assert_eq!(field_params(Some("0"), Some("5000")), FieldParams::default());
    assert_eq!(field_params(None, Some("0")), FieldParams::default());
}

#[test]
fn oversized_density_falls_back_to_defaults() {
    assert_eq!(
        field_params(Some("18446744073709551615"), None),
        FieldParams::default()
    );
    assert_eq!(field_params(None, Some("1")), FieldParams::default());
    assert_eq!(field_params(Some("801"), None), FieldParams::default());
}

#[test]
fn densest_allowed_overrides_are_kept() {
    let p = field_params(Some("800"), Some("5000"));
    assert_eq!(p.min_shapes, 800);
    assert_eq!(p.area_per_shape, 5_000);
}
