// Host-side tests for pointer smoothing.

use driftfield_core::*;
use glam::Vec2;

#[test]
fn tracker_starts_parked_at_sentinel() {
    let p = PointerTracker::default();
    assert_eq!(p.target(), Vec2::new(-1000.0, -1000.0));
    assert_eq!(p.smoothed(), PointerTracker::SENTINEL);
    assert!(!p.is_active());
    assert_eq!(p.influence_point(), None);
}

#[test]
fn tick_moves_a_tenth_of_the_remaining_distance() {
    let mut p = PointerTracker::default();
    p.set_target(100.0, 100.0);
    p.tick();
    let s = p.smoothed();
    assert!((s.x - (-890.0)).abs() < 1e-3, "{:?}", s);
    assert!((s.y - (-890.0)).abs() < 1e-3, "{:?}", s);
    assert_eq!(p.target(), Vec2::new(100.0, 100.0));
}

#[test]
fn smoothing_converges_geometrically() {
    let mut p = PointerTracker::default();
    p.set_target(400.0, 300.0);
    let mut prev = p.smoothed().distance(p.target());
    for _ in 0..50 {
        p.tick();
        let d = p.smoothed().distance(p.target());
        assert!((d - prev * 0.9).abs() < 1e-2, "rate off: {} -> {}", prev, d);
        prev = d;
    }
    for _ in 50..150 {
        p.tick();
    }
    assert!(p.smoothed().distance(p.target()) < 0.01);
}

#[test]
fn smoothed_position_is_exposed_while_active() {
    let mut p = PointerTracker::default();
    p.set_target(10.0, 20.0);
    p.tick();
    assert!(p.is_active());
    assert_eq!(p.influence_point(), Some(p.smoothed()));
}

#[test]
fn clear_target_removes_influence_on_every_shape() {
    let mut field = Field::new(800, 600, FieldParams::default(), 3).unwrap();
    let mut p = PointerTracker::default();
    p.set_target(400.0, 300.0);
    for _ in 0..100 {
        p.tick();
    }
    assert!(field
        .shapes()
        .iter()
        .any(|s| PointerInfluence::at(s.params().base, p.influence_point()).force > 0.0));

    p.clear_target();
    p.tick();
    assert!(!p.is_active());
    for s in field.shapes_mut() {
        let influence = s.update(1.0, p.influence_point());
        assert_eq!(influence, PointerInfluence::NONE);
        assert_eq!(s.size(), s.params().base_size);
    }
}

#[test]
fn sentinel_is_beyond_influence_radius_of_any_viewport_point() {
    let sentinel = Some(PointerTracker::SENTINEL);
    for &(x, y) in &[(0.0, 0.0), (1920.0, 1080.0), (0.0, 4000.0), (3840.0, 0.0)] {
        assert_eq!(PointerInfluence::at(Vec2::new(x, y), sentinel).force, 0.0);
    }
}
