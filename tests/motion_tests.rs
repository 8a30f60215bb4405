use std::f64::consts::{FRAC_PI_2, PI};

use bouncing_shadow::motion::{orbit_position, ORBIT_RADIUS};
use bouncing_shadow::shadow::{sync_shadow, SHADOW_MAX_OPACITY};

const EPS: f32 = 1e-5;

fn sample_times() -> impl Iterator<Item = f64> {
    (0..5000).map(|i| i as f64 * 0.0137)
}

// ============================================================================
// Orbit invariants
// ============================================================================

#[test]
fn test_orbit_stays_on_circle() {
    let r2 = (ORBIT_RADIUS * ORBIT_RADIUS) as f32;
    for t in sample_times() {
        let p = orbit_position(t);
        assert!(
            (p.x * p.x + p.z * p.z - r2).abs() < 1e-4,
            "t={} off circle: {:?}",
            t,
            p
        );
    }
}

#[test]
fn test_orbit_height_in_unit_range() {
    for t in sample_times() {
        let y = orbit_position(t).y;
        assert!((0.0..=1.0).contains(&y), "t={} y={}", t, y);
    }
}

#[test]
fn test_large_elapsed_times_keep_invariants() {
    for t in [1.0e4, 3.6e5, 8.64e6] {
        let p = orbit_position(t);
        assert!((p.x.hypot(p.z) - 1.5).abs() < 1e-4);
        assert!((0.0..=1.0).contains(&p.y));
    }
}

// ============================================================================
// Shadow invariants
// ============================================================================

#[test]
fn test_shadow_opacity_tracks_height() {
    for t in sample_times() {
        let p = orbit_position(t);
        let s = sync_shadow(p);
        assert!((0.0..=SHADOW_MAX_OPACITY).contains(&s.opacity));
        assert!((s.opacity - (1.0 - p.y) * 0.3).abs() < EPS);
    }
}

#[test]
fn test_shadow_has_no_horizontal_lag() {
    for t in sample_times() {
        let p = orbit_position(t);
        let s = sync_shadow(p);
        assert_eq!((s.x, s.z), (p.x, p.z));
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_start_of_animation() {
    let p = orbit_position(0.0);
    assert_eq!((p.x, p.y, p.z), (1.5, 0.0, 0.0));
    assert_eq!(sync_shadow(p).opacity, 0.3);
}

#[test]
fn test_quarter_orbit_is_at_peak() {
    let p = orbit_position(FRAC_PI_2);
    assert!(p.x.abs() < EPS);
    assert!((p.z - 1.5).abs() < EPS);
    assert!((p.y - 1.0).abs() < EPS);
    assert!(sync_shadow(p).opacity.abs() < EPS);
}

#[test]
fn test_six_ground_contacts_per_lap() {
    // |sin 3t| has period π/3; the lap end point is excluded
    let contacts = (0..6)
        .map(|k| k as f64 * PI / 3.0)
        .filter(|t| orbit_position(*t).y < 1e-6)
        .count();
    assert_eq!(contacts, 6);

    let peaks = (0..6)
        .map(|k| PI / 6.0 + k as f64 * PI / 3.0)
        .filter(|t| (orbit_position(*t).y - 1.0).abs() < 1e-6)
        .count();
    assert_eq!(peaks, 6);
}
