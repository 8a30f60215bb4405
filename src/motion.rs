use glam::Vec3;

/// Radius of the horizontal circle the sphere travels on
pub const ORBIT_RADIUS: f64 = 1.5;
/// Vertical angular frequency relative to the horizontal one
pub const BOUNCE_FREQUENCY: f64 = 3.0;

/// World position of the orbiting sphere for one frame
///
/// Always satisfies `x² + z² = ORBIT_RADIUS²` and `0 <= y <= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl OrbitPosition {
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Map elapsed seconds to the sphere position.
///
/// The sphere circles once every 2π seconds. The height is a rectified sine
/// with period π/3, so it touches the ground six times per lap and never
/// goes below it.
pub fn orbit_position(elapsed: f64) -> OrbitPosition {
    OrbitPosition {
        x: (elapsed.cos() * ORBIT_RADIUS) as f32,
        y: (elapsed * BOUNCE_FREQUENCY).sin().abs() as f32,
        z: (elapsed.sin() * ORBIT_RADIUS) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    #[test]
    fn starts_on_positive_x_axis() {
        let pos = orbit_position(0.0);
        assert_eq!(pos, OrbitPosition { x: 1.5, y: 0.0, z: 0.0 });
    }

    #[test]
    fn quarter_turn_is_at_bounce_peak() {
        let pos = orbit_position(FRAC_PI_2);
        assert!(pos.x.abs() < EPS);
        assert!((pos.z - 1.5).abs() < EPS);
        assert!((pos.y - 1.0).abs() < EPS);
    }

    #[test]
    fn stays_on_circle_and_above_ground() {
        for i in 0..2000 {
            let t = i as f64 * 0.0137;
            let pos = orbit_position(t);
            let r2 = pos.x * pos.x + pos.z * pos.z;
            assert!((r2 - 2.25).abs() < 1e-4, "t={} r2={}", t, r2);
            assert!((0.0..=1.0).contains(&pos.y), "t={} y={}", t, pos.y);
        }
    }

    #[test]
    fn touches_ground_every_third_of_pi() {
        // Six contacts per lap: t = kπ/3 for k = 0..6
        for k in 0..6 {
            let pos = orbit_position(k as f64 * PI / 3.0);
            assert!(pos.y.abs() < EPS, "k={} y={}", k, pos.y);
        }
    }

    #[test]
    fn to_vec3_keeps_components() {
        let v = orbit_position(1.0).to_vec3();
        let pos = orbit_position(1.0);
        assert_eq!(v, Vec3::new(pos.x, pos.y, pos.z));
    }
}
