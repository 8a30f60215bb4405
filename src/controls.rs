use std::f32::consts::PI;

use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::config::ControlsConfig;
use crate::traits::CameraControl;

const EPS: f32 = 1e-6;

/// Pointer input already translated into camera intent
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Drag in pixels; orbits around the target
    Rotate { dx: f32, dy: f32 },
    /// Drag in pixels; moves camera and target together
    Pan { dx: f32, dy: f32 },
    /// Wheel notches, positive zooms in
    Dolly { delta: f32 },
}

/// Orbit camera around a target with optional damping
///
/// Gestures only accumulate deltas; the camera moves in [`CameraControl::update`],
/// which with damping enabled applies a fraction of the pending motion each
/// frame so the camera eases to a stop.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    theta_delta: f32,
    phi_delta: f32,
    scale: f32,
    pan_offset: Vec3,
}

impl OrbitControls {
    pub fn new(config: &ControlsConfig, target: Vec3) -> Self {
        Self {
            target,
            enable_damping: config.enable_damping,
            damping_factor: config.damping_factor.clamp(0.0, 1.0),
            rotate_speed: config.rotate_speed,
            zoom_speed: config.zoom_speed,
            pan_speed: config.pan_speed,
            min_distance: config.min_distance,
            max_distance: config.max_distance.max(config.min_distance),
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
            pan_offset: Vec3::ZERO,
        }
    }

    /// Queue a gesture; `viewport_height` is in the same pixels as the drag
    pub fn apply(&mut self, gesture: Gesture, camera: &PerspectiveCamera, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        match gesture {
            Gesture::Rotate { dx, dy } => {
                self.theta_delta -= 2.0 * PI * dx / height * self.rotate_speed;
                self.phi_delta -= 2.0 * PI * dy / height * self.rotate_speed;
            }
            Gesture::Pan { dx, dy } => {
                let offset = camera.position - self.target;
                let half_fov = camera.fov_y_degrees.to_radians() * 0.5;
                let target_distance = offset.length() * half_fov.tan();
                let (right, up) = camera_axes(camera);

                let left = 2.0 * dx * target_distance / height * self.pan_speed;
                let upward = 2.0 * dy * target_distance / height * self.pan_speed;
                self.pan_offset += -right * left + up * upward;
            }
            Gesture::Dolly { delta } => {
                let zoom = 0.95f32.powf(self.zoom_speed);
                if delta > 0.0 {
                    self.scale *= zoom;
                } else if delta < 0.0 {
                    self.scale /= zoom;
                }
            }
        }
    }

    /// True while damped motion is still being applied
    pub fn is_settling(&self) -> bool {
        self.theta_delta.abs() > EPS || self.phi_delta.abs() > EPS || self.pan_offset.length_squared() > EPS
    }
}

impl CameraControl for OrbitControls {
    fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let before = camera.position;
        let offset = camera.position - self.target;

        let mut radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        let step = if self.enable_damping { self.damping_factor } else { 1.0 };

        theta += self.theta_delta * step;
        phi = (phi + self.phi_delta * step).clamp(EPS, PI - EPS);
        radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);
        self.target += self.pan_offset * step;

        let offset = Vec3::new(
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
            radius * phi.sin() * theta.cos(),
        );
        camera.position = self.target + offset;
        camera.target = self.target;

        if self.enable_damping {
            self.theta_delta *= 1.0 - self.damping_factor;
            self.phi_delta *= 1.0 - self.damping_factor;
            self.pan_offset *= 1.0 - self.damping_factor;
        } else {
            self.theta_delta = 0.0;
            self.phi_delta = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        before.distance_squared(camera.position) > EPS
    }
}

/// Camera right and up vectors in world space
fn camera_axes(camera: &PerspectiveCamera) -> (Vec3, Vec3) {
    let forward = (camera.target - camera.position).normalize_or_zero();
    let right = forward.cross(Vec3::Y).normalize_or_zero();
    let up = right.cross(forward).normalize_or_zero();
    (right, up)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        let mut camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 100.0);
        camera.position = Vec3::new(1.0, 1.0, 2.0);
        camera
    }

    #[test]
    fn idle_controls_keep_camera_still() {
        let mut controls = OrbitControls::new(&ControlsConfig::default(), Vec3::ZERO);
        let mut cam = camera();
        let before = cam.position;

        assert!(!controls.update(&mut cam));
        assert!(cam.position.distance(before) < 1e-5);
    }

    #[test]
    fn damping_spreads_rotation_over_frames() {
        let mut controls = OrbitControls::new(&ControlsConfig::default(), Vec3::ZERO);
        let mut cam = camera();
        let radius = cam.position.length();

        controls.apply(Gesture::Rotate { dx: 100.0, dy: 0.0 }, &cam, 600.0);

        let mut steps = Vec::new();
        for _ in 0..5 {
            let before = cam.position;
            assert!(controls.update(&mut cam));
            steps.push(before.distance(cam.position));
        }

        // Each step is smaller than the previous one and the radius holds
        assert!(steps.windows(2).all(|w| w[1] < w[0]));
        assert!((cam.position.length() - radius).abs() < 1e-4);
        assert!(controls.is_settling());
    }

    #[test]
    fn without_damping_rotation_is_immediate() {
        let config = ControlsConfig {
            enable_damping: false,
            ..ControlsConfig::default()
        };
        let mut controls = OrbitControls::new(&config, Vec3::ZERO);
        let mut cam = camera();

        controls.apply(Gesture::Rotate { dx: 50.0, dy: 0.0 }, &cam, 600.0);
        assert!(controls.update(&mut cam));
        assert!(!controls.is_settling());
        assert!(!controls.update(&mut cam));
    }

    #[test]
    fn dolly_changes_distance_only() {
        let mut controls = OrbitControls::new(&ControlsConfig::default(), Vec3::ZERO);
        let mut cam = camera();
        let dir = cam.position.normalize();
        let radius = cam.position.length();

        controls.apply(Gesture::Dolly { delta: 1.0 }, &cam, 600.0);
        controls.update(&mut cam);

        assert!((cam.position.length() - radius * 0.95).abs() < 1e-4);
        assert!(cam.position.normalize().distance(dir) < 1e-4);
    }

    #[test]
    fn pan_moves_target_with_camera() {
        let config = ControlsConfig {
            enable_damping: false,
            ..ControlsConfig::default()
        };
        let mut controls = OrbitControls::new(&config, Vec3::ZERO);
        let mut cam = camera();
        let offset = cam.position - controls.target;

        controls.apply(Gesture::Pan { dx: 30.0, dy: 0.0 }, &cam, 600.0);
        controls.update(&mut cam);

        assert!(controls.target.length() > 0.0);
        assert!((cam.position - controls.target - offset).length() < 1e-4);
        assert_eq!(cam.target, controls.target);
    }

    #[test]
    fn polar_angle_never_flips_over_the_pole() {
        let config = ControlsConfig {
            enable_damping: false,
            ..ControlsConfig::default()
        };
        let mut controls = OrbitControls::new(&config, Vec3::ZERO);
        let mut cam = camera();

        controls.apply(Gesture::Rotate { dx: 0.0, dy: 5000.0 }, &cam, 600.0);
        controls.update(&mut cam);

        assert!(cam.position.y > 0.0);
        assert!(cam.position.x.abs() + cam.position.z.abs() > 0.0);
    }
}
