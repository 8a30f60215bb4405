use crate::camera::PerspectiveCamera;

/// Camera movement and control abstraction
pub trait CameraControl {
    /// Advance one step toward the control's goal, moving the camera.
    /// Returns true if the camera moved.
    fn update(&mut self, camera: &mut PerspectiveCamera) -> bool;
}
