use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::config::CameraConfig;
use crate::demo::{create_camera, DemoScene};
use crate::motion::OrbitPosition;
use crate::scene::{ObjectId, Scene};
use crate::shadow::ShadowState;
use crate::viewport::{RenderTarget, ViewportSize};

/// Everything a frame needs: scene, camera and output size
///
/// Built once at startup and passed by reference to the frame loop, the
/// resize handler and the debug panel.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub sphere: ObjectId,
    pub shadow: ObjectId,
    pub plane: ObjectId,
    pub(crate) render_target: RenderTarget,
}

impl AppContext {
    pub fn new(
        demo: DemoScene,
        camera: &CameraConfig,
        viewport: ViewportSize,
        device_pixel_ratio: f64,
    ) -> Self {
        Self {
            scene: demo.scene,
            camera: create_camera(camera, viewport.aspect()),
            sphere: demo.sphere,
            shadow: demo.shadow,
            plane: demo.plane,
            render_target: RenderTarget::new(viewport, device_pixel_ratio),
        }
    }

    pub fn render_target(&self) -> RenderTarget {
        self.render_target
    }

    pub fn sphere_position(&self) -> Vec3 {
        self.scene.position(self.sphere)
    }

    /// Move the sphere
    pub fn apply_orbit(&mut self, position: OrbitPosition) {
        self.scene.set_position(self.sphere, position.to_vec3());
    }

    /// Move the decal horizontally and set its opacity; its height is fixed
    pub fn apply_shadow(&mut self, shadow: ShadowState) {
        let height = self.scene.position(self.shadow).y;
        self.scene
            .set_position(self.shadow, Vec3::new(shadow.x, height, shadow.z));
        self.scene.set_opacity(self.shadow, shadow.opacity);
    }
}
