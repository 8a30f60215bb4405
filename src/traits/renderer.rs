use crate::camera::PerspectiveCamera;
use crate::scene::Scene;
use crate::viewport::RenderTarget;

/// High-level response after a failed frame
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame
    Reconfigured,
    /// Transient error; skip the current frame
    SkipFrame,
    /// Surface is gone or the device ran out of memory; stop the loop
    Fatal,
}

/// Draws a scene through a camera into a resizable output buffer
pub trait SceneRenderer {
    /// Resize the output buffer; repeated calls with the same target are no-ops
    fn resize(&mut self, target: RenderTarget);

    /// Render one frame
    fn render(
        &mut self,
        scene: &Scene,
        camera: &PerspectiveCamera,
    ) -> Result<(), SurfaceErrorAction>;
}
