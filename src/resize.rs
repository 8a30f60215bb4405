use crate::context::AppContext;
use crate::traits::SceneRenderer;
use crate::viewport::{RenderTarget, ViewportSize};

/// React to a viewport change reported by the host.
///
/// Updates the camera aspect (the projection is recomputed before the next
/// render) and resizes the renderer output buffer at the capped pixel ratio.
pub fn handle_resize<R: SceneRenderer + ?Sized>(
    ctx: &mut AppContext,
    renderer: &mut R,
    viewport: ViewportSize,
    device_pixel_ratio: f64,
) -> RenderTarget {
    ctx.camera.set_aspect(viewport.aspect());

    let target = RenderTarget::new(viewport, device_pixel_ratio);
    if target != ctx.render_target {
        log::debug!(
            "viewport {}x{} @ {:.2}x -> buffer {:?}",
            viewport.width,
            viewport.height,
            target.pixel_ratio,
            target.buffer_size()
        );
    }
    ctx.render_target = target;
    renderer.resize(target);
    target
}
