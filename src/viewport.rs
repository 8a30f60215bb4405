use winit::dpi::PhysicalSize;

/// Upper bound applied to the host's device pixel ratio
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Viewport size in logical (device-independent) pixels
///
/// Both dimensions are at least 1, so the aspect ratio is always finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    /// Create a viewport, clamping zero dimensions to 1
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Convert a physical window size reported by winit into logical pixels
    pub fn from_physical(size: PhysicalSize<u32>, scale_factor: f64) -> Self {
        let logical = size.to_logical::<f64>(sanitize_scale(scale_factor));
        Self::new(logical.width.round() as u32, logical.height.round() as u32)
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Pixel ratio actually applied to the output buffer: `min(dpr, 2)`.
pub fn effective_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    sanitize_scale(device_pixel_ratio).min(MAX_PIXEL_RATIO)
}

fn sanitize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

/// Output buffer the scene is rendered into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTarget {
    pub viewport: ViewportSize,
    pub pixel_ratio: f64,
}

impl RenderTarget {
    pub fn new(viewport: ViewportSize, device_pixel_ratio: f64) -> Self {
        Self {
            viewport,
            pixel_ratio: effective_pixel_ratio(device_pixel_ratio),
        }
    }

    /// Buffer dimensions in physical pixels
    pub fn buffer_size(&self) -> (u32, u32) {
        let scale = |v: u32| ((v as f64 * self.pixel_ratio).floor() as u32).max(1);
        (scale(self.viewport.width), scale(self.viewport.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_height_is_clamped() {
        let viewport = ViewportSize::new(800, 0);
        assert_eq!(viewport.height, 1);
        assert!(viewport.aspect().is_finite());
        assert_eq!(viewport.aspect(), 800.0);
    }

    #[test]
    fn pixel_ratio_is_capped() {
        assert_eq!(effective_pixel_ratio(3.0), 2.0);
        assert_eq!(effective_pixel_ratio(2.0), 2.0);
        assert_eq!(effective_pixel_ratio(1.25), 1.25);
        assert_eq!(effective_pixel_ratio(f64::NAN), 1.0);
        assert_eq!(effective_pixel_ratio(0.0), 1.0);
    }

    #[test]
    fn buffer_size_scales_with_ratio() {
        let target = RenderTarget::new(ViewportSize::new(800, 600), 1.5);
        assert_eq!(target.buffer_size(), (1200, 900));

        let capped = RenderTarget::new(ViewportSize::new(800, 600), 3.0);
        assert_eq!(capped.buffer_size(), (1600, 1200));
    }

    #[test]
    fn physical_size_converts_to_logical() {
        let viewport = ViewportSize::from_physical(PhysicalSize::new(1600, 1200), 2.0);
        assert_eq!(viewport, ViewportSize::new(800, 600));

        let minimized = ViewportSize::from_physical(PhysicalSize::new(0, 0), 1.0);
        assert_eq!(minimized, ViewportSize::new(1, 1));
    }
}
