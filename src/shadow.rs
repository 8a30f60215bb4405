use crate::motion::OrbitPosition;

/// Decal opacity when the sphere touches the ground
pub const SHADOW_MAX_OPACITY: f32 = 0.3;

/// Placement and strength of the contact shadow decal for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowState {
    pub x: f32,
    pub z: f32,
    /// In `[0, SHADOW_MAX_OPACITY]`
    pub opacity: f32,
}

/// Derive the decal state from the sphere position of the same frame.
///
/// The decal follows the sphere horizontally and fades as it rises.
pub fn sync_shadow(position: OrbitPosition) -> ShadowState {
    ShadowState {
        x: position.x,
        z: position.z,
        opacity: (1.0 - position.y) * SHADOW_MAX_OPACITY,
    }
}
