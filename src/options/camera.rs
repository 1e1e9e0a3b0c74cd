use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection parameters.
///
/// The viewport dimensions are part of the pixel-to-world transform the
/// shader's ray generation is derived against, not just a window hint —
/// changing them changes the serialized camera matrix.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Eye distance from the look-at target.
    pub distance: f32,
    /// Viewport width in pixels.
    pub viewport_width: u32,
    /// Viewport height in pixels.
    pub viewport_height: u32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fov: 60.0,
            distance: 600.0,
            viewport_width: 1080,
            viewport_height: 720,
        }
    }
}
