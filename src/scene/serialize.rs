//! Flattens scene + camera state into the shader's numeric layout.
//!
//! Each entity kind serializes to a contiguous run of 4-float records,
//! exactly `active_count` records long — inert slots never reach the
//! buffers. Record layouts:
//!
//! | kind   | slots 0-2        | slot 3          |
//! |--------|------------------|-----------------|
//! | light  | position         | 0 (color unused)|
//! | sphere | center           | radius          |
//! | plane  | outward normal   | offset `d`      |
//!
//! The camera contributes the eye point (3 floats) and the pixel-to-world
//! matrix (16 floats, column-major).

use crate::camera::DerivedCamera;
use crate::scene::Scene;

/// One frame's worth of shader-ready data.
///
/// Transient: packed, uploaded, and discarded within a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    /// Light records, `light_count * 4` floats.
    pub lights: Vec<f32>,
    /// Number of active lights.
    pub light_count: u32,
    /// Sphere records, `sphere_count * 4` floats.
    pub spheres: Vec<f32>,
    /// Number of active spheres.
    pub sphere_count: u32,
    /// Plane records, `plane_count * 4` floats.
    pub planes: Vec<f32>,
    /// Number of active planes.
    pub plane_count: u32,
    /// Ray origin (camera eye).
    pub origin: [f32; 3],
    /// Pixel-to-world camera matrix, column-major.
    pub camera_matrix: [f32; 16],
}

impl FrameData {
    /// Pack the active scene contents and the derived camera.
    #[must_use]
    pub fn pack(scene: &Scene, camera: &DerivedCamera) -> Self {
        let mut lights = Vec::with_capacity(scene.lights().len() * 4);
        for light in scene.lights() {
            lights.extend_from_slice(&[
                light.position.x,
                light.position.y,
                light.position.z,
                0.0,
            ]);
        }

        let mut spheres = Vec::with_capacity(scene.spheres().len() * 4);
        for sphere in scene.spheres() {
            spheres.extend_from_slice(&[
                sphere.center.x,
                sphere.center.y,
                sphere.center.z,
                sphere.radius,
            ]);
        }

        let mut planes = Vec::with_capacity(scene.planes().len() * 4);
        for plane in scene.planes() {
            planes.extend_from_slice(&[
                plane.normal.x,
                plane.normal.y,
                plane.normal.z,
                plane.d,
            ]);
        }

        Self {
            light_count: scene.lights().len() as u32,
            sphere_count: scene.spheres().len() as u32,
            plane_count: scene.planes().len() as u32,
            lights,
            spheres,
            planes,
            origin: camera.eye.to_array(),
            camera_matrix: camera.matrix.to_cols_array(),
        }
    }
}
