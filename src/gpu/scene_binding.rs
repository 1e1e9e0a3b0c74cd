//! Scene uniform binding: packs frame data into the GPU uniform buffer
//! and exposes the bind group consumed by the raytrace pass.

use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::scene::serialize::FrameData;
use crate::scene::{MAX_LIGHTS, MAX_PLANES, MAX_SPHERES};

/// GPU uniform block holding the whole serialized scene.
/// NOTE: Must match the WGSL `SceneUniforms` struct layout exactly.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    /// Pixel-to-world camera matrix, column-major.
    pub camera_matrix: [[f32; 4]; 4],
    /// Light records; xyz = position, w unused.
    pub lights: [[f32; 4]; MAX_LIGHTS],
    /// Sphere records; xyz = center, w = radius.
    pub spheres: [[f32; 4]; MAX_SPHERES],
    /// Plane records; xyz = outward normal, w = signed offset.
    pub planes: [[f32; 4]; MAX_PLANES],
    /// Ray origin (camera eye).
    pub origin: [f32; 3],
    /// Number of populated light records.
    pub light_count: u32,
    /// Number of populated sphere records.
    pub sphere_count: u32,
    /// Number of populated plane records.
    pub plane_count: u32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [u32; 2],
}

impl Default for SceneUniforms {
    fn default() -> Self {
        bytemuck::Zeroable::zeroed()
    }
}

impl SceneUniforms {
    /// Copy a packed frame into the front of the fixed-size arrays.
    ///
    /// Slots beyond each active count keep their previous contents — the
    /// shader never reads past the counts, and a freshly constructed
    /// uniform starts zeroed, so stale data cannot leak into a frame.
    pub fn write_frame(&mut self, frame: &FrameData) {
        copy_records(&mut self.lights, &frame.lights);
        copy_records(&mut self.spheres, &frame.spheres);
        copy_records(&mut self.planes, &frame.planes);
        self.light_count = frame.light_count;
        self.sphere_count = frame.sphere_count;
        self.plane_count = frame.plane_count;
        self.origin = frame.origin;
        for (col, chunk) in
            self.camera_matrix.iter_mut().zip(frame.camera_matrix.chunks(4))
        {
            col.copy_from_slice(chunk);
        }
    }
}

fn copy_records(slots: &mut [[f32; 4]], records: &[f32]) {
    for (slot, record) in slots.iter_mut().zip(records.chunks_exact(4)) {
        slot.copy_from_slice(record);
    }
}

/// Uniform buffer + bind group pairing [`SceneUniforms`] with the raytrace
/// pass.
pub struct SceneBinding {
    /// CPU-side copy of the uniform block.
    pub uniform: SceneUniforms,
    /// The GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 0 of the raytrace pipeline).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group referencing the buffer.
    pub bind_group: wgpu::BindGroup,
}

impl SceneBinding {
    /// Create the buffer, layout, and bind group with a zeroed uniform.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let uniform = SceneUniforms::default();

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Scene Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Scene Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some("Scene Bind Group"),
            });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Copy the frame into the uniform block and upload it.
    ///
    /// The frame is fully consumed here; it owes nothing to the GPU after
    /// this call returns.
    pub fn write(&mut self, queue: &wgpu::Queue, frame: &FrameData) {
        self.uniform.write_frame(frame);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::camera;
    use crate::options::CameraOptions;
    use crate::scene::{Light, Scene, Sphere};

    fn frame_for(scene: &Scene) -> FrameData {
        let cam = camera::derive(Quat::IDENTITY, &CameraOptions::default());
        FrameData::pack(scene, &cam)
    }

    #[test]
    fn uniform_size_matches_wgsl_block() {
        // mat4 (64) + 3 record arrays (3 * 80) + origin/counts tail (32)
        assert_eq!(size_of::<SceneUniforms>(), 336);
        assert_eq!(size_of::<SceneUniforms>() % 16, 0);
    }

    #[test]
    fn write_frame_fills_only_active_slots() {
        let scene = Scene::new(
            &[Light {
                position: Vec3::new(1.0, 2.0, 3.0),
                color: Vec3::ONE,
            }],
            &[Sphere {
                center: Vec3::new(4.0, 5.0, 6.0),
                velocity: Vec3::ZERO,
                radius: 7.0,
            }],
            &[],
        )
        .unwrap();

        let mut uniform = SceneUniforms::default();
        uniform.write_frame(&frame_for(&scene));

        assert_eq!(uniform.lights[0], [1.0, 2.0, 3.0, 0.0]);
        assert_eq!(uniform.spheres[0], [4.0, 5.0, 6.0, 7.0]);
        assert_eq!(uniform.light_count, 1);
        assert_eq!(uniform.sphere_count, 1);
        assert_eq!(uniform.plane_count, 0);
        // Inert slots stay zeroed
        for slot in &uniform.spheres[1..] {
            assert_eq!(*slot, [0.0; 4]);
        }
        for slot in &uniform.planes {
            assert_eq!(*slot, [0.0; 4]);
        }
    }

    #[test]
    fn write_frame_carries_camera() {
        let scene = Scene::new(&[], &[], &[]).unwrap();
        let frame = frame_for(&scene);
        let mut uniform = SceneUniforms::default();
        uniform.write_frame(&frame);
        assert_eq!(uniform.origin, frame.origin);
        let flat: Vec<f32> =
            uniform.camera_matrix.iter().flatten().copied().collect();
        assert_eq!(flat, frame.camera_matrix.to_vec());
    }
}
