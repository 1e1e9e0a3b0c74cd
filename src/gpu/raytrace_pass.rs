//! Full-screen raytrace pass.
//!
//! One oversized triangle, no vertex buffers; all scene data arrives
//! through the uniform block bound at group 0. The WGSL source is embedded
//! at compile time and validated against the crate's entity maxima before
//! the pipeline is built.

use crate::error::GlintError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::scene_binding::SceneBinding;
use crate::gpu::verify_shader_contract;

/// Embedded ray tracer shader source — the versioned scene contract.
pub const RAYTRACER_WGSL: &str =
    include_str!("../../assets/shaders/raytracer.wgsl");

/// The full-screen ray tracing pipeline.
pub struct RaytracePass {
    pipeline: wgpu::RenderPipeline,
}

impl RaytracePass {
    /// Validate the shader contract and build the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::ShaderContract`] if the embedded WGSL's
    /// compiled-in maxima disagree with the crate's constants. This check
    /// runs before any frame is drawn; a silent mismatch would mean
    /// out-of-bounds uniform writes downstream.
    pub fn new(
        context: &RenderContext,
        binding: &SceneBinding,
    ) -> Result<Self, GlintError> {
        verify_shader_contract(RAYTRACER_WGSL)?;

        let shader = context.device.create_shader_module(
            wgpu::ShaderModuleDescriptor {
                label: Some("Raytracer Shader"),
                source: wgpu::ShaderSource::Wgsl(RAYTRACER_WGSL.into()),
            },
        );

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Raytrace Pipeline Layout"),
                bind_group_layouts: &[&binding.layout],
                push_constant_ranges: &[],
            },
        );

        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Raytrace Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        Ok(Self { pipeline })
    }

    /// Encode the full-screen draw into an existing render pass.
    pub fn render(
        &self,
        rpass: &mut wgpu::RenderPass<'_>,
        binding: &SceneBinding,
    ) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &binding.bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }
}
