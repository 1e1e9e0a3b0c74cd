//! Per-frame orchestration: tick the simulation, upload the packed frame,
//! draw the full-screen raytrace pass.

use crate::error::GlintError;
use crate::gpu::{RaytracePass, RenderContext, SceneBinding};
use crate::options::Options;
use crate::scene::Scene;
use crate::simulation::Simulation;
use crate::util::FrameTiming;

/// Ties the simulation core to the GPU upload layer.
///
/// The per-frame sequence is `update()` then `render()`: update advances
/// the scene and orbit one tick; render packs the current state, uploads
/// it into the scene uniform buffer, and draws. The handoff to the GPU
/// completes inside `render` — nothing of the packed frame survives into
/// the next tick.
pub struct Engine {
    /// wgpu device/queue/surface bundle.
    pub context: RenderContext,
    /// Frame timing and smoothed FPS.
    pub frame_timing: FrameTiming,
    binding: SceneBinding,
    pass: RaytracePass,
    simulation: Simulation,
    options: Options,
    frames_rendered: u64,
}

impl Engine {
    /// Create an engine over the given surface target, populated with the
    /// canonical bouncing demo scene.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::Gpu`] on context initialization failure and
    /// [`GlintError::ShaderContract`] if the embedded shader's maxima
    /// disagree with the crate's.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, GlintError> {
        let context = RenderContext::new(window, size).await?;
        let binding = SceneBinding::new(&context);
        let pass = RaytracePass::new(&context, &binding)?;

        let scene = Scene::bouncing_demo(&mut rand::rng());
        log::info!(
            "scene: {} lights, {} spheres, {} planes",
            scene.lights().len(),
            scene.spheres().len(),
            scene.planes().len()
        );
        let simulation =
            Simulation::new(scene, options.simulation.clone());

        Ok(Self {
            context,
            frame_timing: FrameTiming::new(0),
            binding,
            pass,
            simulation,
            options,
            frames_rendered: 0,
        })
    }

    /// Advance the simulation one tick.
    pub fn update(&mut self) {
        self.simulation.tick();
    }

    /// Pack the current state, upload it, and draw one frame.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain texture cannot be
    /// acquired; the caller decides whether to resize and retry.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if !self.frame_timing.should_render() {
            return Ok(());
        }

        let frame = self.simulation.frame(&self.options.camera);
        self.binding.write(&self.context.queue, &frame);

        let surface_texture = self.context.get_next_frame()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        {
            let mut rpass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Raytrace Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
            self.pass.render(&mut rpass, &self.binding);
        }
        self.context.submit(encoder);
        surface_texture.present();

        self.frame_timing.end_frame();
        self.frames_rendered += 1;
        if self.frames_rendered % 600 == 0 {
            log::debug!("fps: {:.1}", self.frame_timing.fps());
        }
        Ok(())
    }

    /// Reconfigure the surface for a new window size.
    ///
    /// The camera matrix stays parameterized by the configured viewport,
    /// not the window — the shader contract fixes the pixel dimensions the
    /// ray generation was derived against.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    /// Current runtime options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The simulation state.
    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }
}
