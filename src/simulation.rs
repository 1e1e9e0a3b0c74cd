//! The tick-driven scene coordinator.
//!
//! [`Simulation`] owns the [`Scene`] and [`CameraRig`] for the process
//! lifetime and is the only mutator of either. One [`tick`](Simulation::tick)
//! advances sphere physics and the orbit by one step; [`frame`](Simulation::frame)
//! derives the camera and packs the shader-ready [`FrameData`]. The whole
//! pipeline is single-threaded and synchronous — no locking, no I/O, no
//! suspension.

use crate::camera::{self, CameraRig};
use crate::options::{CameraOptions, SimulationOptions};
use crate::scene::serialize::FrameData;
use crate::scene::{physics, Scene};

/// Owns the mutable simulation state and advances it once per tick.
///
/// Constructed per instance rather than as ambient global state so tests
/// can build isolated simulations.
pub struct Simulation {
    scene: Scene,
    rig: CameraRig,
    params: SimulationOptions,
}

impl Simulation {
    /// Wrap a populated scene with the given physics parameters.
    #[must_use]
    pub fn new(scene: Scene, params: SimulationOptions) -> Self {
        let rig = CameraRig::new(params.orbit_rate);
        Self { scene, rig, params }
    }

    /// Advance one tick: integrate sphere physics, then step the orbit.
    pub fn tick(&mut self) {
        physics::advance(&mut self.scene, &self.params);
        self.rig.step();
    }

    /// Derive the camera for the current orientation and pack the frame.
    #[must_use]
    pub fn frame(&self, camera_options: &CameraOptions) -> FrameData {
        let derived = camera::derive(self.rig.orientation(), camera_options);
        FrameData::pack(&self.scene, &derived)
    }

    /// Read access to the scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The orbit rig.
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::scene::Sphere;

    fn simulation() -> Simulation {
        let scene = Scene::new(
            &[],
            &[Sphere {
                center: Vec3::new(10.0, 0.0, 0.0),
                velocity: Vec3::new(1.0, 0.0, 0.0),
                radius: 5.0,
            }],
            &[],
        )
        .unwrap();
        Simulation::new(scene, SimulationOptions::default())
    }

    #[test]
    fn tick_moves_spheres_and_orbit_together() {
        let mut sim = simulation();
        sim.tick();
        assert_eq!(sim.scene().spheres()[0].center.x, 11.0);
        let expected = Quat::from_rotation_y(0.006);
        assert!(sim.rig().orientation().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn frame_reflects_ticked_state() {
        let mut sim = simulation();
        let opts = CameraOptions::default();
        let before = sim.frame(&opts);
        sim.tick();
        let after = sim.frame(&opts);
        assert_ne!(before.spheres, after.spheres);
        assert_ne!(before.camera_matrix, after.camera_matrix);
        assert_eq!(after.spheres[0], 11.0);
    }

    #[test]
    fn frame_without_tick_is_stable() {
        let sim = simulation();
        let opts = CameraOptions::default();
        assert_eq!(sim.frame(&opts), sim.frame(&opts));
    }
}
