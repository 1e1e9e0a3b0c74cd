//! Authoritative scene: fixed-capacity entity storage with active counts.
//!
//! Capacities mirror the constants the ray-tracing shader is compiled
//! against (see `assets/shaders/raytracer.wgsl`); the two sides are a
//! versioned contract checked at startup by
//! [`verify_shader_contract`](crate::gpu::verify_shader_contract).
//!
//! The entity set is established once at construction and never grows or
//! shrinks afterward. Slots past a kind's active count are inert: they are
//! never iterated, mutated, or serialized.

pub mod physics;
pub mod serialize;

use glam::Vec3;
use rand::Rng;

use crate::error::GlintError;

/// Maximum number of lights the shader uniform array holds.
pub const MAX_LIGHTS: usize = 5;
/// Maximum number of spheres the shader uniform array holds.
pub const MAX_SPHERES: usize = 5;
/// Maximum number of bounding planes the shader uniform array holds.
pub const MAX_PLANES: usize = 5;

/// Half-extent of the cubic region the demo scene bounces inside.
pub const DEMO_BOUND: f32 = 200.0;

/// Entity kind, used to report which capacity a scene construction
/// violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Point lights.
    Lights,
    /// Moving spheres.
    Spheres,
    /// Bounding planes.
    Planes,
}

impl EntityKind {
    /// Capacity of this kind's uniform array.
    #[must_use]
    pub fn capacity(self) -> usize {
        match self {
            Self::Lights => MAX_LIGHTS,
            Self::Spheres => MAX_SPHERES,
            Self::Planes => MAX_PLANES,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lights => write!(f, "lights"),
            Self::Spheres => write!(f, "spheres"),
            Self::Planes => write!(f, "planes"),
        }
    }
}

/// A point light.
///
/// The color channel rides along in the data model but is not part of the
/// serialized shader record — its uniform slot is written as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Light {
    /// World-space position.
    pub position: Vec3,
    /// Stored light color (unused downstream).
    pub color: Vec3,
}

/// A moving sphere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sphere {
    /// World-space center, mutated every tick.
    pub center: Vec3,
    /// Per-tick displacement, mutated on bounce.
    pub velocity: Vec3,
    /// Radius, set once at scene creation. Non-negative; zero degenerates
    /// to a point without triggering any physics anomaly.
    pub radius: f32,
}

/// An axis-aligned bounding plane in the shader record stream.
///
/// Outward unit normal plus signed offset `d`; points `p` inside the
/// bounded region satisfy `normal.dot(p) <= d`. Sphere collision does not
/// consult these (it is per-axis, see [`physics`]); they exist for the
/// serialized scene contract.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingPlane {
    /// Outward unit normal.
    pub normal: Vec3,
    /// Signed offset along the normal.
    pub d: f32,
}

/// Fixed-capacity scene storage.
///
/// Entities of each kind occupy the front `[0, active_count)` of a
/// capacity-sized array; the tail is inert. Counts are validated against
/// the capacities once, at construction, and never change.
#[derive(Debug)]
pub struct Scene {
    lights: [Light; MAX_LIGHTS],
    active_lights: usize,
    spheres: [Sphere; MAX_SPHERES],
    active_spheres: usize,
    planes: [BoundingPlane; MAX_PLANES],
    active_planes: usize,
}

impl Scene {
    /// Build a scene from entity slices.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::SceneCapacity`] if any slice is longer than
    /// its kind's shader-side maximum. This is the only place the
    /// capacity invariant is enforced; everything downstream relies on it.
    pub fn new(
        lights: &[Light],
        spheres: &[Sphere],
        planes: &[BoundingPlane],
    ) -> Result<Self, GlintError> {
        check_capacity(EntityKind::Lights, lights.len())?;
        check_capacity(EntityKind::Spheres, spheres.len())?;
        check_capacity(EntityKind::Planes, planes.len())?;

        let mut scene = Self {
            lights: [Light::default(); MAX_LIGHTS],
            active_lights: lights.len(),
            spheres: [Sphere::default(); MAX_SPHERES],
            active_spheres: spheres.len(),
            planes: [BoundingPlane::default(); MAX_PLANES],
            active_planes: planes.len(),
        };
        scene.lights[..lights.len()].copy_from_slice(lights);
        scene.spheres[..spheres.len()].copy_from_slice(spheres);
        scene.planes[..planes.len()].copy_from_slice(planes);
        Ok(scene)
    }

    /// The canonical demo population: two lights, a full set of randomly
    /// placed spheres, and the five walls of the bounce region.
    ///
    /// Sphere centers are uniform in `[-200, 200]^3`, velocities in
    /// `[-3, 3]^3`, radii in `[25, 50]`.
    pub fn bouncing_demo<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut lights = [Light::default(); MAX_LIGHTS];
        lights[0] = Light {
            position: Vec3::ZERO,
            color: Vec3::ONE,
        };
        lights[1] = Light {
            position: Vec3::new(0.0, 0.0, -600.0),
            color: Vec3::ONE,
        };

        let mut spheres = [Sphere::default(); MAX_SPHERES];
        for sphere in &mut spheres {
            sphere.center = Vec3::new(
                rng.random_range(-DEMO_BOUND..DEMO_BOUND),
                rng.random_range(-DEMO_BOUND..DEMO_BOUND),
                rng.random_range(-DEMO_BOUND..DEMO_BOUND),
            );
            sphere.velocity = Vec3::new(
                rng.random_range(-3.0..3.0),
                rng.random_range(-3.0..3.0),
                rng.random_range(-3.0..3.0),
            );
            sphere.radius = rng.random_range(25.0..50.0);
        }

        let planes = [
            BoundingPlane {
                normal: Vec3::new(-1.0, 0.0, 0.0),
                d: DEMO_BOUND,
            },
            BoundingPlane {
                normal: Vec3::new(1.0, 0.0, 0.0),
                d: DEMO_BOUND,
            },
            BoundingPlane {
                normal: Vec3::new(0.0, 0.0, -1.0),
                d: DEMO_BOUND,
            },
            BoundingPlane {
                normal: Vec3::new(0.0, -1.0, 0.0),
                d: DEMO_BOUND,
            },
            BoundingPlane {
                normal: Vec3::new(0.0, 1.0, 0.0),
                d: DEMO_BOUND,
            },
        ];

        Self {
            lights,
            active_lights: 2,
            spheres,
            active_spheres: MAX_SPHERES,
            planes,
            active_planes: MAX_PLANES,
        }
    }

    /// Active lights, in slot order.
    #[must_use]
    pub fn lights(&self) -> &[Light] {
        &self.lights[..self.active_lights]
    }

    /// Active spheres, in slot order.
    #[must_use]
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres[..self.active_spheres]
    }

    /// Mutable view of the active spheres, for the integrator.
    pub fn spheres_mut(&mut self) -> &mut [Sphere] {
        &mut self.spheres[..self.active_spheres]
    }

    /// Active bounding planes, in slot order.
    #[must_use]
    pub fn planes(&self) -> &[BoundingPlane] {
        &self.planes[..self.active_planes]
    }
}

fn check_capacity(kind: EntityKind, requested: usize) -> Result<(), GlintError> {
    if requested > kind.capacity() {
        return Err(GlintError::SceneCapacity {
            kind,
            requested,
            max: kind.capacity(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_at(x: f32) -> Sphere {
        Sphere {
            center: Vec3::new(x, 0.0, 0.0),
            velocity: Vec3::ZERO,
            radius: 1.0,
        }
    }

    #[test]
    fn new_accepts_counts_up_to_capacity() {
        let spheres = [sphere_at(0.0); MAX_SPHERES];
        let scene = Scene::new(&[], &spheres, &[]).unwrap();
        assert_eq!(scene.spheres().len(), MAX_SPHERES);
        assert_eq!(scene.lights().len(), 0);
        assert_eq!(scene.planes().len(), 0);
    }

    #[test]
    fn new_rejects_over_capacity() {
        let spheres = [sphere_at(0.0); MAX_SPHERES + 1];
        let err = Scene::new(&[], &spheres, &[]).unwrap_err();
        match err {
            GlintError::SceneCapacity { kind, requested, max } => {
                assert_eq!(kind, EntityKind::Spheres);
                assert_eq!(requested, MAX_SPHERES + 1);
                assert_eq!(max, MAX_SPHERES);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn new_rejects_over_capacity_lights() {
        let lights = [Light::default(); MAX_LIGHTS + 2];
        assert!(Scene::new(&lights, &[], &[]).is_err());
    }

    #[test]
    fn inert_slots_are_not_exposed() {
        let scene = Scene::new(&[], &[sphere_at(7.0)], &[]).unwrap();
        assert_eq!(scene.spheres().len(), 1);
        assert_eq!(scene.spheres()[0].center.x, 7.0);
    }

    #[test]
    fn bouncing_demo_respects_invariants() {
        let mut rng = rand::rng();
        let scene = Scene::bouncing_demo(&mut rng);
        assert_eq!(scene.lights().len(), 2);
        assert_eq!(scene.spheres().len(), MAX_SPHERES);
        assert_eq!(scene.planes().len(), MAX_PLANES);
        for sphere in scene.spheres() {
            assert!(sphere.radius >= 25.0 && sphere.radius < 50.0);
            assert!(sphere.center.abs().max_element() < DEMO_BOUND);
        }
        for plane in scene.planes() {
            assert!((plane.normal.length() - 1.0).abs() < 1e-6);
            assert_eq!(plane.d, DEMO_BOUND);
        }
    }
}
