//! Sphere integration: explicit Euler plus per-axis wall bounces.
//!
//! One call to [`advance`] is one simulation tick. There is no delta-time
//! parameter — each tick displaces a sphere by exactly its velocity, so
//! simulation speed is tied to frame rate. That is intentional and matches
//! the shader-facing frame cadence.
//!
//! Collisions against the six walls at `±bound` are resolved per axis:
//! each of x/y/z is clamped and damped independently. A corner hit
//! therefore damps two or three components in the same tick rather than
//! performing a single vector reflection. This axis-by-axis policy is part
//! of the observable behavior and must not be "upgraded" to true
//! reflection.

use crate::options::SimulationOptions;
use crate::scene::Scene;

/// Advance every active sphere by one tick.
///
/// Infallible: no allocation, no I/O. Spheres with zero or negative radius
/// are integrated like any other (they degenerate to points).
pub fn advance(scene: &mut Scene, params: &SimulationOptions) {
    let bound = params.bound;
    let damping = params.damping;

    for sphere in scene.spheres_mut() {
        sphere.center += sphere.velocity;

        for axis in 0..3 {
            if sphere.center[axis] - sphere.radius < -bound {
                sphere.center[axis] = -bound + sphere.radius;
                sphere.velocity[axis] *= -damping;
            } else if sphere.center[axis] + sphere.radius > bound {
                sphere.center[axis] = bound - sphere.radius;
                sphere.velocity[axis] *= -damping;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::Sphere;

    const EPS: f32 = 1e-4;

    fn scene_with(sphere: Sphere) -> Scene {
        Scene::new(&[], &[sphere], &[]).unwrap()
    }

    fn params() -> SimulationOptions {
        SimulationOptions::default()
    }

    #[test]
    fn free_flight_is_euler_step() {
        let mut scene = scene_with(Sphere {
            center: Vec3::new(0.0, 10.0, -20.0),
            velocity: Vec3::new(1.0, -2.0, 3.0),
            radius: 5.0,
        });
        advance(&mut scene, &params());
        assert_eq!(scene.spheres()[0].center, Vec3::new(1.0, 8.0, -17.0));
        assert_eq!(scene.spheres()[0].velocity, Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn upper_wall_clamps_and_damps() {
        // From the reference scenario: center 199, radius 5, velocity +3,
        // bound 200. One step overshoots to 202 > 195, so the center
        // clamps to 195 and the velocity flips to -3 * 0.99.
        let mut scene = scene_with(Sphere {
            center: Vec3::new(199.0, 0.0, 0.0),
            velocity: Vec3::new(3.0, 0.0, 0.0),
            radius: 5.0,
        });
        advance(&mut scene, &params());
        let s = scene.spheres()[0];
        assert!((s.center.x - 195.0).abs() < EPS);
        assert!((s.velocity.x - (-2.97)).abs() < EPS);
        assert_eq!(s.center.y, 0.0);
        assert_eq!(s.velocity.y, 0.0);
    }

    #[test]
    fn lower_wall_clamps_and_damps() {
        let mut scene = scene_with(Sphere {
            center: Vec3::new(0.0, -198.0, 0.0),
            velocity: Vec3::new(0.0, -4.0, 0.0),
            radius: 10.0,
        });
        advance(&mut scene, &params());
        let s = scene.spheres()[0];
        assert!((s.center.y - (-190.0)).abs() < EPS);
        assert!((s.velocity.y - 3.96).abs() < EPS);
    }

    #[test]
    fn corner_hit_damps_each_axis_independently() {
        // Both x and y overshoot in the same tick; the per-axis policy
        // clamps and damps both components, not a reflected vector.
        let mut scene = scene_with(Sphere {
            center: Vec3::new(199.0, 199.0, 0.0),
            velocity: Vec3::new(5.0, 5.0, 0.0),
            radius: 5.0,
        });
        advance(&mut scene, &params());
        let s = scene.spheres()[0];
        assert!((s.center.x - 195.0).abs() < EPS);
        assert!((s.center.y - 195.0).abs() < EPS);
        assert!((s.velocity.x - (-4.95)).abs() < EPS);
        assert!((s.velocity.y - (-4.95)).abs() < EPS);
    }

    #[test]
    fn bound_is_never_violated_over_many_ticks() {
        let mut scene = scene_with(Sphere {
            center: Vec3::new(150.0, -30.0, 80.0),
            velocity: Vec3::new(17.0, -23.0, 11.0),
            radius: 40.0,
        });
        let p = params();
        for _ in 0..10_000 {
            advance(&mut scene, &p);
            let s = scene.spheres()[0];
            for axis in 0..3 {
                assert!(s.center[axis] - s.radius >= -p.bound - EPS);
                assert!(s.center[axis] + s.radius <= p.bound + EPS);
            }
        }
    }

    #[test]
    fn zero_radius_sphere_is_accepted() {
        let mut scene = scene_with(Sphere {
            center: Vec3::new(199.5, 0.0, 0.0),
            velocity: Vec3::new(1.0, 0.0, 0.0),
            radius: 0.0,
        });
        advance(&mut scene, &params());
        let s = scene.spheres()[0];
        assert!((s.center.x - 200.0).abs() < EPS);
        assert!(s.velocity.x < 0.0);
    }

    #[test]
    fn damping_loses_energy_across_bounces() {
        let mut scene = scene_with(Sphere {
            center: Vec3::ZERO,
            velocity: Vec3::new(50.0, 0.0, 0.0),
            radius: 10.0,
        });
        let p = params();
        let initial_speed = 50.0;
        for _ in 0..1_000 {
            advance(&mut scene, &p);
        }
        assert!(scene.spheres()[0].velocity.x.abs() < initial_speed);
    }
}
