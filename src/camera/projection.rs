use glam::{Mat4, Quat, Vec3, Vec4};

use crate::options::CameraOptions;

/// Look-at target of the orbit. Fixed at the world origin.
pub const TARGET: Vec3 = Vec3::ZERO;

/// World up vector used for the view basis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Output of a camera derivation: the eye point plus the pixel-to-world
/// transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedCamera {
    /// Eye position in world space — the ray origin the shader uses.
    pub eye: Vec3,
    /// Maps `(pixel_x, pixel_y, 0, 1)` directly to a world-space point on
    /// the image plane; the shader builds each pixel's ray direction from
    /// this point and `eye`. Column-major when flattened (glam
    /// `Mat4::to_cols_array`).
    pub matrix: Mat4,
}

/// Derive the camera for the given orbit orientation.
///
/// Pure: the same orientation and options always produce the same output.
/// The screen half-height is recomputed from the current eye distance on
/// every call so perceived zoom tracks the distance to the target; nothing
/// here is cached.
///
/// The matrix is composed, in this exact order, as
/// `T_eye * R * S * T_screen`:
///
/// 1. `T_screen` moves corner-origin pixel coordinates into view space,
///    translating by `(-W/2, -H/2, d)` for eye distance `d`;
/// 2. `S` scales pixel extents to view extents, `(-h/H, -h/H, 1)` with
///    `h = 2 * d * tan(fov / 2)`;
/// 3. `R` rotates view-space axes into world space from the
///    `(eye, view, up)` basis;
/// 4. `T_eye` translates by the eye's offset from the target.
///
/// The shader's ray generation is derived assuming this composition and
/// the configured viewport; both are part of the versioned contract.
///
/// Known edge case, unguarded: an orientation placing the eye at the
/// target makes `view` zero-length and the result is undefined (but does
/// not crash — NaNs propagate into the matrix).
#[must_use]
pub fn derive(orientation: Quat, options: &CameraOptions) -> DerivedCamera {
    let eye = orientation * Vec3::new(0.0, 0.0, -options.distance);

    let view = TARGET - eye;
    let d = view.length();
    let view_dir = view / d;

    let h = 2.0 * d * (options.fov.to_radians() / 2.0).tan();

    let half_w = options.viewport_width as f32 / 2.0;
    let half_h = options.viewport_height as f32 / 2.0;
    let pixel_scale = h / options.viewport_height as f32;

    let t_screen = Mat4::from_translation(Vec3::new(-half_w, -half_h, d));
    let s = Mat4::from_scale(Vec3::new(-pixel_scale, -pixel_scale, 1.0));
    let r = view_basis(view_dir, WORLD_UP);
    let t_eye = Mat4::from_translation(eye - TARGET);

    DerivedCamera {
        eye,
        matrix: t_eye * r * s * t_screen,
    }
}

/// Rotation whose columns are the view-space basis expressed in world
/// space: `w` along the view direction, `u = normalize(up × w)`,
/// `v = w × u`.
fn view_basis(view_dir: Vec3, up: Vec3) -> Mat4 {
    let w = view_dir;
    let u = up.cross(w).normalize();
    let v = w.cross(u);
    Mat4::from_cols(u.extend(0.0), v.extend(0.0), w.extend(0.0), Vec4::W)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn options() -> CameraOptions {
        CameraOptions::default()
    }

    #[test]
    fn identity_orientation_reference_values() {
        let cam = derive(Quat::IDENTITY, &options());
        assert!(cam.eye.abs_diff_eq(Vec3::new(0.0, 0.0, -600.0), EPS));

        // h = 2 * 600 * tan(30°) ≈ 692.8
        let h = 2.0 * 600.0 * 30.0_f32.to_radians().tan();
        assert!((h - 692.820_3).abs() < 1e-2);
    }

    #[test]
    fn derivation_is_deterministic() {
        let q = Quat::from_rotation_y(0.37);
        let a = derive(q, &options());
        let b = derive(q, &options());
        assert_eq!(a.eye, b.eye);
        assert_eq!(a.matrix.to_cols_array(), b.matrix.to_cols_array());
    }

    #[test]
    fn center_pixel_maps_to_target() {
        // (W/2, H/2, 0) is the screen center; through T_screen it lands on
        // the view axis at depth d, S leaves it there, R and T_eye carry
        // it to the look-at target.
        let cam = derive(Quat::IDENTITY, &options());
        let p = cam.matrix * Vec4::new(540.0, 360.0, 0.0, 1.0);
        assert!(p.truncate().abs_diff_eq(TARGET, EPS));
    }

    #[test]
    fn corner_pixel_reference_mapping() {
        let cam = derive(Quat::IDENTITY, &options());
        let h = 2.0 * 600.0 * 30.0_f32.to_radians().tan();
        // Pixel (0,0): T_screen gives (-540, -360, 600); the negated
        // scale flips both axes into +u/+v view space.
        let expected = Vec3::new(
            540.0 * h / 720.0,
            360.0 * h / 720.0,
            600.0,
        ) + Vec3::new(0.0, 0.0, -600.0);
        let p = cam.matrix * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(p.truncate().abs_diff_eq(expected, 1e-1));
    }

    #[test]
    fn eye_stays_on_orbit_sphere() {
        let opts = options();
        let mut q = Quat::IDENTITY;
        let step = Quat::from_rotation_y(0.006);
        for _ in 0..1_000 {
            q = (q * step).normalize();
            let cam = derive(q, &opts);
            assert!((cam.eye.length() - opts.distance).abs() < 0.05);
            // Orbit about +Y keeps the eye in the y = 0 plane.
            assert!(cam.eye.y.abs() < EPS);
        }
    }

    #[test]
    fn quarter_turn_moves_eye_to_x_axis() {
        let cam = derive(
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            &options(),
        );
        assert!(cam.eye.abs_diff_eq(Vec3::new(-600.0, 0.0, 0.0), 1e-2));
    }

    #[test]
    fn screen_scale_tracks_distance() {
        // Doubling the distance doubles the image-plane half-height, so
        // the pixel scale embedded in the matrix doubles too.
        let near = derive(Quat::IDENTITY, &options());
        let mut far_opts = options();
        far_opts.distance = 1200.0;
        let far = derive(Quat::IDENTITY, &far_opts);
        let near_scale = near.matrix.x_axis.length();
        let far_scale = far.matrix.x_axis.length();
        assert!((far_scale / near_scale - 2.0).abs() < 1e-3);
    }
}
