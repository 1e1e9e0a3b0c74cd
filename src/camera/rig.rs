use glam::Quat;

/// Accumulated orbit orientation — the only camera state with memory
/// across frames.
///
/// Each tick multiplies a fixed incremental rotation about world +Y onto
/// the accumulated quaternion, producing a smooth input-free orbit around
/// the look-at target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    orientation: Quat,
    step: Quat,
}

impl CameraRig {
    /// Start at the identity orientation with the given per-tick orbit
    /// increment in radians.
    #[must_use]
    pub fn new(orbit_rate: f32) -> Self {
        Self {
            orientation: Quat::IDENTITY,
            step: Quat::from_rotation_y(orbit_rate),
        }
    }

    /// Apply one orbit increment: `orientation = orientation * step`.
    ///
    /// Renormalizes to keep the quaternion unit-length against float
    /// drift over long runs.
    pub fn step(&mut self) {
        self.orientation = (self.orientation * self.step).normalize();
    }

    /// The accumulated orientation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_identity() {
        let rig = CameraRig::new(0.006);
        assert_eq!(rig.orientation(), Quat::IDENTITY);
    }

    #[test]
    fn one_step_is_the_increment() {
        let mut rig = CameraRig::new(0.01);
        rig.step();
        let expected = Quat::from_rotation_y(0.01);
        assert!(rig.orientation().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn steps_accumulate_about_y() {
        let mut rig = CameraRig::new(0.01);
        for _ in 0..100 {
            rig.step();
        }
        let expected = Quat::from_rotation_y(1.0);
        assert!(rig.orientation().abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn orientation_stays_unit_length() {
        let mut rig = CameraRig::new(0.006);
        for _ in 0..100_000 {
            rig.step();
        }
        assert!((rig.orientation().length() - 1.0).abs() < 1e-5);
    }
}
