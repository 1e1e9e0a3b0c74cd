//! Orbit state and pixel-to-world camera derivation.
//!
//! [`CameraRig`] holds the accumulated orbit quaternion; [`derive`] turns
//! it into the eye point and 4×4 matrix the ray-generation shader
//! consumes. Derivation is a pure function — all per-frame camera math
//! lives here, none of it cached.

mod projection;
mod rig;

pub use projection::{derive, DerivedCamera, TARGET, WORLD_UP};
pub use rig::CameraRig;
