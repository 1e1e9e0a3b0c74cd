use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Physics and orbit parameters.
pub struct SimulationOptions {
    /// Half-extent of the cubic bounce region on each axis.
    pub bound: f32,
    /// Restitution factor applied to a velocity component on bounce.
    /// Below 1.0 models energy loss.
    pub damping: f32,
    /// Orbit increment in radians per tick, about the world +Y axis.
    pub orbit_rate: f32,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            bound: 200.0,
            damping: 0.99,
            orbit_rate: 0.006,
        }
    }
}
