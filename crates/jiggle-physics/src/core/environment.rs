use serde::{Deserialize, Serialize};

/// Physical constants shared by every simulated body.
///
/// Passed by value into each step rather than read from global state, so a
/// host (or a test) can run simulations under different atmospheres side by
/// side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Gravitational acceleration along +y, in m/s² (negative = downward).
    pub gravity: f32,
    /// Ambient air density in kg/m³, used for buoyancy and drag.
    pub air_density: f32,
    /// Dimensionless air drag coefficient.
    pub air_friction: f32,
    /// Fixed simulation timestep in seconds (the host tick length).
    pub dt: f32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity: -32.0,
            air_density: 1.2,
            air_friction: 50.0,
            dt: 0.05,
        }
    }
}
