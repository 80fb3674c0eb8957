use serde::{Deserialize, Serialize};

/// Per-material constants of a deformable body.
///
/// Defaults are the tuned slime values; hosts typically deserialize one
/// block per creature kind from their config.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Body density in kg/m³.
    pub density: f32,
    /// Spring and shape-restoring stiffness.
    pub rigidity: f32,
    /// Damping coefficient for inter-mass relative motion.
    pub internal_friction: f32,
    /// Velocity scale applied while a mass overlaps world geometry or
    /// another body. Must be in [0, 1] to damp rather than amplify.
    pub collision_friction: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            density: 1200.0,
            rigidity: 30.0,
            internal_friction: 0.055,
            collision_friction: 0.5,
        }
    }
}

impl Material {
    /// Density floored away from zero before it divides anything.
    pub(crate) fn clamped_density(&self) -> f32 {
        self.density.max(1e-3)
    }
}
