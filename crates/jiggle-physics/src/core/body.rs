use glam::Vec3;

use crate::core::material::Material;

/// Smallest width/height value fed into ratios that divide by the body
/// dimensions or volume.
const MIN_DIMENSION: f32 = 1e-3;

/// Read-only per-tick snapshot of the body that owns a set of masses.
///
/// The core never stores this; the host rebuilds it from the live entity
/// every tick, so dimension or material changes take effect immediately.
#[derive(Debug, Clone, Copy)]
pub struct BodyDescriptor {
    /// Bounding-box width (x and z extent).
    pub width: f32,
    /// Bounding-box height (y extent).
    pub height: f32,
    /// World position this tick.
    pub pos: Vec3,
    /// World position last tick.
    pub prev_pos: Vec3,
    /// Heading angle about +y, in radians.
    pub yaw: f32,
    /// Rest pose is flipped vertically (specially-named bodies).
    pub upside_down: bool,
    /// Body is unaffected by gravity.
    pub no_gravity: bool,
    /// False for server-authoritative bodies that must not be integrated
    /// on this side.
    pub locally_simulated: bool,
    /// Material constants of the body.
    pub material: Material,
}

impl BodyDescriptor {
    /// Create a descriptor at the world origin with default material.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pos: Vec3::ZERO,
            prev_pos: Vec3::ZERO,
            yaw: 0.0,
            upside_down: false,
            no_gravity: false,
            locally_simulated: true,
            material: Material::default(),
        }
    }

    // -- Builder pattern --

    /// Set this tick's and last tick's world position at once (a body at
    /// rest).
    pub fn at(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self.prev_pos = pos;
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_prev_pos(mut self, prev_pos: Vec3) -> Self {
        self.prev_pos = prev_pos;
        self
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_upside_down(mut self, upside_down: bool) -> Self {
        self.upside_down = upside_down;
        self
    }

    pub fn with_no_gravity(mut self, no_gravity: bool) -> Self {
        self.no_gravity = no_gravity;
        self
    }

    pub fn with_locally_simulated(mut self, locally_simulated: bool) -> Self {
        self.locally_simulated = locally_simulated;
        self
    }

    /// Width and height floored away from zero. Degenerate dimensions must
    /// not reach the ratios in the force math.
    pub(crate) fn clamped_size(&self) -> (f32, f32) {
        (
            self.width.max(MIN_DIMENSION),
            self.height.max(MIN_DIMENSION),
        )
    }

    /// Bounding-box volume, from the clamped dimensions.
    pub(crate) fn volume(&self) -> f32 {
        let (w, h) = self.clamped_size();
        w * w * h
    }

    /// Velocity of the body's own frame over the last tick.
    pub(crate) fn frame_velocity(&self, dt: f32) -> Vec3 {
        if dt <= 0.0 {
            return Vec3::ZERO;
        }
        (self.pos - self.prev_pos) / dt
    }
}

/// The vanilla easter egg: bodies carrying one of these custom names are
/// rendered (and therefore simulated) upside down.
pub fn is_upside_down_name(name: &str) -> bool {
    matches!(name, "Dinnerbone" | "Grumm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_dimensions_are_clamped() {
        let body = BodyDescriptor::new(0.0, -1.0);
        let (w, h) = body.clamped_size();
        assert!(w > 0.0 && h > 0.0);
        assert!(body.volume() > 0.0);
    }

    #[test]
    fn frame_velocity_from_positions() {
        let body = BodyDescriptor::new(1.0, 1.0)
            .with_prev_pos(Vec3::ZERO)
            .with_pos(Vec3::new(0.1, 0.0, 0.0));
        let v = body.frame_velocity(0.05);
        assert!((v.x - 2.0).abs() < 1e-5, "got {v:?}");
    }

    #[test]
    fn named_bodies_flip() {
        assert!(is_upside_down_name("Dinnerbone"));
        assert!(is_upside_down_name("Grumm"));
        assert!(!is_upside_down_name("Steve"));
    }
}
