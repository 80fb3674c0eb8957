use glam::Vec3;

use crate::api::types::BodyId;

/// What occupies a point of world geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medium {
    Solid,
    Liquid,
    Air,
}

impl Medium {
    /// Solid and liquid both clamp the velocity of an overlapping mass.
    pub fn blocks(self) -> bool {
        matches!(self, Medium::Solid | Medium::Liquid)
    }
}

/// Another body's world position this tick and last tick. Collision
/// friction is applied relative to this frame so a mass riding a moving
/// body is not dragged as if it were scraping the world.
#[derive(Debug, Clone, Copy)]
pub struct BodyFrame {
    pub pos: Vec3,
    pub prev_pos: Vec3,
}

impl BodyFrame {
    /// Velocity of the body's frame over the last tick.
    pub fn frame_velocity(&self, dt: f32) -> Vec3 {
        if dt <= 0.0 {
            return Vec3::ZERO;
        }
        (self.pos - self.prev_pos) / dt
    }
}

/// Read-only world and entity lookups consumed by the collision pass.
/// Implemented by the host; both queries are synchronous in-process lookups.
pub trait WorldQuery {
    /// The medium at a world position, or `None` when the position cannot
    /// be resolved (unloaded chunk, out of bounds). `None` is treated as
    /// air — a failed query never aborts a step.
    fn medium_at(&self, pos: Vec3) -> Option<Medium>;

    /// Bodies whose bounds contain `pos`, excluding the body being stepped.
    fn bodies_overlapping(&self, pos: Vec3, excluding: BodyId) -> Vec<BodyFrame>;
}

/// A world with no geometry and no other bodies.
pub struct EmptyWorld;

impl WorldQuery for EmptyWorld {
    fn medium_at(&self, _pos: Vec3) -> Option<Medium> {
        Some(Medium::Air)
    }

    fn bodies_overlapping(&self, _pos: Vec3, _excluding: BodyId) -> Vec<BodyFrame> {
        Vec::new()
    }
}
