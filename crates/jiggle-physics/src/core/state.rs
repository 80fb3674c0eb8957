use glam::Vec3;

use crate::api::types::{MassSample, CORNER_COUNT};

/// The eight point-masses of one body.
///
/// Coordinates are local: relative to the body origin, unrotated. All
/// arrays index by the corner code in `api::types`. Mutated only by the
/// integrator; everything else reads.
#[derive(Debug, Clone)]
pub struct JiggleState {
    /// Positions at the end of the previous tick.
    pub prev_pos: [Vec3; CORNER_COUNT],
    /// Positions at the end of the current tick.
    pub pos: [Vec3; CORNER_COUNT],
    /// Velocities, in units per second.
    pub vel: [Vec3; CORNER_COUNT],
}

impl JiggleState {
    /// A fresh state with every mass at the local origin, at rest.
    pub fn new() -> Self {
        Self {
            prev_pos: [Vec3::ZERO; CORNER_COUNT],
            pos: [Vec3::ZERO; CORNER_COUNT],
            vel: [Vec3::ZERO; CORNER_COUNT],
        }
    }

    /// Raw previous/current positions for every mass, renderer layout.
    pub fn masses(&self) -> [MassSample; CORNER_COUNT] {
        std::array::from_fn(|i| MassSample {
            prev: self.prev_pos[i].to_array(),
            pos: self.pos[i].to_array(),
        })
    }

    /// Position of corner `i` interpolated by the sub-tick fraction
    /// `alpha` in [0, 1] (see `TickClock::alpha`).
    pub fn corner_lerped(&self, i: usize, alpha: f32) -> Vec3 {
        self.prev_pos[i].lerp(self.pos[i], alpha)
    }

    /// All eight corners interpolated by `alpha`.
    pub fn corners_lerped(&self, alpha: f32) -> [Vec3; CORNER_COUNT] {
        std::array::from_fn(|i| self.corner_lerped(i, alpha))
    }
}

impl Default for JiggleState {
    fn default() -> Self {
        Self::new()
    }
}
