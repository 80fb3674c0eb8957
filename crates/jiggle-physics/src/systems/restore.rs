//! Restoring force toward the rigid rest pose.

use glam::Vec3;

use crate::api::types::{corner_high_x, corner_high_y, corner_high_z, CORNER_COUNT};
use crate::core::state::JiggleState;

/// Rest position of corner `i` in local coordinates: half-width offsets on
/// x/z chosen by the corner bits, rotated by `yaw` about +y. `upside_down`
/// mirrors the pose vertically (x offset and y level both flip so the body
/// does not also mirror left/right).
pub fn rest_position(i: usize, width: f32, height: f32, yaw: f32, upside_down: bool) -> Vec3 {
    let half_width = width / 2.0;
    let (sin, cos) = yaw.sin_cos();
    let xx = if corner_high_x(i) != upside_down {
        half_width
    } else {
        -half_width
    };
    let zz = if corner_high_z(i) { half_width } else { -half_width };
    let yy = if corner_high_y(i) != upside_down {
        height
    } else {
        0.0
    };
    Vec3::new(xx * cos - zz * sin, yy, xx * sin + zz * cos)
}

/// Pull each mass toward its rest-pose corner.
///
/// The pull scales with the body's surface-area-to-volume ratio, so bulky
/// bodies relax noticeably more slowly than small ones.
pub fn apply_restoration(
    state: &mut JiggleState,
    width: f32,
    height: f32,
    yaw: f32,
    upside_down: bool,
    rigidity: f32,
    dt: f32,
) {
    let accel_mag = rigidity * (2.0 * width * width + 4.0 * width * height)
        / (width * width * height);
    for i in 0..CORNER_COUNT {
        let target = rest_position(i, width, height, yaw, upside_down);
        state.vel[i] += (target - state.pos[i]) * (accel_mag * dt);
    }
}
