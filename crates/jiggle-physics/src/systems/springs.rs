//! Pairwise elastic interactions along the fixed corner topology.

use crate::core::state::JiggleState;

/// Which box dimension a spring's rest length is derived from.
#[derive(Clone, Copy)]
enum Rest {
    Width,
    Height,
    Diagonal,
}

/// The 16 interacting pairs: the 4 x-aligned edges, the 4 y-aligned
/// (height) edges, the 4 z-aligned edges, and the 4 long body diagonals.
/// Corner indices follow the bit layout in `api::types`.
const PAIRS: [(usize, usize, Rest); 16] = [
    (0, 4, Rest::Width),
    (1, 5, Rest::Width),
    (2, 6, Rest::Width),
    (3, 7, Rest::Width),
    (0, 2, Rest::Height),
    (1, 3, Rest::Height),
    (4, 6, Rest::Height),
    (5, 7, Rest::Height),
    (0, 1, Rest::Width),
    (2, 3, Rest::Width),
    (4, 5, Rest::Width),
    (6, 7, Rest::Width),
    (0, 7, Rest::Diagonal),
    (1, 6, Rest::Diagonal),
    (2, 5, Rest::Diagonal),
    (3, 4, Rest::Diagonal),
];

/// Apply one tick of spring accelerations. Rest lengths are derived fresh
/// from the current body size; nothing is cached between steps.
pub fn apply_springs(state: &mut JiggleState, width: f32, height: f32, rigidity: f32, dt: f32) {
    let diagonal = (2.0 * width * width + height * height).sqrt();
    for &(i, j, rest) in PAIRS.iter() {
        let rest_len = match rest {
            Rest::Width => width,
            Rest::Height => height,
            Rest::Diagonal => diagonal,
        };
        interact(state, i, j, rest_len, rigidity, dt);
    }
}

fn interact(state: &mut JiggleState, i: usize, j: usize, rest_len: f32, rigidity: f32, dt: f32) {
    let d = state.pos[j] - state.pos[i];
    let dist = d.length();
    // Coincident masses exert no force; guards the division below.
    if dist == 0.0 {
        return;
    }
    let accel = rigidity * (dist - rest_len) / dist;
    let dv = d * (accel * dt);
    state.vel[i] += dv;
    state.vel[j] -= dv;
}
