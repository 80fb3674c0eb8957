//! Internal friction between the masses of the body material.

use crate::core::state::JiggleState;

/// Damp each mass by an approximation of quadratic drag.
///
/// True quadratic drag scales velocity by `1 - C·v`, which goes negative at
/// large `v` under explicit integration and diverges. `e^(-C·v)` is always
/// positive and tangent to `1 - C·v` at v = 0, so slow masses keep drifting
/// while fast ones are reined in hard.
pub fn apply_damping(state: &mut JiggleState, volume: f32, internal_friction: f32) {
    let c = internal_friction / volume.cbrt();
    for vel in state.vel.iter_mut() {
        *vel *= (-c * vel.length()).exp();
    }
}
