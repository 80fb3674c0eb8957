//! Gravity, buoyancy, air drag, and collision response.
//!
//! Everything here runs on world-space positions; the integrator brackets
//! this pass with the frame transforms in `step`.

use crate::api::types::{BodyId, CORNER_COUNT};
use crate::core::body::BodyDescriptor;
use crate::core::environment::Environment;
use crate::core::state::JiggleState;
use crate::core::world::{Medium, WorldQuery};

/// Apply environmental and collision forces to every mass.
pub fn apply_environment(
    state: &mut JiggleState,
    id: BodyId,
    body: &BodyDescriptor,
    world: &impl WorldQuery,
    env: &Environment,
) {
    let material = body.material;
    let density_ratio = env.air_density / material.clamped_density();
    let inv_cbrt_volume = 1.0 / body.volume().cbrt();

    for i in 0..CORNER_COUNT {
        let pos = state.pos[i];

        // Unresolvable positions degrade to air; a step always completes.
        let medium = world.medium_at(pos).unwrap_or(Medium::Air);
        if medium.blocks() {
            // Overlapping geometry: clamp instead of accelerating further
            // into it. Gravity and drag are skipped for this mass.
            state.vel[i] *= material.collision_friction;
        } else {
            if !body.no_gravity {
                state.vel[i].y += (1.0 - density_ratio) * env.gravity * env.dt;
            }
            // Bounded quadratic drag. Plain e^(-cv) tends to zero at
            // extreme velocity and would stall a mass permanently;
            // 1 - cv·e^(-cv) stays near 1 while damping typical speeds
            // the same way.
            let cv = state.vel[i].length() * density_ratio * env.air_friction * inv_cbrt_volume;
            state.vel[i] *= 1.0 - cv * (-cv).exp();
        }

        for other in world.bodies_overlapping(pos, id) {
            // Friction relative to the other body's motion, so a mass
            // riding a moving body is not dragged as if it were scraping
            // the world.
            let frame_vel = other.frame_velocity(env.dt);
            state.vel[i] = (state.vel[i] - frame_vel) * material.collision_friction + frame_vel;
        }
    }
}
