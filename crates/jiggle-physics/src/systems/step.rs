//! The per-tick integrator: fixed force order and the local/world frame
//! bracket around the collision pass.

use crate::api::types::{BodyId, CORNER_COUNT};
use crate::core::body::BodyDescriptor;
use crate::core::environment::Environment;
use crate::core::state::JiggleState;
use crate::core::world::WorldQuery;
use crate::systems::collide::apply_environment;
use crate::systems::damping::apply_damping;
use crate::systems::restore::apply_restoration;
use crate::systems::springs::apply_springs;

/// Advance one body's masses by one fixed timestep.
///
/// The force order is a stability contract, not a style choice: damping
/// must run after the spring pass (it damps the velocity the springs just
/// injected) and before the position update, and the collision pass needs
/// world-frame positions. Forces mutate velocity directly; there is no
/// accumulator.
pub fn step_body(
    state: &mut JiggleState,
    id: BodyId,
    body: &BodyDescriptor,
    world: &impl WorldQuery,
    env: &Environment,
) {
    let (width, height) = body.clamped_size();
    let material = body.material;

    apply_springs(state, width, height, material.rigidity, env.dt);
    apply_damping(state, body.volume(), material.internal_friction);
    apply_restoration(
        state,
        width,
        height,
        body.yaw,
        body.upside_down,
        material.rigidity,
        env.dt,
    );

    translate_to_world(state, body, env.dt);
    apply_environment(state, id, body, world, env);
    translate_to_local(state, body, env.dt);

    for i in 0..CORNER_COUNT {
        state.prev_pos[i] = state.pos[i];
        state.pos[i] += state.vel[i] * env.dt;
    }
}

/// Shift positions into world space and velocities into the world frame.
///
/// The velocity shift compensates for the body's own motion, so drag and
/// collision friction act relative to its rest frame instead of punishing
/// a mass for simply traveling with its body.
pub fn translate_to_world(state: &mut JiggleState, body: &BodyDescriptor, dt: f32) {
    let frame_vel = body.frame_velocity(dt);
    for i in 0..CORNER_COUNT {
        state.pos[i] += body.pos;
        state.vel[i] += frame_vel;
    }
}

/// Exact inverse of `translate_to_world`.
pub fn translate_to_local(state: &mut JiggleState, body: &BodyDescriptor, dt: f32) {
    let frame_vel = body.frame_velocity(dt);
    for i in 0..CORNER_COUNT {
        state.pos[i] -= body.pos;
        state.vel[i] -= frame_vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::world::EmptyWorld;
    use crate::systems::restore::rest_position;
    use glam::Vec3;

    fn place_at_rest(state: &mut JiggleState, body: &BodyDescriptor) {
        for i in 0..CORNER_COUNT {
            let p = rest_position(i, body.width, body.height, body.yaw, body.upside_down);
            state.pos[i] = p;
            state.prev_pos[i] = p;
        }
    }

    #[test]
    fn frame_transforms_round_trip() {
        let mut state = JiggleState::new();
        for i in 0..CORNER_COUNT {
            state.pos[i] = Vec3::new(i as f32, -(i as f32) * 0.5, 2.0);
            state.vel[i] = Vec3::new(0.1 * i as f32, 1.0, -0.3);
        }
        let original = state.clone();
        let body = BodyDescriptor::new(1.0, 1.0)
            .with_prev_pos(Vec3::new(10.0, 4.0, -6.0))
            .with_pos(Vec3::new(10.5, 4.0, -6.25));

        translate_to_world(&mut state, &body, 0.05);
        translate_to_local(&mut state, &body, 0.05);

        for i in 0..CORNER_COUNT {
            assert!(
                (state.pos[i] - original.pos[i]).length() < 1e-4,
                "pos[{i}] drifted: {:?} vs {:?}",
                state.pos[i],
                original.pos[i]
            );
            assert!(
                (state.vel[i] - original.vel[i]).length() < 1e-4,
                "vel[{i}] drifted: {:?} vs {:?}",
                state.vel[i],
                original.vel[i]
            );
        }
    }

    #[test]
    fn rest_pose_is_a_fixed_point() {
        // No gravity, no collisions, masses exactly at the rest pose with
        // zero velocity: a full step must change nothing.
        let body = BodyDescriptor::new(1.0, 1.0).with_no_gravity(true).with_yaw(0.4);
        let mut state = JiggleState::new();
        place_at_rest(&mut state, &body);

        step_body(&mut state, BodyId(1), &body, &EmptyWorld, &Environment::default());

        for i in 0..CORNER_COUNT {
            let target = rest_position(i, body.width, body.height, body.yaw, body.upside_down);
            assert!(
                (state.pos[i] - target).length() < 1e-4,
                "pos[{i}] moved off the rest pose: {:?}",
                state.pos[i]
            );
            assert!(state.vel[i].length() < 1e-4, "vel[{i}] = {:?}", state.vel[i]);
        }
    }

    #[test]
    fn hundred_steps_settle_near_the_rest_pose() {
        // Gravity on, no collisions, all masses starting collapsed at the
        // origin. The wobble must stay bounded and die down close to the
        // rest pose (sagging slightly below it against gravity).
        let body = BodyDescriptor::new(1.0, 1.0);
        let env = Environment::default();
        let mut state = JiggleState::new();

        let mut early_speed = 0.0;
        let mut late_speed = 0.0;
        for step in 0..100 {
            step_body(&mut state, BodyId(1), &body, &EmptyWorld, &env);
            let speed: f32 = state.vel.iter().map(|v| v.length()).sum();
            if step < 20 {
                early_speed += speed;
            } else if step >= 80 {
                late_speed += speed;
            }
            for i in 0..CORNER_COUNT {
                assert!(state.pos[i].is_finite(), "diverged at step {step}");
                assert!(
                    state.pos[i].length() < 10.0,
                    "unbounded at step {step}: {:?}",
                    state.pos[i]
                );
            }
        }

        assert!(
            late_speed < early_speed,
            "oscillation should decay: early {early_speed}, late {late_speed}"
        );

        let mean_err: f32 = (0..CORNER_COUNT)
            .map(|i| {
                let target = rest_position(i, body.width, body.height, 0.0, false);
                (state.pos[i] - target).length()
            })
            .sum::<f32>()
            / CORNER_COUNT as f32;
        assert!(
            mean_err < 0.3,
            "masses should settle near the rest pose, mean error {mean_err}"
        );
    }

    #[test]
    fn degenerate_dimensions_stay_finite() {
        // A zero-size body clamps to the epsilon box. The wobble it
        // produces is garbage, but it must be finite garbage.
        let body = BodyDescriptor::new(0.0, 0.0);
        let env = Environment::default();
        let mut state = JiggleState::new();
        for _ in 0..3 {
            step_body(&mut state, BodyId(1), &body, &EmptyWorld, &env);
        }
        for i in 0..CORNER_COUNT {
            assert!(
                state.pos[i].is_finite() && state.vel[i].is_finite(),
                "corner {i} became non-finite: pos {:?} vel {:?}",
                state.pos[i],
                state.vel[i]
            );
        }
    }

    #[test]
    fn position_integration_keeps_one_tick_of_history() {
        let body = BodyDescriptor::new(1.0, 1.0);
        let env = Environment::default();
        let mut state = JiggleState::new();
        step_body(&mut state, BodyId(1), &body, &EmptyWorld, &env);
        // First step: every prev_pos is the pre-step position (the origin).
        for i in 0..CORNER_COUNT {
            assert_eq!(state.prev_pos[i], Vec3::ZERO);
        }
        let after_first = state.pos;
        step_body(&mut state, BodyId(1), &body, &EmptyWorld, &env);
        for i in 0..CORNER_COUNT {
            assert_eq!(state.prev_pos[i], after_first[i]);
        }
    }
}
