use std::collections::HashMap;

use log::debug;

use crate::api::types::{BodyId, MassSample, CORNER_COUNT};
use crate::core::body::BodyDescriptor;
use crate::core::environment::Environment;
use crate::core::state::JiggleState;
use crate::core::world::WorldQuery;
use crate::systems::step::step_body;

/// Owns one `JiggleState` per live body, keyed by a stable id.
///
/// State is created lazily the first time the simulation or the renderer
/// touches a body, and removed synchronously when the host reports the body
/// destroyed. The host must call `remove` from its despawn/death path;
/// nothing here relies on implicit reclamation.
pub struct JiggleRegistry {
    states: HashMap<BodyId, JiggleState>,
}

impl JiggleRegistry {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Fetch the state for `id`, creating a zero-initialized one on first
    /// access.
    pub fn get_or_create(&mut self, id: BodyId) -> &mut JiggleState {
        self.states.entry(id).or_insert_with(|| {
            debug!("created jiggle state for body {id:?}");
            JiggleState::new()
        })
    }

    /// State for `id`, if the body has been touched before.
    pub fn get(&self, id: BodyId) -> Option<&JiggleState> {
        self.states.get(&id)
    }

    /// Renderer surface: previous and current positions of all eight
    /// masses, creating state on first reference like `step` does.
    pub fn masses(&mut self, id: BodyId) -> [MassSample; CORNER_COUNT] {
        self.get_or_create(id).masses()
    }

    /// Advance one body by one fixed timestep. The sole mutating entry
    /// point of the simulation. Bodies not simulated on this side are
    /// skipped before any state is created.
    pub fn step(
        &mut self,
        id: BodyId,
        body: &BodyDescriptor,
        world: &impl WorldQuery,
        env: &Environment,
    ) {
        if !body.locally_simulated {
            return;
        }
        let state = self.get_or_create(id);
        step_body(state, id, body, world, env);
    }

    /// Drop the state of a destroyed body. Safe to call for ids that were
    /// never tracked.
    pub fn remove(&mut self, id: BodyId) {
        if self.states.remove(&id).is_some() {
            debug!("removed jiggle state for body {id:?}");
        }
    }

    /// Number of bodies currently tracked.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Drop all tracked state (e.g. when leaving a world).
    pub fn clear(&mut self) {
        self.states.clear();
    }
}

impl Default for JiggleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
