pub mod api;
pub mod core;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::types::{BodyId, MassSample, CORNER_COUNT};
pub use core::body::{is_upside_down_name, BodyDescriptor};
pub use core::environment::Environment;
pub use core::material::Material;
pub use core::registry::JiggleRegistry;
pub use core::state::JiggleState;
pub use core::time::TickClock;
pub use core::world::{BodyFrame, EmptyWorld, Medium, WorldQuery};
pub use systems::step::{step_body, translate_to_local, translate_to_world};
