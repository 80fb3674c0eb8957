pub mod body;
pub mod environment;
pub mod material;
pub mod registry;
pub mod state;
pub mod time;
pub mod world;
