pub mod collide;
pub mod damping;
pub mod restore;
pub mod springs;
pub mod step;
