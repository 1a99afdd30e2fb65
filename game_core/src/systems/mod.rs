pub mod collision;
pub mod input;
pub mod movement;
pub mod scoring;

pub use collision::check_collisions;
pub use input::*;
pub use movement::*;
pub use scoring::*;
