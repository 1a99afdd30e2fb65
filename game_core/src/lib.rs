pub mod arena;
pub mod components;
pub mod config;
pub mod controller;
pub mod cues;
pub mod error;
pub mod params;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use controller::*;
pub use cues::*;
pub use error::*;
pub use params::*;
pub use resources::*;
pub use systems::{check_collisions, move_ball, point_winner, InputEvent, MatchState, Transition};

use glam::Vec2;

/// Helper to create a paddle at its starting spot for `side`
pub fn create_paddle(config: &Config, side: Side) -> Paddle {
    let arena = config.arena();
    let size = Vec2::new(config.paddle_width, config.paddle_height);
    let pos = Vec2::new(config.paddle_x(side), arena.centered_y(size.y));
    Paddle::new(side, pos, size)
}

/// Helper to create the ball at the arena's serve spot
pub fn create_ball(config: &Config, rng: &mut GameRng) -> Ball {
    let arena = config.arena();
    Ball::new(arena.ball_spawn(), Vec2::splat(config.ball_size), &arena, rng)
}
