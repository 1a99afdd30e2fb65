use glam::Vec2;
use rand::Rng;

use crate::{Aabb, Arena, GameRng, Params};

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // player
    Right, // ai
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

/// Paddle - a fixed-size rectangle that only moves vertically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left corner
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self { side, pos, size }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Move vertically, staying inside the arena
    pub fn move_by(&mut self, dy: f32, arena_height: f32) {
        let max_y = (arena_height - self.size.y).max(0.0);
        self.pos.y = (self.pos.y + dy).clamp(0.0, max_y);
    }

    pub fn recenter(&mut self, arena: &Arena) {
        self.pos.y = arena.centered_y(self.size.y);
    }
}

/// Automatic paddle control. Optional; a paddle without one is driven by input.
pub trait AutoTrack {
    fn track(&mut self, paddle: &mut Paddle, ball: &Ball, arena_height: f32);
}

/// The rally ball
///
/// `pos` is the top-left corner and keeps sub-pixel precision between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub min_speed_x: f32,
    pub max_speed_x: f32,
    pub hit_speed_boost: f32,
    pub(crate) spawn: Vec2,
    pub(crate) arena: Vec2,
}

impl Ball {
    /// Place a ball at `spawn` with a freshly drawn serve velocity
    pub fn new(spawn: Vec2, size: Vec2, arena: &Arena, rng: &mut GameRng) -> Self {
        let mut ball = Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size,
            min_speed_x: Params::MIN_SPEED_X,
            max_speed_x: Params::MAX_SPEED_X,
            hit_speed_boost: Params::HIT_SPEED_BOOST,
            spawn,
            arena: arena.size(),
        };
        ball.vel = serve_velocity(rng);
        ball
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Back to the spawn point with a new serve direction
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.pos = self.spawn;
        self.vel = serve_velocity(rng);
    }
}

/// Draw a serve from {-5, +5} x {-3, +3}. X is drawn first.
fn serve_velocity(rng: &mut GameRng) -> Vec2 {
    let vx = if rng.gen_bool(0.5) {
        Params::SERVE_SPEED_X
    } else {
        -Params::SERVE_SPEED_X
    };
    let vy = if rng.gen_bool(0.5) {
        Params::SERVE_SPEED_Y
    } else {
        -Params::SERVE_SPEED_Y
    };
    Vec2::new(vx, vy)
}
