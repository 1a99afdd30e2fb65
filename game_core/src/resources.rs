use rand::RngCore;

use crate::Side;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8, // Left paddle
    pub ai: u8,     // Right paddle
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.player += 1,
            Side::Right => self.ai += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.player,
            Side::Right => self.ai,
        }
    }

    pub fn has_winner(&self, winner_score: u8) -> Option<Side> {
        if self.player >= winner_score {
            Some(Side::Left)
        } else if self.ai >= winner_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random source for serves
///
/// Wraps any [`RngCore`] so tests can drive serves from a fixed sequence.
pub struct GameRng(Box<dyn RngCore + Send>);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(Box::new(rand::rngs::StdRng::seed_from_u64(seed)))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(Box::new(rand::rngs::StdRng::from_entropy()))
    }

    pub fn with_source(source: impl RngCore + Send + 'static) -> Self {
        Self(Box::new(source))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl std::fmt::Debug for GameRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GameRng")
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

/// Cues emitted during the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_bounces: u32,
    pub paddle_hits: u32,
    pub scores: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.wall_bounces == 0 && self.paddle_hits == 0 && self.scores == 0
    }
}
