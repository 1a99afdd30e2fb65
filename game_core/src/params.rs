/// Fixed tuning parameters for the match
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between screen edge and paddle
    pub const PADDLE_SPEED: f32 = 10.0; // pixels per tick while a move key is held
    pub const TRACK_SPEED: f32 = 6.0; // pixels per tick for tracked paddles

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const SERVE_SPEED_X: f32 = 5.0;
    pub const SERVE_SPEED_Y: f32 = 3.0;
    pub const MIN_SPEED_X: f32 = 2.0;
    pub const MAX_SPEED_X: f32 = 18.0;
    pub const HIT_SPEED_BOOST: f32 = 1.05; // multiply |vx| on paddle hit
    pub const DEFLECT_FACTOR: f32 = 5.0; // vy added at the paddle tip

    // Physics
    pub const MIN_SUBSTEP: f32 = 2.0;

    // Match
    pub const DEFAULT_BEST_OF: u8 = 5;
}
