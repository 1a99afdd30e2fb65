use game_core::{AutoTrack, Ball, InputEvent, Paddle};

/// Moves a paddle toward where the ball will cross it
///
/// Strategy:
/// 1. If the ball is coming toward the paddle, aim at its current center.
/// 2. If it is moving away, drift back to the middle.
/// 3. Never move more than `speed` per tick.
#[derive(Debug, Clone, Copy)]
pub struct FollowBall {
    pub speed: f32,
    pub deadzone: f32,
}

impl FollowBall {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            deadzone: 4.0,
        }
    }

    fn target_y(&self, paddle: &Paddle, ball: &Ball, arena_height: f32) -> f32 {
        let incoming = if paddle.center().x > ball.center().x {
            ball.vel.x > 0.0
        } else {
            ball.vel.x < 0.0
        };
        if incoming {
            ball.center().y
        } else {
            arena_height / 2.0
        }
    }
}

impl AutoTrack for FollowBall {
    fn track(&mut self, paddle: &mut Paddle, ball: &Ball, arena_height: f32) {
        let diff = self.target_y(paddle, ball, arena_height) - paddle.center().y;
        if diff.abs() > self.deadzone {
            paddle.move_by(diff.clamp(-self.speed, self.speed), arena_height);
        }
    }
}

/// Key the human-side driver holds this tick to chase the ball
pub fn steer(paddle: &Paddle, ball: &Ball, deadzone: f32) -> Option<InputEvent> {
    let diff = ball.center().y - paddle.center().y;
    if diff > deadzone {
        Some(InputEvent::MoveDown)
    } else if diff < -deadzone {
        Some(InputEvent::MoveUp)
    } else {
        None
    }
}
