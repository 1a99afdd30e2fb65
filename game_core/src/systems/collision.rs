use crate::{Ball, Cue, CueBus, Paddle, Params, Side};

/// Clamp against the top or bottom wall and reflect vertically
pub(crate) fn bounce_walls(ball: &mut Ball, cues: &mut CueBus) {
    let floor = ball.arena.y - ball.size.y;
    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        cues.emit(Cue::WallBounce);
    } else if ball.pos.y >= floor {
        ball.pos.y = floor;
        ball.vel.y = -ball.vel.y;
        cues.emit(Cue::WallBounce);
    }
}

/// Deflect if overlapping the paddle and heading toward its goal line
pub(crate) fn collide(ball: &mut Ball, paddle: &Paddle, cues: &mut CueBus) {
    let approaching = match paddle.side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };
    if approaching && ball.rect().intersects(&paddle.rect()) {
        deflect(ball, paddle, cues);
    }
}

/// Paddle test for callers that moved the ball without passing paddles
pub fn check_collisions(ball: &mut Ball, left: &Paddle, right: &Paddle, cues: &mut CueBus) {
    collide(ball, left, cues);
    collide(ball, right, cues);
}

fn deflect(ball: &mut Ball, paddle: &Paddle, cues: &mut CueBus) {
    let paddle_rect = paddle.rect();
    let paddle_center = paddle_rect.center();

    // Flush against the nearer outer edge so the next sub-step cannot re-trigger
    if ball.center().x < paddle_center.x {
        ball.pos.x = paddle_rect.min.x - ball.size.x;
    } else {
        ball.pos.x = paddle_rect.max.x;
    }

    ball.vel.x = -ball.vel.x * ball.hit_speed_boost;

    // -1 at the top tip, 1 at the bottom tip
    let half_height = paddle.size.y / 2.0;
    let offset = ((ball.center().y - paddle_center.y) / half_height).clamp(-1.0, 1.0);
    ball.vel.y += offset * Params::DEFLECT_FACTOR;

    ball.vel.x = ball
        .vel
        .x
        .abs()
        .clamp(ball.min_speed_x, ball.max_speed_x)
        .copysign(ball.vel.x);

    cues.emit(Cue::PaddleHit);
}
