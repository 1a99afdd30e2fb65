use crate::{Ball, CueBus, Paddle, Params};

use super::collision::{bounce_walls, collide};

/// Largest distance a single sub-step may cover without skipping
/// over a boundary as thin as the ball's smaller dimension
pub fn step_limit(ball: &Ball) -> f32 {
    (ball.size.x.min(ball.size.y) / 2.0).max(Params::MIN_SUBSTEP)
}

/// Number of sub-steps needed for the current velocity
///
/// Travel beyond the arena diagonal crosses the whole screen anyway, so the
/// count is capped there.
pub fn substeps(ball: &Ball) -> u32 {
    let distance = ball.vel.x.abs().max(ball.vel.y.abs()).min(ball.arena.length());
    ((distance / step_limit(ball)) as u32).saturating_add(1)
}

/// Advance one tick of velocity, resolving walls and paddles per sub-step
///
/// Pass `None` for a paddle to skip it; callers that move the ball without
/// paddles can resolve them afterwards with [`super::check_collisions`].
pub fn move_ball(
    ball: &mut Ball,
    left: Option<&Paddle>,
    right: Option<&Paddle>,
    cues: &mut CueBus,
) {
    let steps = substeps(ball);
    let steps_f = steps as f32;

    for _ in 0..steps {
        // Re-read velocity so bounces apply to the rest of the tick
        ball.pos += ball.vel / steps_f;

        bounce_walls(ball, cues);

        for paddle in [left, right].into_iter().flatten() {
            collide(ball, paddle, cues);
        }

        if is_out_horizontally(ball) {
            break;
        }
    }
}

/// Fully past either side of the screen; the rally is over
pub fn is_out_horizontally(ball: &Ball) -> bool {
    ball.pos.x < -ball.size.x || ball.pos.x > ball.arena.x + ball.size.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Arena, GameRng, Side};
    use glam::Vec2;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        let arena = Arena::new(800.0, 600.0);
        let mut ball = Ball::new(pos, Vec2::splat(20.0), &arena, &mut GameRng::new(1));
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_substep_count() {
        let ball = ball_at(Vec2::new(400.0, 300.0), Vec2::new(5.0, 3.0));
        assert_eq!(step_limit(&ball), 10.0);
        assert_eq!(substeps(&ball), 1);

        let ball = ball_at(Vec2::new(400.0, 300.0), Vec2::new(-18.0, 3.0));
        assert_eq!(substeps(&ball), 2);

        let ball = ball_at(Vec2::new(400.0, 300.0), Vec2::new(0.0, 0.0));
        assert_eq!(substeps(&ball), 1, "A resting ball still takes one step");
    }

    #[test]
    fn test_step_limit_has_floor() {
        let arena = Arena::new(800.0, 600.0);
        let ball = Ball::new(Vec2::ZERO, Vec2::new(2.0, 1.0), &arena, &mut GameRng::new(1));
        assert_eq!(step_limit(&ball), 2.0);
    }

    #[test]
    fn test_move_ball_moves_by_velocity() {
        let mut ball = ball_at(Vec2::new(400.0, 300.0), Vec2::new(-18.0, 6.0));
        let mut cues = CueBus::silent();
        move_ball(&mut ball, None, None, &mut cues);
        assert!((ball.pos.x - 382.0).abs() < 1e-4);
        assert!((ball.pos.y - 306.0).abs() < 1e-4);
        assert!(cues.events().is_empty());
    }

    #[test]
    fn test_top_wall_bounce_fires_once() {
        let mut ball = ball_at(Vec2::new(400.0, 0.0), Vec2::new(5.0, -3.0));
        let mut cues = CueBus::silent();
        move_ball(&mut ball, None, None, &mut cues);

        assert_eq!(ball.pos.y, 0.0, "Ball clamped to the top wall");
        assert_eq!(ball.vel.y, 3.0, "Vertical velocity inverted");
        assert_eq!(cues.events().wall_bounces, 1);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut ball = ball_at(Vec2::new(400.0, 578.0), Vec2::new(5.0, 3.0));
        let mut cues = CueBus::silent();
        move_ball(&mut ball, None, None, &mut cues);

        assert_eq!(ball.pos.y, 580.0);
        assert_eq!(ball.vel.y, -3.0);
        assert_eq!(cues.events().wall_bounces, 1);
    }

    #[test]
    fn test_fast_vertical_bounce_does_not_flip_twice() {
        let mut ball = ball_at(Vec2::new(400.0, 1.0), Vec2::new(0.0, -30.0));
        let mut cues = CueBus::silent();
        move_ball(&mut ball, None, None, &mut cues);

        assert!(ball.vel.y > 0.0, "Ball must leave the wall moving down");
        assert_eq!(cues.events().wall_bounces, 1);
    }

    #[test]
    fn test_vertical_containment_sweep() {
        let mut cues = CueBus::silent();
        for y in [-50.0, 0.0, 0.5, 120.0, 579.5, 580.0, 700.0] {
            for vy in [-40.0, -17.3, -3.0, 0.0, 3.0, 9.9, 40.0] {
                for vx in [-18.0, -5.0, 2.0, 18.0] {
                    let mut ball = ball_at(Vec2::new(400.0, y), Vec2::new(vx, vy));
                    move_ball(&mut ball, None, None, &mut cues);
                    assert!(
                        ball.pos.y >= 0.0 && ball.pos.y <= 580.0,
                        "y={} vy={} vx={} escaped to {}",
                        y,
                        vy,
                        vx,
                        ball.pos.y
                    );
                }
            }
        }
    }

    #[test]
    fn test_fast_ball_cannot_tunnel_through_paddle() {
        let paddle = Paddle::new(Side::Left, Vec2::new(10.0, 250.0), Vec2::new(10.0, 100.0));
        // Ball starts just right of the paddle, moving at max speed
        let mut ball = ball_at(Vec2::new(26.0, 290.0), Vec2::new(-18.0, 0.0));
        let mut cues = CueBus::silent();
        move_ball(&mut ball, Some(&paddle), None, &mut cues);

        assert!(ball.vel.x > 0.0, "Ball should have been deflected");
        assert_eq!(cues.events().paddle_hits, 1);
    }

    #[test]
    fn test_stops_stepping_once_out() {
        let paddle = Paddle::new(Side::Left, Vec2::new(10.0, 0.0), Vec2::new(10.0, 600.0));
        // Already past the left edge: the paddle behind must not pull it back
        let mut ball = ball_at(Vec2::new(-19.0, 300.0), Vec2::new(-18.0, 0.0));
        let mut cues = CueBus::silent();
        move_ball(&mut ball, Some(&paddle), None, &mut cues);

        assert!(is_out_horizontally(&ball));
        assert!(ball.pos.x > -37.0, "Remaining sub-steps were skipped");
        assert_eq!(cues.events().paddle_hits, 0);
    }

    #[test]
    fn test_huge_velocity_stays_contained() {
        let mut cues = CueBus::silent();
        for vel in [
            Vec2::new(0.0, 1e12),
            Vec2::new(0.0, -1e12),
            Vec2::new(0.0, f32::MAX),
            Vec2::new(3.0e9, 0.0),
        ] {
            let mut ball = ball_at(Vec2::new(400.0, 300.0), vel);
            assert!(substeps(&ball) <= 101, "vel={:?} gave {} steps", vel, substeps(&ball));
            move_ball(&mut ball, None, None, &mut cues);
            assert!(
                ball.pos.y >= 0.0 && ball.pos.y <= 580.0,
                "vel={:?} escaped to {}",
                vel,
                ball.pos.y
            );
        }
    }
}
