use crate::{Arena, Ball, Side};

/// Side that takes the point if the ball has fully left the screen
pub fn point_winner(ball: &Ball, arena: &Arena) -> Option<Side> {
    let rect = ball.rect();
    if rect.max.x <= 0.0 {
        // Out past the player's paddle
        Some(Side::Right)
    } else if rect.min.x >= arena.width {
        Some(Side::Left)
    } else {
        None
    }
}
