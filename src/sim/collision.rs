//! Ball versus paddle and wall tests
//!
//! Paddles sit flush against the side edges, so a contact is decided by the
//! ball's x entering an edge band and its y landing on the paddle.

use super::state::{Ball, Paddle};
use crate::consts::DEFLECTION_FACTOR;

/// Result of the ball reaching a paddle's edge band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    /// The paddle covered the ball's y
    pub hit: bool,
    /// New vertical speed, steeper the further from the paddle center
    pub deflection: f32,
}

/// Width of the band next to each side edge where the ball meets a paddle
#[inline]
pub fn edge_buffer(ball_radius: f32, paddle_width: f32) -> f32 {
    (ball_radius + paddle_width) / 2.0
}

/// Ball center is inside the left edge band
pub fn in_left_band(ball: &Ball, buffer: f32) -> bool {
    ball.pos.x < buffer
}

/// Ball center is inside the right edge band
pub fn in_right_band(ball: &Ball, buffer: f32, surface_width: f32) -> bool {
    ball.pos.x > surface_width - buffer
}

/// Vertical speed after coming off `paddle` at height `ball_y`
#[inline]
pub fn deflection(ball_y: f32, paddle: &Paddle) -> f32 {
    (ball_y - paddle.center_y()) * DEFLECTION_FACTOR
}

/// Check the ball against a paddle once it is in that paddle's band.
///
/// The deflection is computed whether or not the paddle was there.
pub fn ball_paddle_contact(ball_y: f32, paddle: &Paddle) -> PaddleContact {
    PaddleContact {
        hit: paddle.is_collision(ball_y),
        deflection: deflection(ball_y, paddle),
    }
}

/// Ball center has left the surface vertically. Checked before moving, so the
/// ball can spend one tick outside before turning around.
#[inline]
pub fn past_wall(y: f32, surface_height: f32) -> bool {
    y > surface_height || y < 0.0
}
