//! Collision predicates and reflection math
//!
//! All functions are pure. Walls and bricks reflect by axis-sign negation;
//! the paddle recomputes direction from the hit position. Both paths preserve
//! speed magnitude exactly, which is the invariant the tests pin down.

use glam::DVec2;

use crate::consts::MAX_BOUNCE_ANGLE;

/// Axis to mirror when a brick face is struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectAxis {
    X,
    Y,
}

/// Radius-padded overlap test between the ball's bounding circle and an
/// axis-aligned rectangle.
#[inline]
pub fn circle_rect_overlap(
    center: DVec2,
    radius: f64,
    rect_pos: DVec2,
    rect_width: f64,
    rect_height: f64,
) -> bool {
    center.x + radius > rect_pos.x
        && center.x - radius < rect_pos.x + rect_width
        && center.y + radius > rect_pos.y
        && center.y - radius < rect_pos.y + rect_height
}

/// Velocity after a paddle bounce.
///
/// `hit_pos` is the relative contact point along the face (0 = left edge,
/// 1 = right edge); the outgoing angle sweeps `±MAX_BOUNCE_ANGLE / 2` off
/// vertical across the face. The result always points upward and has exactly
/// `speed` magnitude: an energy-conserving reflection.
#[inline]
pub fn paddle_bounce(hit_pos: f64, speed: f64) -> DVec2 {
    let angle = (hit_pos - 0.5) * MAX_BOUNCE_ANGLE;
    DVec2::new(angle.sin(), -angle.cos().abs()) * speed
}

/// Pick the axis to mirror for a brick hit by comparing normalized
/// penetration along each axis, which approximates the struck face.
/// Vertical faces mirror `dx`, horizontal faces mirror `dy`.
#[inline]
pub fn brick_reflect_axis(
    ball_center: DVec2,
    brick_center: DVec2,
    brick_width: f64,
    brick_height: f64,
) -> ReflectAxis {
    let delta = ball_center - brick_center;
    if (delta.x / brick_width).abs() > (delta.y / brick_height).abs() {
        ReflectAxis::X
    } else {
        ReflectAxis::Y
    }
}
