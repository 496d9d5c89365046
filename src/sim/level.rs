//! Deterministic level generation
//!
//! A level number maps to a brick grid and a ball speed; nothing here touches
//! the RNG or any other state. Higher levels add rows (capped) and speed
//! (capped), and scale every brick's point value.

use glam::DVec2;

use super::state::Brick;
use crate::consts::*;

/// Brick rows for a level: `min(3 + level, 7)`
#[inline]
pub fn rows_for_level(level: u32) -> u32 {
    (3 + level).min(MAX_BRICK_ROWS)
}

/// Ball speed for a level: `min(5 + level * 0.5, 10)`
#[inline]
pub fn speed_for_level(level: u32) -> f64 {
    (BASE_BALL_SPEED + f64::from(level) * BALL_SPEED_STEP).min(MAX_BALL_SPEED)
}

/// Generate the brick grid for a level on a surface of the given width.
///
/// Bricks are laid out row-major from the top-left, which is also the
/// collision tie-break order. Brick width is computed to fill the surface
/// minus the side margins and inter-brick gaps; top rows are worth the most:
/// `points = (rows - row) * 10 * level`, saturating at `u32::MAX` for
/// extreme levels.
///
/// Callers must validate `level >= 1`; the engine rejects level 0 with
/// `ConfigError::InvalidLevel` before ever reaching this function.
pub fn generate(level: u32, surface_width: f64) -> Vec<Brick> {
    debug_assert!(level >= 1, "level must be validated before generation");

    let rows = rows_for_level(level);
    let cols = BRICK_COLS;
    let usable = surface_width - 2.0 * BRICK_SIDE_MARGIN - f64::from(cols - 1) * BRICK_GAP;
    let brick_width = usable / f64::from(cols);

    let mut bricks = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        let y = BRICK_TOP_MARGIN + f64::from(row) * (BRICK_HEIGHT + BRICK_GAP);
        let points = ((rows - row) * 10).saturating_mul(level);
        for col in 0..cols {
            let x = BRICK_SIDE_MARGIN + f64::from(col) * (brick_width + BRICK_GAP);
            bricks.push(Brick {
                pos: DVec2::new(x, y),
                width: brick_width,
                height: BRICK_HEIGHT,
                points,
                row,
                destroyed: false,
            });
        }
    }
    bricks
}
