//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed unit of motion per tick (no wall-clock time)
//! - Seeded RNG only
//! - Stable brick iteration order (generation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{ReflectAxis, brick_reflect_axis, circle_rect_overlap, paddle_bounce};
pub use input::{InputAggregator, PaddleKey};
pub use level::{generate, rows_for_level, speed_for_level};
pub use state::{Ball, Brick, GamePhase, Paddle, Snapshot, WorldState};
pub use tick::{TickEvent, tick};
