//! Brickfall - a deterministic breakout engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level generation, physics, collisions)
//! - `engine`: Game-state machine, event dispatch, render snapshots
//! - `error`: Configuration error taxonomy
//!
//! The crate owns no thread, timer, or drawing surface. A host drives it by
//! calling [`Engine::step`] once per frame while the game is `Playing` and
//! feeding pointer/key input between frames; rendering and audio react to the
//! returned [`TickEvent`]s or to an injected [`EventSink`].

pub mod engine;
pub mod error;
pub mod sim;

pub use engine::{Engine, EventSink};
pub use error::ConfigError;
pub use sim::{Ball, Brick, GamePhase, Paddle, PaddleKey, Snapshot, TickEvent, WorldState};

/// Game configuration constants
pub mod consts {
    /// Paddle dimensions
    pub const PADDLE_WIDTH: f64 = 100.0;
    pub const PADDLE_HEIGHT: f64 = 12.0;
    /// Distance from the bottom edge to the paddle's top face
    pub const PADDLE_BOTTOM_OFFSET: f64 = 40.0;
    /// Exponential smoothing factor for paddle chase (< 1, never overshoots)
    pub const PADDLE_SMOOTHING: f64 = 0.3;
    /// Full angular sweep across the paddle face (edge hits leave at ~±63°)
    pub const MAX_BOUNCE_ANGLE: f64 = 0.7 * std::f64::consts::PI;
    /// Per-tick paddle target nudge while a move key is held
    pub const KEY_STEP: f64 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 8.0;
    /// Ball spawn height above the paddle's top face
    pub const BALL_START_OFFSET: f64 = 20.0;
    /// Launch angle spread off vertical (uniform in ±this)
    pub const LAUNCH_SPREAD: f64 = std::f64::consts::FRAC_PI_4;
    /// Ball speed formula: min(BASE + level * STEP, MAX)
    pub const BASE_BALL_SPEED: f64 = 5.0;
    pub const BALL_SPEED_STEP: f64 = 0.5;
    pub const MAX_BALL_SPEED: f64 = 10.0;

    /// Brick grid: min(3 + level, MAX_ROWS) rows by BRICK_COLS columns
    pub const BRICK_COLS: u32 = 10;
    pub const MAX_BRICK_ROWS: u32 = 7;
    pub const BRICK_HEIGHT: f64 = 20.0;
    pub const BRICK_SIDE_MARGIN: f64 = 25.0;
    pub const BRICK_TOP_MARGIN: f64 = 50.0;
    pub const BRICK_GAP: f64 = 4.0;

    /// Lives at the start of a round
    pub const START_LIVES: u32 = 3;
}
