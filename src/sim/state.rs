//! Game state and core simulation types
//!
//! Everything the stepper mutates lives here: the ball, the paddle, the brick
//! grid, and the round bookkeeping (score, lives, level, phase).

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level;
use crate::consts::*;
use crate::error::ConfigError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// World initialized, waiting for the host to start the round
    Ready,
    /// Active gameplay; the only phase in which ticks mutate the world
    Playing,
    /// Frozen by the host; resumable
    Paused,
    /// Lives exhausted; frozen until an explicit restart
    GameOver,
    /// All bricks cleared; frozen until the host advances the level
    Won,
}

/// The ball. Scalar speed is always `vel.length()`, recomputed rather than
/// stored, so every directional change preserves magnitude by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
}

impl Ball {
    /// Velocity magnitude
    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Re-launch upward at the given speed, with an angle drawn uniformly
    /// from ±`LAUNCH_SPREAD` off vertical.
    pub fn launch(&mut self, speed: f64, rng: &mut Pcg32) {
        let angle = rng.random_range(-LAUNCH_SPREAD..=LAUNCH_SPREAD);
        self.vel = DVec2::new(angle.sin(), -angle.cos()) * speed;
    }
}

/// The player's paddle. `pos` is the top-left corner; `pos.x` chases
/// `target_x` with exponential smoothing and is never set directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: DVec2,
    pub width: f64,
    pub height: f64,
    pub target_x: f64,
}

impl Paddle {
    /// Paddle centered horizontally, seated above the bottom edge
    pub fn centered(surface_width: f64, surface_height: f64) -> Self {
        let x = (surface_width - PADDLE_WIDTH) / 2.0;
        Self {
            pos: DVec2::new(x, surface_height - PADDLE_BOTTOM_OFFSET),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            target_x: x,
        }
    }

    /// Largest legal x for this paddle on a surface of the given width
    #[inline]
    pub fn max_x(&self, surface_width: f64) -> f64 {
        (surface_width - self.width).max(0.0)
    }

    /// Move one smoothing step toward `target_x`. The factor is < 1 so the
    /// approach is critically damped and never overshoots.
    pub fn chase_target(&mut self, surface_width: f64) {
        self.pos.x += (self.target_x - self.pos.x) * PADDLE_SMOOTHING;
        self.pos.x = self.pos.x.clamp(0.0, self.max_x(surface_width));
    }

    /// Relative hit position along the face, 0 at the left edge, 1 at the
    /// right, clamped for radius-padded edge contacts.
    #[inline]
    pub fn hit_position(&self, ball_x: f64) -> f64 {
        ((ball_x - self.pos.x) / self.width).clamp(0.0, 1.0)
    }
}

/// A destructible brick. Destroyed bricks stay in the grid with the flag set
/// so clear detection is a single pass over a stable collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: DVec2,
    pub width: f64,
    pub height: f64,
    /// Score awarded on destruction
    pub points: u32,
    /// Row index from the top (color/point tier)
    pub row: u32,
    pub destroyed: bool,
}

impl Brick {
    /// Center of the brick's bounding box
    #[inline]
    pub fn center(&self) -> DVec2 {
        self.pos + DVec2::new(self.width, self.height) / 2.0
    }
}

/// Complete mutable world state for one round
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Play surface dimensions (validated positive at construction)
    pub width: f64,
    pub height: f64,
    /// Run seed for reproducibility
    pub seed: u64,
    pub level: u32,
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Bricks in generation order (the collision tie-break order)
    pub bricks: Vec<Brick>,
    /// Simulation tick counter
    pub tick_count: u64,
    pub(crate) rng: Pcg32,
}

impl WorldState {
    /// Create a world for a fresh round on a `width` x `height` surface.
    pub fn new(width: f64, height: f64, seed: u64) -> Result<Self, ConfigError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidSurface { width, height });
        }

        let mut state = Self {
            width,
            height,
            seed,
            level: 1,
            score: 0,
            lives: START_LIVES,
            phase: GamePhase::Ready,
            ball: Ball {
                pos: DVec2::ZERO,
                vel: DVec2::ZERO,
                radius: BALL_RADIUS,
            },
            paddle: Paddle::centered(width, height),
            bricks: Vec::new(),
            tick_count: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.init();
        Ok(state)
    }

    /// Place the ball above the paddle, launch it, regenerate the brick grid,
    /// and center the paddle. Score, lives, and level are left untouched.
    pub fn init(&mut self) {
        self.paddle = Paddle::centered(self.width, self.height);
        self.respawn_ball();
        self.bricks = level::generate(self.level, self.width);
        log::info!(
            "level {} ready: {} bricks, ball speed {:.1}",
            self.level,
            self.bricks.len(),
            level::speed_for_level(self.level)
        );
    }

    /// Start a fresh round: score 0, lives restored, back to level 1.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.level = 1;
        self.tick_count = 0;
        self.phase = GamePhase::Ready;
        self.init();
    }

    /// Advance to `level` keeping score and lives. The capped speed formula
    /// is applied on the re-launch inside `init`.
    pub fn next_level(&mut self, level: u32) -> Result<(), ConfigError> {
        if level == 0 {
            return Err(ConfigError::InvalidLevel(level));
        }
        self.level = level;
        self.phase = GamePhase::Ready;
        self.init();
        Ok(())
    }

    /// Re-launch the ball from its spawn point above the paddle.
    pub fn respawn_ball(&mut self) {
        let speed = level::speed_for_level(self.level);
        self.ball.pos = DVec2::new(
            self.paddle.pos.x + self.paddle.width / 2.0,
            self.paddle.pos.y - BALL_START_OFFSET,
        );
        self.ball.launch(speed, &mut self.rng);
    }

    /// True once every brick in the grid carries the destroyed flag
    pub fn all_bricks_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| b.destroyed)
    }

    /// Number of bricks still standing
    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.destroyed).count()
    }

    /// Clone a renderable view of the world. Destroyed bricks are filtered
    /// out; the host draws what it gets and nothing else.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.ball,
            paddle: self.paddle,
            bricks: self.bricks.iter().filter(|b| !b.destroyed).copied().collect(),
            score: self.score,
            lives: self.lives,
            level: self.level,
            phase: self.phase,
        }
    }
}

/// Renderable view of one frame, cheap to clone and serialize. Drawing is
/// the host's job; the engine only reports geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live bricks only, with `row` as the color/point tier
    pub bricks: Vec<Brick>,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub phase: GamePhase,
}
