//! Input aggregation
//!
//! Pointer motion, touch motion, and held movement keys all funnel into one
//! authoritative paddle target. The merge policy is explicit: last write
//! wins, with no source priority. A pointer update overwrites the shared
//! target outright; held keys nudge whatever the current target is, once per
//! tick, when the stepper calls [`InputAggregator::resolve`]. Switching input
//! methods therefore never makes the paddle jump.

use crate::consts::KEY_STEP;

/// Discrete paddle movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddleKey {
    Left,
    Right,
}

/// Merges asynchronous input sources into one paddle target x.
///
/// Setters may be called any number of times between ticks; only the state
/// at the next `resolve` call has effect (no queuing).
#[derive(Debug, Clone)]
pub struct InputAggregator {
    /// Current target for the paddle's left edge, kept clamped
    target_x: f64,
    left_held: bool,
    right_held: bool,
    /// Clamp bound: `surface_width - paddle_width`
    max_x: f64,
}

impl InputAggregator {
    /// Aggregator starting at the paddle's initial (centered) position
    pub fn new(initial_x: f64, max_x: f64) -> Self {
        Self {
            target_x: initial_x.clamp(0.0, max_x),
            left_held: false,
            right_held: false,
            max_x,
        }
    }

    /// Re-seat the target after a lifecycle command re-centers the paddle.
    /// Held-key state survives, so a key held across a restart or level
    /// advance keeps moving the paddle without a fresh keydown.
    pub fn reseat(&mut self, x: f64, max_x: f64) {
        self.max_x = max_x;
        self.target_x = x.clamp(0.0, max_x);
    }

    /// Pointer/touch update. `x` is where the pointer wants the paddle
    /// *center*, so the stored left-edge target is offset by half a paddle
    /// width before clamping.
    pub fn set_pointer_target(&mut self, x: f64, paddle_width: f64) {
        self.target_x = (x - paddle_width / 2.0).clamp(0.0, self.max_x);
    }

    /// Track a movement key going down or up.
    pub fn set_key_state(&mut self, key: PaddleKey, pressed: bool) {
        match key {
            PaddleKey::Left => self.left_held = pressed,
            PaddleKey::Right => self.right_held = pressed,
        }
    }

    /// Per-tick resolution: apply held-key nudges to the current target and
    /// return it. Runs before the stepper reads the target so pointer and
    /// keyboard never fight within one tick; across ticks either source can
    /// override the other.
    pub fn resolve(&mut self) -> f64 {
        if self.left_held {
            self.target_x -= KEY_STEP;
        }
        if self.right_held {
            self.target_x += KEY_STEP;
        }
        self.target_x = self.target_x.clamp(0.0, self.max_x);
        self.target_x
    }

    /// The current target without applying key nudges
    #[inline]
    pub fn target_x(&self) -> f64 {
        self.target_x
    }
}
