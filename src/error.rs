//! Configuration error taxonomy
//!
//! Per-tick physics is total over every reachable state; the only failures
//! the engine can report are bad construction parameters. Geometric
//! ambiguities are resolved by deterministic tie-break rules, not errors.

use thiserror::Error;

/// Fatal configuration errors, raised at construction or level-advance time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Play surface dimensions must both be positive.
    #[error("surface dimensions must be positive (got {width}x{height})")]
    InvalidSurface { width: f64, height: f64 },

    /// Levels are numbered from 1.
    #[error("level must be at least 1 (got {0})")]
    InvalidLevel(u32),
}
