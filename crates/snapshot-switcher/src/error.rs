//! Error types for the snapshot switcher
//!
//! Configuration mistakes (empty entry sets, duplicate directions, bad fade
//! times) are reported when a switcher is built. Per-tick failures are
//! reported from [`SnapshotSwitcher::tick`](crate::SnapshotSwitcher::tick)
//! and leave the selection state untouched.

use crate::direction::Direction;
use thiserror::Error;

/// The main error type for snapshot switcher operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwitcherError {
    /// No direction entries were configured
    #[error("Switcher has no direction entries")]
    NoEntries,

    /// The same direction label was configured twice
    #[error("Direction {0} is configured more than once")]
    DuplicateDirection(Direction),

    /// A direction was referenced that has no configured entry
    #[error("Direction {0} has no configured entry")]
    UnknownDirection(Direction),

    /// Fade time is negative or not a finite number
    #[error("Invalid fade time: {0} seconds")]
    InvalidFadeTime(f32),

    /// The target reference of an entry could not be resolved to a position
    #[error("Target for direction {0} could not be located")]
    MissingTarget(Direction),

    /// Listener position or orientation contains non-finite components
    #[error("Listener pose is not finite")]
    InvalidListener,

    /// Configuration text could not be parsed
    #[error("Failed to parse switcher config: {0}")]
    Config(String),
}

impl SwitcherError {
    /// Creates a missing target error
    pub fn missing_target(direction: Direction) -> Self {
        SwitcherError::MissingTarget(direction)
    }

    /// Creates a config parse error
    pub fn config(reason: impl Into<String>) -> Self {
        SwitcherError::Config(reason.into())
    }

    /// Whether the error stems from setup rather than from a single tick.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(
            self,
            SwitcherError::MissingTarget(_) | SwitcherError::InvalidListener
        )
    }
}

impl From<ron::error::SpannedError> for SwitcherError {
    fn from(err: ron::error::SpannedError) -> Self {
        SwitcherError::Config(err.to_string())
    }
}

/// Type alias for Result using SwitcherError
pub type Result<T> = std::result::Result<T, SwitcherError>;
