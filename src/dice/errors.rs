/// Errors from the dice domain layer.
use thiserror::Error;

use super::model::MAX_COUNT;

/// Errors that can occur while resolving, generating, or printing a roll or flip.
#[derive(Debug, Error)]
pub enum DiceError {
    /// The resolved number of sides is zero or negative.
    #[error("Dice must be a positive number > 0")]
    InvalidDiceSides,

    /// The resolved number of dice is negative or above `MAX_COUNT`.
    #[error("Number of dice must be between 1 and {max} (got {count})", max = MAX_COUNT)]
    InvalidDiceCount {
        /// The rejected value.
        count: i64,
    },

    /// The flip count was non-numeric, not positive, or above `MAX_COUNT`.
    #[error("Invalid number of flips")]
    InvalidFlipCount,

    /// Writing results to the output stream failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit code mapping for `DiceError` variants.
impl DiceError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDiceSides
            | Self::InvalidDiceCount { .. }
            | Self::InvalidFlipCount
            | Self::Io(_) => 1,
        }
    }

    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDiceSides => "invalid_dice_sides",
            Self::InvalidDiceCount { .. } => "invalid_dice_count",
            Self::InvalidFlipCount => "invalid_flip_count",
            Self::Io(_) => "io_error",
        }
    }
}
