/// Flavor-text commentary for verbose rolls.
use std::fmt;

use serde::Serialize;

use super::model::{RollRequest, RollResult};

/// Sides of the die that gets critical hit/miss commentary.
const CRIT_DIE: u64 = 20;

/// One line of commentary, picked by how good the roll was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Commentary {
    CriticalSuccess,
    CriticalFailure,
    Exceptional,
    Good,
    Decent,
    NotGreat,
    Abysmal,
}

impl Commentary {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::CriticalSuccess => "Natural 20!! Critical success!!!",
            Self::CriticalFailure => "Natural 1... Critical failure!!!",
            Self::Exceptional => "Exceptional roll! The gods smile upon you!",
            Self::Good => "Good roll! Fortune favors you today.",
            Self::Decent => "Decent roll. Could be better, could be worse.",
            Self::NotGreat => "Not great. The fates are testing you.",
            Self::Abysmal => "Abysmal roll!! Better luck next time... I guess?",
        }
    }

    /// Tier for a `sum / max_possible` ratio, checked from best to worst.
    #[must_use]
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio >= 0.9 {
            Self::Exceptional
        } else if ratio >= 0.7 {
            Self::Good
        } else if ratio >= 0.5 {
            Self::Decent
        } else if ratio >= 0.3 {
            Self::NotGreat
        } else {
            Self::Abysmal
        }
    }
}

impl fmt::Display for Commentary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Pick the commentary for `result`, drawn for `req`.
///
/// On d20 any natural 20 is a critical success, otherwise any natural 1 is a
/// critical failure. Everything else is graded by `sum / (count * sides)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn commentary(req: RollRequest, result: &RollResult) -> Commentary {
    if req.sides == CRIT_DIE {
        if result.throws().contains(&CRIT_DIE) {
            return Commentary::CriticalSuccess;
        }
        if result.throws().contains(&1) {
            return Commentary::CriticalFailure;
        }
    }

    let max_possible = req.max_possible();
    if max_possible == 0 {
        return Commentary::Abysmal;
    }
    let ratio = result.sum() as f64 / max_possible as f64;
    Commentary::for_ratio(ratio)
}
