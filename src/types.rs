/// Shared serializable output types for all commands.
///
/// These are what gets written to stdout in the JSON output formats. They are
/// decoupled from the domain `RollResult` / `FlipResult` types.
use serde::Serialize;

use crate::dice::{
    Coin, Commentary, DiceError, DisplayMode, DisplayOptions, FlipResult, RollRequest, RollResult,
    commentary,
};

/// A dice roll.
#[derive(Debug, Clone, Serialize)]
pub struct RollOutput {
    /// Number of dice rolled.
    pub count: usize,
    /// Faces per die.
    pub sides: u64,
    /// Total of all throws. Omitted with `--unit` alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<u128>,
    /// Each throw in order. Omitted with `--sum` alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throws: Option<Vec<u64>>,
    /// Flavor text, only with `--verbose`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<CommentaryOutput>,
}

/// Commentary as both a stable code and its display message.
#[derive(Debug, Clone, Serialize)]
pub struct CommentaryOutput {
    /// `snake_case` tier name, e.g. `critical_success`.
    pub kind: Commentary,
    /// The line printed in text mode.
    pub message: &'static str,
}

impl RollOutput {
    /// Build from a finished roll, applying the same display switches as text output.
    #[must_use]
    pub fn new(req: RollRequest, result: &RollResult, opts: DisplayOptions) -> Self {
        let mode = DisplayMode::select(req.count, opts);
        Self {
            count: req.count,
            sides: req.sides,
            sum: mode.shows_sum().then(|| result.sum()),
            throws: mode.shows_throws().then(|| result.throws().to_vec()),
            commentary: opts.verbose.then(|| {
                let kind = commentary(req, result);
                CommentaryOutput {
                    kind,
                    message: kind.message(),
                }
            }),
        }
    }
}

/// A series of coin flips.
#[derive(Debug, Clone, Serialize)]
pub struct FlipOutput {
    /// Number of flips.
    pub count: usize,
    /// Each side in flip order.
    pub flips: Vec<Coin>,
    /// Heads/tails tally, only with `--verbose`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<FlipSummary>,
}

/// Heads/tails counts and percentages.
#[derive(Debug, Clone, Serialize)]
pub struct FlipSummary {
    pub heads: usize,
    pub tails: usize,
    /// Percentage of heads, rounded to two decimals.
    pub heads_pct: f64,
    /// Percentage of tails, rounded to two decimals.
    pub tails_pct: f64,
}

impl FlipOutput {
    #[must_use]
    pub fn new(result: &FlipResult, verbose: bool) -> Self {
        Self {
            count: result.len(),
            flips: result.flips().to_vec(),
            summary: verbose.then(|| FlipSummary {
                heads: result.heads(),
                tails: result.tails(),
                heads_pct: round2(result.percentage(Coin::Heads)),
                tails_pct: round2(result.percentage(Coin::Tails)),
            }),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `DiceError`.
    #[must_use]
    pub fn from_dice_error(err: &DiceError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
