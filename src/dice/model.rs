/// Per-invocation request, result, and display types.
use std::fmt;

use serde::Serialize;

/// Upper bound on dice per roll and flips per series.
///
/// Every throw is kept in memory and printed on its own line, so counts are
/// capped well below what would exhaust memory.
pub const MAX_COUNT: usize = 1_000_000;

/// A validated dice roll: how many dice, and how many faces each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRequest {
    /// Number of dice (`1..=MAX_COUNT`).
    pub count: usize,
    /// Faces per die (always >= 1).
    pub sides: u64,
}

impl RollRequest {
    /// Highest total this request can produce (`count * sides`).
    #[must_use]
    pub fn max_possible(&self) -> u128 {
        self.count as u128 * u128::from(self.sides)
    }
}

/// A validated coin flip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipRequest {
    /// Number of flips (`1..=MAX_COUNT`).
    pub count: usize,
}

impl Default for FlipRequest {
    fn default() -> Self {
        Self { count: 1 }
    }
}

/// Outcome of a roll, in throw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    throws: Vec<u64>,
}

impl RollResult {
    /// Wrap already-drawn throws.
    #[must_use]
    pub fn new(throws: Vec<u64>) -> Self {
        Self { throws }
    }

    #[must_use]
    pub fn throws(&self) -> &[u64] {
        &self.throws
    }

    /// Total of all throws. Zero for an empty result.
    #[must_use]
    pub fn sum(&self) -> u128 {
        self.throws.iter().map(|&t| u128::from(t)).sum()
    }
}

/// One side of a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Coin {
    Heads,
    Tails,
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heads => f.write_str("Heads"),
            Self::Tails => f.write_str("Tails"),
        }
    }
}

/// Outcome of a series of flips, in flip order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipResult {
    flips: Vec<Coin>,
}

impl FlipResult {
    #[must_use]
    pub fn new(flips: Vec<Coin>) -> Self {
        Self { flips }
    }

    #[must_use]
    pub fn flips(&self) -> &[Coin] {
        &self.flips
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flips.len()
    }

    #[must_use]
    pub fn heads(&self) -> usize {
        self.flips.iter().filter(|&&c| c == Coin::Heads).count()
    }

    #[must_use]
    pub fn tails(&self) -> usize {
        self.flips.iter().filter(|&&c| c == Coin::Tails).count()
    }

    /// Share of `side` among all flips, as a percentage. Zero when empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, side: Coin) -> f64 {
        if self.flips.is_empty() {
            return 0.0;
        }
        let n = match side {
            Coin::Heads => self.heads(),
            Coin::Tails => self.tails(),
        };
        n as f64 / self.flips.len() as f64 * 100.0
    }
}

/// Display switches for dice output.
///
/// `show_sum` and `show_unit` only restrict output when exactly one is set;
/// both or neither print the sum followed by every throw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_sum: bool,
    pub show_unit: bool,
    pub verbose: bool,
}

/// Which blocks a multi-die roll prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Single die: one `Rolled:` line.
    Single,
    SumOnly,
    UnitOnly,
    /// Sum, then every throw.
    Both,
}

impl DisplayMode {
    /// Select the display mode. `count == 1` overrides the sum/unit switches.
    #[must_use]
    pub fn select(count: usize, opts: DisplayOptions) -> Self {
        if count == 1 {
            return Self::Single;
        }
        match (opts.show_sum, opts.show_unit) {
            (true, false) => Self::SumOnly,
            (false, true) => Self::UnitOnly,
            _ => Self::Both,
        }
    }

    #[must_use]
    pub fn shows_sum(self) -> bool {
        matches!(self, Self::Single | Self::SumOnly | Self::Both)
    }

    #[must_use]
    pub fn shows_throws(self) -> bool {
        matches!(self, Self::Single | Self::UnitOnly | Self::Both)
    }
}
