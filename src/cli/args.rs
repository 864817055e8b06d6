/// CLI argument definitions via clap derive.
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::dice::DisplayOptions;

/// droll — roll dice and flip coins.
///
/// The root command is itself a dice roll: `droll 3 6` is `droll roll 3 6`.
/// A subcommand name is only recognised before any root positional, so global
/// flags may come first (`droll --json flip 3`).
#[derive(Debug, Parser)]
#[command(
    name = "droll",
    about = "Roll dice and flip coins from the CLI",
    override_usage = "droll [--number, -n N] --dice, -d D [OPTIONS]\n       \
                      droll <COUNT> <SIDES> [OPTIONS]\n       \
                      droll <SIDES> [OPTIONS]\n       \
                      droll <COMMAND>",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Print per-stage timing to stderr for debugging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub roll: RollArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Reject root roll arguments given alongside a subcommand (`droll -n 2 flip`).
    ///
    /// # Errors
    ///
    /// Returns a clap `ArgumentConflict` error, which exits with clap's usage status.
    pub fn check_conflicts(&self) -> Result<(), clap::Error> {
        match &self.command {
            Some(command) if self.roll.is_set() => {
                let name = match command {
                    Command::Roll(_) => "roll",
                    Command::Flip(_) => "flip",
                };
                Err(Self::command().error(
                    ErrorKind::ArgumentConflict,
                    format!("dice arguments must follow the subcommand: droll {name} [ARGS]"),
                ))
            }
            _ => Ok(()),
        }
    }
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
    /// Compact single-line JSON.
    Compact,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Roll dice with the specified count and sides.
    Roll(RollArgs),
    /// Flip a coin.
    Flip(FlipArgs),
}

/// Arguments for `droll roll` (and the bare root command).
#[derive(Debug, Clone, Default, Args)]
pub struct RollArgs {
    /// `[COUNT] SIDES`. One value is the number of sides; two are count then sides.
    /// Values that are not integers are ignored.
    #[arg(value_name = "COUNT_OR_SIDES", allow_negative_numbers = true)]
    pub tokens: Vec<String>,

    /// Number of dice to roll. Overrides positional values.
    #[arg(short = 'n', long, value_name = "N", allow_negative_numbers = true)]
    pub number: Option<i64>,

    /// Type of dice to roll (e.g., 6 for d6). Overrides positional values.
    #[arg(short = 'd', long, value_name = "D", allow_negative_numbers = true)]
    pub dice: Option<i64>,

    /// Only show the sum of the dice.
    #[arg(long)]
    pub sum: bool,

    /// Only show individual dice throws.
    #[arg(long)]
    pub unit: bool,

    /// Show DnD-style commentary on the roll.
    #[arg(
        short = 'v',
        long,
        visible_alias = "comment",
        visible_short_alias = 'c'
    )]
    pub verbose: bool,
}

impl RollArgs {
    /// Whether any roll argument or switch was given.
    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.tokens.is_empty()
            || self.number.is_some()
            || self.dice.is_some()
            || self.sum
            || self.unit
            || self.verbose
    }

    /// Display switches for this invocation.
    #[must_use]
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_sum: self.sum,
            show_unit: self.unit,
            verbose: self.verbose,
        }
    }
}

/// Arguments for `droll flip`.
#[derive(Debug, Clone, Default, Args)]
pub struct FlipArgs {
    /// Number of flips (default 1). Must be a positive integer.
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    pub tokens: Vec<String>,

    /// Display a heads/tails summary after the flips.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
