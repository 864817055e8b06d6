/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod flip;
pub mod roll;

use crate::cli::OutputCtx;
use crate::cli::args::{Command, RollArgs};
use crate::dice::DiceError;

/// Dispatch a parsed `Command` to its handler.
///
/// With no subcommand the root arguments are rolled, so `droll 2 6` and
/// `droll roll 2 6` share one code path.
///
/// # Errors
///
/// Returns `DiceError` on any command failure.
pub fn dispatch(
    command: Option<&Command>,
    root: &RollArgs,
    ctx: &OutputCtx,
) -> Result<(), DiceError> {
    match command {
        None => roll::run(root, ctx),
        Some(Command::Roll(args)) => roll::run(args, ctx),
        Some(Command::Flip(args)) => flip::run(args, ctx),
    }
}
