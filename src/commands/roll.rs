/// `roll` command: roll dice and print the throws.
use std::io;

use crate::cli::OutputCtx;
use crate::cli::args::RollArgs;
use crate::cli::output::write_roll;
use crate::dice::{DiceError, Roller, resolve_roll};

/// Run `droll roll` (or the bare root command).
///
/// # Errors
///
/// Returns `DiceError::InvalidDiceSides` or `DiceError::InvalidDiceCount` when the
/// arguments do not resolve to a valid roll of at most `MAX_COUNT` dice,
/// or `DiceError::Io` if stdout fails.
pub fn run(args: &RollArgs, ctx: &OutputCtx) -> Result<(), DiceError> {
    let _t_resolve = ctx.timer("resolve_args");
    let req = resolve_roll(&args.tokens, args.number, args.dice)?;
    drop(_t_resolve);

    let _t_generate = ctx.timer("generate");
    let result = Roller::from_clock().roll(req);
    drop(_t_generate);

    let _t_render = ctx.timer("render");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_roll(&mut out, req, &result, args.display_options(), ctx)?;
    drop(_t_render);

    Ok(())
}
