/// `flip` command: flip a coin one or more times.
use std::io;

use crate::cli::OutputCtx;
use crate::cli::args::FlipArgs;
use crate::cli::output::write_flips;
use crate::dice::{DiceError, Roller, resolve_flip};

/// Run `droll flip`.
///
/// # Errors
///
/// Returns `DiceError::InvalidFlipCount` for a non-numeric, non-positive or too large count,
/// or `DiceError::Io` if stdout fails.
pub fn run(args: &FlipArgs, ctx: &OutputCtx) -> Result<(), DiceError> {
    let _t_resolve = ctx.timer("resolve_args");
    let req = resolve_flip(&args.tokens)?;
    drop(_t_resolve);

    let _t_generate = ctx.timer("generate");
    let result = Roller::from_clock().flip(req);
    drop(_t_generate);

    let _t_render = ctx.timer("render");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_flips(&mut out, &result, args.verbose, ctx)?;
    drop(_t_render);

    Ok(())
}
