#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! droll — roll dice and flip coins from the command line.

mod cli;
mod commands;
mod dice;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.check_conflicts() {
        err.exit();
    }

    let ctx = OutputCtx::new(cli.output, cli.json, cli.debug);

    match commands::dispatch(cli.command.as_ref(), &cli.roll, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_dice_error(&err);
            write_error(&error_output, ctx.format);
            std::process::exit(err.exit_code());
        }
    }
}
