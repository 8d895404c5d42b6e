//! Command-line interface layer.

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, CheckCommand, CheckRule, Command};
pub use exit_status::ExitStatus;

use anyhow::Result;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
