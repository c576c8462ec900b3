mod cli;
mod exit;
mod logging;
mod run;

use std::{
    env,
    io::{self, IsTerminal},
};

use eyre::Result;
use strcaseto_core::Invocation;
use tracing::debug;

use crate::{
    cli::CliArgs,
    exit::{UnwrapOrExit, help_and_exit},
    run::Outcome,
};

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let invocation = Invocation::from_program_path(env::args_os().next().unwrap_or_default());
    debug!(
        base_name = invocation.base_name(),
        fixed = ?invocation.fixed_mode(),
        "resolved invocation"
    );

    let mut cmd = cli::command(&invocation);
    let args = CliArgs::try_parse_from(&mut cmd, env::args_os()).unwrap_or_exit();
    let mode = args.mode(&invocation);
    debug!(%mode, "selected mode");

    let stdin = io::stdin();
    let stdin_is_terminal = stdin.is_terminal();
    let outcome = run::run(
        mode,
        args.strings,
        stdin.lock(),
        stdin_is_terminal,
        &mut io::stdout().lock(),
    )
    .unwrap_or_exit();

    match outcome {
        Outcome::Written => Ok(()),
        Outcome::NoInput => help_and_exit(&mut cmd, 0),
        Outcome::NoOutput => help_and_exit(&mut cmd, 1),
    }
}
