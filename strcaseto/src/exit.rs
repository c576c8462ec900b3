//! Process exit policy.

use std::process;

use clap::{Command, error::ErrorKind};

/// Extension trait for exiting on fatal errors as `error: <message>`
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for eyre::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("error: {:#}", e);
                process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for Result<T, clap::Error> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
                _ => {
                    // clap renders its own `error:` prefix
                    let _ = e.print();
                    process::exit(1);
                }
            },
        }
    }
}

/// Print the full help for `cmd` and exit with `code`.
pub(crate) fn help_and_exit(cmd: &mut Command, code: i32) -> ! {
    let _ = cmd.print_long_help();
    process::exit(code);
}
