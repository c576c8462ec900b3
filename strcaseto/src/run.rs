//! One invocation: collect, convert, write.

use std::io::{Read, Write};

use eyre::{Context, Result};
use strcaseto_core::{InputSource, Mode, convert_all, render};
use tracing::debug;

/// What a run ended with, for the caller to map onto an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Results were written.
    Written,
    /// No arguments and nothing on stdin.
    NoInput,
    /// Input was gathered but produced nothing to print. Not reachable
    /// through [`InputSource::collect`], which never returns an empty list.
    NoOutput,
}

/// Convert `strings` (or stdin when there are none) with `mode` into `out`.
pub(crate) fn run<R, W>(
    mode: Mode,
    strings: Vec<String>,
    stdin: R,
    stdin_is_terminal: bool,
    out: &mut W,
) -> Result<Outcome>
where
    R: Read,
    W: Write,
{
    let source = InputSource::collect(strings, stdin, stdin_is_terminal)?;
    debug!(origin = source.origin(), "collected input");
    if source == InputSource::None {
        return Ok(Outcome::NoInput);
    }

    let inputs = source.into_inputs();
    let outputs = convert_all(mode, &inputs);
    debug!(%mode, count = outputs.len(), "converted");

    // `collect` never yields an empty list, so this branch is a guard only.
    let Some(text) = render(&outputs) else {
        return Ok(Outcome::NoOutput);
    };
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .wrap_err("failed to write to stdout")?;
    Ok(Outcome::Written)
}
