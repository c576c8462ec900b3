//! Case conversion core for strcaseto.
//!
//! This crate holds everything that does not touch the process: the mode
//! table, invocation name resolution, stdin splitting and output rendering.

mod error;
mod input;
mod invocation;
mod mode;
mod output;

pub use error::{Error, Result};
pub use input::{InputSource, read_lines, split_stdin};
pub use invocation::{Invocation, PROGRAM_NAME};
pub use mode::Mode;
pub use output::{convert_all, render};
