//! Gathering the strings to convert.

use std::io::Read;

use crate::{Error, Result};

/// Where the strings for one run came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Positional command-line arguments, in the order given.
    Args(Vec<String>),
    /// Lines read from a piped or redirected stdin.
    Stdin(Vec<String>),
    /// Nothing to convert.
    None,
}

impl InputSource {
    /// Choose the source for a run.
    ///
    /// Positional arguments win. Otherwise stdin is read only when it is not
    /// a terminal, and an empty stream counts as no input.
    pub fn collect<R: Read>(args: Vec<String>, stdin: R, stdin_is_terminal: bool) -> Result<Self> {
        if !args.is_empty() {
            return Ok(InputSource::Args(args));
        }
        if stdin_is_terminal {
            return Ok(InputSource::None);
        }
        let lines = read_lines(stdin)?;
        if lines.is_empty() {
            Ok(InputSource::None)
        } else {
            Ok(InputSource::Stdin(lines))
        }
    }

    /// Short label for logging.
    pub fn origin(&self) -> &'static str {
        match self {
            InputSource::Args(_) => "arguments",
            InputSource::Stdin(_) => "stdin",
            InputSource::None => "none",
        }
    }

    pub fn into_inputs(self) -> Vec<String> {
        match self {
            InputSource::Args(inputs) | InputSource::Stdin(inputs) => inputs,
            InputSource::None => Vec::new(),
        }
    }
}

/// Read `reader` to the end and split it with [`split_stdin`].
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
pub fn read_lines<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|e| Error::io("stdin", e))?;
    Ok(split_stdin(&String::from_utf8_lossy(&raw)))
}

/// Split raw stdin text into input lines.
///
/// Carriage returns are dropped and exactly one trailing newline is removed,
/// so `"a\nb\n"` is two lines and `"a\nb\n\n"` is three, the last empty.
pub fn split_stdin(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let raw = raw.replace('\r', "");
    let raw = raw.strip_suffix('\n').unwrap_or(raw.as_str());
    raw.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;

    #[test]
    fn test_split_trailing_newline() {
        assert_eq!(split_stdin("one\ntwo\n"), vec!["one", "two"]);
    }

    #[test]
    fn test_split_extra_blank_line_kept() {
        assert_eq!(split_stdin("one\ntwo\n\n"), vec!["one", "two", ""]);
    }

    #[test]
    fn test_split_without_trailing_newline() {
        assert_eq!(split_stdin("one\ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn test_split_carriage_returns() {
        assert_eq!(split_stdin("one\r\ntwo\r\n"), vec!["one", "two"]);
        assert_eq!(split_stdin("a\rb"), vec!["ab"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_stdin("").is_empty());
    }

    #[test]
    fn test_split_lone_newline() {
        assert_eq!(split_stdin("\n"), vec![""]);
        // Only carriage returns still counts as data.
        assert_eq!(split_stdin("\r"), vec![""]);
    }

    #[test]
    fn test_collect_prefers_args() {
        let source = InputSource::collect(
            vec!["b".to_string(), "a".to_string()],
            Cursor::new("ignored\n"),
            false,
        )
        .unwrap();
        assert_eq!(source, InputSource::Args(vec!["b".into(), "a".into()]));
        assert_eq!(source.origin(), "arguments");
    }

    #[test]
    fn test_collect_reads_piped_stdin() {
        let source = InputSource::collect(Vec::new(), Cursor::new("x\ny\n"), false).unwrap();
        assert_eq!(source.origin(), "stdin");
        assert_eq!(source.into_inputs(), vec!["x", "y"]);
    }

    #[test]
    fn test_collect_skips_terminal() {
        let source = InputSource::collect(Vec::new(), Cursor::new("x\n"), true).unwrap();
        assert_eq!(source, InputSource::None);
    }

    #[test]
    fn test_collect_empty_stdin() {
        let source = InputSource::collect(Vec::new(), io::empty(), false).unwrap();
        assert_eq!(source, InputSource::None);
        assert!(source.into_inputs().is_empty());
    }

    #[test]
    fn test_read_lines_invalid_utf8() {
        let lines = read_lines(Cursor::new([b'f', 0xff, b'\n'])).unwrap();
        assert_eq!(lines, vec!["f\u{FFFD}"]);
    }

    #[test]
    fn test_collect_invalid_utf8_keeps_every_line() {
        let source =
            InputSource::collect(Vec::new(), Cursor::new(b"foo\xffbar\nbaz\n".to_vec()), false)
                .unwrap();
        assert_eq!(source.into_inputs(), vec!["foo\u{FFFD}bar", "baz"]);
    }

    #[test]
    fn test_read_failure() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::PermissionDenied))
            }
        }

        let err = read_lines(Broken).unwrap_err();
        assert_eq!(err.to_string(), "failed to read stdin");
    }
}
