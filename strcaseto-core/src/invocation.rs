//! Program identity derived from `argv[0]`.

use std::path::Path;

use crate::Mode;

/// Name used when the program runs without a fixed mode.
pub const PROGRAM_NAME: &str = "strcaseto";

/// How the program was invoked.
///
/// A recognized invocation name (usually a symlink such as `to-snake-case`)
/// fixes the mode for every run. Anything else exposes the case flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Fixed { base_name: String, mode: Mode },
    Selectable { base_name: String },
}

impl Invocation {
    /// Build from the program path as given in `argv[0]`.
    pub fn from_program_path(path: impl AsRef<Path>) -> Self {
        Self::from_base_name(base_name(path.as_ref()))
    }

    /// Build from an already reduced base name.
    pub fn from_base_name(base_name: impl Into<String>) -> Self {
        let base_name = base_name.into();
        match Mode::from_invocation(&base_name) {
            Some(mode) => Invocation::Fixed { base_name, mode },
            None => Invocation::Selectable { base_name },
        }
    }

    pub fn base_name(&self) -> &str {
        match self {
            Invocation::Fixed { base_name, .. } | Invocation::Selectable { base_name } => {
                base_name
            }
        }
    }

    /// The fixed mode, if the invocation name selected one.
    pub fn fixed_mode(&self) -> Option<Mode> {
        match self {
            Invocation::Fixed { mode, .. } => Some(*mode),
            Invocation::Selectable { .. } => None,
        }
    }

    /// Name shown at the top of help output.
    pub fn display_name(&self) -> String {
        match self {
            Invocation::Fixed { base_name, .. } => format!("{} ({})", base_name, PROGRAM_NAME),
            Invocation::Selectable { .. } => PROGRAM_NAME.to_string(),
        }
    }

    /// One-line summary.
    pub fn about(&self) -> String {
        match self {
            Invocation::Fixed { mode, .. } => format!("convert strings to {}", mode.example()),
            Invocation::Selectable { .. } => "convert strings to various cases".to_string(),
        }
    }

    /// Usage lines for the argument form and the piped form.
    pub fn usage(&self) -> String {
        let name = self.base_name();
        match self {
            Invocation::Fixed { .. } => format!(
                "{name} <string> [string...]\necho \"one-or-more-lines\" | {name}"
            ),
            Invocation::Selectable { .. } => format!(
                "{name} [option] <string> [string...]\necho \"one-or-more-lines\" | {name} [option]"
            ),
        }
    }

    /// Long description shown in full help.
    pub fn description(&self) -> String {
        let target = match self {
            Invocation::Fixed { mode, .. } => mode.example(),
            Invocation::Selectable { .. } => "a specific case",
        };
        format!(
            "Convert command line arguments (or lines of stdin) to {target}.\n\
             Outputting one line of text per input given."
        )
    }
}

/// Final path component without the platform executable suffix.
fn base_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| PROGRAM_NAME.to_string());
    let suffix = std::env::consts::EXE_SUFFIX;
    if !suffix.is_empty() {
        if let Some(stripped) = name.strip_suffix(suffix).filter(|s| !s.is_empty()) {
            return stripped.to_string();
        }
    }
    name
}
