//! Case conversion modes.

use std::fmt;

use convert_case::{Case, Casing};

/// Prefixes stripped from the invocation name, first match wins.
const INVOCATION_PREFIXES: [&str; 3] = ["strcaseto-", "strto-", "to-"];

/// Suffix stripped from the invocation name after the prefix.
const INVOCATION_SUFFIX: &str = "-case";

/// A single case convention a string can be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Camel,
    LowerCamel,
    Kebab,
    ScreamingKebab,
    Snake,
    ScreamingSnake,
}

impl Mode {
    /// Every mode, in the order shown in help output.
    pub const ALL: [Mode; 6] = [
        Mode::Camel,
        Mode::LowerCamel,
        Mode::Kebab,
        Mode::ScreamingKebab,
        Mode::Snake,
        Mode::ScreamingSnake,
    ];

    /// Order in which case flags are checked when several are set.
    pub const PRIORITY: [Mode; 6] = [
        Mode::ScreamingKebab,
        Mode::ScreamingSnake,
        Mode::LowerCamel,
        Mode::Camel,
        Mode::Kebab,
        Mode::Snake,
    ];

    /// Identifier used for flags and invocation names.
    pub fn id(self) -> &'static str {
        match self {
            Mode::Camel => "camel",
            Mode::LowerCamel => "lower-camel",
            Mode::Kebab => "kebab",
            Mode::ScreamingKebab => "screaming-kebab",
            Mode::Snake => "snake",
            Mode::ScreamingSnake => "screaming-snake",
        }
    }

    /// Sample output for help text.
    pub fn example(self) -> &'static str {
        match self {
            Mode::Camel => "CamelCase",
            Mode::LowerCamel => "lowerCamelCase",
            Mode::Kebab => "kebab-case",
            Mode::ScreamingKebab => "SCREAMING-KEBAB-CASE",
            Mode::Snake => "snake_case",
            Mode::ScreamingSnake => "SCREAMING_SNAKE_CASE",
        }
    }

    /// Short flag alias.
    pub fn short(self) -> char {
        match self {
            Mode::Camel => 'c',
            Mode::LowerCamel => 'C',
            Mode::Kebab => 'k',
            Mode::ScreamingKebab => 'K',
            Mode::Snake => 's',
            Mode::ScreamingSnake => 'S',
        }
    }

    fn case(self) -> Case {
        match self {
            Mode::Camel => Case::Pascal,
            Mode::LowerCamel => Case::Camel,
            Mode::Kebab => Case::Kebab,
            Mode::ScreamingKebab => Case::Cobol,
            Mode::Snake => Case::Snake,
            Mode::ScreamingSnake => Case::UpperSnake,
        }
    }

    /// Convert `input` to this case.
    pub fn convert(self, input: &str) -> String {
        input.to_case(self.case())
    }

    /// Resolve a mode from the name the program was invoked as.
    ///
    /// At most one of the recognized prefixes is removed, then a trailing
    /// `-case`. Names like `to-snake-case`, `strto-kebab` and `camel` all
    /// resolve; `strcaseto` does not.
    pub fn from_invocation(name: &str) -> Option<Mode> {
        let name = INVOCATION_PREFIXES
            .iter()
            .find_map(|prefix| name.strip_prefix(prefix))
            .unwrap_or(name);
        let name = name.strip_suffix(INVOCATION_SUFFIX).unwrap_or(name);
        Mode::from_id(name)
    }

    /// Look up a mode by its exact identifier.
    pub fn from_id(id: &str) -> Option<Mode> {
        Mode::ALL.into_iter().find(|mode| mode.id() == id)
    }

    /// Pick the mode for a set of case flags.
    ///
    /// The highest entry of [`Mode::PRIORITY`] among `flags` wins. With no
    /// flags the result is [`Mode::Camel`].
    pub fn select(flags: &[Mode]) -> Mode {
        Mode::PRIORITY
            .into_iter()
            .find(|mode| flags.contains(mode))
            .unwrap_or(Mode::Camel)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
