//! Command-line surface.
//!
//! The argument set depends on the invocation name, so the command is built
//! with the clap builder API rather than derived.

use std::ffi::OsString;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use strcaseto_core::{Invocation, Mode};

const STRINGS: &str = "strings";
const GENERAL_HEADING: &str = "General";
const CASES_HEADING: &str = "Cases";
const USAGE_INDENT: &str = "\n       ";

const HELP_TEMPLATE: &str = "\
{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}";

const BUILD_RELEASE: &str = match option_env!("STRCASETO_BUILD_RELEASE") {
    Some(release) => release,
    None => "trunk",
};

/// Version string shown by `--version` and in help.
pub(crate) fn version() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), BUILD_RELEASE)
}

/// Build the clap command for `invocation`.
///
/// In fixed mode the case flags are still parsed but hidden, and their
/// values are never consulted.
pub(crate) fn command(invocation: &Invocation) -> Command {
    let about = invocation.about();
    let long_about = format!("{}\n\n{}", about, invocation.description());
    let fixed = invocation.fixed_mode().is_some();

    let mut cmd = Command::new(invocation.display_name())
        .bin_name(invocation.base_name().to_string())
        .version(version())
        .about(about)
        .long_about(long_about)
        .override_usage(invocation.usage().replace('\n', USAGE_INDENT))
        .help_template(HELP_TEMPLATE)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .disable_help_subcommand(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .visible_alias("usage")
                .help("show help")
                .action(ArgAction::HelpLong)
                .help_heading(GENERAL_HEADING),
        )
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help("print the version")
                .action(ArgAction::Version)
                .help_heading(GENERAL_HEADING),
        )
        .arg(
            Arg::new(STRINGS)
                .value_name("string")
                .help("strings to convert, read from stdin when omitted")
                .value_parser(value_parser!(OsString))
                .num_args(0..)
                .action(ArgAction::Append),
        );

    for mode in Mode::ALL {
        cmd = cmd.arg(
            Arg::new(mode.id())
                .short(mode.short())
                .long(mode.id())
                .help(format!("convert to {}", mode.example()))
                .action(ArgAction::SetTrue)
                .hide(fixed)
                .help_heading(CASES_HEADING),
        );
    }

    cmd
}

/// Parsed command-line arguments for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CliArgs {
    /// Positional strings, in the order given.
    pub strings: Vec<String>,
    /// Case flags that were set, in [`Mode::ALL`] order.
    pub case_flags: Vec<Mode>,
}

impl CliArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let strings = matches
            .get_many::<OsString>(STRINGS)
            .map(|values| {
                values
                    .map(|value| value.to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        let case_flags = Mode::ALL
            .into_iter()
            .filter(|mode| matches.get_flag(mode.id()))
            .collect();
        Self {
            strings,
            case_flags,
        }
    }

    /// Parse `args` (including the program name) against `cmd`.
    pub fn try_parse_from<I, T>(cmd: &mut Command, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = cmd.try_get_matches_from_mut(args)?;
        Ok(Self::from_matches(&matches))
    }

    /// The mode this run converts with.
    pub fn mode(&self, invocation: &Invocation) -> Mode {
        invocation
            .fixed_mode()
            .unwrap_or_else(|| Mode::select(&self.case_flags))
    }
}
