// jawm-cli: option table, argument parsing and shared helpers for the binary.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use jawm_core::{CasePolicy, MangleError};
use jawm_mangle::{MangleConfig, OutputTarget};

/// Banner shown at the top of the usage text.
const ABOUT: &str = "Just Another Word Mangler";

/// Example shown at the bottom of the usage text.
const EXAMPLE: &str = "Example Usage: jawm -w /usr/share/wordlists/rockyou.txt";

// ---------------------------------------------------------------------------
// Option table
// ---------------------------------------------------------------------------

/// Whether an option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Boolean switch.
    Flag,
    /// Exactly one value.
    Required,
    /// Zero or one value; a bare flag means the given default.
    Optional(&'static str),
}

/// Static description of one command-line option.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub long: &'static str,
    pub short: Option<char>,
    pub value: ValueKind,
    pub value_name: &'static str,
    pub numeric: bool,
    pub help: &'static str,
}

pub const HELP: &str = "help";
pub const VERBOSE: &str = "verbose";
pub const WORDLIST: &str = "wordlist";
pub const UPPERCASE: &str = "uppercase";
pub const FORCE_UPPERCASE: &str = "forceuppercase";
pub const NUMBERS: &str = "numbers";
pub const MINIMUM_LENGTH: &str = "minlength";
pub const SPECIAL: &str = "special";
pub const OUTPUT: &str = "output";
pub const SORT: &str = "sort";

/// Every option the tool understands, in help order.
pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        long: HELP,
        short: Some('h'),
        value: ValueKind::Flag,
        value_name: "",
        numeric: false,
        help: "Print this help.",
    },
    OptionSpec {
        long: VERBOSE,
        short: Some('v'),
        value: ValueKind::Flag,
        value_name: "",
        numeric: false,
        help: "Print logging messages, useful for debugging issues.",
    },
    OptionSpec {
        long: WORDLIST,
        short: Some('w'),
        value: ValueKind::Required,
        value_name: "wordlist",
        numeric: false,
        help: "The wordlist to mangle (required).",
    },
    OptionSpec {
        long: UPPERCASE,
        short: Some('u'),
        value: ValueKind::Flag,
        value_name: "",
        numeric: false,
        help: "Include an uppercase letter (does not require all passwords to have an uppercase letter).",
    },
    OptionSpec {
        long: FORCE_UPPERCASE,
        short: Some('U'),
        value: ValueKind::Flag,
        value_name: "",
        numeric: false,
        help: "Require an uppercase letter. Takes priority over --uppercase.",
    },
    OptionSpec {
        long: NUMBERS,
        short: Some('n'),
        value: ValueKind::Required,
        value_name: "amount",
        numeric: true,
        help: "Require a certain amount of numbers in each password.",
    },
    OptionSpec {
        long: MINIMUM_LENGTH,
        short: Some('l'),
        value: ValueKind::Required,
        value_name: "minLength",
        numeric: true,
        help: "Minimum length of the password (at least 1).",
    },
    OptionSpec {
        long: SPECIAL,
        short: Some('s'),
        value: ValueKind::Optional("1"),
        value_name: "specialChars",
        numeric: true,
        help: "Required special characters to include (default 1).",
    },
    OptionSpec {
        long: OUTPUT,
        short: Some('o'),
        value: ValueKind::Required,
        value_name: "location",
        numeric: false,
        help: "Output file name. Existing files are never overwritten.",
    },
    OptionSpec {
        long: SORT,
        short: None,
        value: ValueKind::Flag,
        value_name: "",
        numeric: false,
        help: "Print passwords in sorted order.",
    },
];

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Errors raised while turning arguments into a configuration.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The arguments could not be parsed at all.
    #[error("{0}")]
    Arguments(String),

    #[error("missing required option --wordlist")]
    MissingWordlist,

    #[error(transparent)]
    Mangle(#[from] MangleError),
}

impl CliError {
    /// Whether the usage text should accompany the error.
    pub fn shows_usage(&self) -> bool {
        match self {
            CliError::Arguments(_) | CliError::MissingWordlist => true,
            CliError::Mangle(err) => err.shows_usage(),
        }
    }
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Run(MangleConfig),
}

/// Build the clap command from [`OPTIONS`].
pub fn command() -> Command {
    let mut cmd = Command::new("jawm")
        .about(ABOUT)
        .override_usage("jawm <options>")
        .after_help(EXAMPLE)
        .disable_help_flag(true)
        .disable_version_flag(true);

    for spec in OPTIONS {
        let mut arg = Arg::new(spec.long).long(spec.long).help(spec.help);
        if let Some(short) = spec.short {
            arg = arg.short(short);
        }
        arg = match spec.value {
            ValueKind::Flag => arg.action(ArgAction::SetTrue),
            ValueKind::Required => arg.num_args(1).value_name(spec.value_name),
            ValueKind::Optional(default) => arg
                .num_args(0..=1)
                .default_missing_value(default)
                .value_name(spec.value_name),
        };
        if spec.numeric {
            arg = arg.allow_negative_numbers(true);
        }
        cmd = cmd.arg(arg);
    }
    cmd
}

/// Render the usage text.
pub fn usage() -> String {
    command().render_help().to_string()
}

/// Parse a full argument vector (program name first).
pub fn parse_args<I, T>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = command()
        .try_get_matches_from(args)
        .map_err(|e| CliError::Arguments(first_line(&e.to_string())))?;

    if matches.get_flag(HELP) {
        return Ok(Invocation::Help);
    }

    let wordlist = matches
        .get_one::<String>(WORDLIST)
        .ok_or(CliError::MissingWordlist)?;

    let case_policy =
        CasePolicy::from_flags(matches.get_flag(UPPERCASE), matches.get_flag(FORCE_UPPERCASE));

    let mut config = MangleConfig::new(PathBuf::from(wordlist))
        .with_case_policy(case_policy)
        .with_verbose(matches.get_flag(VERBOSE))
        .with_sorted(matches.get_flag(SORT));

    if let Some(digits) = numeric(&matches, NUMBERS)? {
        config = config.with_digits(digits);
    }
    if let Some(passes) = numeric(&matches, SPECIAL)? {
        config = config.with_special_passes(passes);
    }
    if let Some(min_length) = numeric(&matches, MINIMUM_LENGTH)? {
        if min_length == 0 {
            let raw = matches.get_one::<String>(MINIMUM_LENGTH).map_or("0", String::as_str);
            return Err(invalid_value(MINIMUM_LENGTH, raw).into());
        }
        config = config.with_min_length(min_length);
    }
    if let Some(output) = matches.get_one::<String>(OUTPUT) {
        config = config.with_output(OutputTarget::File(PathBuf::from(output)));
    }

    log::debug!("parsed configuration: {config:?}");
    Ok(Invocation::Run(config))
}

/// First line of a clap error, without its `error: ` prefix.
fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

/// Parse a non-negative integer option, if present.
fn numeric(matches: &ArgMatches, option: &str) -> Result<Option<usize>, MangleError> {
    match matches.get_one::<String>(option) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| invalid_value(option, value)),
    }
}

fn invalid_value(option: &str, value: &str) -> MangleError {
    MangleError::InvalidNumericOption {
        option: option.to_string(),
        value: value.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Process helpers
// ---------------------------------------------------------------------------

/// Print an error message and exit with code 1.
///
/// Pending standard output (such as the usage text) is flushed first.
pub fn fatal(msg: &str) -> ! {
    let _ = io::stdout().flush();
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Invocation, CliError> {
        let mut full = vec!["jawm"];
        full.extend_from_slice(args);
        parse_args(full)
    }

    fn run_config(args: &[&str]) -> MangleConfig {
        match parse(args).unwrap() {
            Invocation::Run(config) => config,
            Invocation::Help => panic!("expected a run configuration"),
        }
    }

    #[test]
    fn option_table_has_unique_names() {
        let mut longs: Vec<&str> = OPTIONS.iter().map(|o| o.long).collect();
        longs.sort_unstable();
        longs.dedup();
        assert_eq!(longs.len(), OPTIONS.len());

        let mut shorts: Vec<char> = OPTIONS.iter().filter_map(|o| o.short).collect();
        let count = shorts.len();
        shorts.sort_unstable();
        shorts.dedup();
        assert_eq!(shorts.len(), count);
    }

    #[test]
    fn command_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn minimal_invocation() {
        let config = run_config(&["-w", "words.txt"]);
        assert_eq!(config, MangleConfig::new("words.txt"));
    }

    #[test]
    fn long_options() {
        let config = run_config(&[
            "--wordlist",
            "words.txt",
            "--uppercase",
            "--numbers",
            "2",
            "--special",
            "3",
            "--minlength",
            "8",
            "--output",
            "out.txt",
            "--verbose",
            "--sort",
        ]);
        assert_eq!(config.case_policy, CasePolicy::IncludeUpper);
        assert_eq!(config.digits, 2);
        assert_eq!(config.special_passes, 3);
        assert_eq!(config.min_length, Some(8));
        assert_eq!(config.output, OutputTarget::File(PathBuf::from("out.txt")));
        assert!(config.verbose);
        assert!(config.sorted);
    }

    #[test]
    fn special_without_value_defaults_to_one() {
        assert_eq!(run_config(&["-w", "words.txt", "-s"]).special_passes, 1);
        assert_eq!(run_config(&["-s", "-w", "words.txt"]).special_passes, 1);
        assert_eq!(run_config(&["-w", "words.txt", "-s", "2"]).special_passes, 2);
    }

    #[test]
    fn force_upper_takes_priority() {
        let config = run_config(&["-w", "words.txt", "-u", "-U"]);
        assert_eq!(config.case_policy, CasePolicy::ForceUpper);
    }

    #[test]
    fn help_flag() {
        assert_eq!(parse(&["-h"]).unwrap(), Invocation::Help);
        assert_eq!(parse(&["--help", "-w", "words.txt"]).unwrap(), Invocation::Help);
    }

    #[test]
    fn missing_wordlist() {
        let err = parse(&["-n", "2"]).unwrap_err();
        assert!(matches!(err, CliError::MissingWordlist));
        assert!(err.shows_usage());
    }

    #[test]
    fn invalid_numbers_value() {
        let err = parse(&["-w", "words.txt", "-n", "two"]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Mangle(MangleError::InvalidNumericOption { .. })
        ));
        assert!(err.shows_usage());
    }

    #[test]
    fn zero_minimum_length_is_invalid() {
        let err = parse(&["-w", "words.txt", "-l", "0"]).unwrap_err();
        assert!(matches!(
            &err,
            CliError::Mangle(MangleError::InvalidNumericOption { option, value })
                if option == MINIMUM_LENGTH && value == "0"
        ));
        assert!(err.shows_usage());
        assert_eq!(run_config(&["-w", "words.txt", "-l", "1"]).min_length, Some(1));
    }

    #[test]
    fn negative_value_is_invalid() {
        let err = parse(&["-w", "words.txt", "-l", "-3"]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Mangle(MangleError::InvalidNumericOption { .. })
        ));
    }

    #[test]
    fn unknown_option() {
        let err = parse(&["-w", "words.txt", "--bogus"]).unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
        assert!(err.shows_usage());
    }

    #[test]
    fn usage_mentions_every_option() {
        let text = usage();
        assert!(text.contains(ABOUT));
        assert!(text.contains(EXAMPLE));
        for spec in OPTIONS {
            assert!(text.contains(&format!("--{}", spec.long)), "missing --{}", spec.long);
        }
    }
}
