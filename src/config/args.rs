use clap::Parser;

use crate::config::command::build_command;
use crate::config::interval::{DEFAULT_INTERVAL, parse_interval};
use crate::error::{WatchError, WatchResult};

/// Hard cap on argv entries, checked before flag parsing
pub const MAX_ARGS: usize = 128;

#[derive(Parser, Debug)]
#[command(
    name = "command-watch-rs",
    version,
    about = "Execute a command periodically through the shell and redraw its output",
    override_usage = "command-watch-rs [-txs] [-n <SECONDS>] [-c <COMMAND>] [-- <COMMAND>...]"
)]
struct Cli {
    /// Suppress the status bar
    #[arg(short = 't')]
    no_title: bool,

    /// Halt when the command exits with a non-zero status
    #[arg(short = 'x')]
    halt_on_error: bool,

    /// Keep previous output instead of clearing the screen
    #[arg(short = 's')]
    no_clear: bool,

    /// Refresh interval in seconds, fractions allowed
    #[arg(short = 'n', value_name = "SECONDS")]
    interval: Option<String>,

    /// Command string passed to the shell; overrides anything after --
    #[arg(short = 'c', value_name = "COMMAND")]
    command: Option<String>,

    /// Command and its arguments, given after --
    #[arg(last = true, value_name = "COMMAND")]
    rest: Vec<String>,
}

/// Immutable runtime configuration, fully validated before the loop starts
#[derive(Debug, Clone)]
pub struct Config {
    pub interval: f64,
    pub show_title: bool,
    pub halt_on_error: bool,
    pub clear_screen: bool,
    pub command: String,
}

impl Config {
    /// Build the configuration from the process argument list
    pub fn from_env() -> WatchResult<Self> {
        Self::from_args(std::env::args().collect())
    }

    pub fn from_args(args: Vec<String>) -> WatchResult<Self> {
        if args.len() > MAX_ARGS {
            return Err(WatchError::TooManyArguments {
                count: args.len(),
                max: MAX_ARGS,
            });
        }

        // The builder distinguishes "no -- given" from "-- with nothing
        // after it", so remember whether the separator appeared at all
        let saw_separator = args.iter().any(|arg| arg == "--");

        let cli = match Cli::try_parse_from(&args) {
            Ok(cli) => cli,
            Err(err) if err.use_stderr() => {
                return Err(WatchError::usage(err.render().to_string().trim_end()));
            }
            Err(err) => {
                // --help / --version print to stdout and are not failures
                let _ = err.print();
                std::process::exit(0);
            }
        };

        let interval = match cli.interval.as_deref() {
            Some(text) => parse_interval(text)?,
            None => DEFAULT_INTERVAL,
        };

        let command = build_command(cli.command.as_deref(), &cli.rest, saw_separator)?;

        Ok(Config {
            interval,
            show_title: !cli.no_title,
            halt_on_error: cli.halt_on_error,
            clear_screen: !cli.no_clear,
            command,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(values: &[&str]) -> WatchResult<Config> {
        Config::from_args(values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["watch", "--", "echo", "hi"]).unwrap();
        assert_eq!(config.interval, 2.0);
        assert!(config.show_title);
        assert!(!config.halt_on_error);
        assert!(config.clear_screen);
        assert_eq!(config.command, "echo hi");
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&["watch", "-t", "-x", "-s", "-n", "0.5", "--", "ls"]).unwrap();
        assert_eq!(config.interval, 0.5);
        assert!(!config.show_title);
        assert!(config.halt_on_error);
        assert!(!config.clear_screen);
        assert_eq!(config.command, "ls");
    }

    #[test]
    fn test_explicit_command_flag_wins() {
        let config = parse(&["watch", "-c", "date", "--", "echo", "hi"]).unwrap();
        assert_eq!(config.command, "date");
    }

    #[test]
    fn test_missing_command_exits_with_four() {
        let err = parse(&["watch"]).unwrap_err();
        assert!(matches!(err, WatchError::MissingCommand));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_command_after_separator_starting_with_dash_is_rejected() {
        let err = parse(&["watch", "--", "-v"]).unwrap_err();
        assert!(matches!(err, WatchError::InvalidCommand { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_unknown_flag_is_a_usage_error() {
        let err = parse(&["watch", "-z", "--", "ls"]).unwrap_err();
        assert!(matches!(err, WatchError::Usage { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_invalid_interval_exits_with_two() {
        let err = parse(&["watch", "-n", "abc", "--", "ls"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_argument_cap_enforced_before_parsing() {
        let mut args: Vec<String> = vec!["watch".into(), "--".into()];
        args.extend((0..200).map(|n| format!("arg{}", n)));
        let err = Config::from_args(args).unwrap_err();
        assert!(matches!(err, WatchError::TooManyArguments { .. }));
        assert_eq!(err.exit_code(), 4);
    }
}
