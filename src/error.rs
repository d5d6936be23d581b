use std::fmt;

/// Errors that can occur while assembling the watch configuration or
/// driving the refresh loop
#[derive(Debug)]
pub enum WatchError {
    /// Malformed command line (unknown flag, missing flag value)
    Usage { message: String },

    /// Interval text did not parse to a positive finite value
    InvalidInterval { input: String, reason: String },

    /// Initial reservation of the command buffer failed
    InitialAllocation { requested: usize },

    /// Growing the command buffer, or copying the explicit command, failed
    Allocation { context: String, requested: usize },

    /// No `--` separator and no explicit command flag
    MissingCommand,

    /// A `--` separator was given but nothing followed it
    EmptyCommand,

    /// Assembled command is unusable (starts with `-`)
    InvalidCommand { command: String },

    /// More arguments than the parser accepts
    TooManyArguments { count: usize, max: usize },

    /// Terminal or child process I/O failed
    Io { context: String, source: std::io::Error },
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchError::Usage { message } => {
                write!(f, "{}", message)
            }
            WatchError::InvalidInterval { input, reason } => {
                write!(f, "interval: {} invalid ({})", input, reason)
            }
            WatchError::InitialAllocation { requested } => {
                write!(f, "command: allocation of {} bytes failed", requested)
            }
            WatchError::Allocation { context, requested } => {
                write!(f, "command: {} invalid (allocation of {} bytes failed)", context, requested)
            }
            WatchError::MissingCommand => {
                write!(f, "command: missing (expected -c or -- command ...)")
            }
            WatchError::EmptyCommand => {
                write!(f, "command: nothing follows the -- separator")
            }
            WatchError::InvalidCommand { command } => {
                write!(f, "command: '{}' invalid (must not start with '-')", command)
            }
            WatchError::TooManyArguments { count, max } => {
                write!(f, "arguments: {} given, at most {} accepted", count, max)
            }
            WatchError::Io { context, .. } => {
                write!(f, "{} failed", context)
            }
        }
    }
}

impl std::error::Error for WatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WatchError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl WatchError {
    /// Create a usage error from a flag parser message
    pub fn usage(message: impl Into<String>) -> Self {
        WatchError::Usage {
            message: message.into(),
        }
    }

    /// Create an interval parse error
    pub fn invalid_interval(input: &str, reason: &str) -> Self {
        WatchError::InvalidInterval {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a command buffer growth / copy failure
    pub fn allocation(context: &str, requested: usize) -> Self {
        WatchError::Allocation {
            context: context.to_string(),
            requested,
        }
    }

    /// Create an invalid command error
    pub fn invalid_command(command: &str) -> Self {
        WatchError::InvalidCommand {
            command: command.to_string(),
        }
    }

    /// Wrap a terminal or process I/O failure
    pub fn io(context: &str, source: std::io::Error) -> Self {
        WatchError::Io {
            context: context.to_string(),
            source,
        }
    }

    /// Process exit status this error maps to
    pub fn exit_code(&self) -> i32 {
        match self {
            WatchError::Usage { .. } => 1,
            WatchError::InvalidInterval { .. } => 2,
            WatchError::InitialAllocation { .. } => 2,
            WatchError::Allocation { .. } => 3,
            WatchError::MissingCommand
            | WatchError::EmptyCommand
            | WatchError::InvalidCommand { .. }
            | WatchError::TooManyArguments { .. } => 4,
            WatchError::Io { .. } => 1,
        }
    }
}

impl From<std::io::Error> for WatchError {
    fn from(source: std::io::Error) -> Self {
        WatchError::io("terminal output", source)
    }
}

/// Result type alias for watch operations
pub type WatchResult<T> = Result<T, WatchError>;
