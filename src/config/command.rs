use crate::error::{WatchError, WatchResult};

/// Bytes reserved for the command buffer before any argument is copied
pub const INITIAL_CAPACITY: usize = 2048;

/// Assemble the shell command string from one of two sources.
///
/// An explicit `-c` value is copied verbatim and wins over any residual
/// arguments: when both are present the residual arguments after `--` are
/// ignored. Otherwise the residual arguments are joined with single spaces
/// into a buffer that starts at [`INITIAL_CAPACITY`] and doubles on
/// overflow. Reservation goes through `try_reserve` so an allocation
/// failure surfaces as an error with its own exit status instead of an
/// abort.
///
/// The result must be non-empty and must not start with `-`, which the
/// shell invocation would otherwise mistake for a flag.
pub fn build_command(
    explicit: Option<&str>,
    rest: &[String],
    saw_separator: bool,
) -> WatchResult<String> {
    if let Some(text) = explicit {
        let mut command = String::new();
        command
            .try_reserve_exact(text.len())
            .map_err(|_| WatchError::allocation(text, text.len()))?;
        command.push_str(text);
        return validate(command);
    }

    if !saw_separator {
        return Err(WatchError::MissingCommand);
    }
    if rest.is_empty() {
        return Err(WatchError::EmptyCommand);
    }

    let mut command = String::new();
    command
        .try_reserve(INITIAL_CAPACITY)
        .map_err(|_| WatchError::InitialAllocation {
            requested: INITIAL_CAPACITY,
        })?;

    for (index, arg) in rest.iter().enumerate() {
        let needed = arg.len() + 1;
        if command.capacity() - command.len() < needed {
            // Double the buffer, or more when a single argument demands it
            let grow = command.capacity().max(needed);
            command
                .try_reserve(grow)
                .map_err(|_| WatchError::allocation(arg, grow))?;
        }
        if index > 0 {
            command.push(' ');
        }
        command.push_str(arg);
    }

    validate(command)
}

fn validate(command: String) -> WatchResult<String> {
    if command.is_empty() || command.starts_with('-') {
        return Err(WatchError::invalid_command(&command));
    }
    Ok(command)
}
