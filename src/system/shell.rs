use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

use crate::error::{WatchError, WatchResult};

/// Abstraction for shell execution to enable loop testing without real commands
#[async_trait]
pub trait ShellRunner {
    /// Run the command line through the platform shell, wait for it to
    /// finish and report its exit status
    async fn run(&mut self, command: &str) -> WatchResult<i32>;
}

/// Real runner spawning `sh -c` with inherited standard streams, so the
/// child's output draws straight onto the current frame.
///
/// The command line is handed to the shell verbatim on purpose: the
/// invoking user already controls it, so quoting and expansion follow the
/// shell's rules, not ours.
pub struct SystemShellRunner;

#[async_trait]
impl ShellRunner for SystemShellRunner {
    async fn run(&mut self, command: &str) -> WatchResult<i32> {
        let status = TokioCommand::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| WatchError::io("spawning shell", e))?;

        // A signal-terminated child has no code; report it as a plain failure
        Ok(status.code().unwrap_or(1))
    }
}

/// Scripted runner returning canned statuses and recording invocations
pub struct ScriptedShellRunner {
    statuses: Vec<i32>,
    calls: Vec<String>,
}

impl ScriptedShellRunner {
    /// Statuses are consumed in order; the last one repeats forever
    pub fn new(statuses: &[i32]) -> Self {
        Self {
            statuses: statuses.to_vec(),
            calls: Vec::new(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

#[async_trait]
impl ShellRunner for ScriptedShellRunner {
    async fn run(&mut self, command: &str) -> WatchResult<i32> {
        let index = self.calls.len().min(self.statuses.len().saturating_sub(1));
        self.calls.push(command.to_string());
        Ok(self.statuses.get(index).copied().unwrap_or(0))
    }
}
