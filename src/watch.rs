use std::io::Write;

use tokio::sync::mpsc;

use crate::config::Config;
use crate::display::{Terminal, TerminalSession, draw_status_bar};
use crate::error::WatchResult;
use crate::system::shell::{ShellRunner, SystemShellRunner};
use crate::system::timer;

/// Run the refresh loop until interrupted or a halting status is seen.
/// Returns the status the process should exit with.
pub async fn run(config: Config) -> WatchResult<i32> {
    // Ctrl+C feeds the shutdown channel; the loop races it against the
    // interval wait
    let (tx, mut rx) = mpsc::channel(1);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        let _ = tx.send(()).await;
    });

    let mut runner = SystemShellRunner;
    run_with(&config, &mut runner, &mut rx).await
}

/// Refresh loop body, generic over the shell runner and driven by an
/// external shutdown channel.
///
/// Each iteration: redraw the frame, execute the command, inspect its
/// status, then wait out the interval. The alternate-screen session guard
/// is released on both orderly exits and, via `Drop`, on error returns.
pub async fn run_with<R: ShellRunner>(
    config: &Config,
    runner: &mut R,
    shutdown: &mut mpsc::Receiver<()>,
) -> WatchResult<i32> {
    let terminal = Terminal::new();
    let mut session = TerminalSession::enter()?;
    let millis = timer::interval_millis(config.interval);

    loop {
        if config.clear_screen {
            terminal.clear_screen()?;
            if config.show_title {
                draw_status_bar(&terminal, config.interval, &config.command)?;
            }
            // The frame must be visible before the command starts writing
            std::io::stdout().flush()?;
        }

        let status = runner.run(&config.command).await?;
        if status != 0 {
            eprintln!("command exited with status {}", status);
            if config.halt_on_error {
                session.leave()?;
                return Ok(status);
            }
        }

        tokio::select! {
            _ = shutdown.recv() => {
                // Ctrl+C received, restore the main buffer and exit cleanly
                session.leave()?;
                println!("\nWatch stopped.");
                return Ok(0);
            }
            _ = timer::wait_millis(millis) => {
                // Interval elapsed, redraw
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::shell::ScriptedShellRunner;
    use tokio::time::{Duration, timeout};

    fn config(command: &str, halt_on_error: bool) -> Config {
        Config {
            interval: 2.0,
            show_title: true,
            halt_on_error,
            clear_screen: true,
            command: command.to_string(),
        }
    }

    #[tokio::test]
    async fn test_halt_on_error_returns_child_status_after_one_run() {
        let config = config("false", true);
        let mut runner = ScriptedShellRunner::new(&[7]);
        let (_tx, mut rx) = mpsc::channel(1);

        let status = run_with(&config, &mut runner, &mut rx).await.unwrap();
        assert_eq!(status, 7);
        assert_eq!(runner.call_count(), 1);
    }

    #[tokio::test]
    async fn test_shutdown_mid_sleep_exits_with_zero() {
        let config = config("uptime", false);
        let mut runner = ScriptedShellRunner::new(&[0]);
        let (tx, mut rx) = mpsc::channel(1);
        tx.send(()).await.unwrap();

        let status = run_with(&config, &mut runner, &mut rx).await.unwrap();
        assert_eq!(status, 0);
        assert_eq!(runner.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_command_without_halt_keeps_looping() {
        let config = config("false", false);
        let mut runner = ScriptedShellRunner::new(&[1]);
        let (_tx, mut rx) = mpsc::channel(1);

        // Paused time: the interval sleeps auto-advance, the outer timeout
        // lands between the third and fourth execution
        let result = timeout(
            Duration::from_millis(4500),
            run_with(&config, &mut runner, &mut rx),
        )
        .await;

        assert!(result.is_err());
        assert!(runner.call_count() >= 2);
        assert_eq!(runner.calls()[0], "false");
    }

    #[tokio::test(start_paused = true)]
    async fn test_iterations_are_separated_by_a_full_interval() {
        let config = config("true", false);
        let mut runner = ScriptedShellRunner::new(&[0]);
        let (_tx, mut rx) = mpsc::channel(1);

        let start = tokio::time::Instant::now();
        let _ = timeout(
            Duration::from_millis(4500),
            run_with(&config, &mut runner, &mut rx),
        )
        .await;

        // Executions at 0s, 2s and 4s within the 4.5s window
        assert_eq!(runner.call_count(), 3);
        assert!(start.elapsed() >= Duration::from_millis(4500));
    }
}
