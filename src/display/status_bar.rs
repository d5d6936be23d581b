use std::fmt::Write as _;
use std::io::{self, Write};

use chrono::Local;

use super::terminal::Terminal;

/// Header text on the left edge: interval with three decimals, then the command
pub fn title_text(interval: f64, command: &str) -> String {
    format!("Every {:.3}: {}", interval, command)
}

/// Current local time for the right edge of the bar.
/// Falls back to a literal marker if formatting into the buffer fails.
pub fn timestamp() -> String {
    let mut stamp = String::new();
    if write!(stamp, "{}", Local::now().format("%Y-%m-%d %H:%M:%S")).is_err() {
        stamp.clear();
        stamp.push_str("TIME ERROR");
    }
    stamp
}

/// Draw the status bar across row 1 and park the cursor at column 1 row 2,
/// so command output lands below the bar without overwriting it.
///
/// The timestamp is right-aligned: jump to the top-right corner, step left
/// by the rendered length minus one column, then print.
pub fn draw_status_bar(terminal: &Terminal, interval: f64, command: &str) -> io::Result<()> {
    terminal.move_cursor(1, 1)?;
    print!("{}", title_text(interval, command));

    let stamp = timestamp();
    terminal.move_cursor(terminal.width().max(1), 1)?;
    terminal.cursor_left(stamp.len().saturating_sub(1) as u16)?;
    print!("{}", stamp);

    terminal.move_cursor(1, 2)?;
    io::stdout().flush()
}
