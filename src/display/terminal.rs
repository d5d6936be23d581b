use std::io::{self, Write};

/// Terminal control through raw ANSI escape sequences
pub struct Terminal {
    term: console::Term,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            term: console::Term::stdout(),
        }
    }

    /// Columns available on the attached terminal
    pub fn width(&self) -> u16 {
        self.term.size().1
    }

    /// Clear the entire screen and home the cursor
    pub fn clear_screen(&self) -> io::Result<()> {
        print!("\x1B[2J\x1B[1;1H");
        io::stdout().flush()
    }

    /// Move the cursor to a 1-based column/row position
    pub fn move_cursor(&self, col: u16, row: u16) -> io::Result<()> {
        print!("\x1B[{};{}H", row, col);
        io::stdout().flush()
    }

    /// Move the cursor left by the given number of columns
    pub fn cursor_left(&self, cols: u16) -> io::Result<()> {
        if cols > 0 {
            print!("\x1B[{}D", cols);
            io::stdout().flush()?;
        }
        Ok(())
    }

    /// Switch to the alternate screen buffer
    pub fn enter_alternate_screen(&self) -> io::Result<()> {
        print!("\x1B[?1049h");
        io::stdout().flush()
    }

    /// Switch back to the main screen buffer and its scrollback
    pub fn leave_alternate_screen(&self) -> io::Result<()> {
        print!("\x1B[?1049l");
        io::stdout().flush()
    }

    /// Hide cursor during updates to prevent flicker
    pub fn hide_cursor(&self) -> io::Result<()> {
        print!("\x1B[?25l");
        io::stdout().flush()
    }

    /// Show cursor
    pub fn show_cursor(&self) -> io::Result<()> {
        print!("\x1B[?25h");
        io::stdout().flush()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped alternate-screen session.
///
/// Entering switches to the alternate buffer and hides the cursor; leaving
/// restores both. `Drop` runs [`TerminalSession::leave`] as a backstop so
/// the main buffer comes back on every exit path, including error
/// propagation out of the refresh loop.
pub struct TerminalSession {
    terminal: Terminal,
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        let terminal = Terminal::new();
        terminal.enter_alternate_screen()?;
        terminal.hide_cursor()?;
        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Restore the main buffer and cursor; safe to call more than once
    pub fn leave(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            self.terminal.show_cursor()?;
            self.terminal.leave_alternate_screen()?;
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}
