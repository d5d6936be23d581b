//! Display module for terminal escape output and screen-buffer state

pub mod status_bar;
pub mod terminal;

// Re-export commonly used items
pub use status_bar::draw_status_bar;
pub use terminal::{Terminal, TerminalSession};
