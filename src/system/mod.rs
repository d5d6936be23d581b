//! System interface abstractions: shell execution and interval timing

pub mod shell;
pub mod timer;

// Re-export commonly used traits
pub use shell::ShellRunner;
