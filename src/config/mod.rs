//! Startup configuration: flag parsing, interval parsing, command assembly

pub mod args;
pub mod command;
pub mod interval;

// Re-export commonly used items
pub use args::Config;
