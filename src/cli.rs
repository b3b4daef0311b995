//! CLI argument parsing and command dispatch

pub mod args;
pub mod common;
pub mod count;
pub mod init;
pub mod rules;
pub mod status;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, OutputFormat, RuleArgs};
