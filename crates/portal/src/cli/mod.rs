//! CLI module - Command-line interface for the portal.

pub mod args;

pub use args::{Cli, Commands};
