//! Depo CLI library.
//!
//! This library provides the core functionality for the `depo` command-line
//! interface, including configuration management, command execution, output
//! formatting and clipboard support.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
