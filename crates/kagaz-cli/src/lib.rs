//! Kagaz CLI library.
//!
//! Command definitions, credential loading and the execution wiring for
//! the `kagaz` binary.

pub mod cli;
pub mod commands;
pub mod credentials;
pub mod error;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
