#![forbid(unsafe_code)]

//! The `consentbar` command-line tool.
//!
//! Resolves themes and renders their style sheets offline, from the same
//! JSON options a host passes to the widget.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use cli::{Cli, Commands, run, run_from_env};
pub use error::{CliError, Result};
