//! Subcommand implementations
//!
//! Each command prints its results to stdout and returns `anyhow` errors
//! with the file it was working on attached as context.

pub mod generate;
pub mod info;
pub mod merge;
pub mod validate;

use colored::Colorize;

/// Print generation warnings in yellow
pub(crate) fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }
}
