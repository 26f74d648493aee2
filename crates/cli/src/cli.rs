// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use crate::colors::ColorChoice;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Run the jacktrip command-line test suite
#[derive(Parser, Clone, Debug, Default)]
#[command(name = "testsuite", version, about = "Command-line test suite for jacktrip")]
pub struct Cli {
    /// Suite file (TOML or JSON) to run instead of the built-in tests
    #[arg(long, value_name = "FILE")]
    pub suite: Option<PathBuf>,

    /// Executable under test (default: builddir/jacktrip)
    #[arg(long, value_name = "PATH")]
    pub exe: Option<PathBuf>,

    /// When to color output
    #[arg(long, value_enum, default_value = "always")]
    pub color: ColorChoice,

    /// List test commands without running them
    #[arg(long)]
    pub list: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
