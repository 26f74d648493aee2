// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color codes for suite output.

use clap::ValueEnum;
use std::io::IsTerminal;

/// ANSI escape sequences
pub mod escape {
    /// Bright red foreground
    pub const RED: &str = "\x1b[91m";

    /// Bright green foreground
    pub const GREEN: &str = "\x1b[92m";

    /// Bold
    pub const BOLD: &str = "\x1b[1m";

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";
}

/// When to emit color codes.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal
    Auto,
    /// Always color
    #[default]
    Always,
    /// Never color
    Never,
}

/// Immutable set of color codes used by the reporter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub failure: &'static str,
    pub success: &'static str,
    pub bold: &'static str,
    pub reset: &'static str,
}

impl Palette {
    /// ANSI colors.
    pub const fn ansi() -> Self {
        Self {
            failure: escape::RED,
            success: escape::GREEN,
            bold: escape::BOLD,
            reset: escape::RESET,
        }
    }

    /// No escape codes at all.
    pub const fn plain() -> Self {
        Self {
            failure: "",
            success: "",
            bold: "",
            reset: "",
        }
    }

    /// Resolve a color choice against whether stdout is a terminal.
    pub fn for_choice(choice: ColorChoice, is_terminal: bool) -> Self {
        match choice {
            ColorChoice::Always => Self::ansi(),
            ColorChoice::Never => Self::plain(),
            ColorChoice::Auto if is_terminal => Self::ansi(),
            ColorChoice::Auto => Self::plain(),
        }
    }

    /// Resolve a color choice for the process's stdout.
    pub fn for_stdout(choice: ColorChoice) -> Self {
        Self::for_choice(choice, std::io::stdout().is_terminal())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
