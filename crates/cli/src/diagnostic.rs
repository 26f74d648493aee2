// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error and warning messages on stderr.
//!
//! Colored when stderr is a terminal, plain text otherwise.

use crate::case::TestCase;
use std::io::{self, IsTerminal, Write};

const ERROR_COLOR: &str = "\x1b[31m";
const WARNING_COLOR: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Print an error message to stderr.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_labeled(&mut io::stderr(), "Error", ERROR_COLOR, msg, is_tty);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_labeled(&mut io::stderr(), "Warning", WARNING_COLOR, msg, is_tty);
}

fn write_labeled<W: Write>(
    writer: &mut W,
    label: &str,
    color: &str,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "{}{}: {}{}", color, label, msg, RESET);
    } else {
        let _ = writeln!(writer, "{}: {}", label, msg);
    }
}

/// Messages for cases that will pass no matter what the command does.
pub fn vacuous_cases(cases: &[TestCase]) -> Vec<String> {
    cases
        .iter()
        .enumerate()
        .filter(|(_, case)| !case.has_expectations())
        .map(|(index, case)| {
            format!(
                "test {} ({}) checks no exit code, stdout or stderr and always passes",
                index,
                case.display_command()
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
