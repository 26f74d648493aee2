// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line test harness.
//!
//! Runs an executable with fixed arguments, captures its exit code and
//! output streams, and compares them against expected values, either
//! exactly or with a regular expression anchored at the start of the
//! output. Results are printed with terminal colors and summarized in the
//! process exit code.

pub mod case;
pub mod cli;
pub mod colors;
pub mod diagnostic;
pub mod matcher;
pub mod registry;
pub mod report;
pub mod runner;

pub use case::{Expectation, TestCase, TestOptions};
pub use report::{exit_codes, Reporter, Summary};
pub use runner::{run_case, Field, RunError, TestFailure};
