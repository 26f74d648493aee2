// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drive the runner over a suite and report progress and results.

use crate::case::TestCase;
use crate::colors::Palette;
use crate::runner::{run_case, TestFailure};
use std::io::Write;
use tracing::info;

/// Process exit codes
pub mod exit_codes {
    /// Every test passed
    pub const SUCCESS: i32 = 0;
    /// At least one test failed
    pub const FAILURE: i32 = 1;
    /// The suite could not be loaded or output could not be written
    pub const ERROR: i32 = 2;
}

/// Pass/fail counts for a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub failed: usize,
}

impl Summary {
    pub fn passed(&self) -> usize {
        self.total - self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Exit code for the process.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILURE
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} tests, {} passed / {} failed",
            self.total,
            self.passed(),
            self.failed
        )
    }
}

/// Writes progress, failure details and the final summary.
pub struct Reporter<W: Write> {
    writer: W,
    palette: Palette,
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W, palette: Palette) -> Self {
        Self { writer, palette }
    }

    /// Run every case in order, reporting as it goes.
    ///
    /// A failing case never stops the run.
    pub async fn run_suite(&mut self, cases: &[TestCase]) -> std::io::Result<Summary> {
        let mut summary = Summary {
            total: cases.len(),
            failed: 0,
        };

        for (index, case) in cases.iter().enumerate() {
            self.progress(index, cases.len())?;
            if let Err(failure) = run_case(case).await {
                summary.failed += 1;
                self.failure(&failure)?;
            }
        }

        self.summary(&summary)?;
        info!(total = summary.total, failed = summary.failed, "suite finished");
        Ok(summary)
    }

    /// Print the progress line for the case at `index` (0-based).
    pub fn progress(&mut self, index: usize, total: usize) -> std::io::Result<()> {
        writeln!(self.writer, "running test {} of {}", index, total)?;
        self.writer.flush()
    }

    /// Print a failure in the failure color.
    pub fn failure(&mut self, failure: &TestFailure) -> std::io::Result<()> {
        writeln!(
            self.writer,
            "{}{}{}",
            self.palette.failure, failure, self.palette.reset
        )
    }

    /// Print the final summary line, green when everything passed.
    pub fn summary(&mut self, summary: &Summary) -> std::io::Result<()> {
        let color = if summary.is_success() {
            self.palette.success
        } else {
            self.palette.failure
        };
        writeln!(
            self.writer,
            "{}{}{}{}",
            color, self.palette.bold, summary, self.palette.reset
        )?;
        self.writer.flush()
    }

    /// Print the resolved commands without running them.
    pub fn list(&mut self, cases: &[TestCase]) -> std::io::Result<()> {
        for (index, case) in cases.iter().enumerate() {
            writeln!(self.writer, "{}: {}", index, case.display_command())?;
        }
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
