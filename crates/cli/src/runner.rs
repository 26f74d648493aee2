// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Execute a single test case as a child process and compare its results.

use crate::case::{Expectation, TestCase};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

/// Which observable result of the child a failure refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    ExitCode,
    Stdout,
    Stderr,
    /// The child could not be run to completion
    Execution,
}

/// A mismatch between expected and received results for one test case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestFailure {
    pub command: String,
    pub field: Field,
    pub expected: String,
    pub received: String,
}

impl std::fmt::Display for TestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "* failed: {}\n- expected: {}\n- received: {}",
            self.command, self.expected, self.received
        )
    }
}

impl std::error::Error for TestFailure {}

/// Errors that prevent a test case from producing a result.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Test command is empty")]
    EmptyCommand,

    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Child I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl RunError {
    /// What the test expected to happen, for failure reporting.
    fn expected(&self) -> String {
        match self {
            Self::EmptyCommand => "a non-empty command".to_string(),
            Self::Spawn { .. } | Self::Io(_) => "command to run".to_string(),
            Self::Timeout(limit) => format!("exit within {}", format_duration(*limit)),
            Self::Pattern(_) => "a valid regular expression".to_string(),
        }
    }
}

/// Captured, trimmed results of one child process run.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run a test case and check its expectations.
///
/// Execution problems (spawn failure, timeout, bad pattern) are reported as
/// a failure of the [`Field::Execution`] field so the suite keeps running.
pub async fn run_case(case: &TestCase) -> Result<(), TestFailure> {
    let outcome = match execute(case).await {
        Ok(outcome) => outcome,
        Err(e) => return Err(execution_failure(case, &e)),
    };
    check(case, &outcome)
}

/// Spawn the command and wait for it to exit, up to the case's timeout.
pub async fn execute(case: &TestCase) -> Result<Outcome, RunError> {
    let (program, args) = case.command.split_first().ok_or(RunError::EmptyCommand)?;

    debug!(command = %case.display_command(), timeout = ?case.timeout, "spawning");
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| RunError::Spawn {
            program: program.clone(),
            source,
        })?;

    // Dropping the child on timeout kills it.
    let output = match tokio::time::timeout(case.timeout, child.wait_with_output()).await {
        Ok(result) => result?,
        Err(_) => {
            warn!(command = %case.display_command(), "timed out after {:?}", case.timeout);
            return Err(RunError::Timeout(case.timeout));
        }
    };

    Ok(Outcome {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

/// Compare an outcome against the case's expectations.
///
/// Fields are checked in order exit code, stdout, stderr; the first
/// mismatch is returned.
pub fn check(case: &TestCase, outcome: &Outcome) -> Result<(), TestFailure> {
    if let Some(expected) = case.exit_code {
        if outcome.status.code() != Some(expected) {
            return Err(TestFailure {
                command: case.display_command(),
                field: Field::ExitCode,
                expected: expected.to_string(),
                received: describe_status(&outcome.status),
            });
        }
    }

    check_stream(case, Field::Stdout, case.stdout.as_ref(), &outcome.stdout)?;
    check_stream(case, Field::Stderr, case.stderr.as_ref(), &outcome.stderr)?;

    debug!(command = %case.display_command(), "passed");
    Ok(())
}

fn check_stream(
    case: &TestCase,
    field: Field,
    expectation: Option<&Expectation>,
    received: &str,
) -> Result<(), TestFailure> {
    let Some(expectation) = expectation else {
        return Ok(());
    };
    match expectation.matches(received) {
        Ok(true) => Ok(()),
        Ok(false) => Err(TestFailure {
            command: case.display_command(),
            field,
            expected: expectation.to_string(),
            received: received.trim().to_string(),
        }),
        Err(e) => Err(execution_failure(case, &RunError::Pattern(e))),
    }
}

fn execution_failure(case: &TestCase, error: &RunError) -> TestFailure {
    TestFailure {
        command: case.display_command(),
        field: Field::Execution,
        expected: error.expected(),
        received: error.to_string(),
    }
}

/// Render an exit status for failure output.
fn describe_status(status: &ExitStatus) -> String {
    if let Some(code) = status.code() {
        return code.to_string();
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return format!("signal {}", signal);
        }
    }
    "none".to_string()
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs.fract() == 0.0 {
        format!("{}s", duration.as_secs())
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
