// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative test case types.

use std::time::Duration;

/// How an expected stream value is compared against captured output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expectation {
    /// Trimmed string equality
    Exact(String),
    /// Regular expression that must match from the start of the trimmed output
    Pattern(String),
}

impl Expectation {
    /// Build an expectation from an expected value and the `regex` option.
    ///
    /// Returns `None` for an empty value, which leaves the field unchecked.
    pub fn from_option(expected: Option<&str>, options: TestOptions) -> Option<Self> {
        let expected = expected?.trim();
        if expected.is_empty() {
            return None;
        }
        Some(if options.regex {
            Self::Pattern(expected.to_string())
        } else {
            Self::Exact(expected.to_string())
        })
    }

    /// The expected text as written in the test case.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(text) | Self::Pattern(text) => text,
        }
    }
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-test matching options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestOptions {
    /// Compare stdout/stderr with a regular expression instead of equality
    pub regex: bool,
}

impl TestOptions {
    /// Options with regex matching enabled.
    pub fn regex() -> Self {
        Self { regex: true }
    }
}

/// One command invocation and its expected observable results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    /// Executable followed by its arguments
    pub command: Vec<String>,
    /// Expected process exit code
    pub exit_code: Option<i32>,
    /// Expected standard output
    pub stdout: Option<Expectation>,
    /// Expected standard error
    pub stderr: Option<Expectation>,
    /// Upper bound on the child's run time
    pub timeout: Duration,
}

impl TestCase {
    /// Default per-test timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

    /// Create a test case with no expectations and the default timeout.
    pub fn new<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into_iter().map(Into::into).collect(),
            exit_code: None,
            stdout: None,
            stderr: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Set the expected exit code
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = Some(code);
        self
    }

    /// Set or clear the expected exit code
    pub fn with_expected_exit_code(mut self, code: Option<i32>) -> Self {
        self.exit_code = code;
        self
    }

    /// Set the expected stdout
    pub fn with_stdout(mut self, expectation: Option<Expectation>) -> Self {
        self.stdout = expectation;
        self
    }

    /// Set the expected stderr
    pub fn with_stderr(mut self, expectation: Option<Expectation>) -> Self {
        self.stderr = expectation;
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether any of exit code, stdout or stderr is checked.
    ///
    /// A case with no expectations passes regardless of what the child does.
    pub fn has_expectations(&self) -> bool {
        self.exit_code.is_some() || self.stdout.is_some() || self.stderr.is_some()
    }

    /// The command as a single space-separated line.
    pub fn display_command(&self) -> String {
        self.command.join(" ")
    }
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
