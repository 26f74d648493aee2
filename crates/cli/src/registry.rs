// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in test registry and suite file loading.

use crate::case::{Expectation, TestCase, TestOptions};
use crate::matcher::compile_anchored;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Build output directory the target executable lives in
pub const BUILD_DIR: &str = "builddir";
/// File name of the target executable
pub const EXECUTABLE_NAME: &str = "jacktrip";
/// Placeholder in suite file commands replaced by the target executable
pub const EXE_PLACEHOLDER: &str = "{exe}";

/// Errors that can occur when loading a suite file
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Failed to read suite file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error in test {index}: {message}")]
    Validation { index: usize, message: String },
}

/// Absolute path of `builddir/jacktrip` under the current directory.
pub fn default_executable() -> PathBuf {
    let relative = Path::new(BUILD_DIR).join(EXECUTABLE_NAME);
    std::env::current_dir()
        .map(|cwd| cwd.join(&relative))
        .unwrap_or(relative)
}

/// The built-in suite run when no suite file is given.
pub fn builtin(exe: &Path) -> Vec<TestCase> {
    let exe = exe.display().to_string();
    vec![
        // version
        TestCase::new([exe.as_str(), "-v"])
            .with_exit_code(0)
            .with_stdout(Expectation::from_option(
                Some(r"^JackTrip VERSION: 1\.2.*"),
                TestOptions::regex(),
            ))
            .with_timeout(Duration::from_secs(1)),
    ]
}

fn default_timeout() -> f64 {
    TestCase::DEFAULT_TIMEOUT.as_secs_f64()
}

/// Suite file contents
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Name for logging
    #[serde(default)]
    pub name: String,

    /// Ordered test list
    #[serde(default)]
    pub tests: Vec<CaseSpec>,
}

/// One test as written in a suite file
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseSpec {
    /// Executable and arguments; `{exe}` is replaced with the target
    pub command: Vec<String>,

    #[serde(default)]
    pub exit_code: Option<i32>,

    #[serde(default)]
    pub stdout: Option<String>,

    #[serde(default)]
    pub stderr: Option<String>,

    /// Timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: f64,

    /// Match stdout/stderr as regular expressions
    #[serde(default)]
    pub regex: bool,
}

impl CaseSpec {
    /// Validate and convert into a runnable test case.
    pub fn into_case(self, index: usize, exe: &Path) -> Result<TestCase, SuiteError> {
        let invalid = |message: String| SuiteError::Validation { index, message };

        if self.command.is_empty() {
            return Err(invalid("command must not be empty".to_string()));
        }
        let timeout = Duration::try_from_secs_f64(self.timeout)
            .ok()
            .filter(|t| !t.is_zero())
            .ok_or_else(|| invalid(format!("timeout must be positive, got {}", self.timeout)))?;

        let options = TestOptions { regex: self.regex };
        let stdout = Expectation::from_option(self.stdout.as_deref(), options);
        let stderr = Expectation::from_option(self.stderr.as_deref(), options);
        for expectation in [&stdout, &stderr].into_iter().flatten() {
            if let Expectation::Pattern(pattern) = expectation {
                compile_anchored(pattern)
                    .map_err(|e| invalid(format!("invalid pattern '{}': {}", pattern, e)))?;
            }
        }

        let exe = exe.display().to_string();
        let command = self
            .command
            .iter()
            .map(|arg| arg.replace(EXE_PLACEHOLDER, &exe));

        Ok(TestCase::new(command)
            .with_expected_exit_code(self.exit_code)
            .with_stdout(stdout)
            .with_stderr(stderr)
            .with_timeout(timeout))
    }
}

impl SuiteConfig {
    /// Parse a suite from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SuiteError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate every test and resolve the executable placeholder.
    pub fn into_cases(self, exe: &Path) -> Result<Vec<TestCase>, SuiteError> {
        self.tests
            .into_iter()
            .enumerate()
            .map(|(index, spec)| spec.into_case(index, exe))
            .collect()
    }
}

/// Load a suite from a TOML or JSON file
pub fn load_suite(path: &Path, exe: &Path) -> Result<Vec<TestCase>, SuiteError> {
    let content = std::fs::read_to_string(path)?;
    let config: SuiteConfig = if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&content)?
    } else {
        SuiteConfig::from_toml(&content)?
    };
    tracing::debug!(suite = %config.name, tests = config.tests.len(), "loaded suite");
    config.into_cases(exe)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
