// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output comparison for exact and pattern expectations.

use crate::case::Expectation;
use regex::Regex;

/// Compile a pattern so it only matches at the start of the text.
///
/// The match does not need to consume the whole text. The pattern is
/// compiled on its own first so unbalanced groups cannot escape the anchor.
pub fn compile_anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(pattern)?;
    Regex::new(&format!(r"\A(?:{})", pattern))
}

impl Expectation {
    /// Check the received text against this expectation.
    ///
    /// Both sides are trimmed of surrounding whitespace first.
    pub fn matches(&self, received: &str) -> Result<bool, regex::Error> {
        let received = received.trim();
        match self {
            Self::Exact(expected) => Ok(expected.trim() == received),
            Self::Pattern(pattern) => Ok(compile_anchored(pattern.trim())?.is_match(received)),
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
