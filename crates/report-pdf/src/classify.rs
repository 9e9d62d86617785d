//! Heuristic classification of body lines
//!
//! The rules are deliberately simple string tests and will misfire on some
//! inputs: short all-caps acronyms are never headings, any 11+ character line
//! without lower-case letters is one (including lines of digits or
//! punctuation), and scripts without case distinction always satisfy the
//! upper-case test. The heading test counts the line as written, leading
//! and trailing whitespace included.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref NUMBERED: Regex = Regex::new(r"^\d+\.").unwrap();
}

/// Minimum length (exclusive) of an all-caps line to count as a heading
pub const HEADING_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Heading,
    Subheading,
    Body,
}

/// Classify one body line; `None` for blank lines, which render as a half-line gap
///
/// Heading takes priority over the numbered-line rule, so `"1. EXECUTIVE SUMMARY"`
/// is a heading.
pub fn classify_line(line: &str) -> Option<LineKind> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if is_heading(line) {
        Some(LineKind::Heading)
    } else if NUMBERED.is_match(trimmed) {
        Some(LineKind::Subheading)
    } else {
        Some(LineKind::Body)
    }
}

fn is_heading(line: &str) -> bool {
    line.chars().count() > HEADING_MIN_CHARS && line == line.to_uppercase()
}
