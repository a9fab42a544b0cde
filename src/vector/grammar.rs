//! Segment grammar gate.
//!
//! A candidate segment is accepted only when it is, in full, one to three
//! uppercase ASCII letters, a colon, and a single uppercase ASCII letter.

use regex::Regex;
use std::sync::LazyLock;

static SEGMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{1,3}:[A-Z]$").expect("static regex"));

/// Check whether a candidate segment passes the grammar gate.
#[must_use]
pub fn is_valid_segment(candidate: &str) -> bool {
    SEGMENT_PATTERN.is_match(candidate)
}
