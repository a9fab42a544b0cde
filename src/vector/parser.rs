//! Vector parsing: tokenize, gate and split a raw CVSS vector string.

use super::grammar::is_valid_segment;
use super::metric::Metric;
use crate::error::{CvssError, Result};
use serde::Serialize;

/// Prefix written in front of canonical vector strings.
pub const VECTOR_PREFIX: &str = "CVSS:3.1";

/// One accepted `ABBREVIATION:LETTER` segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricSegment {
    pub abbreviation: String,
    pub letter: char,
}

impl MetricSegment {
    /// Split a segment that already passed the grammar gate.
    ///
    /// Splits once on the first colon and requires exactly one value letter
    /// after it. Anything else is a `MalformedMetric` error.
    pub fn from_accepted(segment: &str) -> Result<Self> {
        let (abbreviation, value) = segment
            .split_once(':')
            .ok_or_else(|| CvssError::malformed_metric(segment))?;

        let mut letters = value.chars();
        match (letters.next(), letters.next()) {
            (Some(letter), None) if !abbreviation.is_empty() => Ok(Self {
                abbreviation: abbreviation.to_string(),
                letter,
            }),
            _ => Err(CvssError::malformed_metric(segment)),
        }
    }

    /// The metric this segment names, if it is in the closed set.
    #[must_use]
    pub fn metric(&self) -> Option<Metric> {
        Metric::from_abbreviation(&self.abbreviation)
    }
}

/// Scope state resolved from the `S` and `MS` markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScopeFlags {
    pub scope_changed: bool,
    pub modified_scope_changed: bool,
}

/// Accepted segments of a vector, in input order.
///
/// Duplicates are kept: scope markers resolve first-wins, coefficient
/// metrics resolve last-write-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidatedMetricMap {
    segments: Vec<MetricSegment>,
}

impl ValidatedMetricMap {
    /// Accepted segments in input order, including unrecognised abbreviations.
    #[must_use]
    pub fn segments(&self) -> &[MetricSegment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Effective letter for a metric.
    ///
    /// That is the first segment naming a scope marker, and the last segment
    /// naming any other metric.
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<char> {
        let abbreviation = metric.abbreviation();
        if metric.is_scope_marker() {
            return first_letter(self, abbreviation);
        }
        self.segments
            .iter()
            .rev()
            .find(|s| s.abbreviation == abbreviation)
            .map(|s| s.letter)
    }

    /// Recognised metrics with their effective letters, in canonical order.
    pub fn recognized(&self) -> impl Iterator<Item = (Metric, char)> + '_ {
        Metric::ALL
            .into_iter()
            .filter_map(move |metric| self.get(metric).map(|letter| (metric, letter)))
    }

    /// Resolve the scope flags; see [`resolve_scope_flags`].
    #[must_use]
    pub fn scope_flags(&self) -> ScopeFlags {
        resolve_scope_flags(self)
    }

    /// Render the recognised metrics as a canonical `CVSS:3.1/...` vector.
    #[must_use]
    pub fn to_vector_string(&self) -> String {
        std::iter::once(VECTOR_PREFIX.to_string())
            .chain(
                self.recognized()
                    .map(|(metric, letter)| format!("{}:{letter}", metric.abbreviation())),
            )
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Resolve `(scope_changed, modified_scope_changed)`.
///
/// Only the first `S` (respectively `MS`) segment is considered; the flag is
/// set iff its letter is `C`. A missing marker means unchanged.
#[must_use]
pub fn resolve_scope_flags(map: &ValidatedMetricMap) -> ScopeFlags {
    ScopeFlags {
        scope_changed: first_letter(map, Metric::Scope.abbreviation()) == Some('C'),
        modified_scope_changed: first_letter(map, Metric::ModifiedScope.abbreviation())
            == Some('C'),
    }
}

fn first_letter(map: &ValidatedMetricMap, abbreviation: &str) -> Option<char> {
    map.segments
        .iter()
        .find(|s| s.abbreviation == abbreviation)
        .map(|s| s.letter)
}

/// Tokenizes CVSS v3.1 vectors into a [`ValidatedMetricMap`].
///
/// Holds no state; one parser can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorParser;

impl VectorParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse a raw vector string.
    ///
    /// Segments failing the grammar gate are dropped, so an empty or
    /// entirely malformed string yields an empty map. The only failure is a
    /// gated segment that cannot be split, which aborts the whole parse.
    pub fn parse(&self, vector: &str) -> Result<ValidatedMetricMap> {
        let mut segments = Vec::new();

        for candidate in vector.split('/') {
            if !is_valid_segment(candidate) {
                tracing::trace!(segment = candidate, "dropping segment outside metric grammar");
                continue;
            }
            segments.push(MetricSegment::from_accepted(candidate)?);
        }

        tracing::trace!(accepted = segments.len(), "parsed vector");
        Ok(ValidatedMetricMap { segments })
    }
}
