//! CVSS v3.1 vector parsing.
//!
//! A vector is a `/`-separated list of `ABBREVIATION:LETTER` segments such as
//! `AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H`. Parsing is deliberately lenient:
//!
//! - segments that do not match `[A-Z]{1,3}:[A-Z]` are dropped, which also
//!   drops a leading `CVSS:3.1` version label;
//! - abbreviations outside the closed [`Metric`] set are kept in the map but
//!   ignored when coefficients are resolved.
//!
//! Letter validation happens later, when the map is folded into a
//! [`ScoreInput`](crate::scoring::ScoreInput).
//!
//! ```
//! use cvss_scorer::vector::{Metric, VectorParser};
//!
//! let map = VectorParser::new().parse("CVSS:3.1/AV:N/AC:L/S:C/bogus")?;
//! assert_eq!(map.get(Metric::AttackVector), Some('N'));
//! assert!(map.scope_flags().scope_changed);
//! # Ok::<(), cvss_scorer::CvssError>(())
//! ```

mod grammar;
mod metric;
mod parser;

pub use grammar::is_valid_segment;
pub use metric::{Metric, MetricGroup};
pub use parser::{
    resolve_scope_flags, MetricSegment, ScopeFlags, ValidatedMetricMap, VectorParser,
    VECTOR_PREFIX,
};
