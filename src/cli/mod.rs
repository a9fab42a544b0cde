//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.

mod score;

pub use score::{describe_error, exit_code_for, run_score};
