//! Score command handler.
//!
//! Scores one CVSS v3.1 vector and writes the report.

use crate::config::{AppConfig, Validatable};
use crate::error::CvssError;
use crate::pipeline::{exit_codes, output_report, OutputTarget, PipelineError};
use crate::scoring::score_vector;
use anyhow::Result;

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero. Errors map to exit codes through
/// [`exit_code_for`].
pub fn run_score(vector: &str, output: &OutputTarget, config: &AppConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(PipelineError::InvalidConfig {
            errors: errors.iter().map(ToString::to_string).collect(),
        }
        .into());
    }

    let scored = score_vector(vector)?;
    let result = &scored.result;

    if !config.behavior.quiet {
        tracing::info!(
            "Scored {}: base {:.1}, overall {:.1} ({})",
            scored.canonical_vector(),
            result.base_score,
            result.overall_score,
            result.overall_severity()
        );
    }

    output_report(config, &scored, output)
        .map_err(|source| PipelineError::ReportFailed { source })?;

    if config.behavior.exceeds_threshold(result.overall_score) {
        tracing::warn!(
            "Overall score {:.1} is at or above threshold {:.1}",
            result.overall_score,
            config.behavior.fail_above.unwrap_or_default()
        );
        return Ok(exit_codes::THRESHOLD_EXCEEDED);
    }

    Ok(exit_codes::SUCCESS)
}

/// Exit code for an error returned by [`run_score`].
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<CvssError>() {
        Some(cvss) if cvss.parse_kind().is_some() => exit_codes::INVALID_VECTOR,
        _ => exit_codes::ERROR,
    }
}

/// One-line diagnostic naming the error kind and, for vector errors, the
/// offending token.
#[must_use]
pub fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<CvssError>().and_then(CvssError::parse_kind) {
        Some(kind) => format!("error[{}]: {} ({kind})", kind.name(), kind.offending_token()),
        None => format!("error: {err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CRITICAL: &str = "AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H";

    fn quiet_config() -> AppConfig {
        AppConfig::builder().quiet(true).build()
    }

    #[test]
    fn test_run_score_success() {
        let tmp = TempDir::new().unwrap();
        let target = OutputTarget::File(tmp.path().join("out.json"));
        let code = run_score(CRITICAL, &target, &quiet_config()).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn test_run_score_threshold_exceeded() {
        let tmp = TempDir::new().unwrap();
        let target = OutputTarget::File(tmp.path().join("out.txt"));
        let config = AppConfig::builder().quiet(true).fail_above(9.0).build();
        assert_eq!(
            run_score(CRITICAL, &target, &config).unwrap(),
            exit_codes::THRESHOLD_EXCEEDED
        );

        let config = AppConfig::builder().quiet(true).fail_above(9.9).build();
        assert_eq!(
            run_score(CRITICAL, &target, &config).unwrap(),
            exit_codes::SUCCESS
        );
    }

    #[test]
    fn test_run_score_invalid_vector() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");
        let err = run_score("AV:N/AC:Q", &OutputTarget::File(path.clone()), &quiet_config())
            .unwrap_err();

        assert_eq!(exit_code_for(&err), exit_codes::INVALID_VECTOR);
        assert!(describe_error(&err).starts_with("error[UnknownMetricValue]: AC:Q"));
        assert!(!path.exists(), "no report for an unparseable vector");
    }

    #[test]
    fn test_run_score_invalid_config() {
        let config = AppConfig::builder().fail_above(11.0).build();
        let err = run_score(CRITICAL, &OutputTarget::Stdout, &config).unwrap_err();
        assert_eq!(exit_code_for(&err), exit_codes::ERROR);
        assert!(describe_error(&err).contains("behavior.fail_above"));
    }
}
