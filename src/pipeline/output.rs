//! Output handling for score reports.
//!
//! Provides utilities for auto-detecting output format and writing reports.

use crate::error::CvssError;
use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Target for output - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Self::from_path(p),
            None => OutputTarget::Stdout,
        }
    }

    /// Create output target from a path, where `-` means stdout
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str() == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(path)
        }
    }

    /// Check if output is to a terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, OutputTarget::Stdout) && std::io::stdout().is_terminal()
    }

    /// The file path, if writing to a file
    pub fn path(&self) -> Option<&Path> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::File(path) => Some(path),
        }
    }
}

/// Auto-detect the output format from the output target.
///
/// File targets resolve by extension (`.json`, `.csv`, `.md`/`.markdown`);
/// anything else, including stdout, becomes Summary.
pub fn auto_detect_format(format: ReportFormat, target: &OutputTarget) -> ReportFormat {
    match format {
        ReportFormat::Auto => target
            .path()
            .and_then(format_for_extension)
            .unwrap_or(ReportFormat::Summary),
        other => other,
    }
}

fn format_for_extension(path: &Path) -> Option<ReportFormat> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "json" => Some(ReportFormat::Json),
        "csv" => Some(ReportFormat::Csv),
        "md" | "markdown" => Some(ReportFormat::Markdown),
        _ => None,
    }
}

/// Determine if color should be used based on flags, environment and target
pub fn should_use_color(no_color_flag: bool, target: &OutputTarget) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err() && target.is_terminal()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .map_err(|e| CvssError::io(parent, e))
                    .context("creating report directory")?;
            }
            std::fs::write(path, content)
                .map_err(|e| CvssError::io(path, e))
                .context("writing report")?;
            if !quiet {
                tracing::info!("Report written to {:?}", path);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_option_none() {
        let target = OutputTarget::from_option(None);
        assert!(matches!(target, OutputTarget::Stdout));
    }

    #[test]
    fn test_output_target_dash_is_stdout() {
        assert_eq!(OutputTarget::from_path("-"), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_option(Some(PathBuf::from("-"))),
            OutputTarget::Stdout
        );
    }

    #[test]
    fn test_output_target_from_option_some() {
        let path = PathBuf::from("/tmp/test.json");
        let target = OutputTarget::from_option(Some(path.clone()));
        match target {
            OutputTarget::File(p) => assert_eq!(p, path),
            _ => panic!("Expected File variant"),
        }
    }

    #[test]
    fn test_auto_detect_format_non_auto() {
        let target = OutputTarget::File(PathBuf::from("report.json"));
        assert_eq!(
            auto_detect_format(ReportFormat::Csv, &target),
            ReportFormat::Csv
        );
    }

    #[test]
    fn test_auto_detect_format_by_extension() {
        let cases = [
            ("out.json", ReportFormat::Json),
            ("out.CSV", ReportFormat::Csv),
            ("out.md", ReportFormat::Markdown),
            ("out.markdown", ReportFormat::Markdown),
            ("out.pdf", ReportFormat::Summary),
            ("out", ReportFormat::Summary),
        ];
        for (path, expected) in cases {
            let target = OutputTarget::from_path(path);
            assert_eq!(auto_detect_format(ReportFormat::Auto, &target), expected, "{path}");
        }
        assert_eq!(
            auto_detect_format(ReportFormat::Auto, &OutputTarget::Stdout),
            ReportFormat::Summary
        );
    }

    #[test]
    fn test_should_use_color_with_flag() {
        assert!(!should_use_color(true, &OutputTarget::Stdout));
    }

    #[test]
    fn test_file_target_is_never_colored() {
        let target = OutputTarget::from_path("report.txt");
        assert!(!should_use_color(false, &target));
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("report.txt");
        write_output("hello", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }
}
