//! Report formatting and output generation
//!
//! Provides formatting for checkup results via the [`ReportFormatter`] facade.
//! Supports Console and JSON output formats.

pub mod checkup;
pub mod utils;

use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::processor::CheckupReport;

pub use crate::config::OutputFormat;

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_header(version: &str) -> String {
        checkup::format_header(version)
    }

    pub fn format_configuration(config: &AppConfig, source: &str) -> String {
        checkup::format_configuration(config, source)
    }

    pub fn format_checkup(report: &CheckupReport, f: &OutputFormat) -> AppResult<String> {
        checkup::format_checkup(report, f)
    }
}
