//! Utility functions for report formatting
//!
//! Provides shared formatting helpers used across all report formatters.

use crate::errors::AppResult;
use serde::Serialize;

/// Column warnings are right-aligned against on console output
pub const WARNING_COLUMN: usize = 72;

/// Append `warning` to `line`, dot-padded so warnings line up vertically
///
/// Lines already past the warning column get the warning appended directly.
///
/// # Examples
///
/// ```
/// # use super_staker_checkup::analysis::reports::utils::pad_with_warning;
/// assert_eq!(pad_with_warning("Delegate qX Fee 3", None), "Delegate qX Fee 3");
/// let padded = pad_with_warning("Delegate qX Fee 3", Some("FEE TOO HIGH"));
/// assert_eq!(padded.len(), 72 + "FEE TOO HIGH".len());
/// assert!(padded.ends_with("...FEE TOO HIGH"));
/// ```
pub fn pad_with_warning(line: &str, warning: Option<&str>) -> String {
    match warning {
        Some(warning) => {
            let pad = WARNING_COLUMN.saturating_sub(line.len());
            format!("{}{}{}", line, ".".repeat(pad), warning)
        }
        None => line.to_string(),
    }
}

/// Format a percentage the way it is shown in the run report
///
/// Full precision, always with a fractional part.
///
/// # Examples
///
/// ```
/// # use super_staker_checkup::analysis::reports::utils::format_percent;
/// assert_eq!(format_percent(25.0), "25.0");
/// assert_eq!(format_percent(2.312494825030787), "2.312494825030787");
/// ```
pub fn format_percent(percent: f64) -> String {
    format!("{:?}", percent)
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| crate::errors::AppError::InvalidData(format!("JSON export failed: {}", e)))
}
