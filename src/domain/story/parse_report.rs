// ============================================================
// PARSE REPORT
// ============================================================
// Aggregate result of normalizing one sheet, including partial failures

use super::StoryRecord;
use serde::{Deserialize, Serialize};

/// Full result of parsing one sheet. Records keep row order and are not
/// deduplicated; a row that fails validation contributes exactly one error
/// and zero records; a fully blank row contributes neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseReport {
    /// Whether the sheet parsed with no batch-fatal or row-scoped errors
    pub success: bool,

    /// Normalized records in row order
    pub records: Vec<StoryRecord>,

    /// Errors formatted as `Row <n>: <message>`; batch-fatal failures
    /// produce a single-element list
    pub errors: Vec<String>,

    /// Number of data rows in the sheet (excluding the header)
    pub total_rows: usize,

    /// Number of rows that produced a record; always equals records.len()
    pub valid_rows: usize,
}

impl ParseReport {
    /// Report for a batch-fatal failure (too few rows, unmappable header)
    pub fn fatal(message: String, total_rows: usize) -> Self {
        Self {
            success: false,
            records: Vec::new(),
            errors: vec![message],
            total_rows,
            valid_rows: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_report_shape() {
        let report = ParseReport::fatal("Header row could not be mapped".to_string(), 0);
        assert!(!report.success);
        assert!(report.records.is_empty());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.valid_rows, 0);
    }
}
