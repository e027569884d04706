// ============================================================
// BATCH PARSER
// ============================================================
// Drive header mapping and row normalization over a whole sheet

use crate::application::use_cases::header_mapper::HeaderMapper;
use crate::application::use_cases::row_normalizer::{RowNormalizer, RowOutcome};
use crate::domain::story::ParseReport;
use serde_json::Value;
use tracing::{debug, warn};

pub struct BatchParser;

impl BatchParser {
    /// Parse a raw grid (header row first) into a report. Row-scoped
    /// failures are collected, never raised; only a missing header or an
    /// unmappable one makes the whole batch fail, and even then the
    /// failure is reported, not returned as an error.
    pub fn parse(grid: &[Vec<Value>]) -> ParseReport {
        if grid.len() < 2 {
            warn!(rows = grid.len(), "Sheet too small to parse");
            return ParseReport::fatal(
                "Sheet must contain a header row and at least one data row".to_string(),
                grid.len().saturating_sub(1),
            );
        }

        let data_rows = &grid[1..];
        let mapping = match HeaderMapper::map(&grid[0]) {
            Ok(mapping) => mapping,
            Err(err) => {
                warn!(%err, "Header row rejected");
                return ParseReport::fatal(err.to_string(), data_rows.len());
            }
        };

        let mut records = Vec::new();
        let mut errors = Vec::new();
        for (index, row) in data_rows.iter().enumerate() {
            // Sheet row number: header is row 1, first data row is row 2
            let row_number = index + 2;
            match RowNormalizer::normalize(row, &mapping, row_number) {
                RowOutcome::Record(record) => records.push(*record),
                RowOutcome::Skip => {}
                RowOutcome::Error(message) => {
                    errors.push(format!("Row {}: {}", row_number, message));
                }
            }
        }

        debug!(
            total = data_rows.len(),
            valid = records.len(),
            failed = errors.len(),
            "Parsed sheet"
        );

        let valid_rows = records.len();
        ParseReport {
            success: errors.is_empty(),
            records,
            errors,
            total_rows: data_rows.len(),
            valid_rows,
        }
    }
}
