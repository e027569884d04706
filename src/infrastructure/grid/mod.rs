// ============================================================
// GRID READERS
// ============================================================
// Load spreadsheet files into the raw cell grid the batch parser
// consumes. The header row stays in the grid; no interpretation
// happens here.

mod csv_reader;
mod xlsx_reader;

pub use csv_reader::CsvGridReader;
pub use xlsx_reader::XlsxGridReader;

use crate::domain::error::{AppError, Result};
use serde_json::Value;
use std::path::Path;

/// Raw sheet content: rows of untyped cells, header row first
pub type Grid = Vec<Vec<Value>>;

/// Load a grid from a file, picking the reader by extension
pub fn read_grid(path: &Path) -> Result<Grid> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" | "tsv" | "txt" => CsvGridReader::auto_detect().read_file(path),
        "xlsx" | "xls" | "ods" => XlsxGridReader::read_file(path),
        other => Err(AppError::ValidationError(format!(
            "Unsupported file extension '{}'",
            other
        ))),
    }
}
