// ============================================================
// XLSX GRID READER
// ============================================================

use super::Grid;
use crate::domain::error::{AppError, Result};
use calamine::{open_workbook_auto, Data, DataType, Reader};
use serde_json::Value;
use std::path::Path;

pub struct XlsxGridReader;

impl XlsxGridReader {
    /// Read the first worksheet of a workbook into a raw grid
    pub fn read_file(path: &Path) -> Result<Grid> {
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| AppError::IoError(format!("Failed to open workbook: {}", e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::ParseError("Workbook contains no worksheet".to_string()))?
            .map_err(|e| AppError::ParseError(format!("Failed to read worksheet: {}", e)))?;

        let mut grid = Vec::new();
        for row in range.rows() {
            let cells: Vec<Value> = row.iter().map(Self::cell_to_value).collect();
            grid.push(cells);
        }

        Ok(grid)
    }

    /// Preserve cell types where the grid consumer can use them; anything
    /// without a faithful JSON mapping is stringified
    fn cell_to_value(cell: &Data) -> Value {
        match cell {
            Data::Empty => Value::String(String::new()),
            Data::String(text) => Value::String(text.clone()),
            Data::Bool(flag) => Value::Bool(*flag),
            Data::Int(number) => Value::from(*number),
            Data::Float(number) => serde_json::Number::from_f64(*number)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(number.to_string())),
            other => Value::String(
                other
                    .as_string()
                    .unwrap_or_else(|| format!("{}", other)),
            ),
        }
    }
}
