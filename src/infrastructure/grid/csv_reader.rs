// ============================================================
// CSV GRID READER
// ============================================================
// Read delimited text into a raw grid with delimiter detection

use super::Grid;
use crate::domain::error::{AppError, Result};
use csv::{ReaderBuilder, Trim};
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub struct CsvGridReader {
    delimiter: Option<u8>,
}

impl CsvGridReader {
    /// Reader with a fixed delimiter
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter: Some(delimiter),
        }
    }

    /// Reader that detects the delimiter from the content
    pub fn auto_detect() -> Self {
        Self { delimiter: None }
    }

    pub fn read_file(&self, path: &Path) -> Result<Grid> {
        let content = Self::read_lossy(path)?;
        self.read_content(&content)
    }

    /// Parse delimited content into a grid. Every row is kept, including
    /// the header; ragged rows are allowed.
    pub fn read_content(&self, content: &str) -> Result<Grid> {
        let delimiter = self
            .delimiter
            .unwrap_or_else(|| Self::detect_delimiter(content));

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true)
            .has_headers(false)
            .from_reader(content.as_bytes());

        let mut grid = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            let row: Vec<Value> = record
                .iter()
                .map(|cell| Value::String(cell.to_string()))
                .collect();
            grid.push(row);
        }

        Ok(grid)
    }

    /// Read a file tolerating non-UTF-8 bytes; invalid sequences are
    /// replaced rather than failing the whole import
    fn read_lossy(path: &Path) -> Result<String> {
        let mut file = File::open(path)
            .map_err(|e| AppError::IoError(format!("Failed to open file: {}", e)))?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .map_err(|e| AppError::IoError(format!("Failed to read file: {}", e)))?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }

    /// Pick the most plausible delimiter (comma, semicolon, tab, pipe) by
    /// scoring count consistency across the first sample lines
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];
        let sample_lines: Vec<_> = content.lines().take(10).collect();

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            if sample_lines.is_empty() {
                continue;
            }

            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());
            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}
