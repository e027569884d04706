// ============================================================
// HEADER-TO-FIELD MAPPER
// ============================================================
// Discover which spreadsheet column provides each canonical field

use crate::domain::error::{AppError, Result};
use crate::domain::story::{ColumnMapping, FIELD_PATTERNS};
use serde_json::Value;
use tracing::debug;

/// Fixed diagnostic returned when a header row cannot provide the
/// required Description/Given/When/Then columns
pub const HEADER_REJECTED: &str =
    "Header row is missing required columns: Description, Given, When, Then";

pub struct HeaderMapper;

impl HeaderMapper {
    /// Map one header row to a column mapping, or reject the sheet.
    ///
    /// Each header cell is normalized (trim, lowercase) and tested against
    /// the field patterns in their fixed enumeration order. The first
    /// matching field is assigned to the column unless an earlier column
    /// already claimed it; a column whose first match is already claimed is
    /// ignored outright. Callers depend on this exact policy.
    pub fn map(header_row: &[Value]) -> Result<ColumnMapping> {
        let mut mapping = ColumnMapping::default();

        for (index, cell) in header_row.iter().enumerate() {
            // Non-string header cells never match
            let Some(text) = cell.as_str() else {
                continue;
            };
            let normalized = text.trim().to_lowercase();
            if normalized.is_empty() {
                continue;
            }

            for (key, pattern) in FIELD_PATTERNS.iter() {
                if pattern.is_match(&normalized) {
                    if mapping.claim(*key, index) {
                        debug!(column = index, header = %text, field = %key, "Mapped column");
                    }
                    break;
                }
            }
        }

        let missing = mapping.missing_required();
        if !missing.is_empty() {
            debug!(?missing, "Header row rejected");
            return Err(AppError::ParseError(HEADER_REJECTED.to_string()));
        }

        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::FieldKey;
    use serde_json::json;

    fn headers(names: &[&str]) -> Vec<Value> {
        names.iter().map(|name| json!(name)).collect()
    }

    #[test]
    fn test_maps_canonical_headers() {
        let mapping =
            HeaderMapper::map(&headers(&["ID", "Description", "Given", "When", "Then"])).unwrap();

        assert_eq!(mapping.index_of(FieldKey::Identifier), Some(0));
        assert_eq!(mapping.index_of(FieldKey::Description), Some(1));
        assert_eq!(mapping.index_of(FieldKey::Precondition), Some(2));
        assert_eq!(mapping.index_of(FieldKey::Trigger), Some(3));
        assert_eq!(mapping.index_of(FieldKey::Outcome), Some(4));
    }

    #[test]
    fn test_maps_synonym_headers_in_any_order() {
        let mapping =
            HeaderMapper::map(&headers(&["Result", "Title", "Action", "Precondition"])).unwrap();

        assert_eq!(mapping.index_of(FieldKey::Outcome), Some(0));
        assert_eq!(mapping.index_of(FieldKey::Description), Some(1));
        assert_eq!(mapping.index_of(FieldKey::Trigger), Some(2));
        assert_eq!(mapping.index_of(FieldKey::Precondition), Some(3));
    }

    #[test]
    fn test_case_insensitive_matching() {
        let mapping =
            HeaderMapper::map(&headers(&["DESCRIPTION", "GIVEN", "wHeN", "then "])).unwrap();
        assert!(mapping.is_complete());
    }

    #[test]
    fn test_first_match_wins_per_field() {
        let mapping = HeaderMapper::map(&headers(&[
            "Description",
            "Summary",
            "Given",
            "When",
            "Then",
        ]))
        .unwrap();

        // "Summary" also matches Description but column 0 claimed it first
        assert_eq!(mapping.index_of(FieldKey::Description), Some(0));
    }

    #[test]
    fn test_rejects_missing_required_concept() {
        let result = HeaderMapper::map(&headers(&["Description", "Given", "When"]));
        match result {
            Err(AppError::ParseError(msg)) => assert_eq!(msg, HEADER_REJECTED),
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_header_row() {
        assert!(HeaderMapper::map(&[]).is_err());
    }

    #[test]
    fn test_non_string_header_cells_are_skipped() {
        let row = vec![
            json!(42),
            json!("Description"),
            json!(null),
            json!("Given"),
            json!("When"),
            json!("Then"),
        ];
        let mapping = HeaderMapper::map(&row).unwrap();

        assert_eq!(mapping.index_of(FieldKey::Description), Some(1));
        assert_eq!(mapping.index_of(FieldKey::Precondition), Some(3));
    }

    #[test]
    fn test_optional_fields_mapped_when_present() {
        let mapping = HeaderMapper::map(&headers(&[
            "Story ID",
            "User Story",
            "As a",
            "I want",
            "So that",
            "Acceptance Criteria",
            "Given",
            "When",
            "Then",
            "Notes",
            "Tags",
            "Priority",
        ]))
        .unwrap();

        assert_eq!(mapping.index_of(FieldKey::Identifier), Some(0));
        assert_eq!(mapping.index_of(FieldKey::ActorRole), Some(2));
        assert_eq!(mapping.index_of(FieldKey::DesiredAction), Some(3));
        assert_eq!(mapping.index_of(FieldKey::Benefit), Some(4));
        assert_eq!(mapping.index_of(FieldKey::AcceptanceCriteria), Some(5));
        assert_eq!(mapping.index_of(FieldKey::Notes), Some(9));
        assert_eq!(mapping.index_of(FieldKey::Tags), Some(10));
        assert_eq!(mapping.index_of(FieldKey::Priority), Some(11));
    }

    #[test]
    fn test_acceptance_criteria_id_wins_over_criteria() {
        let mapping = HeaderMapper::map(&headers(&[
            "Acceptance Criteria ID",
            "Acceptance Criteria",
            "Description",
            "Given",
            "When",
            "Then",
        ]))
        .unwrap();

        assert_eq!(mapping.index_of(FieldKey::AcceptanceCriteriaId), Some(0));
        assert_eq!(mapping.index_of(FieldKey::AcceptanceCriteria), Some(1));
    }
}
