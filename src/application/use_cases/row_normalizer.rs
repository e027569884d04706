// ============================================================
// ROW NORMALIZER
// ============================================================
// Convert one raw spreadsheet row into a validated story record

use crate::domain::story::{ColumnMapping, FieldKey, Priority, StoryRecord};
use serde_json::Value;

/// Outcome of normalizing a single data row
#[derive(Debug)]
pub enum RowOutcome {
    /// Row produced a valid record
    Record(Box<StoryRecord>),
    /// All required cells were blank; the row is silently ignored
    Skip,
    /// Row failed validation; the message names the first missing field
    Error(String),
}

pub struct RowNormalizer;

impl RowNormalizer {
    /// Normalize one data row. `row_number` is the 1-based sheet row
    /// including the header (data row 0 is sheet row 2); it feeds both
    /// identifier synthesis and error reporting.
    pub fn normalize(row: &[Value], mapping: &ColumnMapping, row_number: usize) -> RowOutcome {
        let description = Self::extract(row, mapping.index_of(FieldKey::Description));
        let precondition = Self::extract(row, mapping.index_of(FieldKey::Precondition));
        let trigger = Self::extract(row, mapping.index_of(FieldKey::Trigger));
        let outcome = Self::extract(row, mapping.index_of(FieldKey::Outcome));

        // Trailing blank rows are routine in spreadsheets; tolerate them
        if description.is_empty()
            && precondition.is_empty()
            && trigger.is_empty()
            && outcome.is_empty()
        {
            return RowOutcome::Skip;
        }

        let required = [
            (FieldKey::Description, &description),
            (FieldKey::Precondition, &precondition),
            (FieldKey::Trigger, &trigger),
            (FieldKey::Outcome, &outcome),
        ];
        for (key, value) in required {
            if value.is_empty() {
                return RowOutcome::Error(format!("{} is required", key.display_name()));
            }
        }

        let identifier = Self::extract(row, mapping.index_of(FieldKey::Identifier));
        let actor_role = Self::extract(row, mapping.index_of(FieldKey::ActorRole));
        let desired_action = Self::extract(row, mapping.index_of(FieldKey::DesiredAction));
        let benefit = Self::extract(row, mapping.index_of(FieldKey::Benefit));

        let record = StoryRecord {
            id: if identifier.is_empty() {
                format!("US-{:03}", row_number)
            } else {
                identifier
            },
            actor_role: if actor_role.is_empty() {
                "User".to_string()
            } else {
                actor_role
            },
            desired_action: if desired_action.is_empty() {
                description.clone()
            } else {
                desired_action
            },
            benefit: if benefit.is_empty() {
                "I can achieve my goal".to_string()
            } else {
                benefit
            },
            description,
            acceptance_criteria: Self::extract(row, mapping.index_of(FieldKey::AcceptanceCriteria)),
            requirements: Self::extract(row, mapping.index_of(FieldKey::Requirements)),
            precondition,
            trigger,
            outcome,
            notes: Self::extract(row, mapping.index_of(FieldKey::Notes)),
            acceptance_criteria_id: Self::extract(
                row,
                mapping.index_of(FieldKey::AcceptanceCriteriaId),
            ),
            // The batch path does not read Tags/Priority cells; both keep
            // their defaults even when the columns were mapped
            tags: Vec::new(),
            priority: Priority::default(),
        };

        RowOutcome::Record(Box::new(record))
    }

    /// Extract and trim a cell. An absent or out-of-range column yields an
    /// empty string; non-string scalars are stringified.
    fn extract(row: &[Value], index: Option<usize>) -> String {
        let Some(index) = index else {
            return String::new();
        };
        match row.get(index) {
            Some(Value::String(text)) => text.trim().to_string(),
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::Bool(flag)) => flag.to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::header_mapper::HeaderMapper;
    use serde_json::json;

    fn mapping() -> ColumnMapping {
        let headers = vec![
            json!("ID"),
            json!("Description"),
            json!("Given"),
            json!("When"),
            json!("Then"),
            json!("As a"),
            json!("So that"),
        ];
        HeaderMapper::map(&headers).unwrap()
    }

    fn row(cells: &[&str]) -> Vec<Value> {
        cells.iter().map(|cell| json!(cell)).collect()
    }

    #[test]
    fn test_normalizes_full_row() {
        let cells = row(&[
            "US-1",
            "Login works",
            "Given I am on the login page",
            "When I submit valid credentials",
            "Then I see the dashboard",
            "Registered user",
            "I can access my account",
        ]);
        let outcome = RowNormalizer::normalize(&cells, &mapping(), 2);

        let RowOutcome::Record(record) = outcome else {
            panic!("expected record");
        };
        assert_eq!(record.id, "US-1");
        assert_eq!(record.actor_role, "Registered user");
        assert_eq!(record.benefit, "I can access my account");
        assert_eq!(record.desired_action, "Login works");
    }

    #[test]
    fn test_synthesizes_identifier_from_row_number() {
        let cells = row(&["", "Login works", "Given A", "When B", "Then C"]);
        let outcome = RowNormalizer::normalize(&cells, &mapping(), 2);

        let RowOutcome::Record(record) = outcome else {
            panic!("expected record");
        };
        assert_eq!(record.id, "US-002");
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let cells = row(&["", "Login works", "Given A", "When B", "Then C"]);
        let RowOutcome::Record(record) = RowNormalizer::normalize(&cells, &mapping(), 2) else {
            panic!("expected record");
        };

        assert_eq!(record.actor_role, "User");
        assert_eq!(record.benefit, "I can achieve my goal");
        assert_eq!(record.desired_action, record.description);
        assert!(record.tags.is_empty());
        assert_eq!(record.priority, Priority::Medium);
        assert_eq!(record.notes, "");
    }

    #[test]
    fn test_blank_row_is_skipped() {
        let cells = row(&["", "", "  ", "", ""]);
        assert!(matches!(
            RowNormalizer::normalize(&cells, &mapping(), 5),
            RowOutcome::Skip
        ));
    }

    #[test]
    fn test_first_missing_field_reported_in_fixed_order() {
        let cells = row(&["", "", "Given A", "", "Then C"]);
        let RowOutcome::Error(message) = RowNormalizer::normalize(&cells, &mapping(), 2) else {
            panic!("expected error");
        };
        // Description is checked before the When action
        assert_eq!(message, "Description is required");
    }

    #[test]
    fn test_missing_when_cell() {
        let cells = row(&["", "X", "Given A", "", "Then C"]);
        let RowOutcome::Error(message) = RowNormalizer::normalize(&cells, &mapping(), 2) else {
            panic!("expected error");
        };
        assert_eq!(message, "When action is required");
    }

    #[test]
    fn test_short_row_extracts_empty_for_out_of_range() {
        let cells = row(&["US-9", "X", "Given A", "When B", "Then C"]);
        // Actor/benefit columns 5 and 6 are out of range for this row
        let RowOutcome::Record(record) = RowNormalizer::normalize(&cells, &mapping(), 3) else {
            panic!("expected record");
        };
        assert_eq!(record.actor_role, "User");
    }

    #[test]
    fn test_numeric_cells_are_stringified() {
        let cells = vec![
            json!(101),
            json!("X"),
            json!("Given A"),
            json!("When B"),
            json!("Then C"),
        ];
        let RowOutcome::Record(record) = RowNormalizer::normalize(&cells, &mapping(), 2) else {
            panic!("expected record");
        };
        assert_eq!(record.id, "101");
    }
}
