// ============================================================
// RECORD VALIDATOR
// ============================================================
// Standalone completeness check for a single normalized record

use crate::domain::story::StoryRecord;
use serde::{Deserialize, Serialize};

/// Validation verdict for one record. `valid` reflects only the hard
/// completeness checks; stylistic findings are appended to `errors`
/// without affecting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

pub struct RecordValidator;

impl RecordValidator {
    pub fn validate(record: &StoryRecord) -> RecordValidation {
        let mut errors = Vec::new();

        let required = [
            ("Description", record.description.trim()),
            ("Given precondition", record.precondition.trim()),
            ("When action", record.trigger.trim()),
            ("Then outcome", record.outcome.trim()),
        ];
        for (name, value) in required {
            if value.is_empty() {
                errors.push(format!("{} is required", name));
            }
        }
        let valid = errors.is_empty();

        // Advisory style findings: Gherkin clauses conventionally carry
        // their keyword prefix, but a missing prefix is not a hard failure
        let stylistic = [
            ("Given precondition", record.precondition.trim(), "given"),
            ("When action", record.trigger.trim(), "when"),
            ("Then outcome", record.outcome.trim(), "then"),
        ];
        for (name, value, keyword) in stylistic {
            if !value.is_empty() && !value.to_lowercase().starts_with(keyword) {
                errors.push(format!(
                    "{} should start with '{}'",
                    name,
                    capitalize(keyword)
                ));
            }
        }

        RecordValidation { valid, errors }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
