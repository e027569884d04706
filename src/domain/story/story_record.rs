// ============================================================
// STORY RECORD TYPES
// ============================================================
// The canonical normalized user story unit

use serde::{Deserialize, Serialize};

/// Story priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    /// Parse a priority label, tolerant of case and surrounding whitespace
    pub fn parse(value: &str) -> Option<Priority> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One normalized Given/When/Then user story. Constructed once by the row
/// normalizer from a raw row plus the batch's column mapping; immutable
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRecord {
    /// Story identifier; synthesized as `US-<row number>` when the sheet
    /// has no identifier cell
    pub id: String,

    /// Short description or title of the story
    pub description: String,

    /// The acting role ("As a ...")
    pub actor_role: String,

    /// The action the actor wants ("I want ...")
    pub desired_action: String,

    /// The value gained ("so that ...")
    pub benefit: String,

    /// Acceptance criteria prose
    pub acceptance_criteria: String,

    /// Related business requirements
    pub requirements: String,

    /// Gherkin Given clause
    pub precondition: String,

    /// Gherkin When clause
    pub trigger: String,

    /// Gherkin Then clause
    pub outcome: String,

    /// Free-form notes
    pub notes: String,

    /// External acceptance criteria reference
    pub acceptance_criteria_id: String,

    pub tags: Vec<String>,

    pub priority: Priority,
}
