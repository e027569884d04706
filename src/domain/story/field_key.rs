// ============================================================
// FIELD KEY REGISTRY
// ============================================================
// Canonical semantic fields a spreadsheet column can map to,
// plus the recognition patterns used against header text

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One canonical semantic slot a spreadsheet column may be mapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Identifier,
    Description,
    ActorRole,
    DesiredAction,
    Benefit,
    AcceptanceCriteriaId,
    AcceptanceCriteria,
    Requirements,
    Precondition,
    Trigger,
    Outcome,
    Notes,
    Tags,
    Priority,
}

impl FieldKey {
    /// All field keys in their fixed enumeration order.
    /// This order is the pattern match order: AcceptanceCriteriaId must
    /// precede AcceptanceCriteria so "acceptance criteria id" headers
    /// claim the id column.
    pub const ALL: [FieldKey; 14] = [
        FieldKey::Identifier,
        FieldKey::Description,
        FieldKey::ActorRole,
        FieldKey::DesiredAction,
        FieldKey::Benefit,
        FieldKey::AcceptanceCriteriaId,
        FieldKey::AcceptanceCriteria,
        FieldKey::Requirements,
        FieldKey::Precondition,
        FieldKey::Trigger,
        FieldKey::Outcome,
        FieldKey::Notes,
        FieldKey::Tags,
        FieldKey::Priority,
    ];

    /// Fields a sheet must provide for the mapping to be usable
    pub const REQUIRED: [FieldKey; 4] = [
        FieldKey::Description,
        FieldKey::Precondition,
        FieldKey::Trigger,
        FieldKey::Outcome,
    ];

    /// Human-readable name used in row error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldKey::Identifier => "Identifier",
            FieldKey::Description => "Description",
            FieldKey::ActorRole => "Actor role",
            FieldKey::DesiredAction => "Desired action",
            FieldKey::Benefit => "Benefit",
            FieldKey::AcceptanceCriteriaId => "Acceptance criteria ID",
            FieldKey::AcceptanceCriteria => "Acceptance criteria",
            FieldKey::Requirements => "Requirements",
            FieldKey::Precondition => "Given precondition",
            FieldKey::Trigger => "When action",
            FieldKey::Outcome => "Then outcome",
            FieldKey::Notes => "Notes",
            FieldKey::Tags => "Tags",
            FieldKey::Priority => "Priority",
        }
    }

    /// Recognition pattern tested against a trimmed, lowercased header cell.
    /// Patterns are searched (not anchored) so decorated headers like
    /// "User Story (description)" still match.
    pub fn pattern(&self) -> &'static Regex {
        &FIELD_PATTERNS[self.ordinal()].1
    }

    fn ordinal(&self) -> usize {
        Self::ALL.iter().position(|key| key == self).unwrap_or(0)
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ordered (FieldKey, pattern) pairs; iteration order is match precedence
pub static FIELD_PATTERNS: Lazy<Vec<(FieldKey, Regex)>> = Lazy::new(|| {
    let sources: [(FieldKey, &str); 14] = [
        (
            FieldKey::Identifier,
            r"^(id|#|no\.?)$|story\s*id|user\s*story\s*id|us\s*id|identifier",
        ),
        (
            FieldKey::Description,
            r"description|user\s*story|story|title|summary|feature",
        ),
        (
            FieldKey::ActorRole,
            r"as\s*an?\b|actor|role|persona|user\s*type",
        ),
        (
            FieldKey::DesiredAction,
            r"i\s*want|desired\s*action|want\s*to|capability",
        ),
        (FieldKey::Benefit, r"so\s*that|benefit|value|why"),
        (
            FieldKey::AcceptanceCriteriaId,
            r"(acceptance\s*criteria|criteria|ac)\s*(id|#|no\.?)",
        ),
        (
            FieldKey::AcceptanceCriteria,
            r"acceptance\s*criteria|criteria|acceptance",
        ),
        (FieldKey::Requirements, r"requirements?|business\s*rules?"),
        (
            FieldKey::Precondition,
            r"given|pre-?conditions?|pre-?requisites?|initial\s*state|context|setup",
        ),
        (FieldKey::Trigger, r"when|actions?|triggers?|events?|steps?"),
        (
            FieldKey::Outcome,
            r"then|results?|outcomes?|expected|post-?conditions?",
        ),
        (FieldKey::Notes, r"notes?|comments?|remarks?"),
        (FieldKey::Tags, r"tags?|labels?|categor(y|ies)"),
        (FieldKey::Priority, r"priority|severity|importance"),
    ];

    sources
        .into_iter()
        .map(|(key, source)| {
            let regex = Regex::new(source).expect("invalid field pattern");
            (key, regex)
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_order_matches_enumeration_order() {
        for (index, key) in FieldKey::ALL.iter().enumerate() {
            assert_eq!(FIELD_PATTERNS[index].0, *key);
        }
    }

    #[test]
    fn test_required_fields_have_patterns() {
        for key in FieldKey::REQUIRED {
            assert!(!key.pattern().as_str().is_empty());
        }
    }

    #[test]
    fn test_common_synonyms() {
        assert!(FieldKey::Description.pattern().is_match("title"));
        assert!(FieldKey::Description.pattern().is_match("user story"));
        assert!(FieldKey::Precondition.pattern().is_match("given"));
        assert!(FieldKey::Precondition.pattern().is_match("precondition"));
        assert!(FieldKey::Trigger.pattern().is_match("when"));
        assert!(FieldKey::Trigger.pattern().is_match("action"));
        assert!(FieldKey::Outcome.pattern().is_match("then"));
        assert!(FieldKey::Outcome.pattern().is_match("result"));
        assert!(FieldKey::Identifier.pattern().is_match("story id"));
        assert!(FieldKey::AcceptanceCriteriaId
            .pattern()
            .is_match("acceptance criteria id"));
    }

    #[test]
    fn test_desired_action_does_not_claim_bare_action() {
        // Bare "action" must stay available for the When/Trigger field
        assert!(!FieldKey::DesiredAction.pattern().is_match("action"));
        assert!(FieldKey::DesiredAction.pattern().is_match("i want"));
    }
}
