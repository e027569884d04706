// ============================================================
// COLUMN MAPPING
// ============================================================
// Resolved FieldKey -> column index table for one sheet

use super::FieldKey;
use serde::{Deserialize, Serialize};

/// Mapping from each canonical field to the zero-based column index that
/// provides it, built once per sheet by the header mapper and immutable
/// afterwards. A `None` entry means the sheet has no column for that field.
///
/// One explicit slot per field (rather than an open map) so the required
/// subset is checked exhaustively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub identifier: Option<usize>,
    pub description: Option<usize>,
    pub actor_role: Option<usize>,
    pub desired_action: Option<usize>,
    pub benefit: Option<usize>,
    pub acceptance_criteria_id: Option<usize>,
    pub acceptance_criteria: Option<usize>,
    pub requirements: Option<usize>,
    pub precondition: Option<usize>,
    pub trigger: Option<usize>,
    pub outcome: Option<usize>,
    pub notes: Option<usize>,
    pub tags: Option<usize>,
    pub priority: Option<usize>,
}

impl ColumnMapping {
    /// Column index resolved for a field, if any
    pub fn index_of(&self, key: FieldKey) -> Option<usize> {
        match key {
            FieldKey::Identifier => self.identifier,
            FieldKey::Description => self.description,
            FieldKey::ActorRole => self.actor_role,
            FieldKey::DesiredAction => self.desired_action,
            FieldKey::Benefit => self.benefit,
            FieldKey::AcceptanceCriteriaId => self.acceptance_criteria_id,
            FieldKey::AcceptanceCriteria => self.acceptance_criteria,
            FieldKey::Requirements => self.requirements,
            FieldKey::Precondition => self.precondition,
            FieldKey::Trigger => self.trigger,
            FieldKey::Outcome => self.outcome,
            FieldKey::Notes => self.notes,
            FieldKey::Tags => self.tags,
            FieldKey::Priority => self.priority,
        }
    }

    /// Claim a column for a field. Returns false when the field already has
    /// a column (first-match-wins; later columns are ignored).
    pub fn claim(&mut self, key: FieldKey, index: usize) -> bool {
        let slot = match key {
            FieldKey::Identifier => &mut self.identifier,
            FieldKey::Description => &mut self.description,
            FieldKey::ActorRole => &mut self.actor_role,
            FieldKey::DesiredAction => &mut self.desired_action,
            FieldKey::Benefit => &mut self.benefit,
            FieldKey::AcceptanceCriteriaId => &mut self.acceptance_criteria_id,
            FieldKey::AcceptanceCriteria => &mut self.acceptance_criteria,
            FieldKey::Requirements => &mut self.requirements,
            FieldKey::Precondition => &mut self.precondition,
            FieldKey::Trigger => &mut self.trigger,
            FieldKey::Outcome => &mut self.outcome,
            FieldKey::Notes => &mut self.notes,
            FieldKey::Tags => &mut self.tags,
            FieldKey::Priority => &mut self.priority,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(index);
        true
    }

    /// Required fields that remain unmapped, in fixed order
    pub fn missing_required(&self) -> Vec<FieldKey> {
        FieldKey::REQUIRED
            .iter()
            .copied()
            .filter(|key| self.index_of(*key).is_none())
            .collect()
    }

    /// True when every required field has a column
    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mapping_is_incomplete() {
        let mapping = ColumnMapping::default();
        assert!(!mapping.is_complete());
        assert_eq!(mapping.missing_required().len(), 4);
    }

    #[test]
    fn test_claim_is_first_match_wins() {
        let mut mapping = ColumnMapping::default();
        assert!(mapping.claim(FieldKey::Description, 0));
        assert!(!mapping.claim(FieldKey::Description, 3));
        assert_eq!(mapping.index_of(FieldKey::Description), Some(0));
    }

    #[test]
    fn test_complete_with_required_fields() {
        let mut mapping = ColumnMapping::default();
        mapping.claim(FieldKey::Description, 0);
        mapping.claim(FieldKey::Precondition, 1);
        mapping.claim(FieldKey::Trigger, 2);
        mapping.claim(FieldKey::Outcome, 3);
        assert!(mapping.is_complete());
    }
}
