// ============================================================
// STORY DOMAIN LAYER
// ============================================================
// Core types and value objects for user story normalization
// No I/O, no async, no external side effects

mod column_mapping;
mod field_key;
mod parse_report;
mod story_record;

pub use column_mapping::ColumnMapping;
pub use field_key::{FieldKey, FIELD_PATTERNS};
pub use parse_report::ParseReport;
pub use story_record::{Priority, StoryRecord};
