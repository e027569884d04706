// ============================================================
// CASEFORGE
// ============================================================
// Tolerant user story spreadsheet normalization and structured
// test case generation

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::batch_parser::BatchParser;
pub use application::use_cases::header_mapper::HeaderMapper;
pub use application::use_cases::prompt_builder::PromptBuilder;
pub use application::use_cases::record_validator::{RecordValidation, RecordValidator};
pub use application::use_cases::row_normalizer::{RowNormalizer, RowOutcome};
pub use domain::error::{AppError, Result};
pub use domain::generation::{
    GenerationContext, GenerationResult, GenerationSummary, TestArtifact, TestStep, TestingScope,
};
pub use domain::story::{ColumnMapping, FieldKey, ParseReport, Priority, StoryRecord};
pub use infrastructure::bootstrap::{build_registry, init_tracing};
pub use infrastructure::config::ProviderSettings;
pub use infrastructure::grid::read_grid;
pub use infrastructure::providers::{
    OfflineProvider, ProviderRegistry, RemoteProvider, TestCaseProvider,
};
