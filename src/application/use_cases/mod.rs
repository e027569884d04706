// ============================================================
// USE CASES
// ============================================================

pub mod batch_parser;
pub mod header_mapper;
pub mod prompt_builder;
pub mod record_validator;
pub mod row_normalizer;
