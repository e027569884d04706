pub mod error;
pub mod generation;
pub mod llm_config;

// Story normalization module
pub mod story;
