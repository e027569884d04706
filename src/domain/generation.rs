// ============================================================
// GENERATION TYPES
// ============================================================
// Context handed to a generation provider and the structured
// test case artifacts it returns

use crate::domain::story::{Priority, StoryRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How broad the requested test coverage should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestingScope {
    Smoke,
    Regression,
    Full,
    Custom,
}

impl TestingScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestingScope::Smoke => "smoke",
            TestingScope::Regression => "regression",
            TestingScope::Full => "full",
            TestingScope::Custom => "custom",
        }
    }
}

impl Default for TestingScope {
    fn default() -> Self {
        TestingScope::Regression
    }
}

/// The selected input plus options passed to a generation backend.
/// The boolean flags are advisory; a provider may ignore them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContext {
    /// Selected story records to generate test cases for
    pub records: Vec<StoryRecord>,

    /// Functional area identifiers the test cases should target
    pub modules: Vec<String>,

    /// Actor/user-type tag (admin, registered, guest)
    pub user_type: String,

    pub scope: TestingScope,

    #[serde(default)]
    pub include_negative_tests: bool,

    #[serde(default)]
    pub include_performance_tests: bool,

    #[serde(default)]
    pub include_security_tests: bool,
}

/// One step inside a generated test case
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStep {
    pub step_number: u32,
    pub action: String,
    pub expected_result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_data: Option<String>,
}

/// One generated test case. Produced only by a provider; never mutated
/// after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestArtifact {
    pub id: String,
    pub title: String,
    pub description: String,
    pub module: String,
    pub user_type: String,
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
    pub steps: Vec<TestStep>,
    pub expected_result: String,
    /// Identifier of the story this case was derived from, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_id: Option<String>,
}

/// Aggregate counts over one generation call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSummary {
    pub total_cases: usize,
    pub by_module: HashMap<String, usize>,
    pub by_priority: HashMap<String, usize>,
    pub elapsed_ms: u64,
}

impl GenerationSummary {
    pub fn from_artifacts(artifacts: &[TestArtifact], elapsed_ms: u64) -> Self {
        let mut by_module: HashMap<String, usize> = HashMap::new();
        let mut by_priority: HashMap<String, usize> = HashMap::new();
        for artifact in artifacts {
            *by_module.entry(artifact.module.clone()).or_insert(0) += 1;
            *by_priority
                .entry(artifact.priority.as_str().to_string())
                .or_insert(0) += 1;
        }
        Self {
            total_cases: artifacts.len(),
            by_module,
            by_priority,
            elapsed_ms,
        }
    }
}

/// Provenance of one generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    /// Unique id for this generation run
    pub run_id: uuid::Uuid,
    pub provider: String,
    pub model: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    /// Echo of the context the caller supplied
    pub context: GenerationContext,
}

impl GenerationMetadata {
    pub fn new(provider: impl Into<String>, model: impl Into<String>, context: &GenerationContext) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4(),
            provider: provider.into(),
            model: model.into(),
            generated_at: chrono::Utc::now(),
            context: context.clone(),
        }
    }
}

/// Result of one generation call. Provider failures surface here as
/// `success = false` plus warnings; they are never raised to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,
    pub test_cases: Vec<TestArtifact>,
    pub summary: GenerationSummary,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub metadata: GenerationMetadata,
}

impl GenerationResult {
    /// Successful result with summary aggregates computed from the artifacts
    pub fn completed(
        test_cases: Vec<TestArtifact>,
        elapsed_ms: u64,
        metadata: GenerationMetadata,
    ) -> Self {
        let summary = GenerationSummary::from_artifacts(&test_cases, elapsed_ms);
        Self {
            success: true,
            test_cases,
            summary,
            warnings: Vec::new(),
            metadata,
        }
    }

    /// Failed result carrying a descriptive warning and no artifacts
    pub fn failed(warning: String, elapsed_ms: u64, metadata: GenerationMetadata) -> Self {
        Self {
            success: false,
            test_cases: Vec::new(),
            summary: GenerationSummary {
                elapsed_ms,
                ..Default::default()
            },
            warnings: vec![warning],
            metadata,
        }
    }
}
