// ============================================================
// PROMPT BUILDER
// ============================================================
// Deterministic prompt construction for test case generation, plus
// parsing of the structured payload a backend returns

use crate::domain::error::{AppError, Result};
use crate::domain::generation::{GenerationContext, TestArtifact, TestStep};
use crate::domain::story::Priority;
use serde::Deserialize;

/// Known functional areas and their one-line descriptions. Unknown module
/// identifiers fall back to a generic description rather than failing.
const MODULE_DESCRIPTIONS: [(&str, &str); 8] = [
    (
        "authentication",
        "Login, logout, registration, password reset and session handling",
    ),
    (
        "user-management",
        "User accounts, profiles, roles and permissions",
    ),
    (
        "dashboard",
        "Landing views, widgets and at-a-glance summaries",
    ),
    ("reporting", "Report generation, filtering and export"),
    ("billing", "Plans, payments, invoices and subscription lifecycle"),
    (
        "notifications",
        "In-app, email and push notification delivery and preferences",
    ),
    ("search", "Full-text and faceted search across the application"),
    ("settings", "Application and account configuration screens"),
];

pub struct PromptBuilder;

impl PromptBuilder {
    /// Render the full generation prompt. Output is a pure function of the
    /// context: the same records, modules and options always produce the
    /// same text.
    pub fn build(context: &GenerationContext) -> String {
        let mut prompt = String::from(
            "You are an expert QA engineer. Generate structured test cases for the user stories below.\n\n",
        );

        prompt.push_str("Business rules:\n");
        prompt.push_str("1. Every test case must trace back to exactly one user story\n");
        prompt.push_str("2. Steps must be concrete and independently executable\n");
        prompt.push_str("3. Each step states one action and one expected result\n");
        prompt.push_str("4. Do not invent functionality that the stories do not describe\n\n");

        prompt.push_str("Target modules:\n");
        for module in &context.modules {
            prompt.push_str(&format!(
                "- {}: {}\n",
                module,
                Self::module_description(module)
            ));
        }

        prompt.push_str(&format!(
            "\nUser type: {}\n{}\n",
            context.user_type,
            Self::user_type_capabilities(&context.user_type)
        ));

        prompt.push_str(&format!("Testing scope: {}\n", context.scope.as_str()));
        prompt.push_str("Options:\n");
        prompt.push_str(&format!(
            "- Include negative tests: {}\n",
            context.include_negative_tests
        ));
        prompt.push_str(&format!(
            "- Include performance tests: {}\n",
            context.include_performance_tests
        ));
        prompt.push_str(&format!(
            "- Include security tests: {}\n",
            context.include_security_tests
        ));

        prompt.push_str("\nUser stories:\n");
        for record in &context.records {
            prompt.push_str(&format!("\n[{}] {}\n", record.id, record.description));
            prompt.push_str(&format!(
                "As a {}, I want {}, so that {}\n",
                record.actor_role, record.desired_action, record.benefit
            ));
            prompt.push_str(&format!("Given: {}\n", record.precondition));
            prompt.push_str(&format!("When: {}\n", record.trigger));
            prompt.push_str(&format!("Then: {}\n", record.outcome));
            if !record.acceptance_criteria.is_empty() {
                prompt.push_str(&format!(
                    "Acceptance criteria: {}\n",
                    record.acceptance_criteria
                ));
            }
            if !record.requirements.is_empty() {
                prompt.push_str(&format!("Requirements: {}\n", record.requirements));
            }
            if !record.notes.is_empty() {
                prompt.push_str(&format!("Notes: {}\n", record.notes));
            }
        }

        prompt.push_str(
            r#"
Return JSON with a single key "testCases": an array of objects with keys:
- id: string
- title: string
- description: string
- module: string (one of the target modules)
- userType: string
- priority: one of "low", "medium", "high", "critical"
- tags: array of strings
- steps: array of {stepNumber, action, expectedResult, testData?}
- expectedResult: string
- storyId: string (the [..] identifier of the source story)

Return only valid JSON."#,
        );

        prompt
    }

    /// Parse the structured payload returned by a backend into artifacts.
    /// Entries with an empty title are dropped; missing fields fall back to
    /// values derived from the context.
    pub fn parse_artifacts(payload: &str, context: &GenerationContext) -> Result<Vec<TestArtifact>> {
        let parsed: RawGenerationPayload = serde_json::from_str(payload)
            .map_err(|err| AppError::ParseError(format!("Invalid generation payload: {}", err)))?;

        let fallback_module = context
            .modules
            .first()
            .cloned()
            .unwrap_or_else(|| "general".to_string());

        let mut artifacts = Vec::new();
        for (index, raw) in parsed.test_cases.into_iter().enumerate() {
            let title = raw.title.trim().to_string();
            if title.is_empty() {
                continue;
            }

            let steps = raw
                .steps
                .into_iter()
                .enumerate()
                .map(|(step_index, step)| TestStep {
                    step_number: if step.step_number > 0 {
                        step.step_number
                    } else {
                        (step_index + 1) as u32
                    },
                    action: step.action.trim().to_string(),
                    expected_result: step.expected_result.trim().to_string(),
                    test_data: step.test_data,
                })
                .collect();

            artifacts.push(TestArtifact {
                id: if raw.id.trim().is_empty() {
                    format!("TC_{:03}", index + 1)
                } else {
                    raw.id.trim().to_string()
                },
                title,
                description: raw.description.trim().to_string(),
                module: if raw.module.trim().is_empty() {
                    fallback_module.clone()
                } else {
                    raw.module.trim().to_string()
                },
                user_type: if raw.user_type.trim().is_empty() {
                    context.user_type.clone()
                } else {
                    raw.user_type.trim().to_string()
                },
                priority: Priority::parse(&raw.priority).unwrap_or_default(),
                tags: raw.tags,
                steps,
                expected_result: raw.expected_result.trim().to_string(),
                story_id: raw.story_id.filter(|id| !id.trim().is_empty()),
            });
        }

        Ok(artifacts)
    }

    fn module_description(module: &str) -> String {
        for (name, description) in MODULE_DESCRIPTIONS {
            if name == module {
                return description.to_string();
            }
        }
        format!("General functional area '{}'", module)
    }

    /// Capability hint for the actor the tests run as. Unknown user types
    /// get no hint rather than a fabricated one.
    fn user_type_capabilities(user_type: &str) -> &'static str {
        match user_type {
            "admin" => "Capabilities: full access to all modules, user administration and configuration",
            "registered" => "Capabilities: authenticated access to own data and standard features",
            "guest" => "Capabilities: unauthenticated access to public pages only",
            _ => "",
        }
    }
}

// Loose mirror of the payload schema so a sloppy backend response still
// yields whatever artifacts it managed to produce
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGenerationPayload {
    #[serde(default)]
    test_cases: Vec<RawTestCase>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTestCase {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    module: String,
    #[serde(default)]
    user_type: String,
    #[serde(default)]
    priority: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    steps: Vec<RawTestStep>,
    #[serde(default)]
    expected_result: String,
    #[serde(default)]
    story_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTestStep {
    #[serde(default)]
    step_number: u32,
    #[serde(default)]
    action: String,
    #[serde(default)]
    expected_result: String,
    #[serde(default)]
    test_data: Option<String>,
}
