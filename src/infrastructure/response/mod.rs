// ============================================================
// RESPONSE CLEANUP
// ============================================================
// Normalize raw model output before handing it to the payload parser

use crate::domain::error::{AppError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static THINK_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<think>[\s\S]*?</think>|<think\s*/>").unwrap());

static REASONING_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<reasoning>[\s\S]*?</reasoning>").unwrap());

static MULTIPLE_NEWLINES_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strip reasoning artifacts some models wrap around their output
pub fn clean_llm_response(response: &str) -> String {
    let mut cleaned = response.to_string();

    cleaned = THINK_TAG_PATTERN.replace_all(&cleaned, "").to_string();
    cleaned = REASONING_TAG_PATTERN.replace_all(&cleaned, "").to_string();
    cleaned = cleaned.trim().to_string();
    cleaned = MULTIPLE_NEWLINES_PATTERN
        .replace_all(&cleaned, "\n\n")
        .to_string();

    cleaned
}

/// Locate the JSON object inside a cleaned response. Models often wrap the
/// payload in a markdown code fence or surround it with prose; both are
/// tolerated. Returns the substring from the first `{` to the last `}`.
pub fn extract_json_payload(response: &str) -> Result<&str> {
    let start = response
        .find('{')
        .ok_or_else(|| AppError::ParseError("No JSON object in response".to_string()))?;
    let end = response
        .rfind('}')
        .ok_or_else(|| AppError::ParseError("Unterminated JSON object in response".to_string()))?;
    if end < start {
        return Err(AppError::ParseError(
            "Malformed JSON object in response".to_string(),
        ));
    }

    Ok(&response[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_think_tags() {
        let input = "<think>Some reasoning here</think>The actual response";
        assert_eq!(clean_llm_response(input), "The actual response");
    }

    #[test]
    fn test_clean_reasoning_tags() {
        let input = "<reasoning>Internal</reasoning>Final answer";
        assert_eq!(clean_llm_response(input), "Final answer");
    }

    #[test]
    fn test_clean_collapses_newlines() {
        let input = "Line 1\n\n\n\n\nLine 2";
        assert_eq!(clean_llm_response(input), "Line 1\n\nLine 2");
    }

    #[test]
    fn test_clean_preserves_normal_text() {
        let input = "A normal response without any special tags.";
        assert_eq!(clean_llm_response(input), input);
    }

    #[test]
    fn test_extract_bare_json() {
        let input = r#"{"testCases": []}"#;
        assert_eq!(extract_json_payload(input).unwrap(), input);
    }

    #[test]
    fn test_extract_from_code_fence() {
        let input = "```json\n{\"testCases\": []}\n```";
        assert_eq!(extract_json_payload(input).unwrap(), "{\"testCases\": []}");
    }

    #[test]
    fn test_extract_from_surrounding_prose() {
        let input = "Here you go:\n{\"testCases\": []}\nLet me know!";
        assert_eq!(extract_json_payload(input).unwrap(), "{\"testCases\": []}");
    }

    #[test]
    fn test_extract_fails_without_object() {
        assert!(extract_json_payload("no json here").is_err());
    }
}
