//! Completion response sanitization
//!
//! Models wrap JSON in markdown fences and explanatory prose often enough
//! that stripping has to be first-class. The grammar here: optional
//! leading/trailing prose, at most one fenced block with an optional
//! language tag. A `json`-tagged fence wins; otherwise the first fence of
//! any kind; fence-free input passes through untouched.

use regex::Regex;
use std::sync::LazyLock;

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\b\s*(.*?)```").unwrap());

static ANY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[A-Za-z0-9_+-]*\s*(.*?)```").unwrap());

/// Strip markdown fencing and surrounding prose from a completion.
///
/// Idempotent on fence-free text (modulo surrounding whitespace).
///
/// # Examples
///
/// ```
/// use kagaz_extractor::sanitize_response;
///
/// let wrapped = "Here is the data:\n```json\n{\"name\": \"Asha\"}\n```\nLet me know!";
/// assert_eq!(sanitize_response(wrapped), "{\"name\": \"Asha\"}");
///
/// let clean = "{\"name\": \"Asha\"}";
/// assert_eq!(sanitize_response(clean), clean);
/// ```
pub fn sanitize_response(response: &str) -> String {
    if let Some(captures) = JSON_FENCE.captures(response) {
        return captures[1].trim().to_string();
    }
    if let Some(captures) = ANY_FENCE.captures(response) {
        return captures[1].trim().to_string();
    }
    response.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_fence_interior_is_extracted() {
        let response = "```json\n{\"gender\": \"Male\"}\n```";
        assert_eq!(sanitize_response(response), "{\"gender\": \"Male\"}");
    }

    #[test]
    fn test_surrounding_prose_is_discarded() {
        let response = "Sure! The extracted record is:\n```json\n{\"name\": null}\n```\nAnything else?";
        assert_eq!(sanitize_response(response), "{\"name\": null}");
    }

    #[test]
    fn test_generic_fence_is_second_choice() {
        let response = "```\n{\"name\": \"Ravi\"}\n```";
        assert_eq!(sanitize_response(response), "{\"name\": \"Ravi\"}");
    }

    #[test]
    fn test_language_tagged_fence_drops_the_tag() {
        let response = "```javascript\n{\"name\": \"Ravi\"}\n```";
        assert_eq!(sanitize_response(response), "{\"name\": \"Ravi\"}");
    }

    #[test]
    fn test_fence_free_text_is_unchanged() {
        let clean = "{\"aadhar_number\": \"1234 5678 9012\"}";
        assert_eq!(sanitize_response(clean), clean);
    }

    #[test]
    fn test_idempotent_on_sanitized_output() {
        let wrapped = "```json\n{\"name\": \"Asha\"}\n```";
        let once = sanitize_response(wrapped);
        assert_eq!(sanitize_response(&once), once);
    }

    #[test]
    fn test_single_line_fence_with_spaces() {
        // The exact shape of scenario B responses.
        let response = "```json {\"aadhar_number\":\"1234 5678 9012\",\"name\":\"A\",\"date_of_birth\":\"01/01/1990\",\"gender\":\"Male\"} ```";
        let inner = sanitize_response(response);
        assert!(inner.starts_with('{'));
        assert!(inner.ends_with('}'));
        assert!(serde_json::from_str::<serde_json::Value>(&inner).is_ok());
    }

    #[test]
    fn test_json_fence_preferred_over_earlier_generic_fence() {
        let response = "```\nnot the payload\n```\n```json\n{\"name\": \"A\"}\n```";
        assert_eq!(sanitize_response(response), "{\"name\": \"A\"}");
    }

    #[test]
    fn test_plain_prose_passes_through() {
        let prose = "I could not find any identity fields in the text.";
        assert_eq!(sanitize_response(prose), prose);
    }
}
