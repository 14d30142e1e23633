//! Normalization of model text that was asked to be JSON.
//!
//! Models wrap structured replies in markdown fences more often than not;
//! the cleaning step is tolerant of that and of a stray leading "json" tag.
//! Parsing never fails outward: a reply that still isn't JSON becomes a
//! `Malformed` value carrying the cleaned text.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

const INVALID_JSON_ERROR: &str = "Invalid JSON response";

/// Outcome of normalizing model output into JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    Parsed(Value),
    Malformed { raw_response: String },
}

impl Serialize for Advisory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Advisory::Parsed(value) => value.serialize(serializer),
            Advisory::Malformed { raw_response } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("error", INVALID_JSON_ERROR)?;
                map.serialize_entry("raw_response", raw_response)?;
                map.end()
            }
        }
    }
}

/// Remove markdown code-fence markers and a leading "json" tag.
///
/// Idempotent: cleaning already-clean text is a no-op.
pub fn strip_code_fences(text: &str) -> String {
    let mut cleaned = text.trim();

    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    cleaned = cleaned.trim();

    if let Some(tag) = cleaned.get(..4) {
        if tag.eq_ignore_ascii_case("json") {
            cleaned = cleaned[4..].trim_start();
        }
    }

    cleaned.to_string()
}

/// Clean and parse model text, falling back to the error shape on failure.
pub fn normalize_payload(text: &str) -> Advisory {
    let cleaned = strip_code_fences(text);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => Advisory::Parsed(value),
        Err(_) => Advisory::Malformed {
            raw_response: cleaned,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_fenced_json_block() {
        let advisory = normalize_payload("```json\n{\"a\":1}\n```");
        assert_eq!(advisory, Advisory::Parsed(json!({"a": 1})));
    }

    #[test]
    fn parses_bare_fence() {
        let advisory = normalize_payload("```\n[1, 2, 3]\n```");
        assert_eq!(advisory, Advisory::Parsed(json!([1, 2, 3])));
    }

    #[test]
    fn strips_leading_json_tag_case_insensitive() {
        let advisory = normalize_payload("JSON {\"ok\":true}");
        assert_eq!(advisory, Advisory::Parsed(json!({"ok": true})));
    }

    #[test]
    fn clean_json_passes_through() {
        let advisory = normalize_payload("{\"litter_type\":\"plastic\"}");
        assert_eq!(advisory, Advisory::Parsed(json!({"litter_type": "plastic"})));
    }

    #[test]
    fn non_json_becomes_malformed() {
        let advisory = normalize_payload("hello world");
        assert_eq!(
            advisory,
            Advisory::Malformed {
                raw_response: "hello world".to_string()
            }
        );
    }

    #[test]
    fn malformed_serializes_to_error_shape() {
        let advisory = normalize_payload("hello world");
        let serialized = serde_json::to_value(&advisory).unwrap();
        assert_eq!(
            serialized,
            json!({"error": "Invalid JSON response", "raw_response": "hello world"})
        );
    }

    #[test]
    fn parsed_serializes_transparently() {
        let advisory = normalize_payload("{\"a\":1}");
        assert_eq!(serde_json::to_value(&advisory).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn cleaning_is_idempotent() {
        for input in [
            "```json\n{\"a\":1}\n```",
            "{\"a\":1}",
            "hello world",
            "json {\"a\":1}",
            "",
        ] {
            let once = strip_code_fences(input);
            assert_eq!(strip_code_fences(&once), once);
        }
    }

    #[test]
    fn normalizing_twice_matches_once() {
        let raw = "```json\n{\"a\":1}\n```";
        let once = normalize_payload(raw);
        let again = normalize_payload(&serde_json::to_string(&once).unwrap());
        assert_eq!(once, again);
    }
}
