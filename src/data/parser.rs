// ============================================================
// Layer 4 — Record Parser
// ============================================================
// Decodes the single invocation argument into an InputRecord.
// Only a JSON *object* is acceptable here — arrays, bare numbers
// and strings are structurally wrong and rejected before any
// field-level validation runs.

use serde_json::Value;

use crate::domain::error::{PredictError, PredictResult};
use crate::domain::record::InputRecord;

pub struct RecordParser;

impl RecordParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse the raw argument into a record.
    /// Fails with InputParse on invalid JSON or a non-object value.
    pub fn parse(&self, raw: &str) -> PredictResult<InputRecord> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| PredictError::InputParse(e.to_string()))?;

        match value {
            Value::Object(fields) => Ok(InputRecord::new(fields)),
            other => Err(PredictError::InputParse(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_)  => "an array",
        Value::Object(_) => "an object",
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_a_valid_record() {
        let record = RecordParser::new()
            .parse(r#"{"category": "A", "average_time": 12.5}"#)
            .unwrap();
        assert_eq!(record.len(), 2);
        assert!(record.get("category").is_some());
        assert!(record.get("average_time").is_some());
    }

    #[test]
    fn test_extra_fields_are_kept_on_the_record() {
        let record = RecordParser::new()
            .parse(r#"{"category": "A", "average_time": 1, "level": 3}"#)
            .unwrap();
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_invalid_json_is_an_input_parse_error() {
        let err = RecordParser::new().parse("not json").unwrap_err();
        assert!(matches!(err, PredictError::InputParse(_)));
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        let err = RecordParser::new().parse("[1, 2, 3]").unwrap_err();
        match err {
            PredictError::InputParse(msg) => {
                assert!(msg.contains("JSON object"));
                assert!(msg.contains("array"));
            }
            other => panic!("expected InputParse, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_object_parses_as_empty_record() {
        // Structurally valid; the missing fields are the
        // Normalizer's problem, reported as schema errors.
        let record = RecordParser::new().parse("{}").unwrap();
        assert!(record.is_empty());
    }
}
