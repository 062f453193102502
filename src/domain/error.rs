// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every failure the pipeline can produce, one variant per stage.
// The Display messages ARE the user-visible contract: the CLI
// layer serializes them verbatim into the {"error": ...} report,
// so each message names what a caller needs to inspect (the
// failing field, the expected type, the offending value).
//
// A field being absent (Schema) is deliberately distinct from a
// field being present but incoercible (TypeCoercion).
//
// Reference: Rust Book §9 (Error Handling)

use thiserror::Error;

/// Result alias used across the pipeline.
pub type PredictResult<T> = Result<T, PredictError>;

#[derive(Debug, Error)]
pub enum PredictError {
    /// The model artifact is missing, unreadable, or corrupt.
    #[error("model load failed: {0}")]
    ModelLoad(String),

    /// The invocation argument is not a JSON object.
    #[error("invalid input record: {0}")]
    InputParse(String),

    /// A column required by the feature schema is absent.
    #[error("required field `{0}` is missing from the input record")]
    Schema(String),

    /// A field is present but cannot be coerced to its column type.
    #[error("field `{field}` cannot be coerced to {expected}: got {value}")]
    TypeCoercion {
        field:    String,
        expected: &'static str,
        value:    String,
    },

    /// The model itself failed while scoring the row.
    #[error("inference failed: {0}")]
    Inference(String),
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_message_names_the_missing_field() {
        let err = PredictError::Schema("category".to_string());
        assert_eq!(
            err.to_string(),
            "required field `category` is missing from the input record"
        );
    }

    #[test]
    fn test_coercion_message_names_field_and_value() {
        let err = PredictError::TypeCoercion {
            field:    "average_time".to_string(),
            expected: "a finite number",
            value:    "\"abc\"".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("average_time"));
        assert!(msg.contains("finite number"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_model_load_message_mentions_loading() {
        let err = PredictError::ModelLoad("no such file".to_string());
        assert!(err.to_string().starts_with("model load failed"));
    }
}
