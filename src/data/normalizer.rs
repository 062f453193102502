// ============================================================
// Layer 4 — Record Normalizer
// ============================================================
// Projects one raw InputRecord into the FeatureRow the model was
// trained on, walking the static FEATURE_SCHEMA table:
//
//   1. Presence: every declared column must exist on the record.
//      Absence is a Schema error naming the field.
//   2. Coercion: each present value must coerce to its column
//      kind. Failure is a TypeCoercion error naming the field,
//      the expected type, and the offending value.
//
// `category` accepts any string, including labels unseen at
// training time — vocabulary membership is the encoding's
// concern, not this layer's. `average_time` accepts a JSON
// number or a numeric string and must come out finite.
//
// Pure transform, no side effects.

use serde_json::Value;

use crate::domain::error::{PredictError, PredictResult};
use crate::domain::feature::{
    FeatureRow, FEATURE_SCHEMA, FIELD_AVERAGE_TIME, FIELD_CATEGORY,
};
use crate::domain::record::InputRecord;

pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Coerce one record into the trained schema.
    pub fn normalize(&self, record: &InputRecord) -> PredictResult<FeatureRow> {
        // Presence pass over the whole declared schema first, so a
        // record missing a column always fails as a schema error
        // before any coercion is attempted.
        for spec in FEATURE_SCHEMA {
            if record.get(spec.name).is_none() {
                return Err(PredictError::Schema(spec.name.to_string()));
            }
        }

        let category     = coerce_category(FIELD_CATEGORY, required(record, FIELD_CATEGORY)?)?;
        let average_time = coerce_float(FIELD_AVERAGE_TIME, required(record, FIELD_AVERAGE_TIME)?)?;

        Ok(FeatureRow::new(category, average_time))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch a field that the schema requires.
fn required<'a>(record: &'a InputRecord, field: &str) -> PredictResult<&'a Value> {
    record
        .get(field)
        .ok_or_else(|| PredictError::Schema(field.to_string()))
}

/// A categorical column takes any JSON string as-is.
/// Anything else (numbers, booleans, null, ...) is a coercion error:
/// silently stringifying them would hide caller bugs.
fn coerce_category(field: &str, value: &Value) -> PredictResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(coercion_error(field, "a category string", other)),
    }
}

/// A float column takes a JSON number or a numeric string ("12.5").
/// The result must be finite — "inf"/"NaN" strings parse as f64 but
/// would poison the standardized feature downstream.
fn coerce_float(field: &str, value: &Value) -> PredictResult<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| coercion_error(field, "a finite number", value))
}

fn coercion_error(field: &str, expected: &'static str, value: &Value) -> PredictError {
    PredictError::TypeCoercion {
        field:    field.to_string(),
        expected,
        // Value's Display renders JSON, so strings keep their quotes
        // and null renders as `null` — unambiguous in the message.
        value:    value.to_string(),
    }
}
