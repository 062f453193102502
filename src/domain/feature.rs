// ============================================================
// Layer 3 — Feature Schema and Feature Row
// ============================================================
// The classifier was trained on a fixed two-column schema. That
// contract is declared here as a static table so the Normalizer
// can validate against it explicitly — schema drift then fails
// fast as a schema error instead of surfacing later as a
// confusing inference failure.
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

/// Field name of the categorical column.
pub const FIELD_CATEGORY: &str = "category";

/// Field name of the numeric measurement column.
pub const FIELD_AVERAGE_TIME: &str = "average_time";

/// The type a schema column must coerce to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// A nominal label; any string is accepted, membership in the
    /// trained vocabulary is the encoding's concern
    Categorical,

    /// A finite floating-point measurement; numeric strings
    /// ("12.5") are coerced
    Float,
}

/// One column of the trained schema.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSpec {
    pub name: &'static str,
    pub kind: FeatureKind,
}

/// The exact schema the model expects, in column order.
/// This is the single source of truth the Normalizer walks.
pub const FEATURE_SCHEMA: &[FeatureSpec] = &[
    FeatureSpec { name: FIELD_CATEGORY,     kind: FeatureKind::Categorical },
    FeatureSpec { name: FIELD_AVERAGE_TIME, kind: FeatureKind::Float },
];

/// The validated one-row projection of an input record into the
/// trained schema. Constructed fresh per invocation, discarded
/// after inference, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    /// The category label as supplied (encoding to an index
    /// happens inside the predictor)
    pub category: String,

    /// The measurement, already coerced and checked finite
    pub average_time: f64,
}

impl FeatureRow {
    /// Create a new FeatureRow.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(category: impl Into<String>, average_time: f64) -> Self {
        Self {
            category: category.into(),
            average_time,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_declares_both_required_columns() {
        let names: Vec<&str> = FEATURE_SCHEMA.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["category", "average_time"]);
    }

    #[test]
    fn test_schema_column_kinds() {
        assert_eq!(FEATURE_SCHEMA[0].kind, FeatureKind::Categorical);
        assert_eq!(FEATURE_SCHEMA[1].kind, FeatureKind::Float);
    }
}
