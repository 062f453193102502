// ============================================================
// Layer 3 — Input Record Domain Type
// ============================================================
// Represents the raw input record as decoded from the invocation
// argument: an arbitrary mapping of field name to JSON value.
// No validation has happened yet — the Normalizer (Layer 4)
// projects this into the typed feature row.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde_json::{Map, Value};

/// One raw input record: field name → JSON value, exactly as the
/// caller sent it. Extra fields beyond the declared schema are kept
/// here but ignored downstream.
#[derive(Debug, Clone)]
pub struct InputRecord {
    fields: Map<String, Value>,
}

impl InputRecord {
    /// Create a record from an already-decoded JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Look up a field by name. `None` means the field is absent —
    /// which the Normalizer reports as a schema error, distinct from
    /// a present-but-wrong-type value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Number of fields the caller supplied.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
