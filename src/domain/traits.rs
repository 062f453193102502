// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types, the
// application layer can swap implementations without changing
// the code that uses them. Concretely: the use case is wired
// against `Classifier`, so its orchestration is testable with a
// stub model and no artifact on disk.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::PredictResult;
use crate::domain::feature::FeatureRow;
use crate::domain::prediction::RawPrediction;

// ─── Classifier ───────────────────────────────────────────────────────────────
/// Any component that can score one feature row.
///
/// Implementations:
///   - ml::Predictor → the burn model loaded from the artifact
///   - (tests) stub classifiers with fixed outputs
pub trait Classifier {
    /// Score exactly one row, producing the zero-based class index.
    fn predict(&self, row: &FeatureRow) -> PredictResult<RawPrediction>;

    /// Number of classes the model was trained on.
    /// Every prediction index is strictly below this.
    fn class_count(&self) -> usize;
}
