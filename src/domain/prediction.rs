// ============================================================
// Layer 3 — Prediction Domain Types
// ============================================================
// The model outputs a zero-based class index; the domain speaks
// in 1-based group labels. The +1 shift lives here, in exactly
// one place, so no other layer can get it wrong.

use serde::Serialize;

/// The zero-based class index the classifier outputs for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPrediction(pub usize);

impl RawPrediction {
    /// The zero-based index as produced by argmax over the logits.
    pub fn index(&self) -> usize {
        self.0
    }

    /// Shift into the domain's 1-based group-label space.
    /// Raw index 2 → group 3.
    pub fn group_label(&self) -> GroupLabel {
        GroupLabel(self.0 as u32 + 1)
    }
}

/// The domain-facing group identifier, in [1, N] for a model
/// trained on N groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupLabel(pub u32);

impl GroupLabel {
    pub fn value(&self) -> u32 {
        self.0
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_label_is_raw_index_plus_one() {
        assert_eq!(RawPrediction(2).group_label(), GroupLabel(3));
        assert_eq!(RawPrediction(0).group_label(), GroupLabel(1));
    }

    #[test]
    fn test_group_label_serializes_as_bare_integer() {
        let json = serde_json::to_string(&GroupLabel(4)).unwrap();
        assert_eq!(json, "4");
    }
}
