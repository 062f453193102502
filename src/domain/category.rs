// ============================================================
// Layer 3 — Category Vocabulary
// ============================================================
// The mapping from category label to the integer index the
// classifier's embedding was trained with. Index 0 is reserved
// for labels unseen at training time, so the pipeline never
// rejects an unknown category — it scores it through the
// unknown bucket instead.
//
// Persisted as `category_vocab.json` next to the model weights
// (see Layer 6, vocab_store).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The label stored for the reserved unknown slot.
pub const UNKNOWN_CATEGORY: &str = "<unk>";

/// Index every label outside the trained vocabulary maps to.
pub const UNKNOWN_INDEX: usize = 0;

/// Category label → embedding index.
///
/// serde(transparent) keeps the JSON file a plain mapping,
/// e.g. {"<unk>": 0, "math": 1, "science": 2}.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryVocab {
    labels: HashMap<String, usize>,
}

impl CategoryVocab {
    /// Build a vocabulary from trained category labels.
    /// Index 0 is always the unknown slot; labels get 1, 2, ...
    /// in iteration order. Duplicates keep their first index.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = HashMap::new();
        map.insert(UNKNOWN_CATEGORY.to_string(), UNKNOWN_INDEX);

        let mut next_id = UNKNOWN_INDEX + 1;
        for label in labels {
            let label = label.into();
            if !map.contains_key(&label) {
                map.insert(label, next_id);
                next_id += 1;
            }
        }
        Self { labels: map }
    }

    /// Encode a label to its trained index.
    /// Unseen labels (including the empty string) map to the
    /// unknown index — membership is never validated here.
    pub fn encode(&self, label: &str) -> usize {
        match self.labels.get(label) {
            Some(&id) => id,
            None => {
                tracing::debug!("Category '{label}' not in vocabulary, using unknown slot");
                UNKNOWN_INDEX
            }
        }
    }

    /// Total number of indices, unknown slot included.
    /// The classifier's embedding table must be exactly this big.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_get_distinct_nonzero_indices() {
        let vocab = CategoryVocab::from_labels(["math", "science", "history"]);
        let ids = [
            vocab.encode("math"),
            vocab.encode("science"),
            vocab.encode("history"),
        ];
        // All distinct, none colliding with the unknown slot
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|&id| id != UNKNOWN_INDEX));
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);
    }

    #[test]
    fn test_unseen_label_maps_to_unknown_index() {
        let vocab = CategoryVocab::from_labels(["math"]);
        assert_eq!(vocab.encode("geography"), UNKNOWN_INDEX);
        assert_eq!(vocab.encode(""), UNKNOWN_INDEX);
    }

    #[test]
    fn test_duplicate_labels_keep_first_index() {
        let vocab = CategoryVocab::from_labels(["math", "math", "science"]);
        // 3 entries total: <unk>, math, science
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.encode("math"), 1);
    }

    #[test]
    fn test_len_counts_unknown_slot() {
        let vocab = CategoryVocab::from_labels(["a", "b"]);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_json_round_trip_is_a_plain_mapping() {
        let vocab = CategoryVocab::from_labels(["math"]);
        let json = serde_json::to_string(&vocab).unwrap();
        // serde(transparent): no wrapper object around the map
        assert!(json.contains("\"<unk>\":0"));
        let back: CategoryVocab = serde_json::from_str(&json).unwrap();
        assert_eq!(back.encode("math"), vocab.encode("math"));
    }
}
