// ============================================================
// Layer 6 — Vocabulary Store
// ============================================================
// Persists the category vocabulary next to the model weights so
// inference encodes category labels with exactly the indices the
// embedding was trained on.
//
// File: {artifact_dir}/category_vocab.json — a plain JSON map,
// e.g. {"<unk>": 0, "math": 1, "science": 2}.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::category::CategoryVocab;

const VOCAB_FILE: &str = "category_vocab.json";

pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }

    /// Load the vocabulary written at training time.
    pub fn load(&self) -> Result<CategoryVocab> {
        let path = self.dir.join(VOCAB_FILE);

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read category vocabulary from '{}'. Has the model artifact been deployed?",
                    path.display()
                )
            })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Vocabulary '{}' is not valid JSON", path.display()))
    }

    /// Save a vocabulary as pretty JSON.
    /// Creates the artifact directory if needed.
    pub fn save(&self, vocab: &CategoryVocab) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create artifact directory '{}'", self.dir.display()))?;

        let path = self.dir.join(VOCAB_FILE);
        let json = serde_json::to_string_pretty(vocab)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write vocabulary to '{}'", path.display()))?;

        tracing::debug!("Saved category vocabulary to '{}'", path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_preserves_the_encoding() {
        let dir = tempdir().unwrap();
        let store = VocabStore::new(dir.path().to_str().unwrap());

        let vocab = CategoryVocab::from_labels(["math", "science"]);
        store.save(&vocab).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), vocab.len());
        assert_eq!(loaded.encode("math"), vocab.encode("math"));
        assert_eq!(loaded.encode("unseen"), vocab.encode("unseen"));
    }

    #[test]
    fn test_missing_vocabulary_error_names_the_path() {
        let dir = tempdir().unwrap();
        let store = VocabStore::new(dir.path().join("missing").to_str().unwrap());

        let err = store.load().unwrap_err();
        assert!(format!("{err:#}").contains("category_vocab.json"));
    }
}
