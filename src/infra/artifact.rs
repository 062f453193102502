// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Saves and restores the classifier artifact in one directory:
//
//   model_config.json  ← architecture + feature scaling constants
//   classifier.mpk.gz  ← weights (Burn CompactRecorder)
//
// Why save the config separately?
//   When loading for inference, we need to know the exact model
//   architecture (num_categories, num_groups, layer sizes) to
//   rebuild the model before the weights can be loaded into it.
//
// Burn's CompactRecorder:
//   - Serialises model parameters to MessagePack format
//   - Compresses with gzip for smaller file size
//   - Type-safe: loading fails if the architecture doesn't match
//
// Reference: Burn Book §5 (Records and Checkpointing)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};
use serde::{Deserialize, Serialize};

use crate::ml::model::GroupClassifierModel;

/// Weight file stem — the recorder appends `.mpk.gz`.
const CLASSIFIER_FILE: &str = "classifier";

/// Config file written next to the weights.
const CONFIG_FILE: &str = "model_config.json";

// ─── Artifact Configuration ──────────────────────────────────────────────────
// Everything inference needs to rebuild the trained model:
// the architecture sizes plus the average_time standardization
// constants captured from the training data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    pub num_categories: usize,
    pub num_groups:     usize,
    pub d_embed:        usize,
    pub d_hidden:       usize,
    pub time_mean:      f64,
    pub time_std:       f64,
}

impl ArtifactConfig {
    /// Config with the default head sizes and identity scaling.
    /// The trainer overwrites the scaling constants with the
    /// statistics of its training data.
    pub fn new(num_categories: usize, num_groups: usize) -> Self {
        Self {
            num_categories,
            num_groups,
            d_embed:   16,
            d_hidden:  32,
            time_mean: 0.0,
            time_std:  1.0,
        }
    }
}

// ─── ArtifactStore ────────────────────────────────────────────────────────────
/// Manages the artifact files inside one directory.
/// Loading never creates or mutates anything on disk.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }

    /// Save model weights using Burn's CompactRecorder.
    /// Creates the artifact directory if needed.
    pub fn save_model<B: Backend>(&self, model: &GroupClassifierModel<B>) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create artifact directory '{}'", self.dir.display()))?;

        // Build the file path (without extension — recorder adds it)
        let path = self.dir.join(CLASSIFIER_FILE);
        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| format!("Failed to save classifier weights to '{}'", path.display()))?;

        tracing::debug!("Saved classifier weights to '{}'", path.display());
        Ok(())
    }

    /// Load the weights into a freshly built model.
    ///
    /// The model parameter must have the correct architecture
    /// (matching the saved artifact) or loading will fail.
    pub fn load_model<B: Backend>(
        &self,
        model:  GroupClassifierModel<B>,
        device: &B::Device,
    ) -> Result<GroupClassifierModel<B>> {
        let path = self.dir.join(CLASSIFIER_FILE);

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!(
                    "Cannot load classifier weights from '{}'. Has the model artifact been deployed?",
                    path.display()
                )
            })?;

        // load_record() returns a new model with the loaded weights
        Ok(model.load_record(record))
    }

    /// Save the artifact configuration to JSON.
    pub fn save_config(&self, cfg: &ArtifactConfig) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create artifact directory '{}'", self.dir.display()))?;

        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved artifact config to '{}'", path.display());
        Ok(())
    }

    /// Load the artifact configuration from JSON.
    /// Called before the weights so the exact architecture can be
    /// rebuilt first.
    pub fn load_config(&self) -> Result<ArtifactConfig> {
        let path = self.dir.join(CONFIG_FILE);

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read config from '{}'. Has the model artifact been deployed?",
                    path.display()
                )
            })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Config '{}' is not valid JSON", path.display()))
    }
}
