// ============================================================
// Layer 5 — Predictor
// ============================================================
// Rebuilds the trained classifier from the artifact store and
// scores exactly one feature row per call:
//
//   1. Encode the category through the trained vocabulary
//      (unseen labels hit the unknown slot)
//   2. Standardize average_time with the artifact's (mean, std)
//   3. Forward pass, argmax over the group logits
//
// Every load failure is mapped into ModelLoad here, at the
// boundary between the anyhow-based infra layer and the
// pipeline's error taxonomy.

use burn::prelude::*;

use crate::domain::category::CategoryVocab;
use crate::domain::error::{PredictError, PredictResult};
use crate::domain::feature::FeatureRow;
use crate::domain::prediction::RawPrediction;
use crate::domain::traits::Classifier;
use crate::infra::artifact::ArtifactStore;
use crate::infra::vocab_store::VocabStore;
use crate::ml::model::{GroupClassifierConfig, GroupClassifierModel};

type InferBackend = burn::backend::NdArray;
type InferDevice = burn::backend::ndarray::NdArrayDevice;

#[derive(Debug)]
pub struct Predictor {
    model:      GroupClassifierModel<InferBackend>,
    vocab:      CategoryVocab,
    time_mean:  f64,
    time_std:   f64,
    num_groups: usize,
    device:     InferDevice,
}

impl Predictor {
    /// Rebuild the classifier from a deployed artifact directory.
    /// Reads the model config, the category vocabulary, and the
    /// weights; fails with ModelLoad if any piece is missing or
    /// inconsistent.
    pub fn from_artifact(
        artifacts: &ArtifactStore,
        vocabs:    &VocabStore,
    ) -> PredictResult<Self> {
        let device = InferDevice::default();

        let cfg = artifacts
            .load_config()
            .map_err(|e| PredictError::ModelLoad(format!("{e:#}")))?;
        let vocab = vocabs
            .load()
            .map_err(|e| PredictError::ModelLoad(format!("{e:#}")))?;

        // The embedding table and the vocabulary were written by the
        // same training run; a size mismatch means a torn artifact.
        if vocab.len() != cfg.num_categories {
            return Err(PredictError::ModelLoad(format!(
                "category vocabulary has {} entries but the model was built for {}",
                vocab.len(),
                cfg.num_categories,
            )));
        }

        let model_cfg = GroupClassifierConfig::new(cfg.num_categories, cfg.num_groups)
            .with_d_embed(cfg.d_embed)
            .with_d_hidden(cfg.d_hidden);
        let model: GroupClassifierModel<InferBackend> = model_cfg.init(&device);
        let model = artifacts
            .load_model(model, &device)
            .map_err(|e| PredictError::ModelLoad(format!("{e:#}")))?;

        tracing::info!("Model loaded from artifact directory");
        Ok(Self {
            model,
            vocab,
            time_mean: cfg.time_mean,
            time_std: cfg.time_std,
            num_groups: cfg.num_groups,
            device,
        })
    }

    /// Standardize the measurement with the training-time constants.
    /// A degenerate std (all training rows identical) falls back to
    /// the raw value rather than dividing by zero.
    fn standardize(&self, average_time: f64) -> f64 {
        if self.time_std > 0.0 {
            (average_time - self.time_mean) / self.time_std
        } else {
            average_time
        }
    }
}

impl Classifier for Predictor {
    fn predict(&self, row: &FeatureRow) -> PredictResult<RawPrediction> {
        let category_id = self.vocab.encode(&row.category);
        let time = self.standardize(row.average_time);

        let categories =
            Tensor::<InferBackend, 1, Int>::from_ints([category_id as i32], &self.device);
        let times = Tensor::<InferBackend, 2>::from_floats([[time as f32]], &self.device);

        let logits = self.model.forward(categories, times);

        let indices = logits
            .argmax(1)
            .into_data()
            .to_vec::<i64>()
            .map_err(|e| {
                PredictError::Inference(format!("cannot read class index from logits: {e:?}"))
            })?;
        let raw = indices
            .first()
            .copied()
            .ok_or_else(|| PredictError::Inference("model produced no class index".to_string()))?
            as usize;

        // argmax over [1, num_groups] cannot leave this range, but a
        // violated invariant must surface as an error, not a bad label.
        if raw >= self.num_groups {
            return Err(PredictError::Inference(format!(
                "class index {raw} out of range for {} groups",
                self.num_groups
            )));
        }

        tracing::debug!(
            "Scored category_id={} time={:.4} raw_class={}",
            category_id,
            time,
            raw
        );
        Ok(RawPrediction(raw))
    }

    fn class_count(&self) -> usize {
        self.num_groups
    }
}
