// ============================================================
// Layer 2 — Predict Use Case
// ============================================================
// The whole pipeline, in mandated order:
//
//   Step 1: Load the predictor from the artifact  (Layer 5/6)
//   Step 2: Parse the JSON argument               (Layer 4)
//   Step 3: Normalize into the feature row        (Layer 4)
//   Step 4: Score the row, shift to group label   (Layer 5/3)
//
// Loading comes first on purpose: a missing or corrupt artifact
// is reported the same way for every input, valid or not. Any
// stage failure short-circuits — there are no retries anywhere.

use crate::data::normalizer::Normalizer;
use crate::data::parser::RecordParser;
use crate::domain::error::PredictResult;
use crate::domain::prediction::GroupLabel;
use crate::domain::traits::Classifier;
use crate::infra::artifact::ArtifactStore;
use crate::infra::vocab_store::VocabStore;
use crate::ml::predictor::Predictor;

pub struct PredictUseCase {
    model_dir: String,
}

impl PredictUseCase {
    pub fn new(model_dir: impl Into<String>) -> Self {
        Self { model_dir: model_dir.into() }
    }

    /// Execute the full pipeline for one raw JSON record.
    pub fn execute(&self, raw_record: &str) -> PredictResult<GroupLabel> {
        // Step 1: rebuild the trained classifier
        let artifacts = ArtifactStore::new(&self.model_dir);
        let vocabs = VocabStore::new(&self.model_dir);
        let predictor = Predictor::from_artifact(&artifacts, &vocabs)?;

        self.execute_with(&predictor, raw_record)
    }

    /// Steps 2–4 against any classifier implementation.
    /// Split out so the orchestration is testable with a stub
    /// model and no artifact on disk.
    pub fn execute_with(
        &self,
        classifier: &impl Classifier,
        raw_record: &str,
    ) -> PredictResult<GroupLabel> {
        // Step 2: parse the invocation argument
        let record = RecordParser::new().parse(raw_record)?;

        // Step 3: coerce into the trained feature schema
        let row = Normalizer::new().normalize(&record)?;

        // Step 4: score and shift into the 1-based label space
        let raw = classifier.predict(&row)?;
        let label = raw.group_label();

        tracing::info!(
            "Scored record (category='{}', average_time={}): raw class {} gives group {}",
            row.category,
            row.average_time,
            raw.index(),
            label.value()
        );
        Ok(label)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PredictError;
    use crate::domain::feature::FeatureRow;
    use crate::domain::prediction::RawPrediction;

    /// Stub classifier that always predicts the same raw index.
    struct FixedClassifier(usize);

    impl Classifier for FixedClassifier {
        fn predict(&self, _row: &FeatureRow) -> PredictResult<RawPrediction> {
            Ok(RawPrediction(self.0))
        }

        fn class_count(&self) -> usize {
            5
        }
    }

    #[test]
    fn test_raw_class_two_reports_group_three() {
        let use_case = PredictUseCase::new("unused");
        let label = use_case
            .execute_with(
                &FixedClassifier(2),
                r#"{"category": "A", "average_time": 12.5}"#,
            )
            .unwrap();
        assert_eq!(label, GroupLabel(3));
    }

    #[test]
    fn test_invalid_json_fails_before_the_classifier_runs() {
        struct PanickingClassifier;
        impl Classifier for PanickingClassifier {
            fn predict(&self, _row: &FeatureRow) -> PredictResult<RawPrediction> {
                panic!("classifier must not run for unparseable input");
            }
            fn class_count(&self) -> usize {
                5
            }
        }

        let use_case = PredictUseCase::new("unused");
        let err = use_case
            .execute_with(&PanickingClassifier, "not json")
            .unwrap_err();
        assert!(matches!(err, PredictError::InputParse(_)));
    }

    #[test]
    fn test_missing_field_surfaces_as_schema_error() {
        let use_case = PredictUseCase::new("unused");
        let err = use_case
            .execute_with(&FixedClassifier(0), r#"{"average_time": 5.0}"#)
            .unwrap_err();
        match err {
            PredictError::Schema(field) => assert_eq!(field, "category"),
            other => panic!("expected Schema, got {other:?}"),
        }
    }

    #[test]
    fn test_classifier_errors_propagate() {
        struct FailingClassifier;
        impl Classifier for FailingClassifier {
            fn predict(&self, _row: &FeatureRow) -> PredictResult<RawPrediction> {
                Err(PredictError::Inference("numeric failure".to_string()))
            }
            fn class_count(&self) -> usize {
                5
            }
        }

        let use_case = PredictUseCase::new("unused");
        let err = use_case
            .execute_with(&FailingClassifier, r#"{"category": "A", "average_time": 1.0}"#)
            .unwrap_err();
        assert!(matches!(err, PredictError::Inference(_)));
    }

    #[test]
    fn test_missing_artifact_wins_over_bad_input() {
        // Loading precedes parsing: with no artifact deployed, even an
        // unparseable record reports a load failure.
        let use_case = PredictUseCase::new("definitely/not/a/model/dir");
        let err = use_case.execute("not json").unwrap_err();
        assert!(matches!(err, PredictError::ModelLoad(_)));
    }
}
