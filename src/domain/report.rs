// ============================================================
// Layer 3 — Report (the output contract)
// ============================================================
// The single structured outcome of an invocation. Exactly one
// report is emitted per process run, as one JSON line on stdout:
//
//   Success: {"prediction": <integer 1..N>}   exit 0
//   Failure: {"error": "<message>"}           exit 1
//
// Never both shapes, never neither, never a partial result
// alongside an error.

use serde_json::json;

use crate::domain::error::PredictError;
use crate::domain::prediction::GroupLabel;

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Success { prediction: GroupLabel },
    Failure { error: String },
}

impl Report {
    pub fn success(prediction: GroupLabel) -> Self {
        Report::Success { prediction }
    }

    /// Absorb a pipeline error into the uniform failure shape.
    /// The Display message of the error is the reported text.
    pub fn failure(err: &PredictError) -> Self {
        Report::Failure { error: err.to_string() }
    }

    /// The single JSON line written to stdout.
    /// Built through serde_json::Value, whose rendering is infallible.
    pub fn to_json_line(&self) -> String {
        match self {
            Report::Success { prediction } => {
                json!({ "prediction": prediction.value() }).to_string()
            }
            Report::Failure { error } => {
                json!({ "error": error }).to_string()
            }
        }
    }

    /// Exit status for the calling process: 0 on success,
    /// 1 on any failure. The CLI layer converts this into a
    /// std::process::ExitCode.
    pub fn exit_code(&self) -> u8 {
        match self {
            Report::Success { .. } => 0,
            Report::Failure { .. } => 1,
        }
    }
}
