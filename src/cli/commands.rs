// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Defines the arguments of the one-shot `group-predict` invocation.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → path, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;

/// All arguments for a single prediction invocation.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// JSON-encoded input record, e.g. '{"category": "A", "average_time": 12.5}'
    pub record: String,

    /// Directory holding the trained classifier artifact
    /// (weights, model config, and category vocabulary)
    #[arg(long, default_value = "models/group_classifier")]
    pub model_dir: String,
}
