// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// The binary has exactly one operation: score one JSON-encoded
// record against the trained group classifier and print one
// JSON result line. There are no subcommands.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use clap::Parser;
use std::process::ExitCode;

use commands::PredictArgs;
use crate::application::predict_use_case::PredictUseCase;
use crate::domain::report::Report;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "group-predict",
    version = "0.1.0",
    about = "Score one labeled record against the trained group classifier."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: PredictArgs,
}

impl Cli {
    /// Run the single prediction and convert the outcome into the
    /// process's output contract: exactly one JSON line on stdout
    /// (success or error, never both) plus the matching exit code.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> ExitCode {
        let use_case = PredictUseCase::new(self.args.model_dir);

        let report = match use_case.execute(&self.args.record) {
            Ok(label) => {
                tracing::info!("Prediction succeeded: group {}", label.value());
                Report::success(label)
            }
            Err(err) => {
                // Every pipeline failure is absorbed here and reported
                // through the same structured shape; nothing unstructured
                // ever reaches stdout.
                tracing::error!("Prediction failed: {err}");
                Report::failure(&err)
            }
        };

        println!("{}", report.to_json_line());
        ExitCode::from(report.exit_code())
    }
}
