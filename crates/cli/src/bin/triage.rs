//! Triage prediction entry point
//!
//! `triage-predict '<json_string>'` prints `{"niveau_urgence": <int>}` on
//! success, or `{"error": "..."}` and exits 1 on any failure.

use cli::{init_logging, load_config, print_error_json, single_arg, triage_error_message};
use serde_json::Value;
use tracing::error;
use triage::{TriageConfig, TriageError, TriagePipeline, TriagePrediction};

const USAGE: &str = "Usage: triage-predict '<json_string>'";

fn main() {
    init_logging();

    let Some(raw) = single_arg() else {
        print_error_json(USAGE);
        std::process::exit(1);
    };

    match run(&raw) {
        Ok(prediction) => {
            println!(
                "{}",
                serde_json::json!({ "niveau_urgence": prediction.level.code() })
            );
        }
        Err(e) => {
            error!(error = %e, "triage prediction failed");
            print_error_json(triage_error_message(&e));
            std::process::exit(1);
        }
    }
}

/// Parse, load, encode, predict, in that order. The first failing stage
/// decides the message.
fn run(raw: &str) -> Result<TriagePrediction, TriageError> {
    let record: Value = serde_json::from_str(raw)?;
    let config: TriageConfig = load_config("triage");
    let pipeline = TriagePipeline::new(&config)?;
    pipeline.predict_record(&record)
}
