//! Triage Pipeline
//!
//! One-shot urgency classification: a JSON patient record is coerced into
//! the model's feature layout and scored by a pre-trained tabular
//! classifier.

mod config;
mod level;
mod pipeline;

pub use config::TriageConfig;
pub use level::TriageLevel;
pub use pipeline::{TriagePipeline, TriagePrediction};

use thiserror::Error;

/// Triage error types, one variant per pipeline stage
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Invalid JSON input: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model loading failed: {0}")]
    ModelLoad(String),

    #[error("Feature encoding failed: {0}")]
    Encode(#[from] triage_features::EncodeError),

    #[error("Inference failed: {0}")]
    Inference(String),
}
