//! ONNX Model Runtime
//!
//! Thin loading and inference layer over tract-onnx for the pre-trained
//! classifiers. Models are loaded fresh per invocation and owned by the
//! pipeline that loaded them; there is no caching, retry, or fallback.

mod frame;
mod plan;
mod tabular;

pub use frame::FrameClassifier;
pub use tabular::{ClassScores, TabularClassifier};

use thiserror::Error;

/// Errors during model loading or inference
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model load failed: {0}")]
    Load(String),
    #[error("Inference failed: {0}")]
    Inference(String),
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InputShape { expected: String, actual: String },
    #[error("Unexpected model output: {0}")]
    OutputShape(String),
}
