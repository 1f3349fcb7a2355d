//! Triage configuration

use serde::{Deserialize, Serialize};
use triage_features::SymptomTable;

/// Triage pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Path to the tabular classifier ONNX artifact
    pub model_path: String,

    /// Symptom string to training-time code mapping
    pub symptoms: SymptomTable,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            model_path: "model_triage.onnx".to_string(),
            symptoms: SymptomTable::default(),
        }
    }
}
