//! Parse, encode, and predict orchestration

use crate::{TriageConfig, TriageError, TriageLevel};
use model_runtime::TabularClassifier;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use triage_features::{FeatureEncoder, FEATURE_DIMENSION};

/// Prediction result for one patient record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriagePrediction {
    /// Predicted urgency level
    pub level: TriageLevel,
    /// Winning class index
    pub class_index: usize,
    /// Raw per-class scores
    pub scores: Vec<f32>,
}

/// One-shot triage pipeline owning the encoder and the loaded model
pub struct TriagePipeline {
    encoder: FeatureEncoder,
    model: TabularClassifier,
}

impl TriagePipeline {
    /// Build the encoder and load the model from the configured path.
    pub fn new(config: &TriageConfig) -> Result<Self, TriageError> {
        let model = TabularClassifier::load(&config.model_path, FEATURE_DIMENSION)
            .map_err(|e| TriageError::ModelLoad(e.to_string()))?;
        Ok(Self {
            encoder: FeatureEncoder::new(config.symptoms.clone()),
            model,
        })
    }

    /// Run the full pipeline on a raw JSON string.
    pub fn predict_json(&self, raw: &str) -> Result<TriagePrediction, TriageError> {
        let record: Value = serde_json::from_str(raw)?;
        self.predict_record(&record)
    }

    /// Run encoding and inference on an already-parsed record.
    pub fn predict_record(&self, record: &Value) -> Result<TriagePrediction, TriageError> {
        let features = self.encoder.encode(record)?;
        debug!(?features, "patient record encoded");

        let scores = self
            .model
            .predict(&features.values)
            .map_err(|e| TriageError::Inference(e.to_string()))?;
        let class_index = scores
            .top_class()
            .ok_or_else(|| TriageError::Inference("empty score tensor".to_string()))?;
        let level = TriageLevel::from_class(class_index).ok_or_else(|| {
            TriageError::Inference(format!("model produced unknown class {class_index}"))
        })?;

        info!(level = level.as_str(), class = class_index, "triage prediction");
        Ok(TriagePrediction {
            level,
            class_index,
            scores: scores.scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_is_a_load_error() {
        let config = TriageConfig {
            model_path: "does-not-exist.onnx".to_string(),
            ..Default::default()
        };
        let err = TriagePipeline::new(&config).unwrap_err();
        assert!(matches!(err, TriageError::ModelLoad(_)));
    }

    #[test]
    fn test_parse_failure_maps_to_parse_variant() {
        let err = serde_json::from_str::<Value>("{not json").unwrap_err();
        let err: TriageError = err.into();
        assert!(matches!(err, TriageError::Parse(_)));
    }
}
