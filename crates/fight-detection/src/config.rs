//! Fight detector configuration

use serde::{Deserialize, Serialize};

/// Fight detector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FightConfig {
    /// Path to the frame classifier ONNX artifact
    pub model_path: String,

    /// Model input edge length; frames are resized to size x size
    pub input_size: u32,

    /// Per-frame score at or above which a frame counts as a fight
    pub frame_threshold: f32,

    /// Fraction of fight frames the clip must strictly exceed to be a fight
    pub fight_ratio_threshold: f64,
}

impl Default for FightConfig {
    fn default() -> Self {
        Self {
            model_path: "violence_model/model.onnx".to_string(),
            input_size: 64,
            frame_threshold: 0.5,
            fight_ratio_threshold: 0.5,
        }
    }
}
