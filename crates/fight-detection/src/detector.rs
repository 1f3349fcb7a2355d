//! Clip analysis driver

use crate::preprocess::frame_to_tensor;
use crate::{FightConfig, FightError, VideoAnalysis};
use model_runtime::FrameClassifier;
use std::path::Path;
use tracing::{debug, info};
use video_frames::{FrameReader, VideoFrame};

/// Frame-wise fight detector
pub struct FightDetector {
    model: FrameClassifier,
    config: FightConfig,
}

impl FightDetector {
    /// Load the frame classifier from the configured path.
    pub fn new(config: FightConfig) -> Result<Self, FightError> {
        let model = FrameClassifier::load(&config.model_path, config.input_size as usize)
            .map_err(|e| FightError::ModelLoad(e.to_string()))?;
        Ok(Self { model, config })
    }

    /// Score a single frame; higher means more fight-like.
    pub fn score_frame(&self, frame: &VideoFrame) -> Result<f32, FightError> {
        let tensor = frame_to_tensor(frame, self.config.input_size)?;
        self.model
            .score(tensor)
            .map_err(|e| FightError::Inference(e.to_string()))
    }

    /// Analyze a whole clip, reading frames to exhaustion.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<VideoAnalysis, FightError> {
        let mut reader =
            FrameReader::open(path.as_ref()).map_err(|e| FightError::VideoOpen(e.to_string()))?;

        let mut scores = Vec::new();
        while let Some(frame) = reader.next_frame() {
            let score = self.score_frame(&frame)?;
            debug!(frame = scores.len(), score, "frame scored");
            scores.push(score);
        }

        let analysis = VideoAnalysis::from_scores(
            &scores,
            self.config.frame_threshold,
            self.config.fight_ratio_threshold,
        )
        .ok_or(FightError::EmptyVideo)?;

        info!(
            verdict = analysis.verdict.as_str(),
            fight_frames = analysis.fight_frames,
            total_frames = analysis.total_frames,
            "clip analyzed"
        );
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_is_a_load_error() {
        let config = FightConfig {
            model_path: "does-not-exist.onnx".to_string(),
            ..Default::default()
        };
        let err = FightDetector::new(config).unwrap_err();
        assert!(matches!(err, FightError::ModelLoad(_)));
    }
}
