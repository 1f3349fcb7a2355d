//! Clip-level verdict aggregation

use serde::{Deserialize, Serialize};

/// Clip classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Violence detected across enough frames
    Fight,
    /// Not enough fight frames
    NonFight,
}

impl Verdict {
    /// Wire string for the verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Fight => "Fight",
            Verdict::NonFight => "NonFight",
        }
    }
}

/// Result of analyzing one clip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoAnalysis {
    /// Clip verdict
    pub verdict: Verdict,
    /// Frames scored at or above the frame threshold
    pub fight_frames: usize,
    /// Frames actually decoded and scored
    pub total_frames: usize,
    /// fight_frames / total_frames
    pub fight_ratio: f64,
}

impl VideoAnalysis {
    /// Aggregate per-frame scores into a clip verdict.
    ///
    /// A frame counts as a fight at `score >= frame_threshold`. The clip is
    /// a fight only when the ratio strictly exceeds `ratio_threshold`: a
    /// clip sitting exactly on the threshold stays `NonFight`. Returns None
    /// when there are no scores to aggregate.
    pub fn from_scores(
        scores: &[f32],
        frame_threshold: f32,
        ratio_threshold: f64,
    ) -> Option<VideoAnalysis> {
        if scores.is_empty() {
            return None;
        }

        let fight_frames = scores.iter().filter(|&&s| s >= frame_threshold).count();
        let total_frames = scores.len();
        let fight_ratio = fight_frames as f64 / total_frames as f64;
        let verdict = if fight_ratio > ratio_threshold {
            Verdict::Fight
        } else {
            Verdict::NonFight
        };

        Some(VideoAnalysis {
            verdict,
            fight_frames,
            total_frames,
            fight_ratio,
        })
    }
}
