//! Fight Detection
//!
//! Frame-wise violence classification for video clips: every decodable frame
//! is scored by a convolutional model and the clip verdict comes from the
//! fraction of frames scored as a fight.

mod analysis;
mod config;
mod detector;
mod preprocess;

pub use analysis::{Verdict, VideoAnalysis};
pub use config::FightConfig;
pub use detector::FightDetector;
pub use preprocess::frame_to_tensor;

use thiserror::Error;

/// Fight detection error types
#[derive(Error, Debug)]
pub enum FightError {
    #[error("Model loading failed: {0}")]
    ModelLoad(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Failed to open video: {0}")]
    VideoOpen(String),

    #[error("Video contains no decodable frames")]
    EmptyVideo,

    #[error("Image processing failed: {0}")]
    ImageProcessing(String),
}
