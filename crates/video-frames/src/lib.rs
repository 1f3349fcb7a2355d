//! Video Frame Extraction
//!
//! Pulls RGB frames out of MJPEG video files (AVI containers or bare JPEG
//! streams), decoded to exhaustion one frame at a time.

mod frame;
mod reader;

pub use frame::VideoFrame;
pub use reader::FrameReader;

use thiserror::Error;

/// Video decoding error types
#[derive(Error, Debug)]
pub enum VideoError {
    #[error("Failed to open video: {0}")]
    Open(String),

    #[error("Unrecognized video format: {0}")]
    Format(String),

    #[error("Frame decode failed: {0}")]
    Decode(String),
}
