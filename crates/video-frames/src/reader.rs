//! MJPEG container reading

use crate::{VideoError, VideoFrame};
use std::fs;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, warn};

/// Stream of decodable frames from a video file.
///
/// Supports MJPEG inside RIFF/AVI containers and bare concatenated JPEG
/// streams. Frames are yielded in file order until exhaustion; payloads that
/// fail to decode are skipped, not fatal.
pub struct FrameReader {
    data: Vec<u8>,
    payloads: Vec<Range<usize>>,
    next: usize,
}

impl FrameReader {
    /// Open a video file and index its frame payloads.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, VideoError> {
        let path = path.as_ref();
        let data = fs::read(path)
            .map_err(|e| VideoError::Open(format!("{}: {}", path.display(), e)))?;
        let reader = Self::from_bytes(data)?;
        debug!(path = %path.display(), frames = reader.payloads.len(), "indexed video");
        Ok(reader)
    }

    /// Index an in-memory video.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, VideoError> {
        let payloads = if data.starts_with(b"RIFF") {
            index_riff(&data)?
        } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            index_jpeg_stream(&data)
        } else {
            return Err(VideoError::Format(
                "neither a RIFF/AVI container nor a JPEG stream".to_string(),
            ));
        };
        Ok(Self {
            data,
            payloads,
            next: 0,
        })
    }

    /// Number of indexed (not necessarily decodable) frame payloads.
    pub fn frame_count(&self) -> usize {
        self.payloads.len()
    }

    /// Decode the next frame, skipping payloads that fail to decode.
    pub fn next_frame(&mut self) -> Option<VideoFrame> {
        while self.next < self.payloads.len() {
            let range = self.payloads[self.next].clone();
            self.next += 1;
            match VideoFrame::from_jpeg(&self.data[range]) {
                Ok(frame) => return Some(frame),
                Err(e) => warn!(error = %e, "skipping undecodable frame"),
            }
        }
        None
    }
}

impl Iterator for FrameReader {
    type Item = VideoFrame;

    fn next(&mut self) -> Option<VideoFrame> {
        self.next_frame()
    }
}

/// Index `..db`/`..dc` stream payloads inside a RIFF AVI.
fn index_riff(data: &[u8]) -> Result<Vec<Range<usize>>, VideoError> {
    // Layout: "RIFF" <u32 size> "AVI " <chunks>
    if data.len() < 12 || &data[8..12] != b"AVI " {
        return Err(VideoError::Format("RIFF file is not an AVI".to_string()));
    }
    let mut payloads = Vec::new();
    walk_chunks(data, 12, data.len(), &mut payloads);
    Ok(payloads)
}

/// Walk a run of RIFF chunks, descending into LIST bodies.
fn walk_chunks(data: &[u8], mut pos: usize, end: usize, out: &mut Vec<Range<usize>>) {
    let end = end.min(data.len());
    while pos + 8 <= end {
        let id = &data[pos..pos + 4];
        let size = u32::from_le_bytes([data[pos + 4], data[pos + 5], data[pos + 6], data[pos + 7]])
            as usize;
        let body = pos + 8;
        // Clamp a truncated final chunk to the available bytes.
        let body_end = body.saturating_add(size).min(end);

        if id == b"LIST" && size >= 4 {
            // Skip the list-type fourcc, then walk the subchunks.
            walk_chunks(data, body + 4, body_end, out);
        } else if is_video_chunk(id) && body < body_end {
            out.push(body..body_end);
        }

        // Chunks are word-aligned: odd sizes carry a pad byte.
        pos = body + size + (size & 1);
    }
}

/// Stream data chunks are "##db" or "##dc" where ## is the stream number.
fn is_video_chunk(id: &[u8]) -> bool {
    id.len() == 4
        && id[0].is_ascii_digit()
        && id[1].is_ascii_digit()
        && (&id[2..4] == b"db" || &id[2..4] == b"dc")
}

/// Index frames in a bare JPEG stream by SOI/EOI marker pairs.
fn index_jpeg_stream(data: &[u8]) -> Vec<Range<usize>> {
    let mut payloads = Vec::new();
    let mut pos = 0;
    while pos + 2 <= data.len() {
        if data[pos] == 0xFF && data[pos + 1] == 0xD8 {
            let mut cursor = pos + 2;
            while cursor + 2 <= data.len() && !(data[cursor] == 0xFF && data[cursor + 1] == 0xD9) {
                cursor += 1;
            }
            let frame_end = (cursor + 2).min(data.len());
            payloads.push(pos..frame_end);
            pos = frame_end;
        } else {
            pos += 1;
        }
    }
    payloads
}
