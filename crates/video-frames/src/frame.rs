//! Decoded frame type

use crate::VideoError;
use image::RgbImage;

/// Decoded RGB video frame
#[derive(Debug, Clone)]
pub struct VideoFrame {
    /// RGB pixel data (width * height * 3)
    pub data: Vec<u8>,
    /// Frame width
    pub width: u32,
    /// Frame height
    pub height: u32,
}

impl VideoFrame {
    /// Create a frame from raw RGB data.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Decode a single JPEG payload into an RGB frame.
    pub fn from_jpeg(bytes: &[u8]) -> Result<Self, VideoError> {
        let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Jpeg)
            .map_err(|e| VideoError::Decode(e.to_string()))?;
        let rgb = img.to_rgb8();
        Ok(Self {
            width: rgb.width(),
            height: rgb.height(),
            data: rgb.into_raw(),
        })
    }

    /// Reinterpret the pixel data as an `image` buffer for resizing.
    pub fn to_image(&self) -> Result<RgbImage, VideoError> {
        RgbImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            VideoError::Decode("pixel buffer does not match frame dimensions".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_image_rejects_mismatched_buffer() {
        let frame = VideoFrame::new(vec![0; 5], 2, 2);
        assert!(frame.to_image().is_err());
    }

    #[test]
    fn test_jpeg_round_trip_dimensions() {
        let img = RgbImage::from_pixel(6, 4, image::Rgb([120, 80, 40]));
        let mut encoded = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut encoded),
            image::ImageFormat::Jpeg,
        )
        .unwrap();

        let frame = VideoFrame::from_jpeg(&encoded).unwrap();
        assert_eq!(frame.width, 6);
        assert_eq!(frame.height, 4);
        assert_eq!(frame.data.len(), 6 * 4 * 3);
    }

    #[test]
    fn test_garbage_jpeg_is_a_decode_error() {
        let err = VideoFrame::from_jpeg(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap_err();
        assert!(matches!(err, VideoError::Decode(_)));
    }
}
