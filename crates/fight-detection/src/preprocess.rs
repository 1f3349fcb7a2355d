//! Frame preprocessing for the classifier

use crate::FightError;
use image::imageops::FilterType;
use ndarray::Array4;
use video_frames::VideoFrame;

/// Resize a frame to `size` x `size` and pack it into an NHWC tensor scaled
/// to [0, 1], the layout the trained model expects.
pub fn frame_to_tensor(frame: &VideoFrame, size: u32) -> Result<Array4<f32>, FightError> {
    let img = frame
        .to_image()
        .map_err(|e| FightError::ImageProcessing(e.to_string()))?;
    let resized = image::imageops::resize(&img, size, size, FilterType::Triangle);

    let mut tensor = Array4::<f32>::zeros((1, size as usize, size as usize, 3));
    for (x, y, pixel) in resized.enumerate_pixels() {
        tensor[[0, y as usize, x as usize, 0]] = pixel[0] as f32 / 255.0;
        tensor[[0, y as usize, x as usize, 1]] = pixel[1] as f32 / 255.0;
        tensor[[0, y as usize, x as usize, 2]] = pixel[2] as f32 / 255.0;
    }
    Ok(tensor)
}
