//! Frame-wise image classifier

use crate::plan::{load_plan, run_f32, RunnablePlan};
use crate::ModelError;
use ndarray::Array4;
use std::path::Path;
use tract_onnx::prelude::*;

/// Single-output CNN scoring one RGB frame at a time.
///
/// The input layout is NHWC, `[1, size, size, 3]`, matching the trained
/// export; the output is a single sigmoid score.
pub struct FrameClassifier {
    plan: RunnablePlan,
    input_size: usize,
}

impl FrameClassifier {
    /// Load a frame model expecting `[1, input_size, input_size, 3]` input.
    pub fn load(path: impl AsRef<Path>, input_size: usize) -> Result<Self, ModelError> {
        let fact = f32::fact([1, input_size, input_size, 3]).into();
        Ok(Self {
            plan: load_plan(path.as_ref(), fact)?,
            input_size,
        })
    }

    /// Model input edge length.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Score one preprocessed NHWC frame tensor.
    pub fn score(&self, frame: Array4<f32>) -> Result<f32, ModelError> {
        let expected = (1, self.input_size, self.input_size, 3);
        if frame.dim() != expected {
            return Err(ModelError::InputShape {
                expected: format!("{:?}", expected),
                actual: format!("{:?}", frame.dim()),
            });
        }

        // The array was filled in standard layout, so the raw vec is NHWC.
        let tensor = Tensor::from_shape(
            &[1, self.input_size, self.input_size, 3],
            &frame.into_raw_vec(),
        )
        .map_err(|e| ModelError::Inference(e.to_string()))?;

        let output = run_f32(&self.plan, tensor)?;
        output
            .first()
            .copied()
            .ok_or_else(|| ModelError::OutputShape("empty score tensor".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_artifact_is_a_load_error() {
        let err = FrameClassifier::load("does-not-exist.onnx", 64).unwrap_err();
        assert!(matches!(err, ModelError::Load(_)));
    }
}
