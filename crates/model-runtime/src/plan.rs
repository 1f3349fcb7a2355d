//! Shared plan loading and execution

use crate::ModelError;
use std::path::Path;
use tract_onnx::prelude::*;
use tracing::info;

pub(crate) type RunnablePlan = TypedSimplePlan<TypedModel>;

/// Load an ONNX artifact with a pinned input fact and optimize it into a
/// runnable plan.
pub(crate) fn load_plan(path: &Path, input_fact: InferenceFact) -> Result<RunnablePlan, ModelError> {
    info!(path = %path.display(), "loading ONNX model");
    tract_onnx::onnx()
        .model_for_path(path)
        .and_then(|model| model.with_input_fact(0, input_fact))
        .and_then(|model| model.into_optimized())
        .and_then(|model| model.into_runnable())
        .map_err(|e| ModelError::Load(e.to_string()))
}

/// Run the plan on one input tensor and flatten the first output to f32.
pub(crate) fn run_f32(plan: &RunnablePlan, input: Tensor) -> Result<Vec<f32>, ModelError> {
    let outputs = plan
        .run(tvec!(input.into()))
        .map_err(|e| ModelError::Inference(e.to_string()))?;
    let first = outputs
        .first()
        .ok_or_else(|| ModelError::OutputShape("model produced no outputs".to_string()))?;
    let view = first
        .to_array_view::<f32>()
        .map_err(|e| ModelError::OutputShape(e.to_string()))?;
    Ok(view.iter().copied().collect())
}
