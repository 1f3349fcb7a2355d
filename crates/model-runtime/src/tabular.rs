//! Tabular classifier over fixed-width feature rows

use crate::plan::{load_plan, run_f32, RunnablePlan};
use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tract_onnx::prelude::*;
use tracing::debug;

/// Per-class scores from one prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassScores {
    /// Raw score per class, in class-index order
    pub scores: Vec<f32>,
}

impl ClassScores {
    /// Index of the winning class; ties resolve to the lowest index.
    pub fn top_class(&self) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (index, &score) in self.scores.iter().enumerate() {
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((index, score)),
            }
        }
        best.map(|(index, _)| index)
    }
}

/// Classifier taking one row of features, e.g. a random-forest export
pub struct TabularClassifier {
    plan: RunnablePlan,
    input_width: usize,
}

impl TabularClassifier {
    /// Load a tabular model expecting `[1, input_width]` f32 input.
    pub fn load(path: impl AsRef<Path>, input_width: usize) -> Result<Self, ModelError> {
        let fact = f32::fact([1, input_width]).into();
        Ok(Self {
            plan: load_plan(path.as_ref(), fact)?,
            input_width,
        })
    }

    /// Run the model on one feature row and return the per-class scores.
    pub fn predict(&self, features: &[f32]) -> Result<ClassScores, ModelError> {
        if features.len() != self.input_width {
            return Err(ModelError::InputShape {
                expected: format!("[1, {}]", self.input_width),
                actual: format!("[1, {}]", features.len()),
            });
        }

        let tensor = Tensor::from_shape(&[1, self.input_width], features)
            .map_err(|e| ModelError::Inference(e.to_string()))?;
        let scores = run_f32(&self.plan, tensor)?;
        if scores.is_empty() {
            return Err(ModelError::OutputShape("empty score tensor".to_string()));
        }
        debug!(?scores, "tabular prediction");
        Ok(ClassScores { scores })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_class_argmax() {
        let scores = ClassScores {
            scores: vec![0.1, 0.7, 0.2],
        };
        assert_eq!(scores.top_class(), Some(1));
    }

    #[test]
    fn test_top_class_tie_resolves_to_lowest_index() {
        let scores = ClassScores {
            scores: vec![0.4, 0.4, 0.2],
        };
        assert_eq!(scores.top_class(), Some(0));
    }

    #[test]
    fn test_top_class_empty() {
        let scores = ClassScores { scores: vec![] };
        assert_eq!(scores.top_class(), None);
    }

    #[test]
    fn test_load_missing_artifact_is_a_load_error() {
        let err = TabularClassifier::load("does-not-exist.onnx", 8).unwrap_err();
        assert!(matches!(err, ModelError::Load(_)));
    }
}
