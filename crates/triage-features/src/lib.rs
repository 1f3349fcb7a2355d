//! Triage Feature Encoding
//!
//! Turns a loosely-typed patient record into the fixed-order numeric vector
//! the triage model was trained on.

mod encoder;
mod symptoms;

pub use encoder::{EncodeError, FeatureEncoder, FeatureVector, FEATURE_DIMENSION};
pub use symptoms::SymptomTable;
