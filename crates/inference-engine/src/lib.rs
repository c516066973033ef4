//! Price Model Inference
//!
//! Wraps the externally trained price pipeline behind a single `predict`
//! capability. Nothing outside this crate depends on the artifact format.

mod engine;

pub use engine::{PriceEngine, PriceModel};

use thiserror::Error;

/// Errors during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Prediction failed: {0}")]
    PredictionFailed(String),
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: String, actual: String },
}
