//! Error types for the scoring engine
//!
//! The engine is deliberately hard to fail: missing or malformed payload
//! fields degrade to zero during normalization. The remaining error
//! surface is a caller handing `score` a record that violates the
//! non-negative invariant.

use thiserror::Error;

/// Scoring error types
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("negative value {value} for nutrient field `{field}`")]
    NegativeNutrient { field: &'static str, value: f64 },
}

/// Result type for scoring operations
pub type ScoreResult<T> = Result<T, ScoreError>;
