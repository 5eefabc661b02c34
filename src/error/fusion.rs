// Fusion error types and constants

use crate::analysis::Modality;
use crate::error::ErrorCode;
use log::error;
use std::fmt;

/// Fusion error code constants
///
/// Error code range: 4001-4003
pub struct FusionErrorCodes {}

impl FusionErrorCodes {
    /// No modality result was supplied to fusion
    pub const MISSING_ALL_INPUTS: i32 = 4001;

    /// A modality result lacks a sub-score the fusion step reads
    pub const MISSING_SUB_SCORE: i32 = 4002;

    /// Configured weights of the present modalities do not sum to a positive value
    pub const INVALID_WEIGHTS: i32 = 4003;
}

/// Log a fusion error with structured context
pub fn log_fusion_error(err: &FusionError, context: &str) {
    error!(
        "Fusion error in {}: code={}, component=FusionEngine, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Score fusion errors
///
/// Fusion never fabricates a score: when nothing usable is present the
/// request is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum FusionError {
    /// All three modality results were absent
    MissingAllInputs,

    /// A present result does not carry a sub-score required for its contribution
    MissingSubScore { modality: Modality, key: String },

    /// Present modality weights sum to zero or less
    InvalidWeights { total: f64 },
}

impl ErrorCode for FusionError {
    fn code(&self) -> i32 {
        match self {
            FusionError::MissingAllInputs => FusionErrorCodes::MISSING_ALL_INPUTS,
            FusionError::MissingSubScore { .. } => FusionErrorCodes::MISSING_SUB_SCORE,
            FusionError::InvalidWeights { .. } => FusionErrorCodes::INVALID_WEIGHTS,
        }
    }

    fn message(&self) -> String {
        match self {
            FusionError::MissingAllInputs => {
                "At least one modality result is required for fusion".to_string()
            }
            FusionError::MissingSubScore { modality, key } => {
                format!("{} result is missing sub-score '{}'", modality, key)
            }
            FusionError::InvalidWeights { total } => {
                format!("Modality weights must sum to a positive value (got {})", total)
            }
        }
    }
}

impl fmt::Display for FusionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FusionError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for FusionError {}
