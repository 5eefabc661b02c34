// Error types for the truth fusion engine
//
// This module defines the error types for feature extraction and score fusion,
// providing structured error handling with numeric codes suitable for the
// request layer that wraps the engine.

mod extraction;
mod fusion;

pub use extraction::{log_extraction_error, ExtractionError, ExtractionErrorCodes};
pub use fusion::{log_fusion_error, FusionError, FusionErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, so callers can map engine failures onto their
/// own transport without matching on every variant.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Modality;

    #[test]
    fn test_error_code_trait_objects() {
        let extraction: &dyn ErrorCode = &ExtractionError::InvalidText;
        assert_eq!(extraction.code(), ExtractionErrorCodes::INVALID_TEXT);

        let fusion: &dyn ErrorCode = &FusionError::MissingAllInputs;
        assert_eq!(fusion.code(), FusionErrorCodes::MISSING_ALL_INPUTS);
    }

    #[test]
    fn test_code_ranges_do_not_overlap() {
        let extraction_codes = [
            ExtractionError::InvalidText.code(),
            ExtractionError::MalformedBuffer {
                modality: Modality::Voice,
                reason: "odd".to_string(),
            }
            .code(),
            ExtractionError::SampleMismatch {
                modality: Modality::Text,
            }
            .code(),
            ExtractionError::Cancelled {
                modality: Modality::Voice,
            }
            .code(),
        ];
        let fusion_codes = [
            FusionError::MissingAllInputs.code(),
            FusionError::MissingSubScore {
                modality: Modality::Facial,
                key: "gazeStability".to_string(),
            }
            .code(),
            FusionError::InvalidWeights { total: 0.0 }.code(),
        ];

        for code in extraction_codes {
            assert!((3001..=3099).contains(&code), "extraction code {}", code);
        }
        for code in fusion_codes {
            assert!((4001..=4099).contains(&code), "fusion code {}", code);
        }
    }

    #[test]
    fn test_error_propagation() {
        fn may_fail() -> Result<(), FusionError> {
            Err(FusionError::MissingAllInputs)
        }

        fn caller() -> Result<(), FusionError> {
            may_fail()?;
            Ok(())
        }

        assert_eq!(caller(), Err(FusionError::MissingAllInputs));
    }
}
