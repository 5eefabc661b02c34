// Extraction error types and constants

use crate::analysis::Modality;
use crate::error::ErrorCode;
use log::error;
use std::fmt;

/// Extraction error code constants
///
/// Single source of truth for the numeric codes reported by
/// [`ExtractionError::code`].
///
/// Error code range: 3001-3004
pub struct ExtractionErrorCodes {}

impl ExtractionErrorCodes {
    /// Empty or whitespace-only transcript where text is mandatory
    pub const INVALID_TEXT: i32 = 3001;

    /// Structurally invalid byte buffer (e.g. odd length for 16-bit PCM)
    pub const MALFORMED_BUFFER: i32 = 3002;

    /// Sample kind does not match the requested modality
    pub const SAMPLE_MISMATCH: i32 = 3003;

    /// Modality pipeline was cancelled before it produced a result
    pub const CANCELLED: i32 = 3004;
}

/// Log an extraction error with structured context
///
/// Logs the numeric code, the failing component and the message so a
/// failed modality can be traced without aborting the rest of the session.
pub fn log_extraction_error(err: &ExtractionError, context: &str) {
    error!(
        "Extraction error in {}: code={}, component=FeatureExtractor, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Feature extraction errors
///
/// Empty-but-valid buffers are not errors; they produce the modality's
/// default result. Only structurally invalid input ends up here.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionError {
    /// Transcript was empty or whitespace-only and text is mandatory
    InvalidText,

    /// Byte buffer cannot be decoded into samples
    MalformedBuffer { modality: Modality, reason: String },

    /// A text sample was given to a byte modality or vice versa
    SampleMismatch { modality: Modality },

    /// The pipeline task was cancelled (e.g. during runtime shutdown)
    Cancelled { modality: Modality },
}

impl ErrorCode for ExtractionError {
    fn code(&self) -> i32 {
        match self {
            ExtractionError::InvalidText => ExtractionErrorCodes::INVALID_TEXT,
            ExtractionError::MalformedBuffer { .. } => ExtractionErrorCodes::MALFORMED_BUFFER,
            ExtractionError::SampleMismatch { .. } => ExtractionErrorCodes::SAMPLE_MISMATCH,
            ExtractionError::Cancelled { .. } => ExtractionErrorCodes::CANCELLED,
        }
    }

    fn message(&self) -> String {
        match self {
            ExtractionError::InvalidText => {
                "Transcript is empty, whitespace-only or has no words but text is required"
                    .to_string()
            }
            ExtractionError::MalformedBuffer { modality, reason } => {
                format!("Malformed {} buffer: {}", modality, reason)
            }
            ExtractionError::SampleMismatch { modality } => {
                format!("Sample kind does not match the {} modality", modality)
            }
            ExtractionError::Cancelled { modality } => {
                format!("The {} pipeline was cancelled before completing", modality)
            }
        }
    }
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExtractionError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for ExtractionError {}
