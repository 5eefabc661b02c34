// Truth Fusion - multi-modal feature extraction and truth-score fusion
// Deterministic heuristic scoring of audio, video-motion and text evidence

// Module declarations
pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod fusion;
pub mod scoring;

// Re-exports for convenience
pub use analysis::{Modality, RawSample};
pub use config::EngineConfig;
pub use engine::{
    Analysis, ModalityFailure, ScoringEngine, SessionFeatures, SessionInput, SessionReport,
    TextPolicy,
};
pub use error::{ErrorCode, ExtractionError, FusionError};
pub use fusion::{FusionEngine, FusionResult};
pub use scoring::{ModalityResult, ModalityScorer};
