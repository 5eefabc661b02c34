//! Session analysis: run all three modality pipelines and fuse the results.
//!
//! The pipelines are independent until fusion, so they run concurrently,
//! on scoped threads in the blocking API and on the tokio blocking pool in
//! the async one. A failing modality is logged and reported in
//! `SessionReport::failures`; the remaining modalities are still fused.

use std::panic;

use serde::{Deserialize, Serialize};
use tokio::task::JoinError;

use crate::analysis::{AudioFeatures, LinguisticFeatures, Modality, MotionFeatures};
use crate::engine::{Analysis, ScoringEngine, TextPolicy};
use crate::error::{log_extraction_error, log_fusion_error, ErrorCode, ExtractionError, FusionError};
use crate::fusion::FusionResult;
use crate::scoring::ModalityResult;

type Outcome<F> = Option<Result<Analysis<F>, ExtractionError>>;

/// Raw samples of one session; `None` means the modality was not captured
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInput {
    pub voice: Option<Vec<u8>>,
    pub facial: Option<Vec<u8>>,
    pub text: Option<String>,
    pub text_policy: TextPolicy,
}

impl SessionInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_voice(mut self, bytes: Vec<u8>) -> Self {
        self.voice = Some(bytes);
        self
    }

    pub fn with_facial(mut self, bytes: Vec<u8>) -> Self {
        self.facial = Some(bytes);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_text_policy(mut self, policy: TextPolicy) -> Self {
        self.text_policy = policy;
        self
    }
}

/// Extraction failure of a single modality within a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalityFailure {
    pub modality: Modality,
    pub code: i32,
    pub message: String,
}

impl ModalityFailure {
    fn new(modality: Modality, err: &ExtractionError) -> Self {
        Self {
            modality,
            code: err.code(),
            message: err.message(),
        }
    }
}

/// Raw features behind each scored modality
///
/// A modality scored from its "no data" default carries no features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFeatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<AudioFeatures>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facial: Option<MotionFeatures>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<LinguisticFeatures>,
}

impl SessionFeatures {
    pub fn is_empty(&self) -> bool {
        self.voice.is_none() && self.facial.is_none() && self.text.is_none()
    }
}

/// Per-modality results and the fused outcome of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<ModalityResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facial: Option<ModalityResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<ModalityResult>,
    #[serde(default, skip_serializing_if = "SessionFeatures::is_empty")]
    pub features: SessionFeatures,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ModalityFailure>,
    pub truth: FusionResult,
}

impl ScoringEngine {
    /// Analyze a session, scoring the modalities on scoped threads
    ///
    /// # Errors
    /// Fusion errors only; `MissingAllInputs` when no modality was provided
    /// or every provided modality failed extraction.
    pub fn analyze_session(&self, input: &SessionInput) -> Result<SessionReport, FusionError> {
        let span = tracing::info_span!(
            "analyze_session",
            voice = input.voice.is_some(),
            facial = input.facial.is_some(),
            text = input.text.is_some()
        );
        let _guard = span.enter();

        let (voice, facial, text) = std::thread::scope(|scope| {
            let voice = scope.spawn(|| {
                input
                    .voice
                    .as_deref()
                    .map(|bytes| self.analyze_voice(bytes))
            });
            let facial = scope.spawn(|| {
                input
                    .facial
                    .as_deref()
                    .map(|bytes| Ok(self.analyze_facial(bytes)))
            });
            let text = input
                .text
                .as_deref()
                .map(|text| self.analyze_text(text, &input.text_policy));

            let voice = voice
                .join()
                .unwrap_or_else(|payload| panic::resume_unwind(payload));
            let facial = facial
                .join()
                .unwrap_or_else(|payload| panic::resume_unwind(payload));
            (voice, facial, text)
        });

        self.assemble(voice, facial, text)
    }

    /// Async form of [`Self::analyze_session`] for callers on a tokio runtime
    ///
    /// Each pipeline is CPU-bound, so it runs on the blocking pool instead of
    /// the async worker threads.
    pub async fn analyze_session_async(
        &self,
        input: SessionInput,
    ) -> Result<SessionReport, FusionError> {
        let SessionInput {
            voice,
            facial,
            text,
            text_policy,
        } = input;

        let engine = self.clone();
        let voice_task = tokio::task::spawn_blocking(move || {
            voice.map(|bytes| engine.analyze_voice(&bytes))
        });
        let engine = self.clone();
        let facial_task = tokio::task::spawn_blocking(move || {
            facial.map(|bytes| Ok(engine.analyze_facial(&bytes)))
        });
        let engine = self.clone();
        let text_task = tokio::task::spawn_blocking(move || {
            text.map(|text| engine.analyze_text(&text, &text_policy))
        });

        let (voice, facial, text) = tokio::join!(voice_task, facial_task, text_task);
        self.assemble(
            joined(Modality::Voice, voice),
            joined(Modality::Facial, facial),
            joined(Modality::Text, text),
        )
    }

    fn assemble(
        &self,
        voice: Outcome<AudioFeatures>,
        facial: Outcome<MotionFeatures>,
        text: Outcome<LinguisticFeatures>,
    ) -> Result<SessionReport, FusionError> {
        let mut failures = Vec::new();
        let (voice, voice_features) = settle(Modality::Voice, voice, &mut failures);
        let (facial, facial_features) = settle(Modality::Facial, facial, &mut failures);
        let (text, text_features) = settle(Modality::Text, text, &mut failures);

        let truth = match self.fuse(voice.as_ref(), facial.as_ref(), text.as_ref()) {
            Ok(truth) => truth,
            Err(err) => {
                log_fusion_error(&err, "analyze_session");
                return Err(err);
            }
        };

        tracing::info!(
            truthfulness = truth.truthfulness,
            confidence = truth.confidence,
            failures = failures.len(),
            "session analyzed"
        );

        Ok(SessionReport {
            voice,
            facial,
            text,
            features: SessionFeatures {
                voice: voice_features,
                facial: facial_features,
                text: text_features,
            },
            failures,
            truth,
        })
    }
}

/// Split a pipeline outcome into its result and features, recording failures
fn settle<F>(
    modality: Modality,
    outcome: Outcome<F>,
    failures: &mut Vec<ModalityFailure>,
) -> (Option<ModalityResult>, Option<F>) {
    match outcome {
        Some(Ok(analysis)) => (Some(analysis.result), analysis.features),
        Some(Err(err)) => {
            log_extraction_error(&err, modality.as_str());
            failures.push(ModalityFailure::new(modality, &err));
            (None, None)
        }
        None => (None, None),
    }
}

/// Unwrap a blocking task; panics propagate, cancellation becomes a failure
fn joined<T>(
    modality: Modality,
    result: Result<Option<Result<T, ExtractionError>>, JoinError>,
) -> Option<Result<T, ExtractionError>> {
    match result {
        Ok(outcome) => outcome,
        Err(err) if err.is_panic() => panic::resume_unwind(err.into_panic()),
        Err(err) => {
            log::warn!("[ScoringEngine] {} pipeline did not complete: {}", modality, err);
            Some(Err(ExtractionError::Cancelled { modality }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cancelled_task_becomes_failure() {
        let task = tokio::spawn(std::future::pending::<Option<Result<(), ExtractionError>>>());
        task.abort();
        let err = task.await.unwrap_err();
        assert!(err.is_cancelled());

        assert_eq!(
            joined::<()>(Modality::Facial, Err(err)),
            Some(Err(ExtractionError::Cancelled {
                modality: Modality::Facial
            }))
        );
    }

    #[test]
    fn test_completed_task_passes_through() {
        let outcome: Option<Result<u8, ExtractionError>> = Some(Ok(7));
        assert_eq!(joined(Modality::Voice, Ok(outcome.clone())), outcome);
        assert_eq!(joined::<u8>(Modality::Text, Ok(None)), None);
    }

    #[test]
    fn test_cancelled_outcome_is_recorded_as_failure() {
        let mut failures = Vec::new();
        let outcome: Outcome<AudioFeatures> = Some(Err(ExtractionError::Cancelled {
            modality: Modality::Voice,
        }));
        let (result, features) = settle(Modality::Voice, outcome, &mut failures);

        assert!(result.is_none());
        assert!(features.is_none());
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].code, crate::error::ExtractionErrorCodes::CANCELLED);
    }
}
