// Analysis module - feature extraction for the three evidence channels
//
// Each modality has its own extractor that turns a raw sample into a
// bounded feature struct:
// - audio: amplitude, spectral and periodicity features from PCM bytes
// - motion: frame-difference intensity and stability from raw video bytes
// - text: sentiment, lexical diversity and marker words from a transcript
//
// Extractors are stateless apart from their immutable configuration, so a
// single instance can be shared across concurrent requests.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod audio;
pub mod motion;
pub mod text;

pub use audio::{AudioFeatureExtractor, AudioFeatures};
pub use motion::{MotionFeatureExtractor, MotionFeatures};
pub use text::{LinguisticFeatures, MarkerCounts, TextFeatureExtractor};

/// Independent channel of input evidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Audio sample scored by the voice scorer
    Voice,
    /// Video/image bytes scored by the facial scorer
    Facial,
    /// Transcript scored by the text scorer
    Text,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Voice, Modality::Facial, Modality::Text];

    pub fn as_str(self) -> &'static str {
        match self {
            Modality::Voice => "voice",
            Modality::Facial => "facial",
            Modality::Text => "text",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw input for one modality, already decoded from any transport encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSample {
    /// Audio PCM or video/image bytes
    Bytes(Vec<u8>),
    /// Transcript text
    Text(String),
}

impl RawSample {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            RawSample::Bytes(bytes) => Some(bytes),
            RawSample::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawSample::Bytes(_) => None,
            RawSample::Text(text) => Some(text),
        }
    }
}

impl From<Vec<u8>> for RawSample {
    fn from(bytes: Vec<u8>) -> Self {
        RawSample::Bytes(bytes)
    }
}

impl From<&[u8]> for RawSample {
    fn from(bytes: &[u8]) -> Self {
        RawSample::Bytes(bytes.to_vec())
    }
}

impl From<String> for RawSample {
    fn from(text: String) -> Self {
        RawSample::Text(text)
    }
}

impl From<&str> for RawSample {
    fn from(text: &str) -> Self {
        RawSample::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modality_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Modality::Facial).unwrap(), "\"facial\"");
        let parsed: Modality = serde_json::from_str("\"voice\"").unwrap();
        assert_eq!(parsed, Modality::Voice);
    }

    #[test]
    fn test_modality_order_is_voice_facial_text() {
        let mut sorted = vec![Modality::Text, Modality::Voice, Modality::Facial];
        sorted.sort();
        assert_eq!(sorted, Modality::ALL.to_vec());
    }

    #[test]
    fn test_raw_sample_accessors() {
        let bytes = RawSample::from(vec![1u8, 2, 3]);
        assert_eq!(bytes.as_bytes(), Some(&[1u8, 2, 3][..]));
        assert_eq!(bytes.as_text(), None);

        let text = RawSample::from("hello");
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_bytes().is_none());
    }
}
