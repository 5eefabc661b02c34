// TextFeatureExtractor - lexical features from a transcript
//
// Module organization:
// - types: Data structures (LinguisticFeatures, MarkerCounts)
// - lexicon: closed word lists (sentiment, hedging, confidence,
//   contradiction, deception filler)
// - mod.rs: tokenizer and coordinator (TextFeatureExtractor)
//
// Tokens are whitespace-separated, lower-cased and stripped of leading and
// trailing punctuation so that "Maybe," counts as the hedge "maybe".

mod lexicon;
mod types;

pub use types::{LinguisticFeatures, MarkerCounts};

use std::collections::HashSet;

use crate::error::ExtractionError;

/// Sentence terminators
const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];

/// Split text into normalized tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// True when at least one token survives normalization
///
/// A raw token survives edge trimming exactly when it contains an
/// alphanumeric character.
pub fn has_words(text: &str) -> bool {
    text.split_whitespace()
        .any(|raw| raw.chars().any(char::is_alphanumeric))
}

/// Count sentences, discarding blank fragments; never returns 0
pub fn count_sentences(text: &str) -> u32 {
    let count = text
        .split(SENTENCE_DELIMITERS)
        .filter(|fragment| !fragment.trim().is_empty())
        .count();
    count.max(1) as u32
}

fn count_matches(tokens: &[String], list: &HashSet<&'static str>) -> u32 {
    tokens
        .iter()
        .filter(|token| list.contains(token.as_str()))
        .count() as u32
}

/// Extracts sentiment, diversity and marker features from text
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFeatureExtractor;

impl TextFeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract linguistic features from a transcript
    ///
    /// # Errors
    /// `InvalidText` when the transcript has no word tokens (empty,
    /// whitespace-only or punctuation-only)
    pub fn extract(&self, text: &str) -> Result<LinguisticFeatures, ExtractionError> {
        if !has_words(text) {
            return Err(ExtractionError::InvalidText);
        }

        let tokens = tokenize(text);
        let word_count = tokens.len() as u32;
        let sentence_count = count_sentences(text);

        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        let vocabulary_diversity = if tokens.is_empty() {
            0.0
        } else {
            unique.len() as f64 / tokens.len() as f64
        };

        let positive_count = count_matches(&tokens, &lexicon::POSITIVE);
        let negative_count = count_matches(&tokens, &lexicon::NEGATIVE);
        let sentiment_score = ((positive_count as f64 - negative_count as f64)
            / tokens.len().max(1) as f64)
            .clamp(-1.0, 1.0);

        let marker_counts = MarkerCounts {
            hedging: count_matches(&tokens, &lexicon::HEDGING),
            confidence: count_matches(&tokens, &lexicon::CONFIDENCE),
            contradiction: count_matches(&tokens, &lexicon::CONTRADICTION),
            deception: count_matches(&tokens, &lexicon::DECEPTION),
        };

        let features = LinguisticFeatures {
            word_count,
            sentence_count,
            avg_words_per_sentence: word_count as f64 / sentence_count as f64,
            vocabulary_diversity,
            sentiment_score,
            positive_count,
            negative_count,
            marker_counts,
        };

        log::debug!(
            "[TextFeatureExtractor] {} words, {} sentences, sentiment={:.3}, markers={:?}",
            features.word_count,
            features.sentence_count,
            features.sentiment_score,
            features.marker_counts
        );

        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> LinguisticFeatures {
        TextFeatureExtractor::new().extract(text).unwrap()
    }

    #[test]
    fn test_repeated_positive_word() {
        let features = extract("good good good");
        assert!(features.sentiment_score > 0.0);
        assert!(features.sentiment_score <= 1.0);
        assert_eq!(features.positive_count, 3);
        assert_eq!(features.negative_count, 0);
        assert!((features.vocabulary_diversity - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_sentiment_is_normalized_by_token_count() {
        let features = extract("I had a good day but a bad night");
        assert_eq!(features.sentiment_score, 0.0);

        let features = extract("the food was great");
        assert!((features.sentiment_score - 0.25).abs() < 1e-12);

        let features = extract("I hate this awful place");
        assert!((features.sentiment_score + 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_blank_text_is_invalid() {
        let extractor = TextFeatureExtractor::new();
        assert_eq!(extractor.extract(""), Err(ExtractionError::InvalidText));
        assert_eq!(extractor.extract(" \n\t "), Err(ExtractionError::InvalidText));
    }

    #[test]
    fn test_sentence_splitting() {
        assert_eq!(count_sentences("One. Two! Three?"), 3);
        assert_eq!(count_sentences("Wait... what?!"), 2);
        assert_eq!(count_sentences("no terminator here"), 1);
        assert_eq!(count_sentences("..."), 1);

        let features = extract("I was home. I slept early!");
        assert_eq!(features.sentence_count, 2);
        assert_eq!(features.word_count, 6);
        assert!((features.avg_words_per_sentence - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_markers_are_exact_case_insensitive_tokens() {
        let features = extract(
            "Honestly, I MAYBE went there. But actually I definitely left. Butter is stillness.",
        );
        assert_eq!(features.marker_counts.hedging, 1);
        assert_eq!(features.marker_counts.confidence, 1);
        // "Butter" and "stillness" are not contradiction markers
        assert_eq!(features.marker_counts.contradiction, 1);
        assert_eq!(features.marker_counts.deception, 2);
    }

    #[test]
    fn test_tokenize_strips_edge_punctuation() {
        assert_eq!(
            tokenize("\"Really?\" she said -- don't."),
            vec!["really", "she", "said", "don't"]
        );
    }

    #[test]
    fn test_punctuation_only_text_has_no_tokens() {
        assert!(tokenize("?!").is_empty());
        assert!(tokenize("... --- !!!").is_empty());
        assert!(!has_words("?!"));
        assert!(!has_words(" \n "));
        assert!(has_words("-- ok."));
    }

    #[test]
    fn test_punctuation_only_text_is_invalid() {
        let extractor = TextFeatureExtractor::new();
        assert_eq!(extractor.extract("?!"), Err(ExtractionError::InvalidText));
        assert_eq!(
            extractor.extract("... --- !!!"),
            Err(ExtractionError::InvalidText)
        );
    }

    #[test]
    fn test_has_words_agrees_with_tokenize() {
        for text in ["?!", "a", "\"Really?\"", "...", "-- 42 --", "", "don't"] {
            assert_eq!(has_words(text), !tokenize(text).is_empty(), "{:?}", text);
        }
    }

    #[test]
    fn test_deception_ratio() {
        let features = extract("basically literally nothing happened");
        assert!((features.deception_ratio() - 0.5).abs() < 1e-12);
    }
}
