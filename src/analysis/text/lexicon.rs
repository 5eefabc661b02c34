// Lexicon module - closed word lists for sentiment and marker detection
//
// All lists are lower-case single tokens. Matching is exact against the
// normalized token, never a substring test.

use std::collections::HashSet;

use once_cell::sync::Lazy;

pub static POSITIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "good",
        "great",
        "excellent",
        "amazing",
        "wonderful",
        "fantastic",
        "love",
        "like",
        "happy",
        "pleased",
    ]
    .into_iter()
    .collect()
});

pub static NEGATIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bad",
        "terrible",
        "awful",
        "hate",
        "dislike",
        "angry",
        "sad",
        "disappointed",
        "frustrated",
        "worried",
    ]
    .into_iter()
    .collect()
});

/// Tentative language
pub static HEDGING: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "maybe",
        "perhaps",
        "possibly",
        "might",
        "probably",
        "apparently",
        "somewhat",
        "guess",
    ]
    .into_iter()
    .collect()
});

/// Assertive language
pub static CONFIDENCE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "definitely",
        "certainly",
        "absolutely",
        "surely",
        "clearly",
        "undoubtedly",
    ]
    .into_iter()
    .collect()
});

pub static CONTRADICTION: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "but",
        "however",
        "although",
        "despite",
        "nevertheless",
        "yet",
        "still",
        "though",
    ]
    .into_iter()
    .collect()
});

/// Filler words associated with deceptive speech
pub static DECEPTION: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "actually",
        "basically",
        "honestly",
        "literally",
        "obviously",
        "really",
        "very",
        "quite",
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_lower_case_single_tokens() {
        for list in [&POSITIVE, &NEGATIVE, &HEDGING, &CONFIDENCE, &CONTRADICTION, &DECEPTION] {
            for word in list.iter() {
                assert_eq!(*word, word.to_lowercase());
                assert!(!word.contains(char::is_whitespace), "{:?}", word);
            }
        }
    }

    #[test]
    fn test_sentiment_lists_are_disjoint() {
        assert!(POSITIVE.is_disjoint(&NEGATIVE));
    }
}
