use chatrisk_core::constants::{NEGATIVE_POLARITY_THRESHOLD, POSITIVE_POLARITY_THRESHOLD};
use chatrisk_core::Sentiment;
use std::collections::HashSet;

/// External text-polarity collaborator.
///
/// Implementations map a message string to a polarity in `[-1, 1]`
/// (negative is unfavorable tone) and must be deterministic for a given
/// string so that classification stays reproducible. The classifier does
/// not care how the value is produced.
pub trait PolarityModel: Send + Sync {
    /// Polarity score for the text, in `[-1, 1]`.
    fn polarity(&self, text: &str) -> f64;

    /// Model name, for logging and report metadata.
    fn name(&self) -> &str;
}

/// Map a polarity value to a sentiment label.
///
/// Strictly above 0.1 is Positive, strictly below -0.1 is Negative, and
/// everything in between, the boundaries included, is Neutral.
pub fn classify(polarity: f64) -> Sentiment {
    if polarity > POSITIVE_POLARITY_THRESHOLD {
        Sentiment::Positive
    } else if polarity < NEGATIVE_POLARITY_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Classify one message through a polarity model.
///
/// Out-of-range model output is clamped into `[-1, 1]` before the
/// thresholds are applied.
pub fn classify_message(model: &dyn PolarityModel, text: &str) -> Sentiment {
    classify(model.polarity(text).clamp(-1.0, 1.0))
}

const POSITIVE_WORDS: &[&str] = &[
    "love", "loved", "great", "good", "happy", "glad", "awesome", "amazing", "wonderful",
    "excellent", "nice", "cool", "perfect", "thanks", "thank", "fun", "sweet", "beautiful",
    "excited", "best", "yay", "haha", "lovely",
];

const NEGATIVE_WORDS: &[&str] = &[
    "hate", "hated", "bad", "sad", "angry", "mad", "terrible", "awful", "horrible", "annoying",
    "annoyed", "worst", "tired", "hurt", "upset", "alone", "lonely", "cry", "crying", "ugh",
    "whatever", "boring", "stupid",
];

/// Default polarity model: a fixed word-list scorer.
///
/// Tokenizes on non-alphanumeric boundaries, counts positive and negative
/// word hits, and scores `(pos - neg) / (pos + neg)`; a text with no hits
/// scores 0. Crude, but deterministic and dependency-free, which is what
/// the pipeline needs from its stand-in collaborator.
pub struct WordListPolarity {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl WordListPolarity {
    /// Create the model with the built-in word lists.
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
        }
    }
}

impl Default for WordListPolarity {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityModel for WordListPolarity {
    fn polarity(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let mut pos = 0u32;
        let mut neg = 0u32;
        for word in lower.split(|c: char| !c.is_alphanumeric()) {
            if self.positive.contains(word) {
                pos += 1;
            } else if self.negative.contains(word) {
                neg += 1;
            }
        }

        let hits = pos + neg;
        if hits == 0 {
            0.0
        } else {
            (pos as f64 - neg as f64) / hits as f64
        }
    }

    fn name(&self) -> &str {
        "word-list"
    }
}
