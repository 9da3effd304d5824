/// Lexicon-based sentiment scorer
///
/// Deterministic stand-in for a real model backend: counts polarity
/// keywords and produces POSITIVE/NEGATIVE/NEUTRAL with a confidence
/// score. Cheap enough to run inline, shaped like the real thing so the
/// rest of the service exercises the same contract.
use super::{Classification, ScoringEngine};
use crate::errors::ClassifierResult;
use async_trait::async_trait;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "love", "happy", "best", "wonderful", "fantastic",
    "awesome", "nice", "perfect", "brilliant", "enjoy", "delightful", "impressive", "superb",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "hate", "worst", "horrible", "poor", "sad", "angry",
    "disappointing", "broken", "useless", "annoying", "dreadful", "failure", "worse", "ugly",
];

#[derive(Debug, Clone, Default)]
pub struct LexiconEngine;

impl LexiconEngine {
    pub fn new() -> Self {
        Self
    }

    fn score(text: &str) -> Classification {
        let mut positive = 0u32;
        let mut negative = 0u32;

        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let word = word.to_lowercase();
            if POSITIVE_WORDS.contains(&word.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                negative += 1;
            }
        }

        let total = positive + negative;
        if total == 0 {
            return Classification {
                label: "NEUTRAL".to_string(),
                score: 0.5,
            };
        }

        let (label, dominant) = if positive >= negative {
            ("POSITIVE", positive)
        } else {
            ("NEGATIVE", negative)
        };

        // Confidence is the dominant share of polarity hits, 0.5 on a tie
        Classification {
            label: label.to_string(),
            score: dominant as f64 / total as f64,
        }
    }
}

#[async_trait]
impl ScoringEngine for LexiconEngine {
    async fn classify(&self, text: &str) -> ClassifierResult<Classification> {
        Ok(Self::score(text))
    }
}
