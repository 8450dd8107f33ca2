use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::tokenize::{Tokenizer, WordTokenizer};

/// Maps a piece of text to an integer sentiment score.
pub trait Scorer {
    fn score(&self, text: &str) -> i64;

    /// Score `text` and keep it alongside its score.
    fn score_unit(&self, text: String) -> ScoredUnit {
        let score = self.score(&text);
        ScoredUnit { text, score }
    }
}

/// Bag-of-words scorer: sum of lexicon weights over the tokens.
/// Unknown tokens weigh 0, so `score("") == 0`.
#[derive(Debug, Clone)]
pub struct LexiconScorer<T = WordTokenizer> {
    lexicon: Arc<Lexicon>,
    tokenizer: T,
}

impl LexiconScorer<WordTokenizer> {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_tokenizer(lexicon, WordTokenizer)
    }
}

impl<T: Tokenizer> LexiconScorer<T> {
    pub fn with_tokenizer(lexicon: Arc<Lexicon>, tokenizer: T) -> Self {
        Self { lexicon, tokenizer }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl<T: Tokenizer> Scorer for LexiconScorer<T> {
    fn score(&self, text: &str) -> i64 {
        clamped_sum(
            self.tokenizer
                .tokenize(text)
                .iter()
                .map(|token| self.lexicon.lookup(token)),
        )
    }
}

/// A text segment with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredUnit {
    pub text: String,
    pub score: i64,
}

impl ScoredUnit {
    pub fn new(text: impl Into<String>, score: i64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// Sign of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl Polarity {
    pub fn of(score: i64) -> Self {
        match score {
            s if s > 0 => Polarity::Positive,
            0 => Polarity::Neutral,
            _ => Polarity::Negative,
        }
    }
}

/// Sum accumulated in `i128` and clamped to the `i64` range, so extreme
/// lexicon weights saturate instead of overflowing.
pub(crate) fn clamped_sum(scores: impl IntoIterator<Item = i64>) -> i64 {
    clamp_to_i64(scores.into_iter().map(i128::from).sum())
}

pub(crate) fn clamp_to_i64(value: i128) -> i64 {
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Indices of the maximum and minimum by `key`. On ties the earliest item
/// wins for both. `None` for an empty slice.
pub(crate) fn leftmost_extremes<T>(items: &[T], key: impl Fn(&T) -> i64) -> Option<(usize, usize)> {
    let first = key(items.first()?);
    let (mut max_idx, mut max) = (0, first);
    let (mut min_idx, mut min) = (0, first);
    for (idx, item) in items.iter().enumerate().skip(1) {
        let k = key(item);
        if k > max {
            max_idx = idx;
            max = k;
        }
        if k < min {
            min_idx = idx;
            min = k;
        }
    }
    Some((max_idx, min_idx))
}
