use std::fmt;
use std::num::NonZeroUsize;
use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Runs of sentence-ending punctuation. Digits are not special-cased:
/// `"3.5"` splits into `"3"` and `"5"`.
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?]+").expect("sentence boundary pattern is valid")
});

/// Clause punctuation common in headlines: comma, semicolon, colon, em-dash.
static PHRASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;:—]").expect("phrase boundary pattern is valid"));

/// Granularity of the units produced by [`PunctuationSegmenter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentMode {
    /// Split on `.`, `!`, `?`.
    #[default]
    Sentence,
    /// Split on `,`, `;`, `:`, `—`, then cap each phrase's word count.
    Phrase,
}

impl fmt::Display for SegmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentMode::Sentence => f.write_str("sentence"),
            SegmentMode::Phrase => f.write_str("phrase"),
        }
    }
}

/// Splits raw text into ordered, trimmed, non-empty units.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Vec<String>;

    /// Segment every text and concatenate the units, texts in input order.
    fn segment_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String>
    where
        Self: Sized,
    {
        texts
            .iter()
            .flat_map(|t| self.segment(t.as_ref()))
            .collect()
    }
}

/// Regex-based segmenter for both [`SegmentMode`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunctuationSegmenter {
    mode: SegmentMode,
    max_words: NonZeroUsize,
}

impl PunctuationSegmenter {
    pub const DEFAULT_MAX_WORDS: NonZeroUsize = NonZeroUsize::new(20).unwrap();

    pub fn new(mode: SegmentMode, max_words: NonZeroUsize) -> Self {
        Self { mode, max_words }
    }

    pub fn sentences() -> Self {
        Self::new(SegmentMode::Sentence, Self::DEFAULT_MAX_WORDS)
    }

    pub fn phrases() -> Self {
        Self::new(SegmentMode::Phrase, Self::DEFAULT_MAX_WORDS)
    }
}

impl Default for PunctuationSegmenter {
    fn default() -> Self {
        Self::sentences()
    }
}

impl Segmenter for PunctuationSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        match self.mode {
            SegmentMode::Sentence => split_trimmed(&SENTENCE_BOUNDARY, text),
            SegmentMode::Phrase => split_trimmed(&PHRASE_BOUNDARY, text)
                .into_iter()
                .flat_map(|phrase| chunk_words(phrase, self.max_words.get()))
                .collect(),
        }
    }
}

fn split_trimmed(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Phrases longer than `max_words` are re-joined in consecutive groups of
/// `max_words` words; shorter phrases pass through untouched.
fn chunk_words(phrase: String, max_words: usize) -> Vec<String> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.len() <= max_words {
        return vec![phrase];
    }
    words.chunks(max_words).map(|c| c.join(" ")).collect()
}
