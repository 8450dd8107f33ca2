use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::corpus::{CorpusResult, RecordExtractor, process_corpus_path};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::score::{LexiconScorer, ScoredUnit, Scorer};
use crate::segment::{PunctuationSegmenter, SegmentMode};
use crate::units::{UnitAnalysis, analyze_units};
use crate::window::{WindowExtremes, sliding_windows};

/// Options for [`SentimentAnalyzer::analyze_text_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub window_size: NonZeroUsize,
    pub segment_mode: SegmentMode,
    /// Word ceiling for a single phrase (phrase mode only).
    pub max_words_per_segment: NonZeroUsize,
}

impl AnalysisOptions {
    pub const DEFAULT_WINDOW_SIZE: NonZeroUsize = NonZeroUsize::new(3).unwrap();

    pub fn segmenter(&self) -> PunctuationSegmenter {
        PunctuationSegmenter::new(self.segment_mode, self.max_words_per_segment)
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            window_size: Self::DEFAULT_WINDOW_SIZE,
            segment_mode: SegmentMode::Sentence,
            max_words_per_segment: PunctuationSegmenter::DEFAULT_MAX_WORDS,
        }
    }
}

/// Full-text analysis: unit scores, unit extremes, aggregates and the
/// sliding-window extremes over the same units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub segment_mode: SegmentMode,
    pub units: Vec<ScoredUnit>,
    pub most_positive: Option<ScoredUnit>,
    pub most_negative: Option<ScoredUnit>,
    pub total_score: i64,
    pub avg_score: f64,
    pub windows: WindowExtremes,
}

impl AnalysisResult {
    fn new(segment_mode: SegmentMode, units: UnitAnalysis, windows: WindowExtremes) -> Self {
        AnalysisResult {
            segment_mode,
            units: units.units,
            most_positive: units.most_positive,
            most_negative: units.most_negative,
            total_score: units.total_score,
            avg_score: units.avg_score,
            windows,
        }
    }

    /// True when the input produced no units ("no text provided").
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Process-wide entry point: one lexicon-backed scorer plus default
/// options. Immutable after construction, so a single instance can be
/// shared by reference across threads.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer<C = LexiconScorer> {
    scorer: C,
    options: AnalysisOptions,
}

impl SentimentAnalyzer<LexiconScorer> {
    pub fn new(lexicon: Lexicon) -> Self {
        Self::from_lexicon(Arc::new(lexicon))
    }

    pub fn from_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self::with_scorer(LexiconScorer::new(lexicon))
    }

    /// Load the lexicon at `path`, degrading to an empty lexicon (every
    /// score 0) if it cannot be read.
    pub fn from_lexicon_path<P: AsRef<Path>>(path: P) -> Self {
        Self::new(Lexicon::load_or_empty(path))
    }
}

impl<C: Scorer> SentimentAnalyzer<C> {
    pub fn with_scorer(scorer: C) -> Self {
        Self {
            scorer,
            options: AnalysisOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn scorer(&self) -> &C {
        &self.scorer
    }

    pub fn score(&self, text: &str) -> i64 {
        self.scorer.score(text)
    }

    /// Analyze `texts` with the analyzer's default options.
    pub fn analyze_text<S: AsRef<str>>(&self, texts: &[S]) -> AnalysisResult {
        self.analyze_text_with(texts, &self.options)
    }

    /// Segment, score, and find unit and window extremes over `texts`.
    /// Empty input is not an error: the result has no units, `None`
    /// extremes and zero aggregates.
    pub fn analyze_text_with<S: AsRef<str>>(
        &self,
        texts: &[S],
        options: &AnalysisOptions,
    ) -> AnalysisResult {
        let units = analyze_units(texts, &options.segmenter(), &self.scorer);
        let windows = sliding_windows(&units.units, options.window_size);
        AnalysisResult::new(options.segment_mode, units, windows)
    }

    /// Score every record of a corpus file and keep the extremes.
    pub fn process_corpus<P, E>(&self, path: P, extractor: &E) -> Result<CorpusResult>
    where
        P: AsRef<Path>,
        E: RecordExtractor + ?Sized,
    {
        process_corpus_path(path, extractor, &self.scorer)
    }
}
