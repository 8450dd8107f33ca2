#![forbid(unsafe_code)]
//! # lexicon_sentiment
//!
//! Dictionary-based sentiment scoring for short texts such as headlines
//! and reviews. A [`Lexicon`] maps lowercase words to integer weights; a
//! text's score is the sum of the weights of its tokens.
//!
//! On top of the scorer the crate finds the most positive and most
//! negative units at several granularities:
//! - sentences or phrases of a text ([`analyze_units`]),
//! - sliding windows of consecutive units ([`sliding_windows`]),
//! - whole records of a corpus ([`process_corpus`]),
//! - articles of a CSV news dataset ([`NewsDataset`], [`SentimentSummary`]).
//!
//! ## Example
//! ```
//! use lexicon_sentiment::{Lexicon, SentimentAnalyzer};
//!
//! let lexicon: Lexicon = [("good", 3), ("bad", -3)].into_iter().collect();
//! let analyzer = SentimentAnalyzer::new(lexicon);
//!
//! assert_eq!(analyzer.score("Good, not bad"), 0);
//!
//! let result = analyzer.analyze_text(&["This is good. This is bad. This is fine."]);
//! assert_eq!(result.total_score, 0);
//! assert_eq!(result.most_negative.unwrap().text, "This is bad");
//! ```

mod analyzer;
mod corpus;
mod dataset;
mod error;
mod input;
mod lexicon;
mod report;
mod score;
mod segment;
mod summary;
mod tokenize;
mod units;
mod window;

pub use analyzer::{AnalysisOptions, AnalysisResult, SentimentAnalyzer};
pub use corpus::{
    CorpusResult, LabeledLine, RecordExtractor, WholeLine, process_corpus, process_corpus_path,
};
pub use dataset::{NewsDataset, NewsRecord, ScoredArticle};
pub use error::{Result, SentimentError};
pub use input::{collect_files, read_text};
pub use lexicon::Lexicon;
pub use report::{
    OutputFormat, SubjectReport, csv_safe_cell, render_analysis, render_corpus, render_subject,
};
pub use score::{LexiconScorer, Polarity, ScoredUnit, Scorer};
pub use segment::{PunctuationSegmenter, SegmentMode, Segmenter};
pub use summary::{DailyCounts, DatedScore, PolarityCounts, SentimentSummary, Timeline, parse_date};
pub use tokenize::{Tokenizer, WordTokenizer};
pub use units::{UnitAnalysis, analyze_units};
pub use window::{Window, WindowExtremes, sliding_windows};
