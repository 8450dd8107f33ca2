//! News/review datasets loaded from CSV and scored row by row.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};
use crate::score::Scorer;
use crate::summary::SentimentSummary;

/// One CSV row. Only `text` is required; the other columns default to "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsRecord {
    pub text: String,
    pub subject: String,
    pub source: String,
    pub date: String,
    pub url: String,
}

/// A row with the score of its full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredArticle {
    #[serde(flatten)]
    pub record: NewsRecord,
    pub score: i64,
}

/// In-memory, scored dataset. Scores are computed once at load and live
/// only as long as the dataset.
#[derive(Debug, Clone, Default)]
pub struct NewsDataset {
    articles: Vec<ScoredArticle>,
    skipped_rows: usize,
}

impl NewsDataset {
    /// Read a headered CSV file and score each row's `text`.
    ///
    /// A missing file is `ResourceNotFound`; a file without a `text` column
    /// is a `MalformedRecord` on line 1. Rows that fail to deserialize are
    /// skipped and counted.
    pub fn from_csv_path<P, C>(path: P, scorer: &C) -> Result<Self>
    where
        P: AsRef<Path>,
        C: Scorer + ?Sized,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SentimentError::from_io(path, e))?;
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);

        let headers = reader.headers().map_err(|cause| SentimentError::Dataset {
            path: path.to_path_buf(),
            cause,
        })?;
        if !headers.iter().any(|h| h == "text") {
            return Err(SentimentError::MalformedRecord {
                line: 1,
                reason: format!("{} has no `text` column", path.display()),
            });
        }

        let mut dataset = NewsDataset::default();
        for (idx, row) in reader.deserialize::<NewsRecord>().enumerate() {
            match row {
                Ok(record) => dataset.push(record, scorer),
                Err(e) => {
                    dataset.skipped_rows += 1;
                    warn!(
                        "{}",
                        SentimentError::MalformedRecord {
                            // +1 for the header, +1 for 1-based lines
                            line: idx + 2,
                            reason: e.to_string(),
                        }
                    );
                }
            }
        }
        info!(
            "Loaded {} articles from {} ({} rows skipped)",
            dataset.len(),
            path.display(),
            dataset.skipped_rows
        );
        Ok(dataset)
    }

    /// Build from records already in memory.
    pub fn from_records<I, C>(records: I, scorer: &C) -> Self
    where
        I: IntoIterator<Item = NewsRecord>,
        C: Scorer + ?Sized,
    {
        let mut dataset = NewsDataset::default();
        for record in records {
            dataset.push(record, scorer);
        }
        dataset
    }

    fn push<C: Scorer + ?Sized>(&mut self, record: NewsRecord, scorer: &C) {
        let score = scorer.score(&record.text);
        self.articles.push(ScoredArticle { record, score });
    }

    pub fn articles(&self) -> &[ScoredArticle] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Distinct non-empty subjects in first-seen order.
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for article in &self.articles {
            let subject = article.record.subject.as_str();
            if !subject.is_empty() && !seen.contains(&subject) {
                seen.push(subject);
            }
        }
        seen
    }

    pub fn by_subject(&self, subject: &str) -> Vec<&ScoredArticle> {
        self.articles
            .iter()
            .filter(|a| a.record.subject == subject)
            .collect()
    }

    pub fn by_source(&self, source: &str) -> Vec<&ScoredArticle> {
        self.articles
            .iter()
            .filter(|a| a.record.source == source)
            .collect()
    }

    pub fn find_by_url(&self, url: &str) -> Option<&ScoredArticle> {
        self.articles.iter().find(|a| a.record.url == url)
    }

    /// Mean score of the articles about `subject`, rounded to two decimals.
    /// `None` if no article has that subject.
    pub fn average_score(&self, subject: &str) -> Option<f64> {
        SentimentSummary::from_articles(&self.by_subject(subject)).map(|s| s.average_score)
    }
}
