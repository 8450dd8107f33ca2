//! Corpus scans: every record is scored as a whole, without segmentation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};
use crate::input::utf8_lines;
use crate::score::{ScoredUnit, Scorer};

/// Pulls the text portion out of one corpus line.
pub trait RecordExtractor {
    /// `None` marks the line as malformed.
    fn extract<'a>(&self, line: &'a str) -> Option<&'a str>;
}

/// `<label-or-id> <free text>`: everything after the first space.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabeledLine;

impl RecordExtractor for LabeledLine {
    fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        let (_label, text) = line.split_once(' ')?;
        let text = text.trim();
        (!text.is_empty()).then_some(text)
    }
}

/// The whole line is the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeLine;

impl RecordExtractor for WholeLine {
    fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        Some(line)
    }
}

/// Corpus-wide extremes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusResult {
    pub most_positive_record: Option<ScoredUnit>,
    pub most_negative_record: Option<ScoredUnit>,
    pub total_records_processed: usize,
    /// Non-blank lines that were not UTF-8 or that the extractor rejected.
    pub skipped_records: usize,
}

impl CorpusResult {
    /// Fold one scored record into the running extremes. The first record
    /// seeds both trackers; later records replace them only on a strict
    /// improvement, so ties keep the earliest record.
    fn track(&mut self, text: &str, score: i64) {
        self.total_records_processed += 1;
        if self.most_positive_record.as_ref().is_none_or(|r| score > r.score) {
            self.most_positive_record = Some(ScoredUnit::new(text, score));
        }
        if self.most_negative_record.as_ref().is_none_or(|r| score < r.score) {
            self.most_negative_record = Some(ScoredUnit::new(text, score));
        }
    }

    fn skip(&mut self, line: usize, reason: String) {
        self.skipped_records += 1;
        warn!("{}", SentimentError::MalformedRecord { line, reason });
    }
}

/// Scan a line-oriented corpus read from `reader`.
///
/// Blank lines are ignored; lines that are not valid UTF-8 or that the
/// extractor rejects are skipped and counted. A read error aborts the scan
/// with `IoFailure` and no partial result is returned.
pub fn process_corpus<R, E, C>(reader: R, extractor: &E, scorer: &C) -> Result<CorpusResult>
where
    R: BufRead,
    E: RecordExtractor + ?Sized,
    C: Scorer + ?Sized,
{
    scan(reader, extractor, scorer, "corpus stream")
}

/// Scan a corpus file. A missing file is `ResourceNotFound`.
pub fn process_corpus_path<P, E, C>(path: P, extractor: &E, scorer: &C) -> Result<CorpusResult>
where
    P: AsRef<Path>,
    E: RecordExtractor + ?Sized,
    C: Scorer + ?Sized,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SentimentError::from_io(path, e))?;
    let result = scan(
        BufReader::new(file),
        extractor,
        scorer,
        &path.display().to_string(),
    )?;
    info!(
        "Processed {} records from {} ({} skipped)",
        result.total_records_processed,
        path.display(),
        result.skipped_records
    );
    Ok(result)
}

fn scan<R, E, C>(reader: R, extractor: &E, scorer: &C, origin: &str) -> Result<CorpusResult>
where
    R: BufRead,
    E: RecordExtractor + ?Sized,
    C: Scorer + ?Sized,
{
    let mut result = CorpusResult::default();
    for (idx, line) in utf8_lines(reader, origin).enumerate() {
        let line = match line? {
            Ok(line) => line,
            Err(e) => {
                result.skip(idx + 1, format!("invalid UTF-8: {e}"));
                continue;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match extractor.extract(line) {
            Some(text) => result.track(text, scorer.score(text)),
            None => result.skip(idx + 1, "no text after the label".to_string()),
        }
    }
    Ok(result)
}
