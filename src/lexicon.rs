//! Word → weight dictionary (AFINN-style `word<TAB>score` files).

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::error::{Result, SentimentError};
use crate::input::utf8_lines;

/// Immutable sentiment dictionary. Words are stored lowercased; absent words
/// weigh 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    weights: HashMap<String, i64>,
    skipped_lines: usize,
}

impl Lexicon {
    /// An empty lexicon: every lookup scores 0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a lexicon file.
    ///
    /// Fails with `ResourceNotFound` if the file is missing. Malformed lines
    /// are skipped and counted, see [`Lexicon::from_reader`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SentimentError::from_io(path, e))?;
        let lexicon = Self::read_lines(BufReader::new(file), &path.display().to_string())?;
        info!(
            "Loaded {} words from {} ({} malformed lines skipped)",
            lexicon.len(),
            path.display(),
            lexicon.skipped_lines
        );
        Ok(lexicon)
    }

    /// Like [`Lexicon::load`], but any failure is logged and an empty
    /// lexicon returned so callers can keep running degraded.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                warn!("{e}; continuing with an empty lexicon");
                Self::empty()
            }
        }
    }

    /// Parse `word<TAB>integer` lines.
    ///
    /// Blank lines are ignored. Lines that are not valid UTF-8, lack a tab,
    /// have an empty word or a non-integer score are skipped. A repeated word
    /// keeps its last weight.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::read_lines(reader, "lexicon stream")
    }

    fn read_lines<R: BufRead>(reader: R, origin: &str) -> Result<Self> {
        let mut lexicon = Self::empty();
        for (idx, line) in utf8_lines(reader, origin).enumerate() {
            let parsed = match line? {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => parse_entry(line.trim()),
                Err(e) => Err(format!("invalid UTF-8: {e}")),
            };
            match parsed {
                Ok((word, weight)) => {
                    lexicon.weights.insert(word, weight);
                }
                Err(reason) => {
                    lexicon.skipped_lines += 1;
                    warn!(
                        "{}",
                        SentimentError::MalformedRecord {
                            line: idx + 1,
                            reason,
                        }
                    );
                }
            }
        }
        Ok(lexicon)
    }

    /// Weight of `word`, 0 when absent. Callers pass already-lowercased
    /// tokens.
    pub fn lookup(&self, word: &str) -> i64 {
        self.weights.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of malformed lines dropped during the load.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }
}

impl<S: AsRef<str>> FromIterator<(S, i64)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let weights = iter
            .into_iter()
            .map(|(word, weight)| (word.as_ref().to_lowercase(), weight))
            .collect();
        Lexicon {
            weights,
            skipped_lines: 0,
        }
    }
}

fn parse_entry(line: &str) -> std::result::Result<(String, i64), String> {
    let (word, score) = line
        .split_once('\t')
        .ok_or_else(|| "missing tab separator".to_string())?;
    let word = word.trim();
    if word.is_empty() {
        return Err("empty word".to_string());
    }
    let weight = score
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("score {:?} is not an integer", score.trim()))?;
    Ok((word.to_lowercase(), weight))
}
