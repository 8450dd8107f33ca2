//! Aggregate views over a selection of scored articles.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::dataset::ScoredArticle;
use crate::score::{Polarity, ScoredUnit, clamped_sum, leftmost_extremes};

/// Polarity counts, average and extremes of a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub article_count: usize,
    /// Mean score rounded to two decimals.
    pub average_score: f64,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub most_positive: ScoredUnit,
    pub most_negative: ScoredUnit,
}

impl SentimentSummary {
    /// `None` for an empty selection. Ties on the extremes keep the first
    /// article.
    pub fn from_articles(articles: &[&ScoredArticle]) -> Option<Self> {
        let (max, min) = leftmost_extremes(articles, |a| a.score)?;
        let counts = PolarityCounts::tally(articles.iter().map(|a| a.score));
        let total = clamped_sum(articles.iter().map(|a| a.score));
        let mean = total as f64 / articles.len() as f64;
        let unit = |a: &ScoredArticle| ScoredUnit::new(a.record.text.clone(), a.score);
        Some(SentimentSummary {
            article_count: articles.len(),
            average_score: (mean * 100.0).round() / 100.0,
            positive: counts.positive,
            neutral: counts.neutral,
            negative: counts.negative,
            most_positive: unit(articles[max]),
            most_negative: unit(articles[min]),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarityCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl PolarityCounts {
    pub fn tally(scores: impl IntoIterator<Item = i64>) -> Self {
        let mut counts = PolarityCounts::default();
        for score in scores {
            counts.add(score);
        }
        counts
    }

    fn add(&mut self, score: i64) {
        match Polarity::of(score) {
            Polarity::Positive => self.positive += 1,
            Polarity::Neutral => self.neutral += 1,
            Polarity::Negative => self.negative += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedScore {
    pub date: NaiveDate,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCounts {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub counts: PolarityCounts,
}

/// Scores over time. Articles whose date cannot be parsed are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// One point per article, ordered by date (stable for equal dates).
    pub scores: Vec<DatedScore>,
    /// Polarity counts per calendar day, ascending.
    pub daily: Vec<DailyCounts>,
    pub undated: usize,
}

impl Timeline {
    pub fn from_articles(articles: &[&ScoredArticle]) -> Self {
        let mut scores: Vec<DatedScore> = articles
            .iter()
            .filter_map(|a| {
                parse_date(&a.record.date).map(|date| DatedScore {
                    date,
                    score: a.score,
                })
            })
            .collect();
        let undated = articles.len() - scores.len();
        scores.sort_by_key(|p| p.date);

        let mut per_day: BTreeMap<NaiveDate, PolarityCounts> = BTreeMap::new();
        for point in &scores {
            per_day.entry(point.date).or_default().add(point.score);
        }
        let daily = per_day
            .into_iter()
            .map(|(date, counts)| DailyCounts { date, counts })
            .collect();

        Timeline {
            scores,
            daily,
            undated,
        }
    }
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
