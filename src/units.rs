use log::debug;
use serde::{Deserialize, Serialize};

use crate::score::{ScoredUnit, Scorer, clamped_sum, leftmost_extremes};
use crate::segment::Segmenter;

/// Per-unit scores of one or more texts plus their extremes and aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitAnalysis {
    pub units: Vec<ScoredUnit>,
    pub most_positive: Option<ScoredUnit>,
    pub most_negative: Option<ScoredUnit>,
    pub total_score: i64,
    pub avg_score: f64,
}

impl UnitAnalysis {
    /// Build the aggregates over already-scored units.
    ///
    /// Ties on the extremes go to the first unit in sequence order. With no
    /// units both extremes are `None` and total/average are 0.
    pub fn from_units(units: Vec<ScoredUnit>) -> Self {
        let (most_positive, most_negative) = match leftmost_extremes(&units, |u| u.score) {
            Some((max, min)) => (Some(units[max].clone()), Some(units[min].clone())),
            None => (None, None),
        };
        let total_score = clamped_sum(units.iter().map(|u| u.score));
        let avg_score = if units.is_empty() {
            0.0
        } else {
            total_score as f64 / units.len() as f64
        };
        UnitAnalysis {
            units,
            most_positive,
            most_negative,
            total_score,
            avg_score,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Segment every text (in order), score each unit and aggregate.
pub fn analyze_units<S, G, C>(texts: &[S], segmenter: &G, scorer: &C) -> UnitAnalysis
where
    S: AsRef<str>,
    G: Segmenter,
    C: Scorer + ?Sized,
{
    let units: Vec<ScoredUnit> = segmenter
        .segment_all(texts)
        .into_iter()
        .map(|text| scorer.score_unit(text))
        .collect();
    debug!("Scored {} units from {} texts", units.len(), texts.len());
    UnitAnalysis::from_units(units)
}
