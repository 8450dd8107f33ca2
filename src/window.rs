use std::num::NonZeroUsize;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::score::{ScoredUnit, clamp_to_i64};

/// A run of `window_size` consecutive units scored as one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Offset of the first unit in the window.
    pub start: usize,
    /// Member texts joined by `". "`, with a trailing `"."`.
    pub text: String,
    pub score: i64,
}

/// Highest and lowest scoring windows. Both are `None` ("not applicable")
/// when there are fewer units than the window size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowExtremes {
    pub window_size: usize,
    pub most_positive: Option<Window>,
    pub most_negative: Option<Window>,
}

impl WindowExtremes {
    pub fn is_applicable(&self) -> bool {
        self.most_positive.is_some()
    }
}

/// Find the extreme windows over every start offset `0..=len - size`.
///
/// Window sums are maintained incrementally, so this is linear in the
/// number of units. Ties go to the lowest start offset.
pub fn sliding_windows(units: &[ScoredUnit], window_size: NonZeroUsize) -> WindowExtremes {
    let size = window_size.get();
    if units.len() < size {
        return WindowExtremes {
            window_size: size,
            ..WindowExtremes::default()
        };
    }

    // i128 keeps every window sum exact, whatever the unit scores.
    let score = |u: &ScoredUnit| i128::from(u.score);
    let mut sum: i128 = units[..size].iter().map(score).sum();
    let (mut max_start, mut max) = (0, sum);
    let (mut min_start, mut min) = (0, sum);
    for start in 1..=units.len() - size {
        sum += score(&units[start + size - 1]) - score(&units[start - 1]);
        if sum > max {
            max_start = start;
            max = sum;
        }
        if sum < min {
            min_start = start;
            min = sum;
        }
    }
    debug!(
        "Scanned {} windows of size {size}",
        units.len() - size + 1
    );

    WindowExtremes {
        window_size: size,
        most_positive: Some(build_window(units, max_start, size, clamp_to_i64(max))),
        most_negative: Some(build_window(units, min_start, size, clamp_to_i64(min))),
    }
}

fn build_window(units: &[ScoredUnit], start: usize, size: usize, score: i64) -> Window {
    let texts: Vec<&str> = units[start..start + size]
        .iter()
        .map(|u| u.text.as_str())
        .collect();
    Window {
        start,
        text: format!("{}.", texts.join(". ")),
        score,
    }
}
