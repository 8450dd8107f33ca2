//! Text, JSON and CSV/TSV renderings of analysis results.

use std::fmt::Write as _;

use clap::ValueEnum;
use csv::WriterBuilder;
use serde::Serialize;

use crate::analyzer::AnalysisResult;
use crate::corpus::CorpusResult;
use crate::error::{Result, SentimentError};
use crate::score::ScoredUnit;
use crate::summary::{SentimentSummary, Timeline};
use crate::window::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    fn delimiter(self) -> u8 {
        match self {
            OutputFormat::Tsv => b'\t',
            _ => b',',
        }
    }
}

/// Summary and timeline of one dataset subject.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectReport {
    pub subject: String,
    pub summary: Option<SentimentSummary>,
    pub timeline: Timeline,
}

/// Neutralize spreadsheet formula injection: cells starting with
/// `=`, `+`, `-`, `@`, tab or CR get a leading `'`.
pub fn csv_safe_cell(cell: &str) -> String {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{cell}"),
        _ => cell.to_string(),
    }
}

pub fn render_analysis(result: &AnalysisResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Txt => Ok(analysis_txt(result)),
        OutputFormat::Json => to_json(result),
        OutputFormat::Csv | OutputFormat::Tsv => {
            let rows = result.units.iter().enumerate().map(|(i, u)| {
                vec![i.to_string(), csv_safe_cell(&u.text), u.score.to_string()]
            });
            to_table(format, &["index", "text", "score"], rows)
        }
    }
}

pub fn render_corpus(result: &CorpusResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Txt => {
            let mut out = String::new();
            let _ = writeln!(out, "Records processed: {}", result.total_records_processed);
            if result.skipped_records > 0 {
                let _ = writeln!(out, "Records skipped: {}", result.skipped_records);
            }
            let _ = writeln!(
                out,
                "Most positive record: {}",
                unit_txt(result.most_positive_record.as_ref())
            );
            let _ = write!(
                out,
                "Most negative record: {}",
                unit_txt(result.most_negative_record.as_ref())
            );
            Ok(out)
        }
        OutputFormat::Json => to_json(result),
        OutputFormat::Csv | OutputFormat::Tsv => {
            let processed = result.total_records_processed.to_string();
            let rows = [
                ("most_positive", result.most_positive_record.as_ref()),
                ("most_negative", result.most_negative_record.as_ref()),
            ]
            .into_iter()
            .filter_map(|(kind, unit)| unit.map(|u| (kind, u)))
            .map(|(kind, u)| {
                vec![
                    kind.to_string(),
                    csv_safe_cell(&u.text),
                    u.score.to_string(),
                    processed.clone(),
                ]
            });
            to_table(
                format,
                &["extreme", "text", "score", "total_records_processed"],
                rows,
            )
        }
    }
}

pub fn render_subject(report: &SubjectReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Txt => Ok(subject_txt(report)),
        OutputFormat::Json => to_json(report),
        OutputFormat::Csv | OutputFormat::Tsv => {
            let rows = report.timeline.daily.iter().map(|d| {
                vec![
                    d.date.format("%Y-%m-%d").to_string(),
                    d.counts.positive.to_string(),
                    d.counts.neutral.to_string(),
                    d.counts.negative.to_string(),
                ]
            });
            to_table(format, &["date", "positive", "neutral", "negative"], rows)
        }
    }
}

fn analysis_txt(result: &AnalysisResult) -> String {
    let mut out = String::new();
    if result.is_empty() {
        let _ = writeln!(out, "No text provided.");
    } else {
        let _ = writeln!(out, "Units: {} ({} mode)", result.units.len(), result.segment_mode);
        let _ = writeln!(out, "Total score: {}", result.total_score);
        let _ = writeln!(out, "Average score: {:.2}", result.avg_score);
        let _ = writeln!(out, "Most positive unit: {}", unit_txt(result.most_positive.as_ref()));
        let _ = writeln!(out, "Most negative unit: {}", unit_txt(result.most_negative.as_ref()));
    }
    let size = result.windows.window_size;
    let _ = writeln!(
        out,
        "Most positive window (size {size}): {}",
        window_txt(result.windows.most_positive.as_ref())
    );
    let _ = write!(
        out,
        "Most negative window (size {size}): {}",
        window_txt(result.windows.most_negative.as_ref())
    );
    out
}

fn subject_txt(report: &SubjectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Subject: {}", report.subject);
    let Some(summary) = &report.summary else {
        let _ = write!(out, "No articles.");
        return out;
    };
    let _ = writeln!(out, "Articles: {}", summary.article_count);
    let _ = writeln!(out, "Average score: {:.2}", summary.average_score);
    let _ = writeln!(
        out,
        "Positive: {}  Neutral: {}  Negative: {}",
        summary.positive, summary.neutral, summary.negative
    );
    let _ = writeln!(out, "Most positive: {}", unit_txt(Some(&summary.most_positive)));
    let _ = writeln!(out, "Most negative: {}", unit_txt(Some(&summary.most_negative)));
    let _ = write!(out, "Daily counts (+/0/-):");
    for day in &report.timeline.daily {
        let _ = write!(
            out,
            "\n  {}  {}/{}/{}",
            day.date.format("%Y-%m-%d"),
            day.counts.positive,
            day.counts.neutral,
            day.counts.negative
        );
    }
    if report.timeline.undated > 0 {
        let _ = write!(out, "\n  ({} articles without a usable date)", report.timeline.undated);
    }
    out
}

fn unit_txt(unit: Option<&ScoredUnit>) -> String {
    match unit {
        Some(u) => format!("[{}] {}", u.score, u.text),
        None => "N/A".to_string(),
    }
}

fn window_txt(window: Option<&Window>) -> String {
    match window {
        Some(w) => format!("[{}] {}", w.score, w.text),
        None => "N/A".to_string(),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| SentimentError::Render(e.to_string()))
}

fn to_table<I>(format: OutputFormat, header: &[&str], rows: I) -> Result<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let render_err = |e: csv::Error| SentimentError::Render(e.to_string());
    let mut writer = WriterBuilder::new()
        .delimiter(format.delimiter())
        .from_writer(Vec::new());
    writer.write_record(header).map_err(render_err)?;
    for row in rows {
        writer.write_record(&row).map_err(render_err)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| SentimentError::Render(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SentimentError::Render(e.to_string()))
}
