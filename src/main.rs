#![forbid(unsafe_code)]
//! # Lexicon Sentiment CLI
//!
//! Command-line front end for the `lexicon_sentiment` crate: score texts,
//! find the most positive/negative sentences, phrases and windows of
//! `.txt` documents, scan labeled corpora, and summarize CSV news datasets.
//!
//! ## Example
//! ```bash
//! cargo run --release -- --lexicon AFINN-111.txt analyze path/to/texts --window-size 3 --mode phrase
//! ```
//!
//! See `--help` for all available options.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgGroup, Parser, Subcommand};
use log::error;
use rayon::prelude::*;

use lexicon_sentiment::{
    AnalysisOptions, LabeledLine, NewsDataset, OutputFormat, PunctuationSegmenter,
    RecordExtractor, Result, SegmentMode, SentimentAnalyzer, SentimentError, SentimentSummary,
    SubjectReport, Timeline, WholeLine, collect_files, read_text, render_analysis,
    render_corpus, render_subject,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Lexicon file with one `word<TAB>score` entry per line
    #[arg(
        long,
        global = true,
        env = "SENTIMENT_LEXICON",
        default_value = "AFINN-111.txt"
    )]
    lexicon: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the score of each given text
    Score {
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Score sentences/phrases and sliding windows of documents or texts
    Analyze {
        /// File or directory (.txt files) to analyze
        path: Option<PathBuf>,

        /// Text to analyze directly; may be repeated
        #[arg(long = "text")]
        texts: Vec<String>,

        /// Number of consecutive units per window
        #[arg(long, default_value_t = AnalysisOptions::DEFAULT_WINDOW_SIZE)]
        window_size: NonZeroUsize,

        /// Unit granularity
        #[arg(long, value_enum, default_value_t = SegmentMode::Sentence)]
        mode: SegmentMode,

        /// Maximum words per phrase before it is split (phrase mode)
        #[arg(long, default_value_t = PunctuationSegmenter::DEFAULT_MAX_WORDS)]
        max_words: NonZeroUsize,

        /// Output format (txt, json, csv, tsv)
        #[arg(long, value_enum, default_value_t = OutputFormat::Txt)]
        format: OutputFormat,

        /// Analyze each file on its own instead of all texts together
        #[arg(long, default_value_t = false)]
        per_file: bool,
    },

    /// Find the most positive and negative records of a `<label> <text>` corpus
    Corpus {
        path: PathBuf,

        /// Treat each whole line as the record text (no leading label)
        #[arg(long, default_value_t = false)]
        whole_line: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Txt)]
        format: OutputFormat,
    },

    /// Summarize a CSV news dataset (columns: text, subject, source, date, url)
    #[command(group(
        ArgGroup::new("query")
            .required(true)
            .args(["subject", "url", "list_subjects"])
    ))]
    Dataset {
        path: PathBuf,

        /// Summary and daily counts for one subject
        #[arg(long)]
        subject: Option<String>,

        /// Phrase-level analysis of the article with this url
        #[arg(long)]
        url: Option<String>,

        /// Print every subject with its average score
        #[arg(long)]
        list_subjects: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Txt)]
        format: OutputFormat,
    },
}

fn main() {
    // Warnings (degraded lexicon, skipped lines) show unless RUST_LOG says otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    // A missing lexicon is reported but not fatal: every score becomes 0.
    let analyzer = SentimentAnalyzer::from_lexicon_path(&cli.lexicon);

    let outcome = match cli.command {
        Command::Score { texts } => {
            for text in &texts {
                println!("{}\t{}", analyzer.score(text), text);
            }
            Ok(())
        }
        Command::Analyze {
            path,
            texts,
            window_size,
            mode,
            max_words,
            format,
            per_file,
        } => {
            let options = AnalysisOptions {
                window_size,
                segment_mode: mode,
                max_words_per_segment: max_words,
            };
            if per_file {
                match path {
                    Some(path) => analyze_per_file(&analyzer, &path, &options, format),
                    None => Err(SentimentError::Usage(
                        "--per-file needs a PATH".to_string(),
                    )),
                }
            } else {
                analyze_combined(&analyzer, path.as_deref(), texts, &options, format)
            }
        }
        Command::Corpus {
            path,
            whole_line,
            format,
        } => {
            let extractor: &dyn RecordExtractor = if whole_line {
                &WholeLine
            } else {
                &LabeledLine
            };
            analyzer
                .process_corpus(&path, extractor)
                .and_then(|result| render_corpus(&result, format))
                .map(|out| println!("{out}"))
        }
        Command::Dataset {
            path,
            subject,
            url,
            list_subjects: _,
            format,
        } => run_dataset(&analyzer, &path, subject, url, format),
    };

    if let Err(e) = outcome {
        error!("Error: {}", e);
        process::exit(1);
    }
}

fn input_files(path: &Path) -> Result<Vec<PathBuf>> {
    let files = collect_files(path);
    if files.is_empty() {
        return Err(SentimentError::ResourceNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(files)
}

/// All files (in path order) and all `--text` values form one analysis.
fn analyze_combined(
    analyzer: &SentimentAnalyzer,
    path: Option<&Path>,
    extra: Vec<String>,
    options: &AnalysisOptions,
    format: OutputFormat,
) -> Result<()> {
    let mut texts = Vec::new();
    if let Some(path) = path {
        for file in input_files(path)? {
            texts.push(read_text(&file)?);
        }
    }
    texts.extend(extra);
    let result = analyzer.analyze_text_with(&texts, options);
    println!("{}", render_analysis(&result, format)?);
    Ok(())
}

/// Independent analyses, one per file, run in parallel and printed in path
/// order. Failing files are reported and make the run fail at the end.
fn analyze_per_file(
    analyzer: &SentimentAnalyzer,
    path: &Path,
    options: &AnalysisOptions,
    format: OutputFormat,
) -> Result<()> {
    let files = input_files(path)?;
    let reports: Vec<(PathBuf, Result<String>)> = files
        .into_par_iter()
        .map(|file| {
            let report = read_text(&file).and_then(|text| {
                render_analysis(&analyzer.analyze_text_with(&[text], options), format)
            });
            (file, report)
        })
        .collect();

    let total = reports.len();
    let mut failed = 0;
    for (file, report) in reports {
        match report {
            Ok(out) => println!("== {}\n{}", file.display(), out),
            Err(e) => {
                error!("Error analyzing {}: {}", file.display(), e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(SentimentError::PartialFailure { failed, total });
    }
    Ok(())
}

fn run_dataset(
    analyzer: &SentimentAnalyzer,
    path: &Path,
    subject: Option<String>,
    url: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let dataset = NewsDataset::from_csv_path(path, analyzer.scorer())?;

    if let Some(url) = url {
        let article = dataset
            .find_by_url(&url)
            .ok_or_else(|| SentimentError::UnknownKey {
                kind: "article",
                key: url.clone(),
            })?;
        // Headlines: phrase units, each its own window.
        let options = AnalysisOptions {
            window_size: NonZeroUsize::MIN,
            segment_mode: SegmentMode::Phrase,
            ..*analyzer.options()
        };
        let result = analyzer.analyze_text_with(&[article.record.text.as_str()], &options);
        println!("{}", render_analysis(&result, format)?);
        return Ok(());
    }

    // The argument group guarantees exactly one query; no subject means the
    // subject list was asked for.
    let Some(subject) = subject else {
        for subject in dataset.subjects() {
            if let Some(average) = dataset.average_score(subject) {
                println!("{subject}\t{average:.2}");
            }
        }
        return Ok(());
    };

    let articles = dataset.by_subject(&subject);
    if articles.is_empty() {
        return Err(SentimentError::UnknownKey {
            kind: "subject",
            key: subject,
        });
    }
    let report = SubjectReport {
        summary: SentimentSummary::from_articles(&articles),
        timeline: Timeline::from_articles(&articles),
        subject,
    };
    println!("{}", render_subject(&report, format)?);
    Ok(())
}
