//! Integration tests for `lexicon_sentiment`.
//
// This suite verifies:
// - Library behavior (lexicon loading, scoring, segmentation, unit/window extremes, corpus scans)
// - CLI behavior for `score`, `analyze` and `corpus`, including output formats
//
// Notes:
// - CLI tests run the binary with a per-process working directory and an explicit --lexicon.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use serde_json::Value as Json;
use tempfile::tempdir;

use lexicon_sentiment::{
    AnalysisOptions, LabeledLine, Lexicon, LexiconScorer, PunctuationSegmenter, ScoredUnit,
    Scorer, SegmentMode, SentimentAnalyzer, Tokenizer, WordTokenizer, analyze_units,
    process_corpus_path, sliding_windows,
};

// --------------------- helpers ---------------------

const LEXICON: &str = "good\t3\nbad\t-3\ngreat\t3\nterrible\t-3\nhappy\t3\nsad\t-2\n";

/// Create a file with content in a temp dir.
fn write_file(dir: &assert_fs::TempDir, name: &str, content: &str) -> PathBuf {
    let f = dir.child(name);
    f.write_str(content).unwrap();
    f.path().to_path_buf()
}

fn small_lexicon() -> Lexicon {
    [("good", 3), ("bad", -3)].into_iter().collect()
}

fn analyzer() -> SentimentAnalyzer {
    SentimentAnalyzer::new(small_lexicon())
}

fn options(window: usize, mode: SegmentMode) -> AnalysisOptions {
    AnalysisOptions {
        window_size: NonZeroUsize::new(window).unwrap(),
        segment_mode: mode,
        ..AnalysisOptions::default()
    }
}

/// Run CLI with a lexicon file from `dir`, expecting success.
fn run_cli_ok_in(dir: &assert_fs::TempDir, args: &[&str]) -> assert_cmd::assert::Assert {
    let lexicon = write_file(dir, "lexicon.tsv", LEXICON);
    let mut cmd = assert_cmd::Command::cargo_bin("lexicon_sentiment").unwrap();
    cmd.current_dir(dir.path());
    cmd.arg("--lexicon").arg(&lexicon);
    cmd.args(args).assert().success()
}

/// Run CLI with a lexicon file from `dir`, expecting failure.
fn run_cli_fail_in(dir: &assert_fs::TempDir, args: &[&str]) -> assert_cmd::assert::Assert {
    let lexicon = write_file(dir, "lexicon.tsv", LEXICON);
    let mut cmd = assert_cmd::Command::cargo_bin("lexicon_sentiment").unwrap();
    cmd.current_dir(dir.path());
    cmd.arg("--lexicon").arg(&lexicon);
    cmd.args(args).assert().failure()
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> Json {
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&out).expect("valid json")
}

// --------------------- library tests ---------------------

#[test]
fn lib_lexicon_file_roundtrip() {
    let td = assert_fs::TempDir::new().unwrap();
    let path = write_file(&td, "afinn.txt", "Good\t3\nbroken line\nbad\t-3\n");
    let lex = Lexicon::load(&path).expect("lexicon loads");
    assert_eq!(lex.len(), 2);
    assert_eq!(lex.skipped_lines(), 1);
    assert_eq!(lex.lookup("good"), 3);
    assert_eq!(lex.lookup("unknown"), 0);
}

#[test]
fn lib_missing_lexicon_scores_zero() {
    let td = tempdir().unwrap();
    let analyzer = SentimentAnalyzer::from_lexicon_path(td.path().join("nope.txt"));
    assert_eq!(analyzer.score("good great happy"), 0);
    let r = analyzer.analyze_text(&["Good. Bad."]);
    assert_eq!(r.units.len(), 2);
    assert_eq!(r.total_score, 0);
}

#[test]
fn lib_score_properties() {
    let scorer = LexiconScorer::new(std::sync::Arc::new(small_lexicon()));
    assert_eq!(scorer.score(""), 0);
    assert_eq!(scorer.score("wonderful"), 0);

    let text = "Good good BAD, and a bad-ish ending. Good?";
    let reference: i64 = WordTokenizer
        .tokenize(text)
        .iter()
        .map(|t| scorer.lexicon().lookup(t))
        .sum();
    assert_eq!(scorer.score(text), reference);
    // "bad-ish" tokenizes to "badish", which is unknown
    assert_eq!(reference, 6);
}

#[test]
fn lib_good_bad_fine_scenario() {
    let r = analyzer().analyze_text(&["This is good. This is bad. This is fine."]);
    let scores: Vec<i64> = r.units.iter().map(|u| u.score).collect();
    assert_eq!(scores, vec![3, -3, 0]);
    assert_eq!(r.most_positive, Some(ScoredUnit::new("This is good", 3)));
    assert_eq!(r.most_negative, Some(ScoredUnit::new("This is bad", -3)));
    assert_eq!(r.total_score, 0);
    assert_eq!(r.avg_score, 0.0);
    // three units fill exactly one window of the default size
    assert_eq!(r.windows.window_size, 3);
    assert_eq!(r.windows.most_positive.as_ref().unwrap().score, 0);
}

#[test]
fn lib_two_unit_windows_scenario() {
    let r = analyzer().analyze_text_with(
        &["This is good. This is bad. This is fine."],
        &options(2, SegmentMode::Sentence),
    );
    let pos = r.windows.most_positive.unwrap();
    let neg = r.windows.most_negative.unwrap();
    assert_eq!((pos.start, pos.score), (0, 0));
    assert_eq!(pos.text, "This is good. This is bad.");
    assert_eq!((neg.start, neg.score), (1, -3));
    assert_eq!(neg.text, "This is bad. This is fine.");
}

#[test]
fn lib_empty_input_scenario() {
    let empty: Vec<&str> = vec![];
    let r = analyzer().analyze_text(&empty);
    assert!(r.units.is_empty());
    assert!(r.most_positive.is_none());
    assert!(r.most_negative.is_none());
    assert_eq!(r.total_score, 0);
    assert_eq!(r.avg_score, 0.0);
    assert!(r.windows.most_positive.is_none());
    assert!(r.windows.most_negative.is_none());
}

#[test]
fn lib_window_size_one_equals_units() {
    let a = analyzer();
    let units = analyze_units(
        &["bad start, good middle, fine end"],
        &PunctuationSegmenter::phrases(),
        a.scorer(),
    );
    let w = sliding_windows(&units.units, NonZeroUsize::MIN);
    let pos = w.most_positive.unwrap();
    let neg = w.most_negative.unwrap();
    assert_eq!(pos.text, format!("{}.", units.most_positive.as_ref().unwrap().text));
    assert_eq!(pos.score, units.most_positive.unwrap().score);
    assert_eq!(neg.text, "bad start.");
    assert_eq!(neg.score, -3);
}

#[test]
fn lib_phrase_mode_chunks_long_phrases() {
    let mut o = options(1, SegmentMode::Phrase);
    o.max_words_per_segment = NonZeroUsize::new(3).unwrap();
    let r = analyzer().analyze_text_with(&["one two three good five six bad"], &o);
    let texts: Vec<&str> = r.units.iter().map(|u| u.text.as_str()).collect();
    assert_eq!(texts, vec!["one two three", "good five six", "bad"]);
    assert_eq!(r.most_positive.unwrap().text, "good five six");
}

#[test]
fn lib_multiple_texts_keep_order() {
    let r = analyzer().analyze_text(&["Headline one is good", "Headline two. Bad ending"]);
    let texts: Vec<&str> = r.units.iter().map(|u| u.text.as_str()).collect();
    assert_eq!(texts, vec!["Headline one is good", "Headline two", "Bad ending"]);
}

#[test]
fn lib_corpus_counts_valid_records() {
    let td = assert_fs::TempDir::new().unwrap();
    let path = write_file(
        &td,
        "reviews.txt",
        "__label__2 good product, good price\n\n__label__1 bad\n__label__1\n   \n__label__2 fine\n",
    );
    let a = analyzer();
    let r = process_corpus_path(&path, &LabeledLine, a.scorer()).unwrap();
    assert_eq!(r.total_records_processed, 3);
    assert_eq!(r.skipped_records, 1);
    assert_eq!(r.most_positive_record.unwrap().text, "good product, good price");
    assert_eq!(r.most_negative_record.unwrap().score, -3);
}

#[test]
fn lib_analyzer_is_shared_across_threads() {
    let a = analyzer();
    let shared = &a;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || shared.analyze_text(&["good. bad. good"]).total_score))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 3);
        }
    });
}

// --------------------- CLI tests ---------------------

#[test]
fn cli_score_prints_each_text() {
    let td = assert_fs::TempDir::new().unwrap();
    run_cli_ok_in(&td, &["score", "good and happy", "sad"])
        .stdout(predicate::str::contains("6\tgood and happy"))
        .stdout(predicate::str::contains("-2\tsad"));
}

#[test]
fn cli_missing_lexicon_degrades() {
    let td = assert_fs::TempDir::new().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("lexicon_sentiment").unwrap();
    cmd.current_dir(td.path())
        .env("SENTIMENT_LEXICON", td.path().join("missing.txt"))
        .args(["score", "good"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0\tgood"))
        .stderr(predicate::str::contains("continuing with an empty lexicon"));
}

#[test]
fn cli_analyze_text_txt() {
    let td = assert_fs::TempDir::new().unwrap();
    run_cli_ok_in(
        &td,
        &[
            "analyze",
            "--text",
            "This is good. This is bad. This is fine.",
            "--window-size",
            "2",
        ],
    )
    .stdout(predicate::str::contains("Most positive unit: [3] This is good"))
    .stdout(predicate::str::contains(
        "Most negative window (size 2): [-3] This is bad. This is fine.",
    ));
}

#[test]
fn cli_analyze_no_text_is_not_an_error() {
    let td = assert_fs::TempDir::new().unwrap();
    run_cli_ok_in(&td, &["analyze"])
        .stdout(predicate::str::contains("No text provided."))
        .stdout(predicate::str::contains("N/A"));
}

#[test]
fn cli_analyze_directory_json() {
    let td = assert_fs::TempDir::new().unwrap();
    write_file(&td, "docs/a.txt", "Great start. Terrible middle.");
    write_file(&td, "docs/b.txt", "Happy happy ending.");
    let assert = run_cli_ok_in(
        &td,
        &["analyze", "docs", "--format", "json", "--window-size", "2"],
    );
    let v = stdout_json(&assert);
    assert_eq!(v["units"].as_array().unwrap().len(), 3);
    assert_eq!(v["most_negative"]["text"], "Terrible middle");
    assert_eq!(
        v["windows"]["most_positive"]["text"],
        "Terrible middle. Happy happy ending."
    );
    assert_eq!(v["windows"]["most_negative"]["start"], 0);
}

#[test]
fn cli_analyze_phrase_csv() {
    let td = assert_fs::TempDir::new().unwrap();
    run_cli_ok_in(
        &td,
        &[
            "analyze",
            "--text",
            "=good news, bad news",
            "--mode",
            "phrase",
            "--format",
            "csv",
        ],
    )
    .stdout(predicate::str::contains("index,text,score"))
    .stdout(predicate::str::contains("0,'=good news,3"))
    .stdout(predicate::str::contains("1,bad news,-3"));
}

#[test]
fn cli_analyze_per_file() {
    let td = assert_fs::TempDir::new().unwrap();
    write_file(&td, "in/one.txt", "good");
    write_file(&td, "in/two.txt", "bad");
    let assert = run_cli_ok_in(&td, &["analyze", "in", "--per-file", "--window-size", "1"]);
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let one = out.find("one.txt").expect("one.txt reported");
    let two = out.find("two.txt").expect("two.txt reported");
    assert!(one < two, "per-file output follows path order");
    assert!(out.contains("Most positive unit: [-3] bad"));
}

#[test]
fn cli_per_file_reports_unreadable_files() {
    let td = assert_fs::TempDir::new().unwrap();
    write_file(&td, "in/one.txt", "good");
    td.child("in/two.txt").write_binary(b"caf\xE9 bad").unwrap();
    run_cli_fail_in(&td, &["analyze", "in", "--per-file"])
        .stdout(predicate::str::contains("one.txt"))
        .stderr(predicate::str::contains("two.txt"))
        .stderr(predicate::str::contains("1 of 2 file(s) could not be analyzed"));
}

#[test]
fn cli_latin1_lexicon_line_is_skipped() {
    let td = assert_fs::TempDir::new().unwrap();
    td.child("latin1.tsv")
        .write_binary(b"good\t3\nna\xEFve\t1\nbad\t-3\n")
        .unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("lexicon_sentiment").unwrap();
    cmd.current_dir(td.path())
        .args(["--lexicon", "latin1.tsv", "score", "good good bad"])
        .assert()
        .success()
        .stdout(predicate::eq("3\tgood good bad\n"));
}

#[test]
fn cli_nonexistent_path_fails() {
    let td = assert_fs::TempDir::new().unwrap();
    run_cli_fail_in(&td, &["analyze", "does_not_exist_here"])
        .stderr(predicate::str::contains("resource not found"));
}

#[test]
fn cli_rejects_zero_window() {
    let td = assert_fs::TempDir::new().unwrap();
    run_cli_fail_in(&td, &["analyze", "--text", "good", "--window-size", "0"]);
}

#[test]
fn cli_corpus_json() {
    let td = assert_fs::TempDir::new().unwrap();
    write_file(&td, "corpus.txt", "1 good good\n\n2 terrible\n3 fine\n");
    let assert = run_cli_ok_in(&td, &["corpus", "corpus.txt", "--format", "json"]);
    let v = stdout_json(&assert);
    assert_eq!(v["total_records_processed"], 3);
    assert_eq!(v["most_positive_record"]["text"], "good good");
    assert_eq!(v["most_negative_record"]["score"], -3);
}

#[test]
fn cli_corpus_whole_line() {
    let td = assert_fs::TempDir::new().unwrap();
    write_file(&td, "lines.txt", "good\nbad\n");
    run_cli_ok_in(&td, &["corpus", "lines.txt", "--whole-line"])
        .stdout(predicate::str::contains("Records processed: 2"))
        .stdout(predicate::str::contains("Most negative record: [-3] bad"));
}

#[test]
fn cli_corpus_missing_file_fails() {
    let td = assert_fs::TempDir::new().unwrap();
    run_cli_fail_in(&td, &["corpus", "absent.txt"])
        .stderr(predicate::str::contains("absent.txt"));
}
