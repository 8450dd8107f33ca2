//! Locating and reading plain-text inputs for the CLI.

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use walkdir::WalkDir;

use crate::error::{Result, SentimentError};

/// `path` itself if it is a file, otherwise every `.txt` file below it,
/// sorted so multi-file analyses are deterministic. A missing path yields
/// an empty list.
pub fn collect_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("txt"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SentimentError::from_io(path, e))
}

/// Newline-separated lines of `reader`, decoded one at a time.
///
/// The outer `Result` is a read failure on `origin` and ends the input. The
/// inner one is a single line that is not valid UTF-8; callers skip it and
/// keep going.
pub(crate) fn utf8_lines<R: BufRead>(
    reader: R,
    origin: &str,
) -> impl Iterator<Item = Result<std::result::Result<String, FromUtf8Error>>> + use<R> {
    let origin = origin.to_string();
    reader.split(b'\n').map(move |bytes| {
        let bytes = bytes.map_err(|cause| SentimentError::IoFailure {
            origin: origin.clone(),
            cause,
        })?;
        Ok(String::from_utf8(bytes))
    })
}
