//! Input discovery and line streaming.
//!
//! A run reads either a single log file or every `*.log` file directly inside
//! a directory (non-recursive). Directory entries are processed in sorted
//! file-name order so repeated runs over the same tree give identical output.
//! The first file that can't be read fails the whole run.

use crate::Result;
use crate::model::{Accumulator, LineStats};

use anyhow::Context;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// File-name suffix that marks a log file in directory mode.
pub const LOG_EXTENSION: &str = ".log";

/// Output file used in directory mode when none is given.
pub const DIRECTORY_OUTPUT: &str = "logs_analysis.json";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("invalid input path: {}", .0.display())]
    InvalidPath(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Directory(PathBuf),
}

impl InputSource {
    /// Classify `path` as a file or a directory.
    pub fn resolve(path: &Path) -> std::result::Result<Self, InputError> {
        if path.is_file() {
            Ok(InputSource::File(path.to_path_buf()))
        } else if path.is_dir() {
            Ok(InputSource::Directory(path.to_path_buf()))
        } else {
            Err(InputError::InvalidPath(path.to_path_buf()))
        }
    }

    /// `<input>.json` for a single file, [`DIRECTORY_OUTPUT`] for a directory.
    pub fn default_output(&self) -> PathBuf {
        match self {
            InputSource::File(path) => {
                let mut out = path.clone().into_os_string();
                out.push(".json");
                PathBuf::from(out)
            }
            InputSource::Directory(_) => PathBuf::from(DIRECTORY_OUTPUT),
        }
    }

    /// Log files to read, in processing order.
    pub fn log_files(&self) -> Result<Vec<PathBuf>> {
        match self {
            InputSource::File(path) => Ok(vec![path.clone()]),
            InputSource::Directory(dir) => list_log_files(dir),
        }
    }
}

fn list_log_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read log directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read log directory {}", dir.display()))?;
        let name = entry.file_name();
        if !name.to_string_lossy().ends_with(LOG_EXTENSION) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Stream one log file line by line into `acc`.
pub fn analyze_file(path: &Path, acc: &mut Accumulator) -> Result<LineStats> {
    let file = File::open(path).with_context(|| format!("open log file {}", path.display()))?;

    let mut stats = LineStats::default();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line =
            line.with_context(|| format!("read log file {}:{}", path.display(), lineno + 1))?;
        if acc.consume_line(&line) {
            stats.matched += 1;
        } else {
            stats.skipped += 1;
        }
    }

    debug!(
        path = %path.display(),
        matched = stats.matched,
        skipped = stats.skipped,
        "processed log file"
    );
    Ok(stats)
}

/// Feed every log file of `source` into `acc`, in order.
pub fn analyze(source: &InputSource, acc: &mut Accumulator) -> Result<LineStats> {
    let files = source.log_files()?;
    info!(files = files.len(), "analyzing access logs");

    let mut stats = LineStats::default();
    for path in &files {
        stats.add(analyze_file(path, acc)?);
    }

    info!(
        matched = stats.matched,
        skipped = stats.skipped,
        total = acc.total(),
        "analysis complete"
    );
    Ok(stats)
}
