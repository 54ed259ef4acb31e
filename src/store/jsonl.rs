//! JSONL persistence for the hole event log.
//!
//! One file per tournament, one JSON object per line, append-only — the same
//! shape as the event log the reducer folds. The file is the log; nothing
//! derived is ever written back.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::StoreError;
use crate::models::{HoleResult, MatchId};

/// Append/read access to a tournament's hole-event file.
pub struct EventLogFile {
    path: PathBuf,
}

impl EventLogFile {
    /// Create a handle for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Conventional location under a data directory.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("hole_results.jsonl"))
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append a single result to the file.
    pub fn append(&self, result: &HoleResult) -> Result<(), StoreError> {
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(result)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        debug!("Appended hole result to {:?}", self.path);
        Ok(())
    }

    /// Write results, replacing the entire file. Used after an undo, when
    /// one event has been retracted from the log.
    pub fn write_all(&self, results: &[HoleResult]) -> Result<usize, StoreError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;

        for result in results {
            let json = serde_json::to_string(result)?;
            writeln!(writer, "{}", json)?;
            count += 1;
        }

        writer.flush()?;
        info!("Wrote {} hole results to {:?}", count, self.path);

        Ok(count)
    }

    /// Read every result in append order. Malformed lines are skipped with a
    /// warning; the reducer must always get *some* log to fold.
    pub fn read_all(&self) -> Result<Vec<HoleResult>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut results = Vec::new();
        let mut line_num = 0;

        for line in reader.lines() {
            line_num += 1;
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        line_num, self.path, e
                    );
                }
            }
        }

        debug!("Read {} hole results from {:?}", results.len(), self.path);
        Ok(results)
    }

    /// Read results belonging to one match, in append order.
    pub fn read_for_match(&self, match_id: &MatchId) -> Result<Vec<HoleResult>, StoreError> {
        let all = self.read_all()?;
        Ok(all.into_iter().filter(|r| &r.match_id == match_id).collect())
    }
}
