//! History log for Surflog.
//!
//! Implements `HistoryLogTrait` — recording visits, marking session
//! boundaries, pruning old entries, and producing the raw text for display,
//! backed by a single newest-first flat text file.
//!
//! Every mutation is a one-shot whole-file read-modify-write: the file is
//! read into lines, changed in memory, and written back in full. New rows go
//! in as line 2, immediately below the header, so the most recent record is
//! always closest to the top. The file is created lazily on first write.
//!
//! Assumes a single in-flight mutation at a time, driven synchronously by
//! the host widget's event callbacks. Concurrent writers can interleave the
//! read-modify-write sequences and lose entries.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Days, Local, NaiveDate};

use crate::types::errors::HistoryError;
use crate::types::history::HistoryEntry;
use crate::types::settings::HistoryConfig;

/// Format of the `day` field, e.g. `06 01 2024`.
pub const DAY_FORMAT: &str = "%m %d %Y";
/// Format of the `time` field, e.g. `14:22:10`.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Trait defining history log operations.
pub trait HistoryLogTrait {
    fn record_visit(
        &self,
        title: &str,
        url: &str,
        now: DateTime<Local>,
    ) -> Result<(), HistoryError>;
    fn start_session(&self, now: DateTime<Local>) -> Result<(), HistoryError>;
    fn prune_older_than(&self, retention_days: u32, today: NaiveDate)
        -> Result<(), HistoryError>;
    fn display(&self) -> Result<String, HistoryError>;
    fn file_path(&self) -> &str;
}

/// History log backed by a flat text file.
///
/// The configuration is fixed at construction; callers supply the current
/// time, so the log itself never reads the clock.
pub struct HistoryLog {
    config: HistoryConfig,
}

impl HistoryLog {
    /// Creates a new `HistoryLog` over the configured file.
    pub fn new(config: HistoryConfig) -> Self {
        Self { config }
    }

    /// Formats a timestamp's calendar-date component as stored in the log.
    pub fn format_day(date: NaiveDate) -> String {
        date.format(DAY_FORMAT).to_string()
    }

    /// Reads the log into lines, synthesizing the header for a missing file.
    fn read_lines(&self) -> Result<Vec<String>, HistoryError> {
        let path = Path::new(&self.config.file_path);
        if !path.exists() {
            return Ok(vec![self.config.header_line.clone()]);
        }
        let content = fs::read_to_string(path)
            .map_err(|e| HistoryError::ReadFailed(e.to_string()))?;
        let mut lines: Vec<String> = content.lines().map(String::from).collect();
        if lines.is_empty() {
            lines.push(self.config.header_line.clone());
        }
        Ok(lines)
    }

    /// Writes the lines back as the entire file, with a trailing newline.
    fn write_lines(&self, lines: &[String]) -> Result<(), HistoryError> {
        let path = Path::new(&self.config.file_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| HistoryError::WriteFailed(e.to_string()))?;
        }
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(path, content).map_err(|e| HistoryError::WriteFailed(e.to_string()))
    }

    /// Inserts `line` as the new second line, directly below the header.
    fn insert_below_header(lines: &mut Vec<String>, line: String) {
        let at = 1.min(lines.len());
        lines.insert(at, line);
    }

    /// Removes the trailing block of lines old enough to prune.
    ///
    /// Scans from the top (most recent) downward for the first line whose
    /// `day` field textually equals `cutoff_day`, then truncates from that
    /// line to the end. Because the file is newest-first, everything below
    /// the match is at least as old, so the whole tail goes. The match is
    /// exact-date, not less-than: if the cutoff day was never visited,
    /// nothing is pruned. Returns whether anything was removed.
    fn prune_buffer(lines: &mut Vec<String>, cutoff_day: &str) -> bool {
        let hit = lines
            .iter()
            .skip(1)
            .position(|line| HistoryEntry::day_field(line) == Some(cutoff_day));
        match hit {
            Some(i) => {
                lines.truncate(i + 1);
                true
            }
            None => false,
        }
    }

    /// Computes the cutoff day string for a retention window ending `today`.
    fn cutoff_day(retention_days: u32, today: NaiveDate) -> Option<String> {
        today
            .checked_sub_days(Days::new(u64::from(retention_days)))
            .map(Self::format_day)
    }
}

impl HistoryLogTrait for HistoryLog {
    /// Records a finished page load as the newest entry in the log.
    ///
    /// The caller is responsible for deduplicating repeated load
    /// notifications for the same page before invoking this.
    fn record_visit(
        &self,
        title: &str,
        url: &str,
        now: DateTime<Local>,
    ) -> Result<(), HistoryError> {
        let entry = HistoryEntry {
            day: now.format(DAY_FORMAT).to_string(),
            time: now.format(TIME_FORMAT).to_string(),
            title: title.to_string(),
            url: url.to_string(),
        };
        let mut lines = self.read_lines()?;
        Self::insert_below_header(&mut lines, entry.to_line());
        self.write_lines(&lines)
    }

    /// Marks a browsing-session boundary and prunes old entries.
    ///
    /// Inserts the configured separator row below the header, then prunes the
    /// same in-memory buffer against the retention window, writing the
    /// combined result once. Coupling the prune to session start bounds the
    /// linear scan to once per session rather than once per visit.
    fn start_session(&self, now: DateTime<Local>) -> Result<(), HistoryError> {
        let mut lines = self.read_lines()?;
        Self::insert_below_header(&mut lines, self.config.separator_line.clone());
        if let Some(cutoff) = Self::cutoff_day(self.config.retention_days, now.date_naive()) {
            Self::prune_buffer(&mut lines, &cutoff);
        }
        self.write_lines(&lines)
    }

    /// Prunes entries at or below the first row dated `today - retention_days`.
    ///
    /// A no-op when the file does not exist or no row matches the cutoff day
    /// exactly; the file is rewritten only when something was removed.
    fn prune_older_than(
        &self,
        retention_days: u32,
        today: NaiveDate,
    ) -> Result<(), HistoryError> {
        if !Path::new(&self.config.file_path).exists() {
            return Ok(());
        }
        let mut lines = self.read_lines()?;
        let Some(cutoff) = Self::cutoff_day(retention_days, today) else {
            return Ok(());
        };
        if Self::prune_buffer(&mut lines, &cutoff) {
            self.write_lines(&lines)?;
        }
        Ok(())
    }

    /// Returns the raw log text for the presentation layer.
    ///
    /// Read-only: never creates or mutates the file. A missing file yields
    /// just the header line, so callers always see a well-formed model.
    fn display(&self) -> Result<String, HistoryError> {
        let path = Path::new(&self.config.file_path);
        if !path.exists() {
            return Ok(format!("{}\n", self.config.header_line));
        }
        fs::read_to_string(path).map_err(|e| HistoryError::ReadFailed(e.to_string()))
    }

    /// Returns the path of the underlying log file.
    fn file_path(&self) -> &str {
        &self.config.file_path
    }
}
