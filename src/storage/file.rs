//! CSV file storage backend.

use crate::core::WordRecord;
use crate::core::interval::MAX_LEVEL;
use crate::error::{Error, Result};
use crate::storage::traits::WordStore;
use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Column names, in the order they are written.
const COLUMNS: [&str; 4] = ["word", "due_date", "num", "active"];

/// Naive timestamp layouts accepted on load, read as local time.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// CSV file backend with atomic writes.
///
/// Columns are located by header name, so extra columns are ignored.
#[derive(Debug, Clone)]
pub struct CsvBackend {
    path: PathBuf,
}

impl CsvBackend {
    /// Create a backend for the word file at `path`.
    ///
    /// The file is not touched until the first load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the word file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the temporary file written before the atomic rename.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl WordStore for CsvBackend {
    fn load(&self) -> Result<Vec<WordRecord>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "word file missing, starting empty");
            return Ok(Vec::new());
        }

        let contents = fs::read(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(contents.as_slice());

        let columns = ColumnIndex::locate(reader.headers().map_err(malformed)?)?;

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(malformed)?;
            // Header is line 1
            records.push(columns.parse_row(&row, index + 2)?);
        }

        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded words");
        Ok(records)
    }

    fn save(&self, records: &[WordRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to temp file first
        let temp = self.temp_path();
        let mut writer = csv::Writer::from_path(&temp)?;
        writer.write_record(COLUMNS)?;
        for record in records {
            let level = record.repetition_level.to_string();
            let due_date = format_timestamp(record.due_date);
            let active = record.active.to_string();
            writer.write_record([
                record.word.as_str(),
                due_date.as_str(),
                level.as_str(),
                active.as_str(),
            ])?;
        }
        writer.flush()?;
        drop(writer);

        // Atomic rename - a crash mid-write leaves the old file intact
        fs::rename(&temp, &self.path)?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "saved words");
        Ok(())
    }
}

/// Positions of the required columns within a header row.
struct ColumnIndex {
    word: usize,
    due_date: usize,
    num: usize,
    active: usize,
}

impl ColumnIndex {
    fn locate(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| Error::DataFormat(format!("missing column `{name}`")))
        };

        Ok(Self {
            word: find("word")?,
            due_date: find("due_date")?,
            num: find("num")?,
            active: find("active")?,
        })
    }

    fn parse_row(&self, row: &csv::StringRecord, line: usize) -> Result<WordRecord> {
        let field = |index: usize, name: &str| {
            row.get(index)
                .map(str::trim)
                .ok_or_else(|| Error::DataFormat(format!("line {line}: missing `{name}` value")))
        };

        let word = field(self.word, "word")?;
        if word.is_empty() {
            return Err(Error::DataFormat(format!("line {line}: empty word")));
        }

        let raw_due = field(self.due_date, "due_date")?;
        let due_date = parse_timestamp(raw_due).ok_or_else(|| {
            Error::DataFormat(format!("line {line}: unparsable due_date {raw_due:?}"))
        })?;

        let raw_num = field(self.num, "num")?;
        let num: i64 = raw_num
            .parse()
            .map_err(|_| Error::DataFormat(format!("line {line}: unparsable num {raw_num:?}")))?;

        let raw_active = field(self.active, "active")?;
        let active = parse_bool(raw_active).ok_or_else(|| {
            Error::DataFormat(format!("line {line}: unparsable active {raw_active:?}"))
        })?;

        Ok(WordRecord {
            word: word.to_string(),
            repetition_level: clamp_stored_level(num),
            due_date,
            active,
        })
    }
}

/// Report rows the CSV reader rejects as a malformed word file.
fn malformed(err: csv::Error) -> Error {
    let line = err.position().map_or(0, csv::Position::line);
    let message = match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => Some(format!(
            "line {line}: expected {expected_len} fields, found {len}"
        )),
        csv::ErrorKind::Utf8 { err: utf8, .. } => {
            Some(format!("line {line}: invalid UTF-8 ({utf8})"))
        }
        _ => None,
    };

    match message {
        Some(message) => Error::DataFormat(message),
        None => Error::Csv(err),
    }
}

/// Clamp a stored level into range. Older files may hold `-1`.
fn clamp_stored_level(num: i64) -> usize {
    usize::try_from(num.max(0)).map_or(MAX_LEVEL, |level| level.min(MAX_LEVEL))
}

/// Format a timestamp as RFC 3339 UTC at full precision.
fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse an RFC 3339 timestamp, or a naive one in local time.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(s) {
        return Some(at.with_timezone(&Utc));
    }

    NAIVE_FORMATS.iter().find_map(|format| {
        let naive = NaiveDateTime::parse_from_str(s, format).ok()?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|at| at.with_timezone(&Utc))
    })
}

/// Parse `true`/`false` in any case, or `1`/`0`.
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
