//! The record model shared by the write path (handlers encode it) and the
//! read path (the file store decodes it).

use crate::config;
use crate::level::Level;
use chrono::NaiveDateTime;
use std::fmt;
use std::path::PathBuf;

/// Number of `;`-joined fields in one persisted line. The decoder requires
/// exactly this many — an unescaped `;` inside a message desynchronizes the
/// line and the whole line is dropped, a documented limitation of the format.
pub const FIELD_COUNT: usize = 6;

const FIELD_SEPARATOR: char = ';';

/// One structured log event, either built at a call site or re-parsed from
/// a persisted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// The owning logger's label.
    pub label: String,
    /// Local wall-clock time the record was produced.
    pub timestamp: NaiveDateTime,
    pub level: Level,
    /// Call-site location as `"path/to/file.rs (line)"` — persisted as one
    /// field, so it stays composite in memory too.
    pub file: String,
    pub function: String,
    pub message: String,
    /// Where the record was parsed from; `None` for freshly built records.
    pub source: Option<RecordSource>,
}

/// A parsed record has no identity beyond the file it came from and its
/// line index within that file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSource {
    pub file_name: String,
    pub index: usize,
}

impl RecordSource {
    /// Stable display identity, unique within one read pass.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}->{}", self.file_name, self.index)
    }
}

impl LogRecord {
    /// Joins the six fields with `;` in persisted order. The message is not
    /// escaped; see [`FIELD_COUNT`].
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{label}{s}{timestamp}{s}{level}{s}{file}{s}{function}{s}{message}",
            label = self.label,
            timestamp = config::format_timestamp(self.timestamp),
            level = self.level.as_str(),
            file = self.file,
            function = self.function,
            message = self.message,
            s = FIELD_SEPARATOR,
        )
    }

    /// Decodes one persisted line.
    ///
    /// Returns `None` when the line does not split into exactly six fields,
    /// or when the timestamp or level field does not parse — malformed and
    /// partially-written lines are filtered out, never surfaced as errors.
    #[must_use]
    pub fn decode(line: &str, source: Option<RecordSource>) -> Option<Self> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != FIELD_COUNT {
            return None;
        }

        let timestamp = config::parse_timestamp(fields[1])?;
        let level = Level::from_name(fields[2])?;

        Some(Self {
            label: fields[0].to_string(),
            timestamp,
            level,
            file: fields[3].to_string(),
            function: fields[4].to_string(),
            message: fields[5].to_string(),
            source,
        })
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} -> {} > {}",
            config::format_timestamp(self.timestamp),
            self.level,
            self.label,
            self.file,
            self.function,
            self.message
        )
    }
}

/// One physical log file under the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    /// File name including extension, e.g. `app.log`.
    pub name: String,
}

impl LogFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        Self { path, name }
    }
}
