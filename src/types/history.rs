use serde::{Deserialize, Serialize};

/// One recorded page visit as stored in the log file.
///
/// Serialized as a comma-separated line `day,time,title,url`. Titles are
/// written as-is with no escaping, so a title containing commas produces a
/// line whose middle fields can only be recovered heuristically (see
/// [`HistoryEntry::parse_line`]). This is a known limitation of the format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Calendar date of the visit, formatted `mm dd yyyy`.
    pub day: String,
    /// Local wall-clock time of the visit, formatted `hh:mm:ss`.
    pub time: String,
    /// Page title as reported by the browser widget. Site-controlled.
    pub title: String,
    /// Absolute URL of the visited page.
    pub url: String,
}

impl HistoryEntry {
    /// Renders the entry as one log-file line (no trailing newline).
    pub fn to_line(&self) -> String {
        format!("{},{},{},{}", self.day, self.time, self.title, self.url)
    }

    /// Parses one log-file line back into an entry.
    ///
    /// The first two commas delimit `day` and `time`; the last comma delimits
    /// `url`. Everything in between is the title, which therefore survives
    /// even when it contains commas. Returns `None` for lines with fewer
    /// than four fields (blank lines included). Callers are expected to skip
    /// the header row and separator rows before parsing.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (day, rest) = line.split_once(',')?;
        let (time, rest) = rest.split_once(',')?;
        let (title, url) = rest.rsplit_once(',')?;
        Some(Self {
            day: day.to_string(),
            time: time.to_string(),
            title: title.to_string(),
            url: url.to_string(),
        })
    }

    /// Returns the `day` field of a raw log line, if it has one.
    pub fn day_field(line: &str) -> Option<&str> {
        line.split(',').next()
    }
}
