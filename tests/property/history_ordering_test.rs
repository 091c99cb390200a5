//! Property-based tests for history log ordering.
//!
//! For any sequence of recorded visits (with session boundaries sprinkled
//! in), the log file keeps its header as the first line and lists entries
//! newest-first.

use chrono::{Duration, Local};
use proptest::prelude::*;
use surflog::managers::history_log::{HistoryLog, HistoryLogTrait};
use surflog::types::history::HistoryEntry;
use surflog::types::settings::HistoryConfig;

const SEPARATOR: &str = "__________,__________,__________,__________";

fn fresh_log(dir: &tempfile::TempDir) -> HistoryLog {
    HistoryLog::new(HistoryConfig {
        file_path: dir.path().join("history.csv").to_string_lossy().to_string(),
        ..HistoryConfig::default()
    })
}

/// A visit is a host name; `true` means a session boundary instead.
fn arb_actions() -> impl Strategy<Value = Vec<(bool, String)>> {
    proptest::collection::vec(
        (any::<bool>(), "[a-z][a-z0-9]{2,10}"),
        1..12,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn header_first_and_entries_newest_first(actions in arb_actions()) {
        let dir = tempfile::tempdir().expect("tempdir");
        let log = fresh_log(&dir);
        let base = Local::now();

        let mut visited = Vec::new();
        for (i, (is_session, host)) in actions.iter().enumerate() {
            let at = base + Duration::seconds(i as i64);
            if *is_session {
                log.start_session(at).expect("start_session");
            } else {
                let url = format!("https://{}.example", host);
                log.record_visit("Page", &url, at).expect("record_visit");
                visited.push(url);
            }
        }

        let content = std::fs::read_to_string(log.file_path()).expect("log file");
        let lines: Vec<&str> = content.lines().collect();

        // Header invariant
        prop_assert_eq!(lines[0], "day,time,title,url");
        prop_assert_eq!(
            lines.iter().filter(|&&l| l == "day,time,title,url").count(),
            1
        );

        // Entries (separators skipped) appear in reverse call order
        let logged: Vec<String> = lines[1..]
            .iter()
            .filter(|&&l| l != SEPARATOR)
            .map(|l| HistoryEntry::parse_line(l).expect("entry line").url)
            .collect();
        let mut expected = visited.clone();
        expected.reverse();
        prop_assert_eq!(logged, expected);
    }
}
