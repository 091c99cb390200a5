//! Property-based tests for the history line format.
//!
//! These tests verify that rendering an entry as a log line and parsing the
//! line back always recovers the original fields, for arbitrary valid
//! URLs and titles — including titles containing commas.

use proptest::prelude::*;
use surflog::types::history::HistoryEntry;

/// Strategy for generating valid URL strings.
/// Produces URLs with http/https scheme, alphanumeric host, and optional path.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Strategy for generating page titles, commas included: the format writes
/// titles unescaped, and the parser recovers them by keeping everything
/// between the second and the last comma.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ,]{0,30}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn entry_to_line_then_parse_recovers_all_fields(
        url in arb_url(),
        title in arb_title(),
    ) {
        let entry = HistoryEntry {
            day: "06 01 2024".to_string(),
            time: "14:22:10".to_string(),
            title,
            url,
        };

        let parsed = HistoryEntry::parse_line(&entry.to_line())
            .expect("a rendered entry line must parse");

        prop_assert_eq!(parsed, entry);
    }

    #[test]
    fn parsed_day_field_matches_quick_accessor(
        url in arb_url(),
        title in arb_title(),
    ) {
        let entry = HistoryEntry {
            day: "12 31 2023".to_string(),
            time: "23:59:59".to_string(),
            title,
            url,
        };
        let line = entry.to_line();

        prop_assert_eq!(HistoryEntry::day_field(&line), Some("12 31 2023"));
    }
}
