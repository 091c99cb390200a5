//! Unit tests for the find protocol.
//!
//! Exercises direction toggling and repeat semantics through the
//! `FindManagerTrait` interface.

use rstest::rstest;
use surflog::managers::find_manager::{FindManager, FindManagerTrait};
use surflog::types::navigation::FindDirection;

/// Before any query is entered there is nothing to search for.
#[test]
fn test_no_query_yet_yields_nothing() {
    let mut find = FindManager::new();
    assert!(find.search_forward("").is_none());
    assert!(find.search_backward("").is_none());
    assert!(find.repeat().is_none());
    assert!(find.last_query().is_none());
}

/// A fresh query is remembered and searched in the requested direction.
#[rstest]
#[case(true, FindDirection::Forward)]
#[case(false, FindDirection::Backward)]
fn test_explicit_query_sets_state(#[case] forward: bool, #[case] expected: FindDirection) {
    let mut find = FindManager::new();
    let command = if forward {
        find.search_forward("needle")
    } else {
        find.search_backward("needle")
    }
    .unwrap();

    assert_eq!(command.query, "needle");
    assert_eq!(command.direction, expected);
    assert_eq!(find.last_query(), Some("needle"));
    assert_eq!(find.direction(), expected);
}

/// An empty query repeats the remembered one in the requested direction,
/// flipping the stored direction when it differs.
#[test]
fn test_empty_query_repeats_and_flips_direction() {
    let mut find = FindManager::new();
    find.search_forward("needle").unwrap();

    let back = find.search_backward("").unwrap();
    assert_eq!(back.query, "needle");
    assert_eq!(back.direction, FindDirection::Backward);
    assert_eq!(find.direction(), FindDirection::Backward);

    let forward = find.search_forward("").unwrap();
    assert_eq!(forward.direction, FindDirection::Forward);
    assert_eq!(find.direction(), FindDirection::Forward);
}

/// repeat() reuses both the remembered query and the current direction.
#[test]
fn test_repeat_keeps_direction() {
    let mut find = FindManager::new();
    find.search_backward("needle").unwrap();

    let repeated = find.repeat().unwrap();
    assert_eq!(repeated.query, "needle");
    assert_eq!(repeated.direction, FindDirection::Backward);
}

/// A new explicit query replaces the remembered one.
#[test]
fn test_new_query_replaces_old() {
    let mut find = FindManager::new();
    find.search_forward("first").unwrap();
    find.search_forward("second").unwrap();

    assert_eq!(find.last_query(), Some("second"));
    assert_eq!(find.repeat().unwrap().query, "second");
}

/// clear() forgets the query and resets the direction.
#[test]
fn test_clear_resets_state() {
    let mut find = FindManager::new();
    find.search_backward("needle").unwrap();

    find.clear();
    assert!(find.last_query().is_none());
    assert_eq!(find.direction(), FindDirection::Forward);
    assert!(find.repeat().is_none());
}
