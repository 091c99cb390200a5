//! In-page find protocol for Surflog.
//!
//! A deliberately simple page-search state machine: it remembers the last
//! query and the current direction, and turns each user action into a
//! `FindCommand` for the host widget's native find function. No incremental
//! matching, no regular expressions.

use crate::types::navigation::{FindCommand, FindDirection};

/// Trait defining the find protocol operations.
pub trait FindManagerTrait {
    fn search_forward(&mut self, query: &str) -> Option<FindCommand>;
    fn search_backward(&mut self, query: &str) -> Option<FindCommand>;
    fn repeat(&mut self) -> Option<FindCommand>;
    fn last_query(&self) -> Option<&str>;
    fn direction(&self) -> FindDirection;
    fn clear(&mut self);
}

/// Find protocol state: last query plus current direction.
pub struct FindManager {
    last_query: Option<String>,
    direction: FindDirection,
}

impl FindManager {
    pub fn new() -> Self {
        Self {
            last_query: None,
            direction: FindDirection::Forward,
        }
    }

    /// Shared entry point for both directions.
    ///
    /// A non-empty query replaces the remembered one; an empty query repeats
    /// the remembered query in the requested direction (or does nothing if
    /// there is none yet). Either way the requested direction becomes
    /// current, so a backward search after a forward one flips the state.
    fn search(&mut self, query: &str, direction: FindDirection) -> Option<FindCommand> {
        if !query.is_empty() {
            self.last_query = Some(query.to_string());
        }
        self.direction = direction;
        self.last_query.as_ref().map(|q| FindCommand {
            query: q.clone(),
            direction,
        })
    }
}

impl Default for FindManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FindManagerTrait for FindManager {
    fn search_forward(&mut self, query: &str) -> Option<FindCommand> {
        self.search(query, FindDirection::Forward)
    }

    fn search_backward(&mut self, query: &str) -> Option<FindCommand> {
        self.search(query, FindDirection::Backward)
    }

    /// Repeats the last search in the current direction.
    fn repeat(&mut self) -> Option<FindCommand> {
        let direction = self.direction;
        self.last_query.as_ref().map(|q| FindCommand {
            query: q.clone(),
            direction,
        })
    }

    fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    fn direction(&self) -> FindDirection {
        self.direction
    }

    /// Forgets the remembered query and resets the direction.
    fn clear(&mut self) {
        self.last_query = None;
        self.direction = FindDirection::Forward;
    }
}
