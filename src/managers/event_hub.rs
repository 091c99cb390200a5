//! Browser event subscriptions for Surflog.
//!
//! The host widget emits two notifications the crate cares about: a page
//! finished loading, and a new browsing session is about to start. Instead of
//! patching host commands, interested components register handlers here and
//! the widget integration calls the matching `emit_*` method.
//!
//! Handlers run synchronously in registration order. Deduplication of
//! double-fired load notifications is the emitter's responsibility; the hub
//! dispatches everything it is given.

use chrono::{DateTime, Local};

use crate::types::navigation::PageLoad;

type PageLoadHandler = Box<dyn Fn(&PageLoad) + Send>;
type SessionStartHandler = Box<dyn Fn(DateTime<Local>) + Send>;

/// Registration point for browser-session events.
pub struct EventHub {
    page_load_handlers: Vec<PageLoadHandler>,
    session_start_handlers: Vec<SessionStartHandler>,
}

impl EventHub {
    pub fn new() -> Self {
        Self {
            page_load_handlers: Vec::new(),
            session_start_handlers: Vec::new(),
        }
    }

    /// Registers a handler for "page finished loading" notifications.
    pub fn on_page_load_finished<F>(&mut self, handler: F)
    where
        F: Fn(&PageLoad) + Send + 'static,
    {
        self.page_load_handlers.push(Box::new(handler));
    }

    /// Registers a handler for "new session about to start" notifications.
    pub fn on_session_start<F>(&mut self, handler: F)
    where
        F: Fn(DateTime<Local>) + Send + 'static,
    {
        self.session_start_handlers.push(Box::new(handler));
    }

    /// Dispatches a finished page load to all registered handlers.
    pub fn emit_page_load_finished(&self, load: &PageLoad) {
        for handler in &self.page_load_handlers {
            handler(load);
        }
    }

    /// Dispatches a session-start notification to all registered handlers.
    pub fn emit_session_start(&self, now: DateTime<Local>) {
        for handler in &self.session_start_handlers {
            handler(now);
        }
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}
