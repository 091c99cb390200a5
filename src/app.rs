//! App Core for Surflog.
//!
//! Central struct holding the managers and services, wiring the history log's
//! two write paths to the browser event hub.

use std::sync::Arc;

use chrono::Local;

use crate::managers::event_hub::EventHub;
use crate::managers::find_manager::FindManager;
use crate::managers::history_log::{HistoryLog, HistoryLogTrait};
use crate::services::search_launcher::SearchLauncher;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::LaunchError;
use crate::types::navigation::{NavigationRequest, PageLoad};

/// Central application struct holding all managers and services.
///
/// The history log is shared (`Arc`) because the event handlers registered on
/// the hub hold their own references to it.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub history_log: Arc<HistoryLog>,
    pub find_manager: FindManager,
    pub search_launcher: SearchLauncher,
    pub events: EventHub,
}

impl App {
    /// Creates a new App: loads settings (defaults when the config file is
    /// missing or malformed), builds the components from them, and subscribes
    /// the history log to the page-load and session-start events.
    pub fn new(settings_path_override: Option<String>) -> Self {
        let mut settings_engine = SettingsEngine::new(settings_path_override);
        let _ = settings_engine.load();
        let settings = settings_engine.get_settings().clone();

        let history_log = Arc::new(HistoryLog::new(settings.history));
        let find_manager = FindManager::new();
        let search_launcher = SearchLauncher::new(&settings.search.default_search_engine);

        let mut events = EventHub::new();
        {
            let log = history_log.clone();
            events.on_page_load_finished(move |load: &PageLoad| {
                if let Err(e) = log.record_visit(&load.title, &load.url, load.at) {
                    eprintln!("[history] {}", e);
                }
            });
        }
        {
            let log = history_log.clone();
            events.on_session_start(move |now| {
                if let Err(e) = log.start_session(now) {
                    eprintln!("[history] {}", e);
                }
            });
        }

        Self {
            settings_engine,
            history_log,
            find_manager,
            search_launcher,
            events,
        }
    }

    /// Startup sequence: announce the new browsing session, which marks the
    /// session boundary in the log and triggers the retention prune.
    pub fn startup(&self) {
        self.events.emit_session_start(Local::now());
    }

    /// Forwards a finished page load from the widget into the event hub.
    ///
    /// Callers must deduplicate repeated notifications for the same load
    /// before invoking this.
    pub fn page_finished_loading(&self, title: &str, url: &str) {
        self.events.emit_page_load_finished(&PageLoad {
            title: title.to_string(),
            url: url.to_string(),
            at: Local::now(),
        });
    }

    /// Builds the navigation for a web search with the configured engine.
    pub fn launch_search(&self, query: &str) -> Result<NavigationRequest, LaunchError> {
        self.search_launcher.launch(query)
    }
}
