//! Surflog — visit logging and navigation conveniences for embedded webview browsers.
//!
//! Entry point: opens a webview window with the logging and navigation
//! commands wired in. When built without the `gui` feature, runs a console
//! demo of the components against a temporary log file.

#[cfg(feature = "gui")]
fn main() {
    surflog::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("Surflog v{} — demo mode (built without `gui`)", env!("CARGO_PKG_VERSION"));
    println!();

    demo_settings();
    demo_history_log();
    demo_find_protocol();
    demo_view_toggle();
    demo_search_launcher();

    println!();
    println!("All components demonstrated.");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_settings() {
    use surflog::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let dir = std::env::temp_dir().join("surflog-demo");
    let path = dir.join("settings.json").to_string_lossy().to_string();
    let mut engine = SettingsEngine::new(Some(path));
    let settings = engine.load().unwrap_or_default();
    println!("  config path:   {}", engine.get_config_path());
    println!("  history file:  {}", settings.history.file_path);
    println!("  retention:     {} days", settings.history.retention_days);
    println!("  search engine: {}", settings.search.default_search_engine);
}

#[cfg(not(feature = "gui"))]
fn demo_history_log() {
    use chrono::Local;
    use surflog::managers::history_log::{HistoryLog, HistoryLogTrait};
    use surflog::types::settings::HistoryConfig;
    section("History Log");

    let dir = std::env::temp_dir().join("surflog-demo");
    let config = HistoryConfig {
        file_path: dir.join("history.csv").to_string_lossy().to_string(),
        ..HistoryConfig::default()
    };
    let log = HistoryLog::new(config);

    let now = Local::now();
    log.start_session(now).expect("session start");
    log.record_visit("Rust Programming Language", "https://www.rust-lang.org/", now)
        .expect("record visit");
    log.record_visit("crates.io", "https://crates.io/", now)
        .expect("record visit");

    println!("{}", log.display().expect("display"));
}

#[cfg(not(feature = "gui"))]
fn demo_find_protocol() {
    use surflog::managers::find_manager::{FindManager, FindManagerTrait};
    section("Find Protocol");

    let mut find = FindManager::new();
    let first = find.search_forward("needle").unwrap();
    println!("  search:  {:?} {:?}", first.query, first.direction);
    let again = find.repeat().unwrap();
    println!("  repeat:  {:?} {:?}", again.query, again.direction);
    let flipped = find.search_backward("").unwrap();
    println!("  flipped: {:?} {:?}", flipped.query, flipped.direction);
}

#[cfg(not(feature = "gui"))]
fn demo_view_toggle() {
    use surflog::services::view_mode;
    section("View Toggle");

    let nav = view_mode::toggle("https://www.rust-lang.org/");
    println!("  text view:     {}", nav.url);
    let back = view_mode::toggle(&nav.url);
    println!("  rendered view: {}", back.url);
}

#[cfg(not(feature = "gui"))]
fn demo_search_launcher() {
    use surflog::services::search_launcher::SearchLauncher;
    section("Search Launcher");

    let launcher = SearchLauncher::new("www.google.com");
    match launcher.build_query_url("rust borrow checker") {
        Ok(url) => println!("  {}", url),
        Err(e) => println!("  error: {}", e),
    }
}
