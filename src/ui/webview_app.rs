//! WebView shell using `wry` + `tao`.
//!
//! Architecture:
//! - `with_initialization_script(PAGE_JS)` injects a small script on every
//!   page that (a) reports the finished load with title and URL, and
//!   (b) maps the convenience-command keystrokes to IPC messages.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; responses go back
//!   through the event-loop proxy as `load_url` / `evaluate_script` calls.
//! - The widget fires the load notification more than once for some pages,
//!   so the shell keeps the last reported URL and drops consecutive
//!   duplicates before anything reaches the event hub.

use std::sync::{Arc, Mutex};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::managers::find_manager::FindManagerTrait;
use crate::managers::history_log::HistoryLogTrait;
use crate::services::view_mode;
use crate::types::navigation::FindDirection;

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
}

struct BrowserState {
    app: App,
    /// Last URL whose load was reported — consecutive duplicates are dropped.
    last_loaded: Option<String>,
    /// URL currently shown, used by the view-mode toggle.
    current_url: String,
}

const PAGE_JS: &str = r#"
(function(){
  function post(msg){ if(window.ipc) window.ipc.postMessage(JSON.stringify(msg)); }
  window.addEventListener('load', function(){
    post({cmd:'page_loaded', url: location.href, title: document.title});
  });
  window.addEventListener('keydown', function(e){
    if(!e.ctrlKey) return;
    var k = e.key.toLowerCase();
    if(k === 's'){ e.preventDefault(); post({cmd:'find', query: window.prompt('Find:') || '', backward: false}); }
    else if(k === 'r' && !e.shiftKey){ e.preventDefault(); post({cmd:'find', query: window.prompt('Find backward:') || '', backward: true}); }
    else if(k === 'g'){ e.preventDefault(); post({cmd:'find_repeat'}); }
    else if(k === 'u' && e.shiftKey){ e.preventDefault(); post({cmd:'toggle_view', url: location.href}); }
    else if(k === 'k'){ e.preventDefault(); post({cmd:'launch_search', query: window.prompt('Web search:') || ''}); }
    else if(k === 'h'){ e.preventDefault(); post({cmd:'show_history'}); }
  });
})();
"#;

// ─── IPC handler ───

fn handle_ipc(state: &mut BrowserState, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;

    match cmd {
        "page_loaded" => {
            let url = msg.get("url").and_then(|v| v.as_str()).unwrap_or("");
            let title = msg.get("title").and_then(|v| v.as_str()).unwrap_or("");
            if url.is_empty() || state.last_loaded.as_deref() == Some(url) {
                // Duplicate fire for the same load — swallow it here.
                return None;
            }
            state.last_loaded = Some(url.to_string());
            state.current_url = url.to_string();
            state.app.page_finished_loading(title, url);
            None
        }

        "find" => {
            let query = msg.get("query").and_then(|v| v.as_str()).unwrap_or("");
            let backward = msg
                .get("backward")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            let command = if backward {
                state.app.find_manager.search_backward(query)
            } else {
                state.app.find_manager.search_forward(query)
            };
            command.map(|c| UserEvent::EvalScript(find_script(&c.query, c.direction)))
        }

        "find_repeat" => state
            .app
            .find_manager
            .repeat()
            .map(|c| UserEvent::EvalScript(find_script(&c.query, c.direction))),

        "toggle_view" => {
            let url = msg
                .get("url")
                .and_then(|v| v.as_str())
                .unwrap_or(&state.current_url);
            let nav = view_mode::toggle(url);
            state.current_url = nav.url.clone();
            Some(UserEvent::LoadUrl(nav.url))
        }

        "launch_search" => {
            let query = msg.get("query").and_then(|v| v.as_str()).unwrap_or("");
            match state.app.launch_search(query) {
                Ok(nav) => Some(UserEvent::LoadUrl(nav.url)),
                // Empty query: the user dismissed the prompt — re-ask next time.
                Err(e) => {
                    eprintln!("[search] {}", e);
                    None
                }
            }
        }

        "show_history" => {
            let text = match state.app.history_log.display() {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("[history] {}", e);
                    return None;
                }
            };
            Some(UserEvent::EvalScript(history_page_script(&text)))
        }

        _ => None,
    }
}

/// JS for one native find call in the given direction.
fn find_script(query: &str, direction: FindDirection) -> String {
    let backward = matches!(direction, FindDirection::Backward);
    format!(
        "window.find({}, false, {}, true)",
        serde_json::Value::String(query.to_string()),
        backward
    )
}

/// JS that replaces the document with a read-only view of the log text.
fn history_page_script(text: &str) -> String {
    format!(
        "document.documentElement.innerHTML = '<head><title>History</title></head><body></body>';\
         var pre = document.createElement('pre');\
         pre.textContent = {};\
         pre.style.cssText = 'font-family:monospace;white-space:pre;user-select:text;';\
         document.body.appendChild(pre);",
        serde_json::Value::String(text.to_string())
    )
}

// ─── Main entry point ───

pub fn run() {
    let app = App::new(None);
    app.startup();

    let engine_host = app.search_launcher.engine_host().to_string();
    let start_url = format!("https://{}/", engine_host);

    let state = Arc::new(Mutex::new(BrowserState {
        app,
        last_loaded: None,
        current_url: start_url.clone(),
    }));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Surflog")
        .with_inner_size(tao::dpi::LogicalSize::new(1024.0, 768.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_initialization_script(PAGE_JS)
        .with_url(&start_url)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let mut s = ipc_state.lock().unwrap();
            if let Some(event) = handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    let _ = webview.load_url(&url);
                }
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
            },

            _ => {}
        }
    });
}
