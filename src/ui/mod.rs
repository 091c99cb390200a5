// Surflog UI layer (requires the `gui` feature).

pub mod webview_app;
