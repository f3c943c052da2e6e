//! Built-in application catalog
//!
//! [`BuiltinApps`] is the stock [`ContentRegistry`]: it maps the desktop's
//! app kinds (the `data-app` attributes on desktop icons and launcher
//! tiles) to window chrome and content markup. Unknown kinds resolve to a
//! placeholder window rather than failing, matching the registry contract.

use ttpos_desktop::{AppDescriptor, ContentRegistry, PlaceholderRegistry};

/// One catalog entry: app kind, title, icon class, content markup
type Entry = (&'static str, &'static str, &'static str, &'static str);

const APPS: &[Entry] = &[
    (
        "file-manager",
        "File Explorer",
        "fas fa-folder-open",
        r#"<div style="padding:20px;">File Explorer Content - Coming Soon!</div>"#,
    ),
    (
        "text-editor",
        "TextPad",
        "fas fa-file-alt",
        r#"
          <div class="text-editor-app">
            <div class="editor-menu">
              <button>File</button>
              <button>Edit</button>
              <button>View</button>
            </div>
            <textarea id="text-editor-area" placeholder="Start typing..."></textarea>
          </div>
        "#,
    ),
    (
        "browser",
        "Web Voyager",
        "fas fa-compass",
        r#"
          <div class="browser-app">
            <div class="browser-nav">
              <button><i class="fas fa-arrow-left"></i></button>
              <button><i class="fas fa-arrow-right"></i></button>
              <button><i class="fas fa-sync-alt"></i></button>
              <input type="text" class="address-bar" placeholder="Enter URL">
              <button><i class="fas fa-home"></i></button>
            </div>
            <div class="browser-content">
              <div style="padding: 20px; text-align: center;">Browser Content Area</div>
            </div>
          </div>
        "#,
    ),
    (
        "calculator",
        "Calculator",
        "fas fa-calculator",
        r#"
          <div class="calculator-app">
            <div class="calc-display-container">
              <input type="text" id="calc-display" value="0" readonly>
            </div>
            <div class="calc-buttons">
              <button class="calc-btn clear">C</button>
              <button class="calc-btn">±</button>
              <button class="calc-btn">%</button>
              <button class="calc-btn operator">÷</button>
              <button class="calc-btn">7</button>
              <button class="calc-btn">8</button>
              <button class="calc-btn">9</button>
              <button class="calc-btn operator">×</button>
              <button class="calc-btn">4</button>
              <button class="calc-btn">5</button>
              <button class="calc-btn">6</button>
              <button class="calc-btn operator">-</button>
              <button class="calc-btn">1</button>
              <button class="calc-btn">2</button>
              <button class="calc-btn">3</button>
              <button class="calc-btn operator">+</button>
              <button class="calc-btn">0</button>
              <button class="calc-btn">.</button>
              <button class="calc-btn equals">=</button>
            </div>
          </div>
        "#,
    ),
    (
        "terminal",
        "Terminal",
        "fas fa-terminal",
        r#"
          <div class="terminal-app">
            <div id="terminal-output">
              <div>TTP-OS Terminal v1.0</div>
              <div>Type 'help' for available commands</div>
              <div class="prompt-line">
                <span class="prompt-user">user@ttp-os:~$</span>
                <input type="text" autocomplete="off">
              </div>
            </div>
          </div>
        "#,
    ),
    (
        "media-player",
        "Media Player",
        "fas fa-play-circle",
        r#"<div style="padding:20px;">Media Player - Coming Soon!</div>"#,
    ),
    (
        "image-viewer",
        "Image Viewer",
        "fas fa-image",
        r#"<div style="padding:20px;">Image Viewer - Coming Soon!</div>"#,
    ),
    (
        "settings",
        "Settings",
        "fas fa-cog",
        r#"
          <div style="padding:20px;">
            <h3>TTP-OS Settings</h3>
            <p>Theme: dark</p>
            <p>Version: 1.0.0</p>
          </div>
        "#,
    ),
];

/// The stock application registry
#[derive(Debug, Default)]
pub struct BuiltinApps;

impl BuiltinApps {
    pub fn new() -> Self {
        Self
    }

    /// App kinds in launcher order, with title and icon
    pub fn catalog() -> impl Iterator<Item = (&'static str, &'static str, &'static str)> {
        APPS.iter().map(|(kind, title, icon, _)| (*kind, *title, *icon))
    }
}

impl ContentRegistry for BuiltinApps {
    fn lookup(&self, app_kind: &str) -> AppDescriptor {
        APPS.iter()
            .find(|(kind, _, _, _)| *kind == app_kind)
            .map(|(_, title, icon, body)| AppDescriptor {
                title: (*title).to_string(),
                icon: (*icon).to_string(),
                body_markup: (*body).to_string(),
            })
            .unwrap_or_else(|| PlaceholderRegistry::placeholder(app_kind))
    }

    fn total(&self) -> usize {
        APPS.len()
    }
}
