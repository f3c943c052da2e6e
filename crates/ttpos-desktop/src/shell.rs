//! Shell integration points
//!
//! The engine talks to the surrounding shell through three narrow traits:
//! a content registry that resolves app kinds to window content, a taskbar
//! that mirrors the window list, and a notification sink for transient
//! toasts. Each has a null implementation so the engine runs headless in
//! tests, and the host wires real implementations in at construction.

/// Content and chrome for one application kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDescriptor {
    /// Window title
    pub title: String,
    /// Icon class for the title bar and taskbar
    pub icon: String,
    /// Markup rendered into the window's content area
    pub body_markup: String,
}

/// Resolves application kinds to window content
pub trait ContentRegistry {
    /// Descriptor for the given app kind.
    ///
    /// Unknown kinds resolve to a placeholder rather than failing, so the
    /// desktop can always open a window.
    fn lookup(&self, app_kind: &str) -> AppDescriptor;

    /// Number of registered app kinds
    fn total(&self) -> usize;
}

/// Mirrors the window list onto an external taskbar
pub trait TaskbarNotifier {
    /// A window opened
    fn add_entry(&mut self, id: u64, title: &str, icon: &str);

    /// A window closed
    fn remove_entry(&mut self, id: u64);

    /// A window's active/minimized presentation changed
    fn set_active(&mut self, id: u64, active: bool, minimized: bool);
}

/// Receives transient user-facing notifications
pub trait NotificationSink {
    fn notify(&mut self, title: &str, message: &str, duration_ms: u32);
}

/// Taskbar that discards all updates
#[derive(Debug, Default)]
pub struct NullTaskbar;

impl TaskbarNotifier for NullTaskbar {
    fn add_entry(&mut self, _id: u64, _title: &str, _icon: &str) {}
    fn remove_entry(&mut self, _id: u64) {}
    fn set_active(&mut self, _id: u64, _active: bool, _minimized: bool) {}
}

/// Notification sink that discards all notifications
#[derive(Debug, Default)]
pub struct NullNotifications;

impl NotificationSink for NullNotifications {
    fn notify(&mut self, _title: &str, _message: &str, _duration_ms: u32) {}
}

/// Registry that answers every lookup with a generic placeholder
#[derive(Debug, Default)]
pub struct PlaceholderRegistry;

impl PlaceholderRegistry {
    /// The descriptor returned for every app kind
    pub fn placeholder(app_kind: &str) -> AppDescriptor {
        AppDescriptor {
            title: "Unknown App".to_string(),
            icon: "fas fa-window-maximize".to_string(),
            body_markup: format!("<p>No content registered for '{}'.</p>", app_kind),
        }
    }
}

impl ContentRegistry for PlaceholderRegistry {
    fn lookup(&self, app_kind: &str) -> AppDescriptor {
        Self::placeholder(app_kind)
    }

    fn total(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_registry_always_resolves() {
        let registry = PlaceholderRegistry;
        let desc = registry.lookup("no-such-app");
        assert_eq!(desc.title, "Unknown App");
        assert!(desc.body_markup.contains("no-such-app"));
        assert_eq!(registry.total(), 0);
    }

    #[test]
    fn test_null_collaborators_accept_everything() {
        let mut taskbar = NullTaskbar;
        taskbar.add_entry(1, "Calculator", "fas fa-calculator");
        taskbar.set_active(1, true, false);
        taskbar.remove_entry(1);

        let mut sink = NullNotifications;
        sink.notify("Calculator", "Calculator minimized", 1500);
    }
}
