//! Window creation parameters

use crate::math::{Size, Vec2};

/// Parameters for creating a window
///
/// `position: None` asks the manager to pick a cascaded position based on
/// how many windows are currently open.
#[derive(Clone, Debug)]
pub struct WindowConfig {
    /// Title shown in the title bar and taskbar
    pub title: String,
    /// Icon identifier for the title bar and taskbar
    pub icon: String,
    /// Which application this window hosts (opaque to the manager)
    pub app_kind: String,
    /// Initial top-left position, or None for the cascade default
    pub position: Option<Vec2>,
    /// Initial size
    pub size: Size,
    /// Minimum size enforced on resize
    pub min_size: Size,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            icon: String::new(),
            app_kind: String::new(),
            position: None,
            size: crate::geometry::DEFAULT_WINDOW_SIZE,
            min_size: crate::geometry::MIN_WINDOW_SIZE,
        }
    }
}
