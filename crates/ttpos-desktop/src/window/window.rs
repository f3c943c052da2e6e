//! The window entity

use super::{WindowConfig, WindowId};
use crate::math::{Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Visibility/sizing state of a window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    /// Visible at its own geometry
    Normal,
    /// Hidden; reachable through the taskbar
    Minimized,
    /// Filling the desktop bounds; previous geometry saved
    Maximized,
}

/// A single open window
///
/// Invariants maintained by the [`WindowManager`](super::WindowManager):
/// - `size >= min_size` after every resize commit
/// - `saved_geometry` is `Some` exactly while the window is maximized,
///   counting a window minimized from the maximized state; it returns to
///   `Maximized` when restored
///
/// `z_order` is the stacking value handed to the presentation layer; the
/// focused window sits at the foreground constant, everything else at the
/// background constant.
#[derive(Clone, Debug)]
pub struct Window {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub app_kind: String,
    pub position: Vec2,
    pub size: Size,
    pub min_size: Size,
    pub state: WindowState,
    pub z_order: u32,
    /// Geometry snapshot taken on maximize, consumed on restore
    pub saved_geometry: Option<Rect>,
}

impl Window {
    pub(super) fn new(id: WindowId, position: Vec2, config: WindowConfig) -> Self {
        Self {
            id,
            title: config.title,
            icon: config.icon,
            app_kind: config.app_kind,
            position,
            size: config.size,
            min_size: config.min_size,
            state: WindowState::Normal,
            z_order: super::manager::Z_BACKGROUND,
            saved_geometry: None,
        }
    }

    /// The window's bounding rectangle
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Whether the window is hidden from the desktop
    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }
}
