//! Window store, z-order, and focus
//!
//! The manager owns every open window and is the only place window state is
//! mutated. It maintains the core invariants:
//!
//! - at most one window is focused, and a minimized window is never focused
//! - committed sizes never go below the window's minimum size
//! - a window id is never reused after its window closes
//!
//! Stacking is expressed through two constants handed to the presentation
//! layer: the focused window sits at [`Z_FOREGROUND`], everything else at
//! [`Z_BACKGROUND`].

use super::{Window, WindowConfig, WindowId, WindowRegion, WindowState};
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use tracing::debug;

/// Stacking value for unfocused windows
pub const Z_BACKGROUND: u32 = 500;

/// Stacking value for the focused window
pub const Z_FOREGROUND: u32 = 1000;

/// Horizontal/vertical cascade step between successively opened windows
const CASCADE_STEP: f32 = 30.0;

/// Cascade origin for the first window
const CASCADE_ORIGIN: Vec2 = Vec2::new(100.0, 50.0);

/// Number of cascade slots before positions wrap around
const CASCADE_SLOTS: usize = 10;

/// CRUD operations for windows, z-order, and the focus slot
pub struct WindowManager {
    /// Open windows in insertion order
    windows: Vec<Window>,
    /// Next id to assign; monotonic for the life of the process
    next_id: WindowId,
    /// The currently focused window, if any
    focused: Option<WindowId>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create an empty window manager
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            next_id: 0,
            focused: None,
        }
    }

    /// Create a window and return its ID
    ///
    /// When the config carries no position, successive windows cascade
    /// diagonally from the origin, wrapping after [`CASCADE_SLOTS`].
    pub fn create(&mut self, config: WindowConfig) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        let position = config.position.unwrap_or_else(|| {
            let slot = (self.windows.len() % CASCADE_SLOTS) as f32;
            CASCADE_ORIGIN + Vec2::new(CASCADE_STEP, CASCADE_STEP) * slot
        });

        debug!(id, app = %config.app_kind, "create window");
        self.windows.push(Window::new(id, position, config));
        id
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// All open windows, in insertion order
    pub fn all(&self) -> &[Window] {
        &self.windows
    }

    /// Number of open windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// The currently focused window, if any
    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    /// All windows sorted back-to-front (lowest stacking value first)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.iter().collect();
        windows.sort_by_key(|w| (w.z_order, w.id));
        windows
    }

    /// Focus a window, un-minimizing it if needed.
    ///
    /// The previously focused window drops to [`Z_BACKGROUND`]; the target
    /// rises to [`Z_FOREGROUND`].
    pub fn focus(&mut self, id: WindowId) -> DesktopResult<()> {
        if self.get(id).is_none() {
            return Err(DesktopError::WindowNotFound(id));
        }

        for window in &mut self.windows {
            if window.id == id {
                if window.state == WindowState::Minimized {
                    window.state = unminimized_state(window);
                }
                window.z_order = Z_FOREGROUND;
            } else {
                window.z_order = Z_BACKGROUND;
            }
        }

        self.focused = Some(id);
        debug!(id, "focus window");
        Ok(())
    }

    /// Minimize a window.
    ///
    /// If it was focused, focus moves to the first other non-minimized
    /// window in insertion order; otherwise no window ends up focused.
    pub fn minimize(&mut self, id: WindowId) -> DesktopResult<()> {
        let window = self
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        window.state = WindowState::Minimized;
        window.z_order = Z_BACKGROUND;

        if self.focused == Some(id) {
            self.focused = None;
            let successor = self
                .windows
                .iter()
                .find(|w| w.id != id && !w.is_minimized())
                .map(|w| w.id);
            if let Some(next) = successor {
                self.focus(next)?;
            }
        }
        Ok(())
    }

    /// Bring a minimized window back without changing focus
    pub fn restore(&mut self, id: WindowId) -> DesktopResult<()> {
        let window = self
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        if window.state == WindowState::Minimized {
            window.state = unminimized_state(window);
        }
        Ok(())
    }

    /// Toggle between maximized (filling `bounds`) and the saved geometry.
    ///
    /// Maximizing snapshots the current geometry; restoring consumes the
    /// snapshot, so a double toggle is an exact round trip.
    pub fn toggle_maximize(&mut self, id: WindowId, bounds: Rect) -> DesktopResult<()> {
        let window = self
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?;

        match window.saved_geometry.take() {
            Some(saved) => {
                window.position = saved.position();
                window.size = saved.size();
                window.state = WindowState::Normal;
            }
            None => {
                window.saved_geometry = Some(window.rect());
                window.position = bounds.position();
                window.size = bounds.size();
                window.state = WindowState::Maximized;
            }
        }
        Ok(())
    }

    /// Move a window to a new top-left position
    pub fn move_window(&mut self, id: WindowId, position: Vec2) {
        if let Some(window) = self.get_mut(id) {
            window.position = position;
        }
    }

    /// Resize a window, clamped to its minimum size
    pub fn resize(&mut self, id: WindowId, size: Size) {
        if let Some(window) = self.get_mut(id) {
            window.size = size.max(window.min_size);
        }
    }

    /// Close a window; a no-op if the id is unknown.
    ///
    /// If the closed window was focused, focus moves to the most recently
    /// inserted remaining window, unless that window is minimized.
    pub fn close(&mut self, id: WindowId) {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.windows.len() == before {
            return;
        }
        debug!(id, "close window");

        if self.focused == Some(id) {
            self.focused = None;
            let successor = self
                .windows
                .last()
                .filter(|w| !w.is_minimized())
                .map(|w| w.id);
            if let Some(next) = successor {
                let _ = self.focus(next);
            }
        }
    }

    /// Cycle focus to the next non-minimized window (Alt-Tab order).
    ///
    /// Returns the newly focused window, or None when there is nothing to
    /// cycle to.
    pub fn cycle_focus(&mut self) -> Option<WindowId> {
        let visible: Vec<WindowId> = self
            .windows
            .iter()
            .filter(|w| !w.is_minimized())
            .map(|w| w.id)
            .collect();
        if visible.len() <= 1 {
            return None;
        }

        let current = self
            .focused
            .and_then(|id| visible.iter().position(|&v| v == id));
        let next = match current {
            Some(i) => visible[(i + 1) % visible.len()],
            None => visible[0],
        };
        let _ = self.focus(next);
        Some(next)
    }

    /// Hit test a point against all visible windows, topmost first
    pub fn region_at(&self, point: Vec2) -> Option<(WindowId, WindowRegion)> {
        self.windows_by_z()
            .into_iter()
            .rev()
            .filter(|w| !w.is_minimized())
            .find(|w| w.rect().contains(point))
            .map(|w| (w.id, WindowRegion::classify(point, w.rect(), &FRAME_STYLE)))
    }
}

/// State a window returns to when leaving `Minimized`.
///
/// A window minimized while maximized still holds its geometry snapshot and
/// comes back maximized.
fn unminimized_state(window: &Window) -> WindowState {
    if window.saved_geometry.is_some() {
        WindowState::Maximized
    } else {
        WindowState::Normal
    }
}
