//! Desktop engine facade
//!
//! [`DesktopEngine`] is the single entry point the host talks to. It owns
//! the window manager, the input router, and the desktop bounds, and wires
//! the shell collaborators (content registry, taskbar, notifications) into
//! every lifecycle operation.
//!
//! Stale window ids are logged and ignored rather than surfaced: the host
//! UI can race the engine (a taskbar click landing after a close), and the
//! desktop must never crash over it.

use crate::error::{DesktopError, DesktopResult};
use crate::geometry::{self, DEFAULT_WINDOW_SIZE, MIN_VISIBLE, MIN_WINDOW_SIZE};
use crate::input::{DragState, InputResult, InputRouter};
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use crate::shell::{
    ContentRegistry, NotificationSink, NullNotifications, NullTaskbar, PlaceholderRegistry,
    TaskbarNotifier,
};
use crate::window::{WindowConfig, WindowId, WindowManager, WindowRegion, WindowState};
use serde::Serialize;
use tracing::{debug, warn};

/// Toast duration for lifecycle notifications
const NOTIFY_DURATION_MS: u32 = 1500;

/// One window's presentation state, in stacking order
#[derive(Debug, Clone, Serialize)]
pub struct WindowRect {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub app_kind: String,
    pub state: WindowState,
    pub focused: bool,
    pub rect: Rect,
}

/// The desktop: windows, input, and shell wiring
pub struct DesktopEngine {
    /// Current desktop dimensions in CSS pixels
    desktop: Size,
    windows: WindowManager,
    input: InputRouter,
    registry: Box<dyn ContentRegistry>,
    taskbar: Box<dyn TaskbarNotifier>,
    notifications: Box<dyn NotificationSink>,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create an engine with null shell collaborators
    pub fn new() -> Self {
        Self {
            desktop: Size::new(1024.0, 768.0),
            windows: WindowManager::new(),
            input: InputRouter::new(),
            registry: Box::new(PlaceholderRegistry),
            taskbar: Box::new(NullTaskbar),
            notifications: Box::new(NullNotifications),
        }
    }

    /// Replace the content registry
    pub fn with_registry(mut self, registry: Box<dyn ContentRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the taskbar notifier
    pub fn with_taskbar(mut self, taskbar: Box<dyn TaskbarNotifier>) -> Self {
        self.taskbar = taskbar;
        self
    }

    /// Replace the notification sink
    pub fn with_notifications(mut self, notifications: Box<dyn NotificationSink>) -> Self {
        self.notifications = notifications;
        self
    }

    /// Set the desktop dimensions
    pub fn init(&mut self, width: f32, height: f32) {
        debug!(width, height, "init desktop");
        self.desktop = Size::new(width, height);
    }

    /// The desktop dimensions
    pub fn desktop_size(&self) -> Size {
        self.desktop
    }

    /// Handle a desktop (viewport) resize.
    ///
    /// Maximized windows track the new bounds; everything else keeps its
    /// geometry and gets pulled back on the next drag.
    pub fn resize_desktop(&mut self, width: f32, height: f32) {
        self.desktop = Size::new(width, height);
        let bounds = self.desktop_bounds();
        let maximized: Vec<WindowId> = self
            .windows
            .all()
            .iter()
            .filter(|w| w.state == WindowState::Maximized)
            .map(|w| w.id)
            .collect();
        for id in maximized {
            self.windows.move_window(id, bounds.position());
            self.windows.resize(id, bounds.size());
        }
    }

    /// Open a window for the given app kind and focus it
    pub fn open_app(&mut self, app_kind: &str) -> WindowId {
        let desc = self.registry.lookup(app_kind);
        let id = self.windows.create(WindowConfig {
            title: desc.title.clone(),
            icon: desc.icon.clone(),
            app_kind: app_kind.to_string(),
            position: None,
            size: DEFAULT_WINDOW_SIZE,
            min_size: MIN_WINDOW_SIZE,
        });
        let _ = self.windows.focus(id);
        self.taskbar.add_entry(id, &desc.title, &desc.icon);
        self.sync_taskbar();
        debug!(id, app_kind, "open app");
        id
    }

    /// Close a window; a no-op on a stale id
    pub fn close_window(&mut self, id: WindowId) {
        if self.windows.get(id).is_none() {
            warn!(id, "close on unknown window");
            return;
        }
        self.input.cancel_for_window(id);
        self.windows.close(id);
        self.taskbar.remove_entry(id);
        self.sync_taskbar();
    }

    /// Focus a window, un-minimizing it if needed
    pub fn focus_window(&mut self, id: WindowId) {
        if self.windows.focus(id).is_err() {
            warn!(id, "focus on unknown window");
            return;
        }
        self.sync_taskbar();
    }

    /// Minimize a window and notify the shell
    pub fn minimize_window(&mut self, id: WindowId) {
        let title = match self.windows.get(id) {
            Some(w) => w.title.clone(),
            None => {
                warn!(id, "minimize on unknown window");
                return;
            }
        };
        let _ = self.windows.minimize(id);
        self.sync_taskbar();
        self.notifications.notify(
            "Window",
            &format!("{} minimized", title),
            NOTIFY_DURATION_MS,
        );
    }

    /// Toggle a window between maximized and its saved geometry
    pub fn toggle_maximize(&mut self, id: WindowId) {
        let title = match self.windows.get(id) {
            Some(w) => w.title.clone(),
            None => {
                warn!(id, "maximize on unknown window");
                return;
            }
        };
        let bounds = self.desktop_bounds();
        let _ = self.windows.toggle_maximize(id, bounds);
        let verb = match self.windows.get(id).map(|w| w.state) {
            Some(WindowState::Maximized) => "maximized",
            _ => "restored",
        };
        self.sync_taskbar();
        self.notifications
            .notify("Window", &format!("{} {}", title, verb), NOTIFY_DURATION_MS);
    }

    /// Bring a minimized window back and focus it
    pub fn restore_window(&mut self, id: WindowId) {
        if self.windows.restore(id).is_err() {
            warn!(id, "restore on unknown window");
            return;
        }
        let _ = self.windows.focus(id);
        self.sync_taskbar();
    }

    /// Cycle focus through the visible windows
    pub fn cycle_focus(&mut self) -> Option<WindowId> {
        let next = self.windows.cycle_focus();
        if next.is_some() {
            self.sync_taskbar();
        }
        next
    }

    /// The currently focused window, if any
    pub fn focused(&self) -> Option<WindowId> {
        self.windows.focused()
    }

    /// Number of open windows
    pub fn window_count(&self) -> usize {
        self.windows.count()
    }

    /// Content markup for a window, resolved through the registry
    pub fn content_for(&self, id: WindowId) -> Option<String> {
        self.windows
            .get(id)
            .map(|w| self.registry.lookup(&w.app_kind).body_markup)
    }

    /// Route a pointer press.
    ///
    /// Any press on a window focuses it first, whatever sub-region it hit.
    /// Frame regions then act: title-bar buttons run their lifecycle
    /// operation, the title bar starts a move gesture, resize borders start
    /// a resize gesture. Content clicks are forwarded to the window in
    /// content-local coordinates. Clicks on empty desktop are unhandled.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        let point = match finite_pointer("pointer_down", x, y) {
            Ok(p) => p,
            Err(err) => {
                warn!(%err, "dropped pointer event");
                return InputResult::Unhandled;
            }
        };
        let Some((id, region)) = self.windows.region_at(point) else {
            return InputResult::Unhandled;
        };

        self.focus_window(id);
        match region {
            WindowRegion::CloseButton => {
                self.close_window(id);
                InputResult::Handled
            }
            WindowRegion::MinimizeButton => {
                self.minimize_window(id);
                InputResult::Handled
            }
            WindowRegion::MaximizeButton => {
                self.toggle_maximize(id);
                InputResult::Handled
            }
            WindowRegion::TitleBar => {
                if let Some(window) = self.windows.get(id) {
                    let grab_offset = point - window.position;
                    self.input.start_window_move(id, grab_offset);
                }
                InputResult::Handled
            }
            region if region.is_resize() => {
                if let Some(window) = self.windows.get(id) {
                    self.input.start_window_resize(
                        id,
                        region,
                        window.position,
                        window.size,
                        point,
                    );
                }
                InputResult::Handled
            }
            _ => {
                match self.windows.get(id) {
                    Some(window) => {
                        let content_origin =
                            window.position + Vec2::new(0.0, FRAME_STYLE.title_bar_height);
                        let local = point - content_origin;
                        InputResult::Forward {
                            window_id: id,
                            local_x: local.x,
                            local_y: local.y,
                        }
                    }
                    None => InputResult::Handled,
                }
            }
        }
    }

    /// Route a pointer move; a no-op while no gesture is active
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pointer = match finite_pointer("pointer_move", x, y) {
            Ok(p) => p,
            Err(err) => {
                warn!(%err, "dropped pointer event");
                return InputResult::Unhandled;
            }
        };
        match self.input.drag_state().copied() {
            Some(DragState::MoveWindow {
                window_id,
                grab_offset,
            }) => {
                let Some(window) = self.windows.get(window_id) else {
                    self.input.end_drag();
                    return InputResult::Handled;
                };
                let position = geometry::compute_drag(
                    pointer,
                    grab_offset,
                    window.size,
                    self.desktop,
                    MIN_VISIBLE,
                );
                self.windows.move_window(window_id, position);
                InputResult::Handled
            }
            Some(DragState::ResizeWindow {
                window_id,
                handle,
                start_pos,
                start_size,
                start_pointer,
            }) => {
                let Some(window) = self.windows.get(window_id) else {
                    self.input.end_drag();
                    return InputResult::Handled;
                };
                let delta = pointer - start_pointer;
                let (position, size) =
                    geometry::compute_resize(handle, start_pos, start_size, delta, window.min_size);
                self.windows.move_window(window_id, position);
                self.windows.resize(window_id, size);
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Route a pointer release; ends any active gesture
    pub fn handle_pointer_up(&mut self) -> InputResult {
        match self.input.end_drag() {
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }

    /// Start a move gesture from a host-side title bar grab
    pub fn start_move_drag(&mut self, id: WindowId, pointer_x: f32, pointer_y: f32) {
        self.focus_window(id);
        let Some(window) = self.windows.get(id) else {
            return;
        };
        let grab_offset = Vec2::new(pointer_x, pointer_y) - window.position;
        self.input.start_window_move(id, grab_offset);
    }

    /// Start a resize gesture from a host-side handle grab.
    ///
    /// `direction` is a compass direction string ("n", "se", ...); unknown
    /// directions are ignored.
    pub fn start_resize_drag(&mut self, id: WindowId, direction: &str, pointer_x: f32, pointer_y: f32) {
        let Some(handle) = WindowRegion::from_direction(direction) else {
            warn!(direction, "unknown resize direction");
            return;
        };
        self.focus_window(id);
        let Some(window) = self.windows.get(id) else {
            return;
        };
        self.input.start_window_resize(
            id,
            handle,
            window.position,
            window.size,
            Vec2::new(pointer_x, pointer_y),
        );
    }

    /// Whether a drag gesture is in flight
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    /// Presentation state for every visible window, back to front
    pub fn window_rects(&self) -> Vec<WindowRect> {
        let focused = self.windows.focused();
        self.windows
            .windows_by_z()
            .into_iter()
            .filter(|w| !w.is_minimized())
            .map(|w| WindowRect {
                id: w.id,
                title: w.title.clone(),
                icon: w.icon.clone(),
                app_kind: w.app_kind.clone(),
                state: w.state,
                focused: focused == Some(w.id),
                rect: w.rect(),
            })
            .collect()
    }

    fn desktop_bounds(&self) -> Rect {
        Rect::from_pos_size(Vec2::ZERO, self.desktop)
    }

    /// Push every window's active/minimized presentation to the taskbar
    fn sync_taskbar(&mut self) {
        let focused = self.windows.focused();
        for window in self.windows.all() {
            self.taskbar
                .set_active(window.id, focused == Some(window.id), window.is_minimized());
        }
    }
}

/// Validate host-supplied pointer coordinates at the event boundary.
///
/// The geometry functions clamp whatever reaches them, but a NaN or
/// infinite coordinate from the host means the event itself is garbage
/// and is dropped rather than committed.
fn finite_pointer(op: &'static str, x: f32, y: f32) -> DesktopResult<Vec2> {
    let point = Vec2::new(x, y);
    if point.is_finite() {
        Ok(point)
    } else {
        Err(DesktopError::InvalidGeometry {
            op,
            reason: "non-finite pointer coordinates",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum ShellEvent {
        Added(WindowId, String),
        Removed(WindowId),
        Notified(String),
    }

    #[derive(Default)]
    struct RecordingShell {
        events: Rc<RefCell<Vec<ShellEvent>>>,
    }

    impl TaskbarNotifier for RecordingShell {
        fn add_entry(&mut self, id: WindowId, title: &str, _icon: &str) {
            self.events
                .borrow_mut()
                .push(ShellEvent::Added(id, title.to_string()));
        }
        fn remove_entry(&mut self, id: WindowId) {
            self.events.borrow_mut().push(ShellEvent::Removed(id));
        }
        fn set_active(&mut self, _id: WindowId, _active: bool, _minimized: bool) {}
    }

    impl NotificationSink for RecordingShell {
        fn notify(&mut self, _title: &str, message: &str, _duration_ms: u32) {
            self.events
                .borrow_mut()
                .push(ShellEvent::Notified(message.to_string()));
        }
    }

    fn recording_engine() -> (DesktopEngine, Rc<RefCell<Vec<ShellEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let engine = DesktopEngine::new()
            .with_taskbar(Box::new(RecordingShell {
                events: events.clone(),
            }))
            .with_notifications(Box::new(RecordingShell {
                events: events.clone(),
            }));
        let mut engine = engine;
        engine.init(1920.0, 1080.0);
        (engine, events)
    }

    fn engine() -> DesktopEngine {
        let mut engine = DesktopEngine::new();
        engine.init(1920.0, 1080.0);
        engine
    }

    #[test]
    fn test_open_app_focuses_and_registers() {
        let (mut engine, events) = recording_engine();
        let id = engine.open_app("calculator");

        assert_eq!(engine.focused(), Some(id));
        assert_eq!(engine.window_count(), 1);
        assert!(events
            .borrow()
            .contains(&ShellEvent::Added(id, "Unknown App".to_string())));
    }

    #[test]
    fn test_close_window_full_cycle() {
        let (mut engine, events) = recording_engine();
        let a = engine.open_app("a");
        let b = engine.open_app("b");

        engine.close_window(b);
        assert_eq!(engine.focused(), Some(a));
        assert!(events.borrow().contains(&ShellEvent::Removed(b)));

        engine.close_window(a);
        assert_eq!(engine.focused(), None);
        assert_eq!(engine.window_count(), 0);
    }

    #[test]
    fn test_stale_ids_are_ignored() {
        let mut engine = engine();
        let id = engine.open_app("a");
        engine.close_window(id);

        engine.close_window(id);
        engine.focus_window(id);
        engine.minimize_window(id);
        engine.toggle_maximize(id);
        engine.restore_window(id);
        assert_eq!(engine.window_count(), 0);
    }

    #[test]
    fn test_minimize_emits_notification() {
        let (mut engine, events) = recording_engine();
        let id = engine.open_app("a");
        engine.minimize_window(id);

        assert!(events
            .borrow()
            .contains(&ShellEvent::Notified("Unknown App minimized".to_string())));
        assert!(engine.window_rects().is_empty());
    }

    #[test]
    fn test_maximize_notifications_track_toggle() {
        let (mut engine, events) = recording_engine();
        let id = engine.open_app("a");

        engine.toggle_maximize(id);
        engine.toggle_maximize(id);

        let events = events.borrow();
        assert!(events.contains(&ShellEvent::Notified("Unknown App maximized".to_string())));
        assert!(events.contains(&ShellEvent::Notified("Unknown App restored".to_string())));
    }

    #[test]
    fn test_pointer_down_on_empty_desktop() {
        let mut engine = engine();
        engine.open_app("a");
        assert_eq!(
            engine.handle_pointer_down(1900.0, 1000.0),
            InputResult::Unhandled
        );
    }

    #[test]
    fn test_title_bar_press_starts_move() {
        let mut engine = engine();
        let id = engine.open_app("a");
        // First window cascades to (100, 50); title bar spans y 50..82
        assert_eq!(engine.handle_pointer_down(300.0, 60.0), InputResult::Handled);
        assert!(engine.is_dragging());

        engine.handle_pointer_move(400.0, 160.0);
        let window = engine.window_rects().pop().unwrap();
        assert_eq!(window.rect.position(), Vec2::new(200.0, 150.0));

        assert_eq!(engine.handle_pointer_up(), InputResult::Handled);
        assert!(!engine.is_dragging());
        assert_eq!(engine.focused(), Some(id));
    }

    #[test]
    fn test_drag_clamps_to_desktop() {
        let mut engine = engine();
        engine.open_app("a");
        engine.handle_pointer_down(300.0, 60.0);

        engine.handle_pointer_move(-5000.0, -5000.0);
        let window = engine.window_rects().pop().unwrap();
        // At most 32px may leave the left edge; the title bar stays on screen
        assert_eq!(window.rect.x, -700.0 + 32.0);
        assert_eq!(window.rect.y, 0.0);
    }

    #[test]
    fn test_content_press_forwards_local_coordinates() {
        let mut engine = engine();
        let id = engine.open_app("a");
        // Window at (100, 50); content starts below the 32px title bar
        let result = engine.handle_pointer_down(150.0, 182.0);
        assert_eq!(
            result,
            InputResult::Forward {
                window_id: id,
                local_x: 50.0,
                local_y: 100.0,
            }
        );
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_content_press_focuses_background_window() {
        let mut engine = engine();
        let a = engine.open_app("a");
        let b = engine.open_app("b");
        assert_eq!(engine.focused(), Some(b));

        // Window a at (100, 50); a region only it covers
        engine.handle_pointer_down(110.0, 500.0);
        assert_eq!(engine.focused(), Some(a));
    }

    #[test]
    fn test_minimize_button_press_focuses_first() {
        let mut engine = engine();
        let a = engine.open_app("a");
        let b = engine.open_app("b");
        let c = engine.open_app("c");
        assert_eq!(engine.focused(), Some(c));

        // Window a at (100, 50); its minimize button starts at x 692.
        // The press implicitly focuses a before minimizing it, so focus
        // hands off to b, not back to c.
        engine.handle_pointer_down(700.0, 60.0);
        assert_eq!(engine.focused(), Some(b));
        let visible: Vec<_> = engine.window_rects().iter().map(|w| w.id).collect();
        assert!(!visible.contains(&a));
    }

    #[test]
    fn test_maximize_button_press_focuses_background_window() {
        let mut engine = engine();
        let a = engine.open_app("a");
        let b = engine.open_app("b");
        assert_eq!(engine.focused(), Some(b));

        // Window a's maximize button: second 36px slot from x 692
        engine.handle_pointer_down(730.0, 60.0);
        assert_eq!(engine.focused(), Some(a));
        let top = engine.window_rects().pop().unwrap();
        assert_eq!(top.id, a);
        assert_eq!(top.state, WindowState::Maximized);
    }

    #[test]
    fn test_close_button_press_focuses_then_closes() {
        let mut engine = engine();
        let a = engine.open_app("a");
        let b = engine.open_app("b");
        let c = engine.open_app("c");

        // Window a's close button; closing the now-focused a falls back
        // to the most recently opened remaining window
        engine.handle_pointer_down(780.0, 60.0);
        assert!(engine.content_for(a).is_none());
        assert_eq!(engine.focused(), Some(c));
        assert!(engine.content_for(b).is_some());
    }

    #[test]
    fn test_non_finite_pointer_events_are_dropped() {
        let mut engine = engine();
        let id = engine.open_app("a");
        let before = engine.window_rects().pop().unwrap().rect;

        assert_eq!(
            engine.handle_pointer_down(f32::NAN, 60.0),
            InputResult::Unhandled
        );
        assert!(!engine.is_dragging());

        // A garbage move mid-drag is dropped without moving the window
        // or ending the gesture
        engine.start_move_drag(id, 300.0, 60.0);
        assert_eq!(
            engine.handle_pointer_move(f32::INFINITY, f32::NAN),
            InputResult::Unhandled
        );
        assert!(engine.is_dragging());
        assert_eq!(engine.window_rects().pop().unwrap().rect, before);
    }

    #[test]
    fn test_close_button_press_closes() {
        let mut engine = engine();
        let id = engine.open_app("a");
        // Window at (100, 50), width 700; close button is the rightmost
        // 36px slot of the title bar: x in 764..800
        engine.handle_pointer_down(780.0, 60.0);
        assert_eq!(engine.window_count(), 0);
        assert!(engine.content_for(id).is_none());
    }

    #[test]
    fn test_resize_freezes_at_minimum() {
        let mut engine = engine();
        let id = engine.open_app("a");
        engine.start_resize_drag(id, "se", 800.0, 550.0);

        engine.handle_pointer_move(200.0, 550.0);
        let window = engine.window_rects().pop().unwrap();
        assert_eq!(window.rect.width, 200.0);
        // The anchored left edge never moves
        assert_eq!(window.rect.x, 100.0);

        engine.handle_pointer_up();
    }

    #[test]
    fn test_west_resize_freezes_right_edge() {
        let mut engine = engine();
        let id = engine.open_app("a");
        engine.start_resize_drag(id, "w", 100.0, 300.0);

        // Push far past the minimum width
        engine.handle_pointer_move(5000.0, 300.0);
        let window = engine.window_rects().pop().unwrap();
        assert_eq!(window.rect.width, 200.0);
        // Right edge frozen at its original 800.0
        assert_eq!(window.rect.right(), 800.0);
    }

    #[test]
    fn test_pointer_events_while_idle_are_noops() {
        let mut engine = engine();
        engine.open_app("a");
        let before = engine.window_rects().pop().unwrap().rect;

        assert_eq!(engine.handle_pointer_move(500.0, 500.0), InputResult::Unhandled);
        assert_eq!(engine.handle_pointer_up(), InputResult::Unhandled);

        let after = engine.window_rects().pop().unwrap().rect;
        assert_eq!(before, after);
    }

    #[test]
    fn test_closing_dragged_window_cancels_gesture() {
        let mut engine = engine();
        let id = engine.open_app("a");
        engine.start_move_drag(id, 300.0, 60.0);
        engine.close_window(id);

        assert!(!engine.is_dragging());
        assert_eq!(engine.handle_pointer_move(400.0, 70.0), InputResult::Unhandled);
    }

    #[test]
    fn test_resize_desktop_tracks_maximized_windows() {
        let mut engine = engine();
        let id = engine.open_app("a");
        engine.toggle_maximize(id);

        engine.resize_desktop(1280.0, 720.0);
        let window = engine.window_rects().pop().unwrap();
        assert_eq!(window.rect, Rect::new(0.0, 0.0, 1280.0, 720.0));

        // Restoring still returns to the pre-maximize geometry
        engine.toggle_maximize(id);
        let window = engine.window_rects().pop().unwrap();
        assert_eq!(window.rect.size(), DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn test_window_rects_order_and_focus_flag() {
        let mut engine = engine();
        let a = engine.open_app("a");
        let b = engine.open_app("b");
        engine.focus_window(a);

        let rects = engine.window_rects();
        assert_eq!(rects.len(), 2);
        // Back to front: b behind, a on top
        assert_eq!(rects[0].id, b);
        assert!(!rects[0].focused);
        assert_eq!(rects[1].id, a);
        assert!(rects[1].focused);
    }

    #[test]
    fn test_window_rects_serialize() {
        let mut engine = engine();
        engine.open_app("calculator");
        let json = serde_json::to_string(&engine.window_rects()).unwrap();
        assert!(json.contains("\"app_kind\":\"calculator\""));
        assert!(json.contains("\"state\":\"normal\""));
    }
}
