//! Pointer input arbitration
//!
//! The router owns the single drag gesture slot. At most one gesture is
//! active at a time; starting a new gesture silently replaces whatever was
//! in flight, so a missed pointer-up can never wedge the desktop.
//!
//! The router records gestures; it never touches window state. The engine
//! reads the active [`DragState`] on every pointer move and commits the
//! resulting geometry itself.

use crate::math::{Size, Vec2};
use crate::window::{WindowId, WindowRegion};
use serde::Serialize;
use tracing::trace;

/// The gesture currently in flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// A title-bar drag moving a window
    MoveWindow {
        window_id: WindowId,
        /// Pointer offset from the window's top-left corner at grab time
        grab_offset: Vec2,
    },
    /// An edge or corner drag resizing a window
    ResizeWindow {
        window_id: WindowId,
        /// Which edge or corner was grabbed
        handle: WindowRegion,
        /// Window position when the gesture started
        start_pos: Vec2,
        /// Window size when the gesture started
        start_size: Size,
        /// Pointer position when the gesture started
        start_pointer: Vec2,
    },
}

/// Outcome of routing a pointer event.
///
/// Serializes as the host-facing wire form: unit variants as bare strings,
/// `Forward` as a tagged object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputResult {
    /// The desktop consumed the event
    Handled,
    /// The event belongs to a window's content area
    Forward {
        window_id: WindowId,
        /// Pointer position relative to the content area's top-left
        local_x: f32,
        local_y: f32,
    },
    /// The event hit empty desktop
    Unhandled,
}

/// Single-slot drag gesture tracker
#[derive(Debug, Default)]
pub struct InputRouter {
    drag: Option<DragState>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a move gesture, replacing any active gesture
    pub fn start_window_move(&mut self, window_id: WindowId, grab_offset: Vec2) {
        trace!(window_id, "start move drag");
        self.drag = Some(DragState::MoveWindow {
            window_id,
            grab_offset,
        });
    }

    /// Begin a resize gesture, replacing any active gesture
    pub fn start_window_resize(
        &mut self,
        window_id: WindowId,
        handle: WindowRegion,
        start_pos: Vec2,
        start_size: Size,
        start_pointer: Vec2,
    ) {
        trace!(window_id, ?handle, "start resize drag");
        self.drag = Some(DragState::ResizeWindow {
            window_id,
            handle,
            start_pos,
            start_size,
            start_pointer,
        });
    }

    /// End the active gesture, returning it; None when idle
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Whether a gesture is in flight
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The active gesture, if any
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Drop any gesture that references the given window
    pub fn cancel_for_window(&mut self, window_id: WindowId) {
        let stale = match self.drag {
            Some(DragState::MoveWindow { window_id: id, .. }) => id == window_id,
            Some(DragState::ResizeWindow { window_id: id, .. }) => id == window_id,
            None => false,
        };
        if stale {
            self.drag = None;
        }
    }
}
