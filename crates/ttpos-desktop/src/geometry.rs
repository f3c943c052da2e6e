//! Pure gesture geometry
//!
//! Stateless computations shared by the drag/resize input machinery.
//! Everything here is a pure function from gesture anchors and the current
//! pointer to a new window geometry, with all clamping applied. Callers
//! commit the result into the window store; nothing here mutates state.

use crate::math::{Size, Vec2};
use crate::window::WindowRegion;

/// Smallest size a window can be resized to
pub const MIN_WINDOW_SIZE: Size = Size::new(200.0, 150.0);

/// Size of a newly opened window
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(700.0, 500.0);

/// Pixels of a dragged window that must remain on the desktop
pub const MIN_VISIBLE: f32 = 32.0;

/// Compute a dragged window's new top-left corner.
///
/// The new position is `pointer - grab_offset`, clamped so that at least
/// `min_visible` pixels of the window stay inside the desktop horizontally,
/// and the title bar cannot leave the desktop vertically. The bottom edge is
/// intentionally unclamped: a window may hang below the visible desktop.
pub fn compute_drag(
    pointer: Vec2,
    grab_offset: Vec2,
    window_size: Size,
    desktop: Size,
    min_visible: f32,
) -> Vec2 {
    let mut desired = pointer - grab_offset;
    if !desired.is_finite() {
        desired = Vec2::ZERO;
    }

    // min() before max() so the lower bound wins on a degenerate desktop
    let x = desired
        .x
        .min(desktop.width - min_visible)
        .max(-window_size.width + min_visible);
    let y = desired.y.min(desktop.height - min_visible).max(0.0);

    Vec2::new(x, y)
}

/// Compute a resized window's new position and size.
///
/// `delta` is `pointer - anchor_pointer`. Each edge named by `handle` adjusts
/// its dimension; north/west edges also move the position so the opposite
/// edge stays put. Positions are re-derived from the *clamped* dimension
/// (`start_pos + (start_size - clamped)`), so when a dimension hits the
/// minimum the anchored edge freezes instead of drifting with the pointer.
///
/// The output size is at least `min_size` in both dimensions, always.
pub fn compute_resize(
    handle: WindowRegion,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
    min_size: Size,
) -> (Vec2, Size) {
    let delta = if delta.is_finite() { delta } else { Vec2::ZERO };

    let mut pos = start_pos;
    let mut size = start_size.max(min_size);

    if handle.affects_east() {
        size.width = (start_size.width + delta.x).max(min_size.width);
    }
    if handle.affects_west() {
        size.width = (start_size.width - delta.x).max(min_size.width);
        pos.x = start_pos.x + (start_size.width - size.width);
    }
    if handle.affects_south() {
        size.height = (start_size.height + delta.y).max(min_size.height);
    }
    if handle.affects_north() {
        size.height = (start_size.height - delta.y).max(min_size.height);
        pos.y = start_pos.y + (start_size.height - size.height);
    }

    (pos, size)
}
