//! Window chrome metrics
//!
//! These constants describe the window frame layout used for pointer hit
//! testing. They mirror the stylesheet the host renders windows with, so the
//! state layer and the presentation layer agree on where the title bar,
//! control buttons, and resize handles are.

/// Window frame metrics, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    /// Height of the title bar strip at the top of every window
    pub title_bar_height: f32,
    /// Thickness of the resize band around the window edge
    pub resize_border: f32,
    /// Width of one window control button (minimize/maximize/close)
    pub button_width: f32,
}

/// The frame style shared by all windows
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 32.0,
    resize_border: 6.0,
    button_width: 36.0,
};

impl FrameStyle {
    /// Total width of the three-button control cluster
    pub fn controls_width(&self) -> f32 {
        self.button_width * 3.0
    }
}
