//! Window chrome regions for pointer hit testing

use crate::math::{FrameStyle, Rect, Vec2};

/// A region of a window's chrome, as reported by hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// The draggable title bar strip (excluding the control buttons)
    TitleBar,
    /// The application content area
    Content,
    CloseButton,
    MinimizeButton,
    MaximizeButton,
    ResizeN,
    ResizeS,
    ResizeE,
    ResizeW,
    ResizeNE,
    ResizeNW,
    ResizeSE,
    ResizeSW,
}

impl WindowRegion {
    /// Check whether this region is a resize handle
    pub fn is_resize(self) -> bool {
        self.affects_north() || self.affects_south() || self.affects_east() || self.affects_west()
    }

    /// Resize handle adjusts the top edge
    pub fn affects_north(self) -> bool {
        matches!(
            self,
            Self::ResizeN | Self::ResizeNE | Self::ResizeNW
        )
    }

    /// Resize handle adjusts the bottom edge
    pub fn affects_south(self) -> bool {
        matches!(
            self,
            Self::ResizeS | Self::ResizeSE | Self::ResizeSW
        )
    }

    /// Resize handle adjusts the right edge
    pub fn affects_east(self) -> bool {
        matches!(
            self,
            Self::ResizeE | Self::ResizeNE | Self::ResizeSE
        )
    }

    /// Resize handle adjusts the left edge
    pub fn affects_west(self) -> bool {
        matches!(
            self,
            Self::ResizeW | Self::ResizeNW | Self::ResizeSW
        )
    }

    /// Parse a compass-point handle name ("n", "se", ...) from the host
    pub fn from_direction(direction: &str) -> Option<Self> {
        match direction {
            "n" => Some(Self::ResizeN),
            "s" => Some(Self::ResizeS),
            "e" => Some(Self::ResizeE),
            "w" => Some(Self::ResizeW),
            "ne" => Some(Self::ResizeNE),
            "nw" => Some(Self::ResizeNW),
            "se" => Some(Self::ResizeSE),
            "sw" => Some(Self::ResizeSW),
            _ => None,
        }
    }

    /// Classify a point known to be inside (or on the border of) `rect`.
    ///
    /// The resize band wins over the title bar at the very edge, corners win
    /// over edges, and the control buttons sit at the right end of the title
    /// bar. Everything below the title bar is content.
    pub fn classify(point: Vec2, rect: Rect, style: &FrameStyle) -> WindowRegion {
        let b = style.resize_border;
        let near_w = point.x < rect.x + b;
        let near_e = point.x >= rect.right() - b;
        let near_n = point.y < rect.y + b;
        let near_s = point.y >= rect.bottom() - b;

        match (near_n, near_s, near_w, near_e) {
            (true, _, true, _) => return Self::ResizeNW,
            (true, _, _, true) => return Self::ResizeNE,
            (_, true, true, _) => return Self::ResizeSW,
            (_, true, _, true) => return Self::ResizeSE,
            (true, _, _, _) => return Self::ResizeN,
            (_, true, _, _) => return Self::ResizeS,
            (_, _, true, _) => return Self::ResizeW,
            (_, _, _, true) => return Self::ResizeE,
            _ => {}
        }

        if point.y < rect.y + style.title_bar_height {
            let controls_left = rect.right() - style.controls_width();
            if point.x >= controls_left {
                let slot = ((point.x - controls_left) / style.button_width) as u32;
                return match slot {
                    0 => Self::MinimizeButton,
                    1 => Self::MaximizeButton,
                    _ => Self::CloseButton,
                };
            }
            return Self::TitleBar;
        }

        Self::Content
    }
}
