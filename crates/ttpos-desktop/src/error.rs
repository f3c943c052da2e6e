//! Error types for the desktop window manager
//!
//! This module provides structured error types for all fallible operations
//! in the desktop crate. The engine facade treats every error here as a
//! recoverable local condition: a stale window id is logged and ignored,
//! never surfaced to the user.

use crate::window::WindowId;

/// Errors that can occur in window manager operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Window with the given ID was not found
    WindowNotFound(WindowId),

    /// A geometry computation produced or received an unusable value
    InvalidGeometry {
        /// The operation that was attempted
        op: &'static str,
        /// Why the geometry was rejected
        reason: &'static str,
    },
}

impl core::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::InvalidGeometry { op, reason } => {
                write!(f, "invalid geometry in '{}': {}", op, reason)
            }
        }
    }
}

impl std::error::Error for DesktopError {}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
