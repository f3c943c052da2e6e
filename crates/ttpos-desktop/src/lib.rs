//! Window management core for the TTP-OS desktop shell
//!
//! This crate provides the desktop windowing functionality:
//! - Window lifecycle (open, close, focus, z-order)
//! - Minimize and maximize/restore with geometry round-tripping
//! - Drag and resize gesture arbitration (one gesture at a time)
//! - Pointer hit testing against window chrome regions
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`, frame metrics)
//! - [`geometry`]: Pure drag/resize computations with clamping
//! - [`window`]: Window entities, the store, z-order and focus
//! - [`input`]: The global drag/resize state machine
//! - [`shell`]: Collaborator contracts (content registry, taskbar, notifications)
//!
//! ## Example
//!
//! ```rust
//! use ttpos_desktop::DesktopEngine;
//!
//! let mut engine = DesktopEngine::new();
//! engine.init(1920.0, 1080.0);
//!
//! let id = engine.open_app("calculator");
//! assert_eq!(engine.focused(), Some(id));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **State Only**: Rendering is the host's job; this crate owns window state
//! 3. **Narrow Collaborators**: Taskbar/notification/content live behind traits

pub mod geometry;
pub mod input;
pub mod math;
pub mod shell;
pub mod window;

mod engine;
mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use error::{DesktopError, DesktopResult};
pub use geometry::{DEFAULT_WINDOW_SIZE, MIN_VISIBLE, MIN_WINDOW_SIZE};
pub use input::{DragState, InputResult, InputRouter};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use shell::{
    AppDescriptor, ContentRegistry, NotificationSink, NullNotifications, NullTaskbar,
    PlaceholderRegistry, TaskbarNotifier,
};
pub use window::{
    Window, WindowConfig, WindowId, WindowManager, WindowRegion, WindowState,
};

pub use engine::{DesktopEngine, WindowRect};
