//! Window management module
//!
//! Provides window lifecycle, focus management, and hit testing.

mod config;
mod manager;
mod region;
#[allow(clippy::module_inception)]
mod window;

pub use config::WindowConfig;
pub use manager::{WindowManager, Z_BACKGROUND, Z_FOREGROUND};
pub use region::WindowRegion;
pub use window::{Window, WindowState};

/// Unique window identifier
///
/// Windows are identified by a monotonically increasing 64-bit integer.
/// Identifiers are never reused while the process runs.
pub type WindowId = u64;
