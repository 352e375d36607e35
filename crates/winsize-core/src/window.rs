use std::fmt;

use crate::Rect;

/// A boxed error type for window operations.
///
/// Platform crates surface their native errors through this so the
/// core logic never depends on a specific OS binding.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// An opaque, OS-assigned identifier for a top-level window.
///
/// The value is only meaningful to the operating system at the moment
/// it is used. Nothing here guarantees the window still exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(usize);

impl WindowHandle {
    /// Creates a handle from a raw pointer-sized value.
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A visible, titled window captured during enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEntry {
    pub handle: WindowHandle,
    pub title: String,
}

/// The windowing capabilities this tool needs from the host OS.
///
/// Each platform crate (e.g. `winsize-windows`) provides its own
/// implementation. Tests substitute a scripted fake.
pub trait WindowSystem {
    /// Returns every top-level window in the order the OS visits them.
    fn top_level_windows(&self) -> WindowResult<Vec<WindowHandle>>;

    /// Returns whether the window is currently shown.
    fn is_visible(&self, handle: WindowHandle) -> bool;

    /// Returns the window's display title, or an empty string.
    fn title(&self, handle: WindowHandle) -> String;

    /// Moves and resizes the window to `rect`.
    fn move_window(&self, handle: WindowHandle, rect: &Rect, repaint: bool) -> WindowResult<()>;
}
