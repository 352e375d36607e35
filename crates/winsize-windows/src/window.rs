use winsize_core::{Rect, WindowHandle, WindowResult};

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowTextLengthW, GetWindowTextW, IsWindowVisible, MoveWindow,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle: a number that identifies a window to the
/// OS. This struct holds that handle and queries the OS on demand.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a `Window` from a platform-agnostic handle.
    ///
    /// The handle is not validated; a stale value simply makes later
    /// calls fail.
    pub fn from_handle(handle: WindowHandle) -> Self {
        Self {
            hwnd: HWND(handle.raw() as *mut _),
        }
    }

    /// Returns the platform-agnostic handle for this window.
    pub fn handle(&self) -> WindowHandle {
        WindowHandle::from_raw(self.hwnd.0 as usize)
    }

    /// Returns whether the window is currently visible.
    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    /// Returns the window title, or an empty string if it has none.
    pub fn title(&self) -> String {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW only read window
        // text. An invalid HWND makes them report zero characters.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length <= 0 {
                return String::new();
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer).max(0);
            String::from_utf16_lossy(&buffer[..copied as usize])
        }
    }

    /// Moves and resizes the window with `MoveWindow`.
    ///
    /// Coordinates are passed through unchanged, including any invisible
    /// resize borders the window may have.
    pub fn move_to(&self, rect: &Rect, repaint: bool) -> WindowResult<()> {
        // SAFETY: MoveWindow validates the HWND itself and reports an
        // error for windows that no longer exist.
        unsafe {
            MoveWindow(
                self.hwnd,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                repaint,
            )?
        };
        Ok(())
    }
}
