//! Win32 backend. Empty on other targets.
#![cfg(windows)]

/// Win32 window enumeration.
pub mod enumerate;

/// `WindowSystem` implementation over the Win32 API.
pub mod system;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use enumerate::enumerate_windows;
pub use system::Win32System;
pub use window::Window;
