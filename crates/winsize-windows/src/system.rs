use winsize_core::{Rect, WindowHandle, WindowResult, WindowSystem};

use crate::enumerate::enumerate_windows;
use crate::window::Window;

/// The host Win32 windowing subsystem.
///
/// Holds no state; every call goes straight to user32.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32System;

impl WindowSystem for Win32System {
    fn top_level_windows(&self) -> WindowResult<Vec<WindowHandle>> {
        Ok(enumerate_windows()?.iter().map(Window::handle).collect())
    }

    fn is_visible(&self, handle: WindowHandle) -> bool {
        Window::from_handle(handle).is_visible()
    }

    fn title(&self, handle: WindowHandle) -> String {
        Window::from_handle(handle).title()
    }

    fn move_window(&self, handle: WindowHandle, rect: &Rect, repaint: bool) -> WindowResult<()> {
        Window::from_handle(handle).move_to(rect, repaint)
    }
}
