//! Scripted `WindowSystem` double for unit tests.

use std::cell::RefCell;

use crate::Rect;
use crate::window::{WindowHandle, WindowResult, WindowSystem};

struct FakeWindow {
    handle: WindowHandle,
    title: String,
    visible: bool,
}

#[derive(Default)]
pub struct FakeSystem {
    windows: Vec<FakeWindow>,
    fail_enumeration: bool,
    fail_moves: bool,
    title_queries: RefCell<Vec<WindowHandle>>,
    moves: RefCell<Vec<(WindowHandle, Rect, bool)>>,
}

impl FakeSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, raw: usize, title: &str, visible: bool) -> Self {
        self.windows.push(FakeWindow {
            handle: WindowHandle::from_raw(raw),
            title: title.into(),
            visible,
        });
        self
    }

    pub fn failing_enumeration(mut self) -> Self {
        self.fail_enumeration = true;
        self
    }

    pub fn failing_moves(mut self) -> Self {
        self.fail_moves = true;
        self
    }

    pub fn title_queries(&self) -> Vec<WindowHandle> {
        self.title_queries.borrow().clone()
    }

    pub fn moves(&self) -> Vec<(WindowHandle, Rect, bool)> {
        self.moves.borrow().clone()
    }

    fn find(&self, handle: WindowHandle) -> Option<&FakeWindow> {
        self.windows.iter().find(|w| w.handle == handle)
    }
}

impl WindowSystem for FakeSystem {
    fn top_level_windows(&self) -> WindowResult<Vec<WindowHandle>> {
        if self.fail_enumeration {
            return Err("EnumWindows failed".into());
        }
        Ok(self.windows.iter().map(|w| w.handle).collect())
    }

    fn is_visible(&self, handle: WindowHandle) -> bool {
        self.find(handle).is_some_and(|w| w.visible)
    }

    fn title(&self, handle: WindowHandle) -> String {
        self.title_queries.borrow_mut().push(handle);
        self.find(handle).map(|w| w.title.clone()).unwrap_or_default()
    }

    fn move_window(&self, handle: WindowHandle, rect: &Rect, repaint: bool) -> WindowResult<()> {
        self.moves.borrow_mut().push((handle, *rect, repaint));
        if self.fail_moves {
            return Err("Invalid window handle.".into());
        }
        Ok(())
    }
}
