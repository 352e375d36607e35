use std::vec;

use crate::window::{WindowEntry, WindowHandle, WindowSystem};

/// Lazily yields the visible, titled top-level windows.
///
/// The handle list is captured once up front; visibility and title are
/// queried as the sequence is consumed. Finite and not restartable.
pub struct Enumeration<'a, S: ?Sized> {
    system: &'a S,
    handles: vec::IntoIter<WindowHandle>,
}

/// Starts enumerating top-level windows through `system`.
///
/// If the OS enumeration itself fails, the sequence is simply empty.
/// A failure and "no windows" look the same to the caller.
pub fn enumerate<S: WindowSystem + ?Sized>(system: &S) -> Enumeration<'_, S> {
    let handles = match system.top_level_windows() {
        Ok(handles) => handles,
        Err(e) => {
            crate::log_warn!("window enumeration failed: {e}");
            Vec::new()
        }
    };
    crate::log_debug!("enumerated {} top-level windows", handles.len());

    Enumeration {
        system,
        handles: handles.into_iter(),
    }
}

/// Why a window was left out of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Skip {
    Hidden,
    Untitled,
}

impl Skip {
    fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Untitled => "untitled",
        }
    }
}

/// Returns the window's title if it belongs in the list.
///
/// Hidden windows are never asked for a title.
fn visit<S: WindowSystem + ?Sized>(system: &S, handle: WindowHandle) -> Result<String, Skip> {
    if !system.is_visible(handle) {
        return Err(Skip::Hidden);
    }
    let title = system.title(handle);
    if title.is_empty() {
        return Err(Skip::Untitled);
    }
    Ok(title)
}

impl<S: WindowSystem + ?Sized> Iterator for Enumeration<'_, S> {
    type Item = WindowEntry;

    fn next(&mut self) -> Option<WindowEntry> {
        for handle in self.handles.by_ref() {
            match visit(self.system, handle) {
                Ok(title) => return Some(WindowEntry { handle, title }),
                Err(skip) => crate::log_debug!("skipping {} window {handle}", skip.as_str()),
            }
        }
        None
    }
}
