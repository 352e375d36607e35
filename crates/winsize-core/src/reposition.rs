use crate::window::{WindowHandle, WindowSystem};
use crate::{Error, Rect};

/// Where every selected window ends up: 100x300 at (100, 100).
pub const TARGET: Rect = Rect::new(100, 100, 100, 300);

/// Whether the OS is asked to repaint the client area after the move.
pub const REPAINT: bool = true;

/// Issues a single move/resize request for `handle`.
///
/// Success or failure comes solely from the OS call. The OS error detail
/// is logged and otherwise discarded; there is no retry.
pub fn reposition<S: WindowSystem + ?Sized>(
    system: &S,
    handle: WindowHandle,
    rect: &Rect,
) -> Result<(), Error> {
    crate::log_info!(
        "moving window {handle} to ({},{}) {}x{}",
        rect.x,
        rect.y,
        rect.width,
        rect.height
    );

    system.move_window(handle, rect, REPAINT).map_err(|e| {
        crate::log_error!("failed to move window {handle}: {e}");
        Error::Resize
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSystem;

    #[test]
    fn target_geometry_is_fixed() {
        assert_eq!(TARGET, Rect::new(100, 100, 100, 300));
    }

    #[test]
    fn forwards_geometry_and_repaint_flag() {
        // Arrange
        let system = FakeSystem::new();
        let handle = WindowHandle::from_raw(42);

        // Act
        let result = reposition(&system, handle, &TARGET);

        // Assert
        assert_eq!(result, Ok(()));
        assert_eq!(system.moves(), vec![(handle, TARGET, true)]);
    }

    #[test]
    fn os_failure_maps_to_resize_error_for_any_handle() {
        // Arrange
        let system = FakeSystem::new().failing_moves();

        // Act / Assert
        for raw in [0, 42, u32::MAX as usize] {
            let result = reposition(&system, WindowHandle::from_raw(raw), &TARGET);
            assert_eq!(result, Err(Error::Resize));
        }
        assert_eq!(system.moves().len(), 3);
    }
}
