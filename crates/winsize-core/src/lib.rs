pub mod config;
pub mod enumerate;
pub mod error;
pub mod log;
pub mod rect;
pub mod reposition;
pub mod run;
pub mod select;
pub mod window;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use enumerate::enumerate;
pub use error::Error;
pub use rect::Rect;
pub use reposition::{REPAINT, TARGET, reposition};
pub use run::{Outcome, run};
pub use select::{parse_handle, select};
pub use window::{WindowEntry, WindowHandle, WindowResult, WindowSystem};
