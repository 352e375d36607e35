use std::io::{self, BufRead, Write};

use crate::Error;
use crate::enumerate::enumerate;
use crate::reposition::{TARGET, reposition};
use crate::select::select;
use crate::window::{WindowEntry, WindowHandle, WindowSystem};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The OS accepted the move/resize of this window.
    Resized(WindowHandle),
    /// The run stopped early or the resize was refused.
    Stopped(Error),
}

impl Outcome {
    /// The final line shown to the operator.
    pub fn message(self) -> &'static str {
        match self {
            Self::Resized(_) => "Window resized successfully!",
            Self::Stopped(e) => e.message(),
        }
    }
}

/// Runs one enumerate, select, reposition pass.
///
/// Each step can end the run early. Whatever happens, exactly one final
/// message line is written to `out`. Only write failures on `out` are
/// returned as errors.
pub fn run<S, R, W>(system: &S, input: &mut R, out: &mut W) -> io::Result<Outcome>
where
    S: WindowSystem + ?Sized,
    R: BufRead,
    W: Write,
{
    let entries: Vec<WindowEntry> = enumerate(system).collect();
    crate::log_info!("{} selectable windows", entries.len());

    let outcome = match select(&entries, input, out)? {
        Ok(handle) => {
            crate::log_info!("operator chose window {handle}");
            match reposition(system, handle, &TARGET) {
                Ok(()) => Outcome::Resized(handle),
                Err(e) => Outcome::Stopped(e),
            }
        }
        Err(e) => {
            crate::log_info!("stopping: {e}");
            Outcome::Stopped(e)
        }
    };

    writeln!(out, "{}", outcome.message())?;
    out.flush()?;
    Ok(outcome)
}
