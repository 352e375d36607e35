use std::fmt;

/// Every way a run can stop short of a successful resize.
///
/// None of these are fatal to the process. Each one is reported to the
/// operator with its fixed message and the program ends cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No visible window with a non-empty title was found.
    EmptyEnumeration,
    /// The operator's token could not be read (closed stream, blank line).
    InputRead,
    /// The token is not an unsigned 32-bit decimal integer.
    HandleParse,
    /// The OS rejected the move/resize request.
    Resize,
}

impl Error {
    /// The line shown to the operator for this failure.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyEnumeration => "No visible windows found.",
            Self::InputRead => "Invalid input.",
            Self::HandleParse => "Invalid HWND.",
            Self::Resize => "Failed to resize the window.",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Error {}
