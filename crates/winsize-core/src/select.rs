use std::io::{self, BufRead, Write};

use crate::Error;
use crate::window::{WindowEntry, WindowHandle};

/// Printed before the numbered window list.
pub const HEADER: &str = "Select a window to resize:";

/// Printed (without a newline) before reading the operator's token.
pub const PROMPT: &str = "Enter the HWND of the window you want to resize: ";

/// Shows the window list and reads back the handle the operator types.
///
/// The outer `io::Result` only carries failures writing to `out`. The
/// inner result is the operator-facing outcome.
///
/// The index printed beside each window is informational. The operator
/// must type the literal handle value; it is never looked up by index,
/// and it is not checked against the list.
pub fn select<R: BufRead, W: Write>(
    entries: &[WindowEntry],
    input: &mut R,
    out: &mut W,
) -> io::Result<Result<WindowHandle, Error>> {
    if entries.is_empty() {
        return Ok(Err(Error::EmptyEnumeration));
    }

    render_list(entries, out)?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    Ok(read_token(input).and_then(|token| {
        let token = std::str::from_utf8(&token).map_err(|_| Error::HandleParse)?;
        parse_handle(token)
    }))
}

/// Writes the header and one `"<index>: <title> (HWND: <handle>)"` line
/// per entry, 1-based, in enumeration order.
pub fn render_list<W: Write>(entries: &[WindowEntry], out: &mut W) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "{}: {} (HWND: {})", i + 1, entry.title, entry.handle)?;
    }
    Ok(())
}

/// Reads one line and returns its first whitespace-delimited token.
///
/// The token is returned as raw bytes; bytes that are not UTF-8 are a
/// parse problem, not a read problem. End of input, a read error, or a
/// blank line all count as unreadable.
pub fn read_token<R: BufRead>(input: &mut R) -> Result<Vec<u8>, Error> {
    let mut line = Vec::new();
    match input.read_until(b'\n', &mut line) {
        Ok(0) => Err(Error::InputRead),
        Ok(_) => line
            .split(u8::is_ascii_whitespace)
            .find(|word| !word.is_empty())
            .map(<[u8]>::to_vec)
            .ok_or(Error::InputRead),
        Err(e) => {
            crate::log_warn!("failed to read operator input: {e}");
            Err(Error::InputRead)
        }
    }
}

/// Parses an unsigned base-10 handle that fits in 32 bits.
///
/// Only ASCII digits are accepted: no sign, no `0x` prefix, no
/// separators.
pub fn parse_handle(token: &str) -> Result<WindowHandle, Error> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::HandleParse);
    }

    token
        .parse::<u32>()
        .map(|value| WindowHandle::from_raw(value as usize))
        .map_err(|_| Error::HandleParse)
}
