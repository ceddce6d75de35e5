// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Window geometry — how many rows and columns the editor gets.
//
// The cheap answer comes from `ioctl(TIOCGWINSZ)`. Some terminals don't
// support it (or report zero columns), so there is a fallback: push the
// cursor into the bottom-right corner with `ESC[999C ESC[999B`, ask where it
// ended up with a device status report (`ESC[6n`), and parse the answer
// `ESC [ <rows> ; <cols> R` off stdin. The cursor can't leave the screen, so
// its position is the screen size.
//
// Geometry is queried once at startup. There is no resize handling.

use std::io::{self, Read, Write};

use crate::ansi;
use crate::error::{Error, Result};

/// Longest cursor position report we are willing to read. A real reply is
/// at most `ESC [ 65535 ; 65535 R`, 14 bytes.
const REPORT_CAP: usize = 31;

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

impl Size {
    /// Build a size from rows and columns.
    #[must_use]
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { cols, rows }
    }
}

// ─── Direct query ───────────────────────────────────────────────────────────

/// Query the terminal size via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal, the call fails, or either
/// dimension comes back as zero.
///
/// Asks stdout, not stdin: the size that matters is that of the screen the
/// frames are written to. When stdout is not a terminal this returns `None`
/// and [`window_size`] falls back to the probe, which writes to the same
/// stdout.
#[cfg(unix)]
#[must_use]
pub fn get_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &raw mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size::new(ws.ws_row, ws.ws_col))
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size() -> Option<Size> {
    None
}

// ─── Cursor position probe ──────────────────────────────────────────────────

/// Determine the window size, falling back to the cursor probe when
/// `TIOCGWINSZ` gives nothing useful.
///
/// # Errors
///
/// Returns [`Error::WindowSize`] if the probe gets no usable reply, or an
/// I/O error if the probe sequences can't be written.
pub fn window_size(input: &mut impl Read, output: &mut impl Write) -> Result<Size> {
    if let Some(size) = get_size() {
        log::debug!("window size {}x{} from TIOCGWINSZ", size.cols, size.rows);
        return Ok(size);
    }
    let size = probe_size(input, output)?;
    log::debug!("window size {}x{} from cursor report", size.cols, size.rows);
    Ok(size)
}

/// Find the window size by parking the cursor bottom-right and asking the
/// terminal where it is.
///
/// # Errors
///
/// Returns [`Error::WindowSize`] for a missing or malformed reply, or an
/// I/O error if writing the probe fails.
pub fn probe_size(input: &mut impl Read, output: &mut impl Write) -> Result<Size> {
    ansi::cursor_bottom_right(output)?;
    cursor_position(input, output)
}

/// Ask the terminal for the cursor position and parse the reply.
///
/// # Errors
///
/// Same as [`probe_size`].
pub fn cursor_position(input: &mut impl Read, output: &mut impl Write) -> Result<Size> {
    ansi::request_cursor_position(output)?;
    output.flush()?;
    let reply = read_report(input);
    parse_report(&reply).ok_or(Error::WindowSize("malformed cursor position report"))
}

/// Read a reply byte by byte until `R`, a failed read, or [`REPORT_CAP`]
/// attempts. The `R` itself is not included.
///
/// An empty read is one raw-mode timeout tick, not the end of the reply: it
/// uses up an attempt and reading goes on, so a slow terminal gets up to
/// `REPORT_CAP` ticks to answer.
fn read_report(input: &mut impl Read) -> Vec<u8> {
    let mut reply = Vec::with_capacity(REPORT_CAP);
    for _ in 0..REPORT_CAP {
        let mut byte = [0u8; 1];
        match input.read(&mut byte) {
            Ok(1) if byte[0] == b'R' => break,
            Ok(1) => reply.push(byte[0]),
            Ok(_) => {}
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
                ) => {}
            Err(_) => break,
        }
    }
    reply
}

/// Parse `ESC [ <rows> ; <cols>` (the trailing `R` already stripped).
///
/// Both fields must be non-empty decimal numbers that fit in `u16` and are
/// non-zero.
#[must_use]
pub fn parse_report(reply: &[u8]) -> Option<Size> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let split = body.iter().position(|&b| b == b';')?;
    let rows = parse_u16(&body[..split])?;
    let cols = parse_u16(&body[split + 1..])?;
    if rows == 0 || cols == 0 {
        return None;
    }
    Some(Size::new(rows, cols))
}

/// Parse a non-empty run of ASCII digits into a `u16`.
fn parse_u16(digits: &[u8]) -> Option<u16> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(digits).ok()?.parse().ok()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
