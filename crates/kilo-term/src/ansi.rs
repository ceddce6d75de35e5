// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write VT100 escape sequences to any `impl Write`. No
// state, no decisions about when to emit — the renderer decides that. This
// module only knows the byte-level encoding of the handful of commands the
// editor needs.
//
// Cursor positions are 0-indexed in our API and converted to 1-indexed for
// the terminal (CUP uses 1-based coordinates).
//
// All functions return `io::Result` propagated from the underlying writer.
// Writing into a `RenderBuffer` never fails.

use std::io::{self, Write};

/// Hide the cursor (DECTCEM reset).
pub const CURSOR_HIDE: &[u8] = b"\x1b[?25l";
/// Show the cursor (DECTCEM set).
pub const CURSOR_SHOW: &[u8] = b"\x1b[?25h";
/// Move the cursor to the top-left corner (CUP with no parameters).
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
/// Erase the entire display (ED 2).
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
/// Erase from the cursor to the end of the line (EL 0).
pub const ERASE_LINE: &[u8] = b"\x1b[K";
/// Push the cursor as far right and down as it goes. CUF/CUD stop at the
/// screen edge, so 999 lands on the bottom-right cell of any real terminal.
pub const CURSOR_BOTTOM_RIGHT: &[u8] = b"\x1b[999C\x1b[999B";
/// Device status report: ask the terminal for the cursor position.
/// The answer arrives on stdin as `ESC [ <row> ; <col> R`.
pub const REQUEST_CURSOR_POSITION: &[u8] = b"\x1b[6n";

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Move the cursor to `(x, y)` using the CUP (Cursor Position) sequence.
///
/// Our coordinates are 0-indexed; ANSI CUP is 1-indexed.
#[inline]
pub fn cursor_to(w: &mut impl Write, x: u16, y: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1)
}

/// Move the cursor to the top-left corner.
#[inline]
pub fn cursor_home(w: &mut impl Write) -> io::Result<()> {
    w.write_all(CURSOR_HOME)
}

/// Hide the cursor while a frame is being drawn.
#[inline]
pub fn cursor_hide(w: &mut impl Write) -> io::Result<()> {
    w.write_all(CURSOR_HIDE)
}

/// Show the cursor once the frame is complete.
#[inline]
pub fn cursor_show(w: &mut impl Write) -> io::Result<()> {
    w.write_all(CURSOR_SHOW)
}

// ─── Screen ──────────────────────────────────────────────────────────────────

/// Clear the entire screen (ED 2). Does not move the cursor.
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(CLEAR_SCREEN)
}

/// Erase the rest of the current line (EL 0).
///
/// Emitted after every row instead of clearing the whole screen up front,
/// so the old frame is overwritten in place rather than blanked first.
#[inline]
pub fn erase_line(w: &mut impl Write) -> io::Result<()> {
    w.write_all(ERASE_LINE)
}

// ─── Geometry probe ──────────────────────────────────────────────────────────

/// Park the cursor in the bottom-right cell.
#[inline]
pub fn cursor_bottom_right(w: &mut impl Write) -> io::Result<()> {
    w.write_all(CURSOR_BOTTOM_RIGHT)
}

/// Send a cursor position report request (DSR 6).
#[inline]
pub fn request_cursor_position(w: &mut impl Write) -> io::Result<()> {
    w.write_all(REQUEST_CURSOR_POSITION)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
