// SPDX-License-Identifier: MIT
//
// Frame composition buffer.
//
// The terminal must never observe half a frame. If rows, erase sequences and
// cursor moves went out as separate writes, the terminal could paint between
// them and the user would see the cursor flicker across the screen or a row
// half-redrawn. Instead every byte of a frame goes into a `RenderBuffer`
// first, and `flush_to` hands the whole thing to the writer in one call.
//
// Allocation failure while appending is not fatal: the append is dropped and
// the frame comes out incomplete. The next refresh redraws everything anyway.

use std::io::{self, Write};

/// Initial capacity: a full 80×24 screen of text plus escapes fits without
/// reallocation.
const DEFAULT_CAPACITY: usize = 4096;

/// An append-only byte buffer holding one not-yet-flushed frame.
///
/// Build a frame with [`append`](Self::append) (or any `write!` through the
/// [`Write`] impl), then consume the buffer with [`flush_to`](Self::flush_to).
/// A buffer is never reused across frames.
#[derive(Debug)]
pub struct RenderBuffer {
    buf: Vec<u8>,
}

impl RenderBuffer {
    /// Create an empty buffer with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Append `bytes` to the end of the frame.
    ///
    /// If the backing storage cannot grow, the bytes are dropped and the
    /// frame is left visually incomplete.
    pub fn append(&mut self, bytes: &[u8]) {
        if self.buf.try_reserve(bytes.len()).is_err() {
            log::warn!("render buffer: dropped {} bytes, allocation failed", bytes.len());
            return;
        }
        self.buf.extend_from_slice(bytes);
    }

    /// Write the whole frame to `w` in a single `write_all`, then release
    /// the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn flush_to(self, w: &mut impl Write) -> io::Result<()> {
        w.write_all(&self.buf)?;
        w.flush()
    }

    /// Take the accumulated bytes, consuming the buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Write for RenderBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Real flushing happens in flush_to().
        Ok(())
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
