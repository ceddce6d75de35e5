// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Unbuffered access to the controlling terminal's stdin and stdout.
//
// `std::io::Stdin` sits behind an 8 KB `BufReader` and `std::io::Stdout`
// behind a `LineWriter`. Neither fits here: the key decoder relies on each
// `read()` honoring the VMIN=0 / VTIME=1 timeout, and the renderer relies on
// one frame being exactly one `write()`. These wrappers call `read(2)` and
// `write(2)` on the raw file descriptors and nothing else.

use std::io::{self, Read, Write};

/// Raw reader over stdin's file descriptor.
///
/// With raw mode enabled, a read returns after at least one byte arrives or
/// after 100 ms, whichever comes first. A timeout shows up as `Ok(0)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TtyReader;

/// Raw writer over stdout's file descriptor. Every `write` is one syscall.
#[derive(Debug, Default, Clone, Copy)]
pub struct TtyWriter;

#[cfg(unix)]
impl Read for TtyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = unsafe { libc::read(libc::STDIN_FILENO, buf.as_mut_ptr().cast(), buf.len()) };
        if n < 0 {
            return Err(io::Error::last_os_error());
        }
        #[allow(clippy::cast_sign_loss)] // n >= 0 checked above.
        Ok(n as usize)
    }
}

#[cfg(not(unix))]
impl Read for TtyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::stdin().lock().read(buf)
    }
}

#[cfg(unix)]
impl Write for TtyWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = unsafe { libc::write(libc::STDOUT_FILENO, buf.as_ptr().cast(), buf.len()) };
        if n < 0 {
            return Err(io::Error::last_os_error());
        }
        #[allow(clippy::cast_sign_loss)] // n >= 0 checked above.
        Ok(n as usize)
    }

    fn flush(&mut self) -> io::Result<()> {
        // Nothing is buffered on our side.
        Ok(())
    }
}

#[cfg(not(unix))]
impl Write for TtyWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut out = io::stdout().lock();
        let n = out.write(buf)?;
        out.flush()?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
