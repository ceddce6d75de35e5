// SPDX-License-Identifier: MIT
//
// Terminal control — raw mode, RAII cleanup, and the fatal exit path.
//
// Safety: This module necessarily uses `unsafe` for termios (tcgetattr,
// tcsetattr) and raw fd writes. These are the standard POSIX
// interfaces for terminal control. Each unsafe block is minimal.
#![allow(unsafe_code)]
//
// The original attributes are captured once into a process-wide slot before
// anything is changed. Every exit route takes them back out of that slot:
//
//   - normal quit      → `RawMode::disable`
//   - early return     → `Drop for RawMode`
//   - fatal error      → `die`, which calls `process::exit` (no destructors)
//   - panic            → the panic hook
//
// Taking from the slot is what makes restoration happen exactly once: the
// first route to get there empties it, every later route finds nothing.

use std::fmt::Display;
use std::io::{self, Write};
use std::process;
use std::sync::{Mutex, Once};

use crate::ansi;
use crate::error::{Error, Result};

// ─── Saved attributes ───────────────────────────────────────────────────────

/// The attributes in force before raw mode, while raw mode is active.
///
/// Behind a [`Mutex`], not `static mut`. `None` before [`RawMode::enable`]
/// and after the first restore.
#[cfg(unix)]
static SAVED_TERMIOS: Mutex<Option<libc::termios>> = Mutex::new(None);

/// Restore the saved attributes, if they haven't been restored already.
///
/// Returns `Ok(false)` when there was nothing to restore.
#[cfg(unix)]
fn restore_saved() -> Result<bool> {
    let saved = match SAVED_TERMIOS.lock() {
        Ok(mut guard) => guard.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    };
    let Some(original) = saved else {
        return Ok(false);
    };
    if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSAFLUSH, &raw const original) } != 0 {
        return Err(Error::Attributes {
            op: "tcsetattr",
            source: io::Error::last_os_error(),
        });
    }
    log::debug!("raw mode disabled");
    Ok(true)
}

#[cfg(not(unix))]
fn restore_saved() -> Result<bool> {
    Ok(false)
}

/// Build raw-mode attributes from the original ones.
///
/// - input: no break-to-SIGINT, no CR→NL, no parity check, no 8th-bit
///   strip, no XON/XOFF flow control (frees Ctrl+S and Ctrl+Q)
/// - control: 8-bit characters
/// - local: no echo, no line buffering, no signal keys, no Ctrl+V
/// - output: no post-processing (`\n` is not turned into `\r\n`)
/// - `read()` returns as soon as one byte is available, or after 100 ms
///   with nothing (VMIN = 0, VTIME = 1 decisecond)
#[cfg(unix)]
#[must_use]
pub fn raw_attributes(original: libc::termios) -> libc::termios {
    let mut raw = original;
    raw.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
    raw.c_oflag &= !libc::OPOST;
    raw.c_cflag |= libc::CS8;
    raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
    raw.c_cc[libc::VMIN] = 0;
    raw.c_cc[libc::VTIME] = 1;
    raw
}

// ─── Panic hook ─────────────────────────────────────────────────────────────

/// Emergency restore sequence: show the cursor again (frames hide it while
/// drawing).
const EMERGENCY_RESTORE: &[u8] = ansi::CURSOR_SHOW;

/// Panic hook guard — ensures the hook is installed at most once per process.
static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Install a panic hook that restores the terminal before printing the error.
///
/// Without this, a panic in raw mode leaves the user's terminal broken: no
/// echo, no line editing, no way to read the error message.
fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let original = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = crate::tty::TtyWriter.write_all(EMERGENCY_RESTORE);
            let _ = restore_saved();
            original(info);
        }));
    });
}

// ─── RawMode ────────────────────────────────────────────────────────────────

/// Raw mode session with RAII cleanup.
///
/// Created by [`enable`](Self::enable). Call [`disable`](Self::disable) on
/// the normal exit path to see restore errors; dropping the guard restores
/// too, but can only log a failure.
///
/// # Example
///
/// ```no_run
/// use kilo_term::terminal::RawMode;
///
/// let raw = RawMode::enable()?;
/// // ... draw frames, read keys ...
/// raw.disable()?;
/// # Ok::<(), kilo_term::Error>(())
/// ```
#[derive(Debug)]
pub struct RawMode {
    _private: (),
}

impl RawMode {
    /// Capture the current attributes and switch the terminal to raw mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Attributes`] if stdin is not a terminal or the
    /// attributes can't be read or applied.
    #[cfg(unix)]
    pub fn enable() -> Result<Self> {
        let mut original: libc::termios = unsafe { std::mem::zeroed() };
        if unsafe { libc::tcgetattr(libc::STDIN_FILENO, &raw mut original) } != 0 {
            return Err(Error::Attributes {
                op: "tcgetattr",
                source: io::Error::last_os_error(),
            });
        }

        // Registered before the first mutation so every later exit restores.
        match SAVED_TERMIOS.lock() {
            Ok(mut guard) => *guard = Some(original),
            Err(poisoned) => *poisoned.into_inner() = Some(original),
        }
        install_panic_hook();

        let attrs = raw_attributes(original);
        if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSAFLUSH, &raw const attrs) } != 0 {
            return Err(Error::Attributes {
                op: "tcsetattr",
                source: io::Error::last_os_error(),
            });
        }

        log::debug!("raw mode enabled");
        Ok(Self { _private: () })
    }

    #[cfg(not(unix))]
    pub fn enable() -> Result<Self> {
        Err(Error::Attributes {
            op: "tcgetattr",
            source: io::Error::new(io::ErrorKind::Unsupported, "no termios on this platform"),
        })
    }

    /// Restore the original attributes and end the session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Attributes`] if `tcsetattr` fails.
    pub fn disable(self) -> Result<()> {
        // Dropping `self` afterwards finds the slot empty.
        restore_saved().map(|_| ())
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = restore_saved() {
            log::warn!("failed to restore terminal: {e}");
        }
    }
}

// ─── Fatal exit ─────────────────────────────────────────────────────────────

/// Report an unrecoverable error and exit with status 1.
///
/// Clears the screen and homes the cursor (best effort, write failures are
/// ignored), restores the terminal if raw mode is active, prints
/// `kilo: <err>` to stderr and exits.
pub fn die(err: impl Display) -> ! {
    let mut out = crate::tty::TtyWriter;
    let _ = ansi::clear_screen(&mut out);
    let _ = ansi::cursor_home(&mut out);

    if let Err(e) = restore_saved() {
        eprintln!("kilo: {e}");
    }

    log::error!("{err}");
    eprintln!("kilo: {err}");
    process::exit(1);
}

// ─── Tests ───────────────────────────────────────────────────────────────────
