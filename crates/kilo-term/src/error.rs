// SPDX-License-Identifier: MIT
//
// Error types for terminal operations.
//
// Every variant here is fatal to the editor: the binary routes them to
// `terminal::die`, which restores the terminal and exits with status 1.
// Short reads while decoding keys are not errors and never show up here.

use std::io;

use thiserror::Error;

/// Terminal error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Querying or applying termios attributes failed.
    ///
    /// `op` names the failing call (`tcgetattr` / `tcsetattr`) so the
    /// diagnostic reads like the classic `perror` output.
    #[error("{op}: {source}")]
    Attributes {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    /// Reading a key from the terminal failed with a real error
    /// (not a timeout, not `EAGAIN`).
    #[error("read: {0}")]
    Read(#[source] io::Error),

    /// Neither `TIOCGWINSZ` nor the cursor-position probe produced a size.
    #[error("getWindowSize: {0}")]
    WindowSize(&'static str),

    /// Any other terminal I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for terminal operations.
pub type Result<T> = std::result::Result<T, Error>;
