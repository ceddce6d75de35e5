// SPDX-License-Identifier: MIT
//
// kilo-term — Terminal engine for kilo.
//
// Raw-mode termios control with guaranteed restoration, a stateless decoder
// for the escape sequences navigation keys arrive as, window geometry with a
// cursor-report fallback, and a frame buffer that reaches the terminal in a
// single write.
//
// Direct terminal control via ANSI escape sequences and raw termios, no TUI
// framework in between.

pub mod ansi;
pub mod error;
pub mod geometry;
pub mod input;
pub mod output;
pub mod terminal;
pub mod tty;

pub use error::{Error, Result};
