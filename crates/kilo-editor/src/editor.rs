//! Editor — the state the main loop threads through every step.
//!
//! One [`Editor`] owns the cursor, the window size and the document. The
//! loop around it is:
//!
//! ```text
//! loop {
//!     editor.refresh(&mut out)?;          // one frame, one write
//!     let key = keys.read_key()?;         // blocks, 100 ms ticks
//!     if editor.apply(key) == Action::Quit { break }
//! }
//! editor::clear_screen_on_exit(&mut out)?;
//! ```
//!
//! There is a single interactive state. Arrows step the cursor, Home/End
//! jump to the edges of the line, Page Up/Down repeat the vertical arrow
//! once per screen row, Ctrl+Q quits, and every other key is ignored.

use std::io::Write;

use kilo_term::ansi;
use kilo_term::geometry::Size;
use kilo_term::input::{self, Key};

use crate::cursor::{Cursor, Direction};
use crate::document::Document;
use crate::error::Result;
use crate::view;

/// What the loop should do after a key has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep going.
    Continue,
    /// Leave the loop and exit cleanly.
    Quit,
}

/// Editor state: cursor, window size, and document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    cursor: Cursor,
    size: Size,
    document: Document,
}

impl Editor {
    /// Create an editor for a window of `size` showing `document`.
    #[must_use]
    pub const fn new(size: Size, document: Document) -> Self {
        Self {
            cursor: Cursor::new(),
            size,
            document,
        }
    }

    /// Current cursor position.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Draw the current state as one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn refresh(&self, out: &mut impl Write) -> Result<()> {
        view::draw_frame(&self.document, self.cursor, self.size, out)?;
        Ok(())
    }

    /// Apply one key.
    pub fn apply(&mut self, key: Key) -> Action {
        match key {
            input::QUIT => return Action::Quit,
            Key::ArrowUp => self.cursor.step(Direction::Up, self.size),
            Key::ArrowDown => self.cursor.step(Direction::Down, self.size),
            Key::ArrowLeft => self.cursor.step(Direction::Left, self.size),
            Key::ArrowRight => self.cursor.step(Direction::Right, self.size),
            Key::Home => self.cursor.line_start(),
            Key::End => self.cursor.line_end(self.size),
            Key::PageUp => self.repeat(Direction::Up),
            Key::PageDown => self.repeat(Direction::Down),
            Key::Byte(_) | Key::Escape | Key::Delete => {}
        }
        Action::Continue
    }

    /// Step once per screen row in `dir`.
    fn repeat(&mut self, dir: Direction) {
        for _ in 0..self.size.rows {
            self.cursor.step(dir, self.size);
        }
    }
}

/// Clear the screen and home the cursor before exiting.
///
/// Two separate writes, not a frame: nothing else will be drawn.
///
/// # Errors
///
/// Returns an error if either write fails.
pub fn clear_screen_on_exit(out: &mut impl Write) -> Result<()> {
    ansi::clear_screen(out)?;
    ansi::cursor_home(out)?;
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
