//! View — composing a frame from the document and cursor.
//!
//! Every refresh redraws the whole screen into a [`RenderBuffer`] and hands
//! it to the terminal in one write:
//!
//! ```text
//! ESC[?25l ESC[H                 hide cursor, go home
//! row 0 ESC[K \r\n               document rows, truncated to width
//! ~ ESC[K \r\n                   past the end: tilde lines
//! ~      Kilo editor -- ... ESC[K  banner at rows/3 if the document is empty
//! ~ ESC[K                        no \r\n after the last row
//! ESC[<y+1>;<x+1>H               put the cursor back
//! ESC[?25h                       show cursor
//! ```
//!
//! Erasing each line as it is drawn, instead of clearing the screen first,
//! means the terminal never shows a blank screen between frames.

use std::io::{self, Write};

use kilo_term::ansi;
use kilo_term::geometry::Size;
use kilo_term::output::RenderBuffer;

use crate::cursor::Cursor;
use crate::document::Document;

/// Editor version shown in the welcome banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The welcome banner text.
#[must_use]
pub fn banner() -> String {
    format!("Kilo editor -- version {VERSION}")
}

/// Compose one frame and write it to `out` in a single write.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn draw_frame(
    document: &Document,
    cursor: Cursor,
    size: Size,
    out: &mut impl Write,
) -> io::Result<()> {
    compose_frame(document, cursor, size)?.flush_to(out)
}

/// Compose one frame without writing it.
///
/// # Errors
///
/// Only if an ANSI helper fails, which a `RenderBuffer` never does.
pub fn compose_frame(document: &Document, cursor: Cursor, size: Size) -> io::Result<RenderBuffer> {
    let mut frame = RenderBuffer::new();
    ansi::cursor_hide(&mut frame)?;
    ansi::cursor_home(&mut frame)?;
    draw_rows(document, size, &mut frame)?;
    ansi::cursor_to(&mut frame, cursor.x, cursor.y)?;
    ansi::cursor_show(&mut frame)?;
    Ok(frame)
}

/// Draw every screen row: document text, tilde lines, and the banner.
fn draw_rows(document: &Document, size: Size, frame: &mut RenderBuffer) -> io::Result<()> {
    let width = usize::from(size.cols);
    for y in 0..size.rows {
        match document.row(usize::from(y)) {
            Some(row) => frame.append(row.truncated(width)),
            None if document.is_empty() && y == size.rows / 3 => {
                render_banner_line(frame, width);
            }
            None => frame.append(b"~"),
        }
        ansi::erase_line(frame)?;
        if y + 1 < size.rows {
            frame.append(b"\r\n");
        }
    }
    Ok(())
}

/// Render the centered welcome banner, truncated to `width`.
///
/// The left padding starts with a `~` so the banner row still reads as a
/// tilde line.
fn render_banner_line(frame: &mut RenderBuffer, width: usize) {
    let text = banner();
    let shown = &text.as_bytes()[..text.len().min(width)];
    let mut padding = (width - shown.len()) / 2;
    if padding > 0 {
        frame.append(b"~");
        padding -= 1;
    }
    frame.append(&b" ".repeat(padding));
    frame.append(shown);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// Writer that records each `write` call separately.
    #[derive(Default)]
    struct WriteLog {
        writes: Vec<Vec<u8>>,
    }

    impl Write for WriteLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes.push(buf.to_vec());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn frame(document: &Document, cursor: Cursor, size: Size) -> String {
        let bytes = compose_frame(document, cursor, size).unwrap().into_bytes();
        String::from_utf8(bytes).unwrap()
    }

    /// The screen rows of a frame, without the prefix, the erase sequences
    /// and the cursor suffix.
    fn screen_rows(frame: &str) -> Vec<String> {
        let body = frame.strip_prefix("\x1b[?25l\x1b[H").unwrap();
        let end = body.rfind("\x1b[K").unwrap();
        body[..end]
            .split("\x1b[K\r\n")
            .map(str::to_owned)
            .collect()
    }

    fn doc(lines: &[&str]) -> Document {
        let mut d = Document::new();
        for line in lines {
            d.append_row(line.as_bytes());
        }
        d
    }

    // -- Frame envelope -----------------------------------------------------

    #[test]
    fn frame_starts_hidden_and_ends_shown() {
        let f = frame(&Document::new(), Cursor::new(), Size::new(24, 80));
        assert!(f.starts_with("\x1b[?25l\x1b[H"));
        assert!(f.ends_with("\x1b[1;1H\x1b[?25h"));
    }

    #[test]
    fn draw_frame_is_one_write() {
        let mut log = WriteLog::default();
        draw_frame(&doc(&["hello"]), Cursor::new(), Size::new(24, 80), &mut log).unwrap();

        assert_eq!(log.writes.len(), 1);
        assert!(log.writes[0].starts_with(b"\x1b[?25l"));
        assert!(log.writes[0].ends_with(b"\x1b[?25h"));
    }

    #[test]
    fn cursor_is_one_indexed_row_then_column() {
        let size = Size::new(24, 80);
        let f = frame(&Document::new(), Cursor::at(4, 9, size), size);
        assert!(f.ends_with("\x1b[10;5H\x1b[?25h"));
    }

    // -- Rows ---------------------------------------------------------------

    #[test]
    fn every_row_is_erased_and_only_inner_rows_break() {
        let f = frame(&doc(&["a", "b"]), Cursor::new(), Size::new(3, 10));
        assert_eq!(
            f,
            "\x1b[?25l\x1b[Ha\x1b[K\r\nb\x1b[K\r\n~\x1b[K\x1b[1;1H\x1b[?25h"
        );
    }

    #[test]
    fn rows_are_truncated_to_width() {
        let f = frame(&doc(&["abcdefghij"]), Cursor::new(), Size::new(2, 4));
        assert_eq!(screen_rows(&f), vec!["abcd", "~"]);
    }

    #[test]
    fn rows_beyond_screen_are_not_drawn() {
        let lines: Vec<String> = (0..10).map(|i| format!("line {i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let f = frame(&doc(&refs), Cursor::new(), Size::new(3, 80));
        assert_eq!(screen_rows(&f), vec!["line 0", "line 1", "line 2"]);
    }

    #[test]
    fn tildes_after_document() {
        let f = frame(&doc(&["only"]), Cursor::new(), Size::new(4, 80));
        assert_eq!(screen_rows(&f), vec!["only", "~", "~", "~"]);
    }

    #[test]
    fn no_banner_when_document_has_rows() {
        let f = frame(&doc(&["x"]), Cursor::new(), Size::new(24, 80));
        assert!(!f.contains("Kilo editor"));
    }

    // -- Banner -------------------------------------------------------------

    #[test]
    fn banner_on_third_row_of_empty_document() {
        let f = frame(&Document::new(), Cursor::new(), Size::new(24, 80));
        let rows = screen_rows(&f);
        assert_eq!(rows.len(), 24);
        for (y, row) in rows.iter().enumerate() {
            if y == 8 {
                assert!(row.contains("Kilo editor -- version"), "row {y}: {row:?}");
            } else {
                assert_eq!(row, "~", "row {y}");
            }
        }
    }

    #[test]
    fn banner_is_centered_with_leading_tilde() {
        let text = banner();
        let f = frame(&Document::new(), Cursor::new(), Size::new(3, 80));
        let row = &screen_rows(&f)[1];
        let padding = (80 - text.len()) / 2;
        let expected = format!("~{}{text}", " ".repeat(padding - 1));
        assert_eq!(row, &expected);
    }

    #[test]
    fn banner_truncated_to_narrow_screen() {
        let f = frame(&Document::new(), Cursor::new(), Size::new(3, 10));
        let row = &screen_rows(&f)[1];
        assert_eq!(row, "Kilo edito");
    }

    #[test]
    fn banner_with_one_cell_of_slack_has_no_tilde() {
        let width = u16::try_from(banner().len() + 1).unwrap();
        let f = frame(&Document::new(), Cursor::new(), Size::new(3, width));
        assert_eq!(screen_rows(&f)[1], banner());
    }

    #[test]
    fn banner_version_is_crate_version() {
        assert_eq!(banner(), format!("Kilo editor -- version {}", env!("CARGO_PKG_VERSION")));
    }

    // -- Properties ---------------------------------------------------------

    proptest! {
        #[test]
        fn frame_shape_holds_for_any_document(
            lines in proptest::collection::vec("[a-z ]{0,120}", 0..40),
            rows in 1u16..60,
            cols in 1u16..160,
        ) {
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let size = Size::new(rows, cols);
            let f = frame(&doc(&refs), Cursor::new(), size);

            prop_assert!(f.starts_with("\x1b[?25l\x1b[H"));
            prop_assert!(f.ends_with("\x1b[?25h"));
            prop_assert_eq!(f.matches("\x1b[K").count(), usize::from(rows));
            prop_assert_eq!(f.matches("\r\n").count(), usize::from(rows) - 1);
            for row in screen_rows(&f) {
                prop_assert!(row.len() <= usize::from(cols));
            }
        }
    }
}
