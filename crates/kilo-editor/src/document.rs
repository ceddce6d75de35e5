//! Document — the rows of text being displayed.
//!
//! A [`Document`] is an ordered list of [`Row`]s, one per line of the source
//! file, in file order. Rows hold raw bytes: there is no UTF-8 decoding and
//! no notion of characters wider than one byte.
//!
//! # Line endings
//!
//! Any trailing run of `\r` and `\n` is stripped from each line on load, so
//! `\n` and `\r\n` files produce identical rows. The original ending is not
//! remembered; nothing writes the document back out.
//!
//! The document only grows: rows are appended, never inserted or removed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Row
// ---------------------------------------------------------------------------

/// One line of text, without its line ending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    chars: Vec<u8>,
}

impl Row {
    /// Create a row holding a copy of `bytes`, allocated to exactly fit.
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            chars: bytes.to_vec(),
        }
    }

    /// The row's bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// At most `width` bytes from the start of the row.
    #[must_use]
    pub fn truncated(&self, width: usize) -> &[u8] {
        let bytes = self.as_bytes();
        &bytes[..bytes.len().min(width)]
    }
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// An append-only sequence of rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    rows: Vec<Row>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Load a document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file can't be opened and
    /// [`Error::Read`] if reading it fails part way.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut doc = Self::new();
        doc.load(BufReader::new(file)).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded {} rows from {}", doc.len(), path.display());
        Ok(doc)
    }

    /// Append every line of `reader` as a row, stripping line endings.
    ///
    /// Lines are read into one growable buffer that is reused for every
    /// line and dropped at the end.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if a read fails.
    pub fn load(&mut self, mut reader: impl BufRead) -> std::io::Result<()> {
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            self.append_row(strip_line_ending(&line));
        }
        Ok(())
    }

    /// Append a row holding a copy of `bytes`.
    pub fn append_row(&mut self, bytes: &[u8]) {
        self.rows.push(Row::new(bytes));
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the document has no rows at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by 0-indexed number.
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }
}

/// Drop any trailing `\r` and `\n` bytes, in any order and number.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| b != b'\r' && b != b'\n')
        .map_or(0, |i| i + 1);
    &line[..end]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
