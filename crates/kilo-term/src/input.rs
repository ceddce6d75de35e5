// SPDX-License-Identifier: MIT
//
// Terminal key decoder.
//
// Turns raw stdin bytes into logical keys. Everything that is not ESC is
// passed through unchanged as a literal byte, control characters included.
// ESC starts a short escape sequence that is matched against a fixed table:
//
//   ESC [ A/B/C/D       arrows            ESC [ 1~ / 7~   Home
//   ESC [ H, ESC O H    Home              ESC [ 3~        Delete
//   ESC [ F, ESC O F    End               ESC [ 4~ / 8~   End
//   ESC [ 5~            Page Up           ESC [ 6~        Page Down
//
// Anything else collapses to a bare Escape.
//
// # Design
//
// The matcher is a finite-state machine whose transition function
// (`Decoder::advance`) is pure: it takes a state and a byte and returns the
// next state or a finished key. `read_key` drives it with one short read per
// byte. No state survives between calls: each call either resolves a full
// sequence or times out to Escape. A read that comes back empty (the 100 ms
// raw-mode timeout) or fails mid-sequence is not an error, it is the end of
// the sequence.

use std::io::{self, Read};

use crate::error::{Error, Result};

/// The escape byte (0x1B).
pub const ESC: u8 = 0x1B;

/// The key that ends the session: Ctrl+Q.
pub const QUIT: Key = Key::ctrl(b'q');

// ─── Key ────────────────────────────────────────────────────────────────────

/// A decoded key.
///
/// Literal bytes keep their raw value; named keys come from escape
/// sequences. The set is closed: unknown sequences become [`Key::Escape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Any byte other than ESC, exactly as read (control bytes included).
    Byte(u8),
    /// A bare ESC, or an escape sequence we don't recognize.
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Delete,
    PageUp,
    PageDown,
}

impl Key {
    /// The key produced by holding Ctrl with `c`.
    ///
    /// The terminal clears the top three bits: Ctrl+Q is 0x11.
    #[must_use]
    pub const fn ctrl(c: u8) -> Self {
        Self::Byte(c & 0x1f)
    }
}

// ─── Decoder ────────────────────────────────────────────────────────────────

/// Position inside an escape sequence, after the leading ESC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    /// Just saw ESC.
    Escape,
    /// Saw ESC followed by something other than `[` or `O`. One more byte
    /// is consumed before giving up, so the tail of an unknown two-byte
    /// sequence doesn't leak out as a literal key.
    Unknown,
    /// Saw `ESC [`.
    Csi,
    /// Saw `ESC [ <digit>`, waiting for `~`.
    CsiDigit(u8),
    /// Saw `ESC O`.
    Ss3,
}

/// Outcome of feeding one byte to the [`Decoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// More bytes are needed.
    Pending(Decoder),
    /// The sequence is resolved.
    Done(Key),
}

impl Decoder {
    /// Advance the matcher by one byte.
    #[must_use]
    pub const fn advance(self, byte: u8) -> Step {
        match self {
            Self::Escape => match byte {
                b'[' => Step::Pending(Self::Csi),
                b'O' => Step::Pending(Self::Ss3),
                _ => Step::Pending(Self::Unknown),
            },
            Self::Unknown => Step::Done(Key::Escape),
            Self::Csi => match byte {
                b'0'..=b'9' => Step::Pending(Self::CsiDigit(byte)),
                b'A' => Step::Done(Key::ArrowUp),
                b'B' => Step::Done(Key::ArrowDown),
                b'C' => Step::Done(Key::ArrowRight),
                b'D' => Step::Done(Key::ArrowLeft),
                b'H' => Step::Done(Key::Home),
                b'F' => Step::Done(Key::End),
                _ => Step::Done(Key::Escape),
            },
            Self::CsiDigit(digit) => {
                if byte != b'~' {
                    return Step::Done(Key::Escape);
                }
                Step::Done(match digit {
                    b'1' | b'7' => Key::Home,
                    b'3' => Key::Delete,
                    b'4' | b'8' => Key::End,
                    b'5' => Key::PageUp,
                    b'6' => Key::PageDown,
                    _ => Key::Escape,
                })
            }
            Self::Ss3 => Step::Done(match byte {
                b'H' => Key::Home,
                b'F' => Key::End,
                _ => Key::Escape,
            }),
        }
    }
}

// ─── Reading ────────────────────────────────────────────────────────────────

/// Reads keys from a byte source, one key per call.
///
/// Generic over [`Read`] so tests can feed it byte slices; the editor wraps
/// [`TtyReader`](crate::tty::TtyReader).
#[derive(Debug)]
pub struct KeyReader<R> {
    input: R,
}

impl<R: Read> KeyReader<R> {
    /// Wrap a byte source.
    pub const fn new(input: R) -> Self {
        Self { input }
    }

    /// Block until a key is available and return it.
    ///
    /// Zero-byte reads (the raw-mode timeout), `EAGAIN` and `EINTR` are
    /// retried. Once the first byte is in, the rest of an escape sequence
    /// is read with single short reads and never waits past the timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the first read fails for any other reason.
    pub fn read_key(&mut self) -> Result<Key> {
        let first = loop {
            let mut byte = [0u8; 1];
            match self.input.read(&mut byte) {
                Ok(1) => break byte[0],
                Ok(_) => {}
                Err(e)
                    if matches!(
                        e.kind(),
                        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
                    ) => {}
                Err(e) => return Err(Error::Read(e)),
            }
        };

        let key = if first == ESC {
            finish_escape(|| read_byte(&mut self.input))
        } else {
            Key::Byte(first)
        };
        log::trace!("key {key:?}");
        Ok(key)
    }
}

/// Drive the matcher from just after ESC. `next` yields `None` when a read
/// times out or fails, which resolves the sequence to Escape.
fn finish_escape(mut next: impl FnMut() -> Option<u8>) -> Key {
    let mut state = Decoder::Escape;
    loop {
        let Some(byte) = next() else {
            return Key::Escape;
        };
        match state.advance(byte) {
            Step::Pending(s) => state = s,
            Step::Done(key) => return key,
        }
    }
}

/// One short read of a single byte. Timeouts and errors both yield `None`.
fn read_byte(input: &mut impl Read) -> Option<u8> {
    let mut byte = [0u8; 1];
    match input.read(&mut byte) {
        Ok(1) => Some(byte[0]),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
