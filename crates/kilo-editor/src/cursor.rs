//! Cursor — a position on the screen, clamped to the viewport.
//!
//! The cursor lives in viewport coordinates, not document coordinates: `(x,
//! y)` is a screen cell, and moving it never scrolls. It is not tied to any
//! row of the document, so it can sit below the last row or past the end of
//! a short line.
//!
//! Every movement clamps to `[0, cols-1] × [0, rows-1]`. Pushing against an
//! edge is a no-op.

use kilo_term::geometry::Size;

/// One-cell movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A cursor in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Column, 0-indexed.
    pub x: u16,
    /// Row, 0-indexed.
    pub y: u16,
}

impl Cursor {
    /// Create a cursor at the top-left cell.
    #[must_use]
    pub const fn new() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Create a cursor at `(x, y)`, clamped to `size`.
    #[must_use]
    pub fn at(x: u16, y: u16, size: Size) -> Self {
        Self {
            x: x.min(last(size.cols)),
            y: y.min(last(size.rows)),
        }
    }

    /// Move one cell in `dir`, staying inside `size`.
    pub const fn step(&mut self, dir: Direction, size: Size) {
        match dir {
            Direction::Left => {
                if self.x > 0 {
                    self.x -= 1;
                }
            }
            Direction::Right => {
                if self.x < last(size.cols) {
                    self.x += 1;
                }
            }
            Direction::Up => {
                if self.y > 0 {
                    self.y -= 1;
                }
            }
            Direction::Down => {
                if self.y < last(size.rows) {
                    self.y += 1;
                }
            }
        }
    }

    /// Move to the first column.
    pub const fn line_start(&mut self) {
        self.x = 0;
    }

    /// Move to the last column.
    pub const fn line_end(&mut self, size: Size) {
        self.x = last(size.cols);
    }
}

/// The last valid 0-indexed cell along an axis of `extent` cells.
const fn last(extent: u16) -> u16 {
    extent.saturating_sub(1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SIZE: Size = Size { cols: 80, rows: 24 };

    fn moved(mut cursor: Cursor, dir: Direction, times: usize) -> Cursor {
        for _ in 0..times {
            cursor.step(dir, SIZE);
        }
        cursor
    }

    // -- Single steps -------------------------------------------------------

    #[test]
    fn new_is_origin() {
        assert_eq!(Cursor::new(), Cursor { x: 0, y: 0 });
    }

    #[test]
    fn steps_move_one_cell() {
        let c = Cursor::at(5, 5, SIZE);
        assert_eq!(moved(c, Direction::Left, 1), Cursor { x: 4, y: 5 });
        assert_eq!(moved(c, Direction::Right, 1), Cursor { x: 6, y: 5 });
        assert_eq!(moved(c, Direction::Up, 1), Cursor { x: 5, y: 4 });
        assert_eq!(moved(c, Direction::Down, 1), Cursor { x: 5, y: 6 });
    }

    // -- Boundaries ---------------------------------------------------------

    #[test]
    fn left_at_column_zero_stays() {
        assert_eq!(moved(Cursor::new(), Direction::Left, 10).x, 0);
    }

    #[test]
    fn up_at_row_zero_stays() {
        assert_eq!(moved(Cursor::new(), Direction::Up, 10).y, 0);
    }

    #[test]
    fn right_at_last_column_stays() {
        let c = Cursor::at(79, 0, SIZE);
        assert_eq!(moved(c, Direction::Right, 10).x, 79);
    }

    #[test]
    fn down_at_last_row_stays() {
        let c = Cursor::at(0, 23, SIZE);
        assert_eq!(moved(c, Direction::Down, 10).y, 23);
    }

    #[test]
    fn one_by_one_viewport_never_moves() {
        let size = Size { cols: 1, rows: 1 };
        let mut c = Cursor::new();
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            c.step(dir, size);
            assert_eq!(c, Cursor::new());
        }
    }

    #[test]
    fn at_clamps() {
        assert_eq!(Cursor::at(500, 500, SIZE), Cursor { x: 79, y: 23 });
    }

    // -- Line start / end ---------------------------------------------------

    #[test]
    fn line_start_and_end() {
        let mut c = Cursor::at(40, 10, SIZE);
        c.line_end(SIZE);
        assert_eq!(c, Cursor { x: 79, y: 10 });
        c.line_start();
        assert_eq!(c, Cursor { x: 0, y: 10 });
    }

    // -- Invariant ----------------------------------------------------------

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn cursor_stays_in_viewport(
            cols in 1u16..200,
            rows in 1u16..100,
            dirs in proptest::collection::vec(direction(), 0..400),
        ) {
            let size = Size { cols, rows };
            let mut c = Cursor::new();
            for dir in dirs {
                c.step(dir, size);
                prop_assert!(c.x < cols);
                prop_assert!(c.y < rows);
            }
        }
    }
}
