//! Board cursor for keyboard play.
//!
//! The cursor is the keyboard's stand-in for a pointer: it marks one board
//! cell, starts at the bottom-left, and moves one cell at a time. Steps that
//! would leave the board are ignored rather than wrapped, so holding a key at
//! an edge parks the cursor there.

use crate::types::{BoardConfig, Coord, Dir};

/// One highlighted board cell, always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    at: Coord,
}

impl Cursor {
    /// Start at the bottom-left cell.
    pub fn new() -> Self {
        Self {
            at: Coord::new(0, 0),
        }
    }

    /// The cell the cursor marks.
    pub fn at(&self) -> Coord {
        self.at
    }

    /// Place the cursor directly, when the pointer takes over.
    pub fn jump(&mut self, at: Coord) {
        self.at = at;
    }

    /// Step one cell in `dir`, clamped to the board edges.
    ///
    /// Returns whether the cursor moved. `Up` increases the row, matching
    /// the board's bottom-up row order.
    pub fn step(&mut self, dir: Dir, config: BoardConfig) -> bool {
        let Coord { row, col } = self.at;
        let next = match dir {
            Dir::Up if row + 1 < config.height => Coord::new(row + 1, col),
            Dir::Down if row > 0 => Coord::new(row - 1, col),
            Dir::Left if col > 0 => Coord::new(row, col - 1),
            Dir::Right if col + 1 < config.width => Coord::new(row, col + 1),
            _ => return false,
        };
        self.at = next;
        true
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
