//! Shared types module - pure data structures and constants
//!
//! Everything here is plain data with no external dependencies, so the types
//! are usable in any context (board logic, terminal rendering, input mapping)
//! without pulling that context's crates along.
//!
//! # Coordinate System
//!
//! A board cell is addressed by [`Coord`] `(row, col)`:
//!
//! - **row**: 0-indexed, row 0 is the **bottom** row, rows grow upward to
//!   `height - 1`.
//! - **col**: 0-indexed, column 0 is the leftmost, columns grow rightward to
//!   `width - 1`.
//!
//! Gravity moves dots toward row 0: when a cell is cleared, the dot above it
//! falls into the gap, and vacancies collect in the top rows where new dots
//! are created. Presentation layers draw row `height - 1` at the top of the
//! screen so the board reads the same way it is indexed.
//!
//! # Board Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 5 | Columns in a default board |
//! | `DEFAULT_BOARD_HEIGHT` | 5 | Rows in a default board |
//! | `DEFAULT_KINDS` | 5 | Dot kinds in the default palette |
//!
//! All three are configurable per board via [`BoardConfig`] and fixed for the
//! lifetime of a board instance.
//!
//! # Examples
//!
//! ```
//! use tui_dots_types::{BoardConfig, Coord, DotKind};
//!
//! let config = BoardConfig::default();
//! assert_eq!((config.width, config.height, config.kinds), (5, 5, 5));
//! assert_eq!(config.cell_count(), 25);
//!
//! // Orthogonal neighbors only; diagonals never qualify.
//! let at = Coord::new(2, 2);
//! assert!(at.is_orthogonal_neighbor(Coord::new(3, 2)));
//! assert!(at.is_orthogonal_neighbor(Coord::new(2, 1)));
//! assert!(!at.is_orthogonal_neighbor(Coord::new(3, 3)));
//! assert!(!at.is_orthogonal_neighbor(at));
//!
//! let kind = DotKind(3);
//! assert_eq!(kind.index(), 3);
//! ```

/// Default board width in cells (5 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 5;

/// Default board height in cells (5 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 5;

/// Default dot-kind palette size
pub const DEFAULT_KINDS: u8 = 5;

/// A cell coordinate: `(row, col)`, row 0 at the bottom, column 0 at the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// True when `other` is exactly one step away along exactly one axis.
    ///
    /// This is the adjacency half of the selection rule: horizontal or
    /// vertical neighbors qualify, diagonals and the cell itself do not.
    pub fn is_orthogonal_neighbor(self, other: Coord) -> bool {
        let dr = self.row.abs_diff(other.row) as u16;
        let dc = self.col.abs_diff(other.col) as u16;
        dr + dc == 1
    }
}

/// A dot kind: an index into the board's palette.
///
/// Palette size is runtime configuration (any size from 1 up), so kinds are
/// an index newtype rather than an enum. Kinds are assigned uniformly at
/// random when a dot is created and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DotKind(pub u8);

impl DotKind {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Stable identity of a dot, unique within one board.
///
/// Ids are handed out monotonically by the board so that a diff can name
/// removed, moved, and created dots without holding references into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DotId(pub u32);

/// Board construction parameters, fixed for the life of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Columns, at least 1.
    pub width: u8,
    /// Rows, at least 1.
    pub height: u8,
    /// Dot-kind palette size, at least 1.
    pub kinds: u8,
}

impl BoardConfig {
    pub const fn new(width: u8, height: u8, kinds: u8) -> Self {
        Self {
            width,
            height,
            kinds,
        }
    }

    /// Total number of cells on a board of this size.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            kinds: DEFAULT_KINDS,
        }
    }
}

/// Selection events a driver feeds into the game.
///
/// Pointer-down and pointer-move both surface as `Touch` for the entered
/// cell; pointer-up surfaces as `Release`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectEvent {
    /// The pointer entered (or went down on) a cell.
    Touch(Coord),
    /// The pointer was released.
    Release,
}

/// One step of cursor movement on the board.
///
/// `Up` increases the row: the cursor moves toward the top of the screen,
/// away from row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Keyboard-driven game actions.
///
/// The keyboard plays the same gesture as the pointer, split into explicit
/// steps: move the cursor, touch the dot under it, then release or cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Dir),
    /// Select the dot under the cursor.
    Touch,
    /// End the gesture and clear the selection.
    Release,
    /// Abandon the gesture.
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthogonal_neighbors() {
        let at = Coord::new(2, 2);

        assert!(at.is_orthogonal_neighbor(Coord::new(1, 2)));
        assert!(at.is_orthogonal_neighbor(Coord::new(3, 2)));
        assert!(at.is_orthogonal_neighbor(Coord::new(2, 1)));
        assert!(at.is_orthogonal_neighbor(Coord::new(2, 3)));
    }

    #[test]
    fn test_diagonals_and_distant_cells_are_not_neighbors() {
        let at = Coord::new(2, 2);

        assert!(!at.is_orthogonal_neighbor(Coord::new(3, 3)));
        assert!(!at.is_orthogonal_neighbor(Coord::new(1, 1)));
        assert!(!at.is_orthogonal_neighbor(Coord::new(1, 3)));
        assert!(!at.is_orthogonal_neighbor(Coord::new(2, 4)));
        assert!(!at.is_orthogonal_neighbor(Coord::new(0, 2)));
        assert!(!at.is_orthogonal_neighbor(at));
    }

    #[test]
    fn test_neighbor_check_near_coordinate_limits() {
        // abs_diff sums must not overflow at the extremes of the u8 range.
        let a = Coord::new(0, 0);
        let b = Coord::new(255, 255);
        assert!(!a.is_orthogonal_neighbor(b));
        assert!(Coord::new(254, 255).is_orthogonal_neighbor(b));
    }

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.width, DEFAULT_BOARD_WIDTH);
        assert_eq!(config.height, DEFAULT_BOARD_HEIGHT);
        assert_eq!(config.kinds, DEFAULT_KINDS);
        assert_eq!(config.cell_count(), 25);
    }

    #[test]
    fn test_cell_count_does_not_truncate() {
        let config = BoardConfig::new(255, 255, 1);
        assert_eq!(config.cell_count(), 255 * 255);
    }
}
