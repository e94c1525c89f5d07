//! Path module - the in-progress drag selection
//!
//! A `PathSelector` accumulates the ordered chain of coordinates the player
//! is dragging through. It owns no board state; every growth step defers to
//! [`Board::is_valid_extension`](crate::board::Board::is_valid_extension), so
//! the chain is always duplicate-free, single-kinded, and orthogonally
//! connected. Finalizing hands the chain to the caller and leaves the
//! selector empty for the next gesture.

use tui_dots_types::Coord;

use crate::board::Board;

/// Ordered drag selection, empty between gestures.
#[derive(Debug, Clone, Default)]
pub struct PathSelector {
    path: Vec<Coord>,
}

impl PathSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to grow the selection with `candidate`.
    ///
    /// Returns whether the dot was appended. A rejected candidate leaves the
    /// selection exactly as it was; the gesture simply continues from the
    /// current tail.
    pub fn try_extend(&mut self, board: &Board, candidate: Coord) -> bool {
        if !board.is_valid_extension(&self.path, candidate) {
            return false;
        }
        self.path.push(candidate);
        true
    }

    /// End the gesture, taking the accumulated path and resetting to empty.
    pub fn finalize(&mut self) -> Vec<Coord> {
        std::mem::take(&mut self.path)
    }

    /// Abandon the gesture without producing a path.
    pub fn reset(&mut self) {
        self.path.clear();
    }

    /// Coordinates selected so far, in drag order.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether `at` is part of the current selection.
    pub fn contains(&self, at: Coord) -> bool {
        self.path.contains(&at)
    }

    /// The most recently selected coordinate.
    pub fn tail(&self) -> Option<Coord> {
        self.path.last().copied()
    }
}
