//! Game module - board plus selection, driven by touch gestures
//!
//! `GameState` is the seam the driver talks to: it owns the [`Board`] and the
//! [`PathSelector`] and turns raw select events into the touch/drag/release
//! cycle. Touching extends the selection when the selection rules allow it,
//! releasing either clears the board (two or more dots) or quietly drops the
//! selection (fewer), and cancelling abandons a gesture midway.

use tui_dots_types::{BoardConfig, Coord, SelectEvent};

use crate::board::Board;
use crate::diff::BoardDiff;
use crate::path::PathSelector;

/// What a release gesture did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The selection reached two or more dots: they were removed, the
    /// columns above them shifted down, and the vacancies were refilled.
    Cleared(BoardDiff),
    /// Zero or one dot selected; the board is untouched.
    TooShort,
}

/// Live game: the board and the gesture in progress.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    selector: PathSelector,
}

impl GameState {
    /// Start a game on a freshly populated board.
    pub fn new(config: BoardConfig, seed: u32) -> Self {
        Self::from_board(Board::new(config, seed))
    }

    /// Wrap an existing board, with no selection in progress.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            selector: PathSelector::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selector(&self) -> &PathSelector {
        &self.selector
    }

    /// Feed one select event through the gesture cycle.
    ///
    /// Touches never produce an outcome; a release always does.
    pub fn handle(&mut self, event: SelectEvent) -> Option<ReleaseOutcome> {
        match event {
            SelectEvent::Touch(at) => {
                self.touch(at);
                None
            }
            SelectEvent::Release => Some(self.release()),
        }
    }

    /// Touch the dot at `at`, extending the selection when the rules allow.
    ///
    /// Returns whether the selection grew. Re-touching the current tail or
    /// dragging across an invalid cell is expected during a gesture and
    /// simply reports `false`.
    ///
    /// # Panics
    ///
    /// If `at` is outside the board; callers map screen positions to board
    /// coordinates before reporting a touch.
    pub fn touch(&mut self, at: Coord) -> bool {
        self.selector.try_extend(&self.board, at)
    }

    /// End the gesture and apply the selection to the board.
    pub fn release(&mut self) -> ReleaseOutcome {
        let path = self.selector.finalize();
        if path.len() <= 1 {
            return ReleaseOutcome::TooShort;
        }
        ReleaseOutcome::Cleared(self.board.clear_and_refill(&path))
    }

    /// Abandon the gesture without touching the board.
    pub fn cancel(&mut self) {
        self.selector.reset();
    }
}
