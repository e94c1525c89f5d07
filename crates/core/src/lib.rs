//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the dots rule set: grid state, selection rules, and
//! the clear/shift/refill cycle. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed and gestures produce identical boards
//! - **Testable**: Every rule is exercised without a TTY
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: Dot grid with selection queries and the clear/shift/refill cycle
//! - [`path`]: The ordered drag selection built up during a gesture
//! - [`game`]: Board plus selection behind one event-driven seam
//! - [`diff`]: Per-clear change report for renderers
//! - [`rng`]: Deterministic generator that kinds every dot
//!
//! # Game Rules
//!
//! - **Connected paths**: A selection grows one dot at a time; each new dot
//!   must share its kind with the path and sit exactly one cell up, down,
//!   left, or right of the previous one, and no dot may repeat
//! - **Release**: Two or more selected dots are cleared together; a shorter
//!   selection is dropped without touching the board
//! - **Gravity**: Dots above a cleared cell fall one row per cleared cell
//!   beneath them in their column
//! - **Refill**: Every vacancy left after the fall is filled with a fresh
//!   randomly kinded dot
//!
//! # Example
//!
//! ```
//! use tui_dots_core::{GameState, ReleaseOutcome};
//! use tui_dots_core::types::{BoardConfig, Coord};
//!
//! let mut game = GameState::new(BoardConfig::default(), 12345);
//! game.touch(Coord::new(0, 0));
//!
//! // A single selected dot never clears.
//! assert_eq!(game.release(), ReleaseOutcome::TooShort);
//! ```

pub mod board;
pub mod diff;
pub mod game;
pub mod path;
pub mod rng;

pub use tui_dots_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Dot};
pub use diff::{BoardDiff, MovedDot};
pub use game::{GameState, ReleaseOutcome};
pub use path::PathSelector;
pub use rng::SimpleRng;
