//! Board module - the dots grid and its clear/shift/refill cycle
//!
//! The grid is a flat row-major array of optional dots. Coordinates follow
//! `(row, col)` with row 0 at the bottom; clearing a cell lets the dots above
//! it fall one row per cleared cell in their column, and the vacancies that
//! collect in the top rows are refilled with fresh dots. Every mutation keeps
//! the bidirectional invariant: the slot at `(r, c)` holds a dot whose own
//! coordinate is `(r, c)`, and no dot occupies two slots.
//!
//! All inputs come from a trusted driver, so contract violations (creating a
//! dot on an occupied cell, querying a coordinate off the board, clearing a
//! path with an empty cell) panic instead of surfacing as recoverable errors.

use tui_dots_types::{BoardConfig, Coord, DotId, DotKind};

use crate::diff::{BoardDiff, MovedDot};
use crate::rng::SimpleRng;

/// A single dot on the board.
///
/// Kind and id are fixed at creation; the coordinate changes only when the
/// board shifts the dot into a vacated cell. `Dot` values handed out by the
/// board are snapshots - the board owns the live copy in its grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    id: DotId,
    kind: DotKind,
    coord: Coord,
}

impl Dot {
    pub fn id(&self) -> DotId {
        self.id
    }

    pub fn kind(&self) -> DotKind {
        self.kind
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }
}

/// The dots board: a `width x height` grid, fully populated while at rest.
#[derive(Debug, Clone)]
pub struct Board {
    width: u8,
    height: u8,
    kinds: u8,
    /// Flat row-major storage (row * width + col).
    cells: Vec<Option<Dot>>,
    rng: SimpleRng,
    next_id: u32,
}

impl Board {
    /// Create a fully populated board: an empty grid of the configured size
    /// with a randomly kinded dot in every cell.
    ///
    /// The board is ready for selection queries as soon as this returns;
    /// there is no separate setup step.
    ///
    /// # Panics
    ///
    /// If any configured dimension or the palette size is zero.
    pub fn new(config: BoardConfig, seed: u32) -> Self {
        assert!(
            config.width >= 1 && config.height >= 1,
            "board dimensions must be at least 1x1"
        );
        assert!(config.kinds >= 1, "palette must hold at least one kind");

        let mut board = Self {
            width: config.width,
            height: config.height,
            kinds: config.kinds,
            cells: vec![None; config.cell_count()],
            rng: SimpleRng::new(seed),
            next_id: 0,
        };
        for row in 0..board.height {
            for col in 0..board.width {
                board.create_dot(Coord::new(row, col));
            }
        }
        board
    }

    /// Build a board from digit rows, for tests, fixtures, and benches.
    ///
    /// `rows[0]` is the top row (row `height - 1`) and the last entry is
    /// row 0, so a literal reads the way the board renders. Each character
    /// is a kind digit in `0..kinds`. The seed only drives dots created by
    /// later refills.
    ///
    /// # Panics
    ///
    /// On empty or ragged rows, dimensions beyond 255, non-digit characters,
    /// or digits outside the palette.
    pub fn from_rows(rows: &[&str], kinds: u8, seed: u32) -> Self {
        assert!(!rows.is_empty(), "from_rows needs at least one row");
        let height = rows.len();
        let width = rows[0].chars().count();
        assert!(width >= 1, "from_rows needs at least one column");
        assert!(
            width <= u8::MAX as usize && height <= u8::MAX as usize,
            "board dimensions exceed the u8 coordinate range"
        );

        let mut board = Self {
            width: width as u8,
            height: height as u8,
            kinds,
            cells: vec![None; width * height],
            rng: SimpleRng::new(seed),
            next_id: 0,
        };
        for (i, line) in rows.iter().enumerate() {
            assert_eq!(
                line.chars().count(),
                width,
                "ragged row {} in from_rows layout",
                i
            );
            let row = (height - 1 - i) as u8;
            for (col, ch) in line.chars().enumerate() {
                let kind = match ch.to_digit(10) {
                    Some(d) if (d as u8) < kinds => DotKind(d as u8),
                    _ => panic!("invalid kind digit {:?} for a palette of {}", ch, kinds),
                };
                let at = Coord::new(row, col as u8);
                let idx = board.flat(at);
                board.cells[idx] = Some(Dot {
                    id: DotId(board.next_id),
                    kind,
                    coord: at,
                });
                board.next_id += 1;
            }
        }
        board
    }

    /// Flat index for an in-bounds coordinate.
    #[inline(always)]
    fn flat(&self, at: Coord) -> usize {
        debug_assert!(at.row < self.height && at.col < self.width);
        (at.row as usize) * (self.width as usize) + (at.col as usize)
    }

    /// Flat index for a coordinate, `None` when off the board.
    #[inline(always)]
    fn index(&self, at: Coord) -> Option<usize> {
        if at.row >= self.height || at.col >= self.width {
            return None;
        }
        Some(self.flat(at))
    }

    /// Board width in columns.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Board height in rows.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Palette size dots are drawn from.
    pub fn kinds(&self) -> u8 {
        self.kinds
    }

    /// The configuration this board was built with.
    pub fn config(&self) -> BoardConfig {
        BoardConfig::new(self.width, self.height, self.kinds)
    }

    /// Dot at `at`, `None` when the coordinate is off the board or the cell
    /// is empty.
    pub fn get(&self, at: Coord) -> Option<&Dot> {
        let idx = self.index(at)?;
        self.cells[idx].as_ref()
    }

    /// Dot at `at`.
    ///
    /// # Panics
    ///
    /// If `at` is off the board or the cell is empty. The driver only ever
    /// reports cells that exist, so either case is a broken invariant.
    pub fn dot_at(&self, at: Coord) -> &Dot {
        match self.get(at) {
            Some(dot) => dot,
            None => panic!(
                "no dot at {:?} on a {}x{} board",
                at, self.width, self.height
            ),
        }
    }

    /// Flat row-major view of the grid.
    pub fn cells(&self) -> &[Option<Dot>] {
        &self.cells
    }

    /// Create a dot with a uniformly drawn kind at `at` and insert it.
    ///
    /// Returns a snapshot of the inserted dot.
    ///
    /// # Panics
    ///
    /// If `at` is off the board or the cell is already occupied; both are
    /// programming errors, not runtime conditions to recover from.
    pub fn create_dot(&mut self, at: Coord) -> Dot {
        let idx = match self.index(at) {
            Some(idx) => idx,
            None => panic!(
                "create_dot at {:?} outside the {}x{} board",
                at, self.width, self.height
            ),
        };
        assert!(
            self.cells[idx].is_none(),
            "create_dot at {:?}: cell already occupied",
            at
        );

        let kind = DotKind(self.rng.next_range(self.kinds as u32) as u8);
        let dot = Dot {
            id: DotId(self.next_id),
            kind,
            coord: at,
        };
        self.next_id += 1;
        self.cells[idx] = Some(dot);
        dot
    }

    /// Selection-rule query: may `candidate` extend `path`?
    ///
    /// True when the path is empty (any first dot is valid), or when the
    /// candidate is a cell not already in the path, of the same kind as the
    /// path tail, exactly one step from the tail along exactly one axis.
    /// Pure: neither the board nor the path changes.
    ///
    /// # Panics
    ///
    /// If `candidate` or the path tail has no dot.
    pub fn is_valid_extension(&self, path: &[Coord], candidate: Coord) -> bool {
        let candidate_kind = self.dot_at(candidate).kind();
        let tail = match path.last() {
            Some(&tail) => tail,
            None => return true,
        };
        if path.contains(&candidate) {
            return false;
        }
        self.dot_at(tail).kind() == candidate_kind && tail.is_orthogonal_neighbor(candidate)
    }

    /// Clear a finalized path, let the dots above each gap fall, and refill.
    ///
    /// Paths of length 0 or 1 never clear: the grid is untouched and the
    /// returned diff is empty. For longer paths, cleared cells are processed
    /// from the highest row down; each one empties its cell and then sweeps
    /// its column upward from the gap, moving every non-path dot one row
    /// down (an already-empty cell is skipped and the sweep continues).
    /// Processing top-down means a sweep never crosses a path dot that is
    /// still waiting for its own removal. Once all path dots are gone, every
    /// remaining vacancy is refilled in row-major order.
    ///
    /// The diff reports each removed dot at the coordinate it was cleared
    /// from, one move per shifted dot with unit steps coalesced into a
    /// single `(from, to)` pair, and each created dot at its birth cell.
    ///
    /// # Panics
    ///
    /// If any path coordinate is off the board or references an empty cell.
    pub fn clear_and_refill(&mut self, path: &[Coord]) -> BoardDiff {
        let mut diff = BoardDiff::default();
        if path.len() <= 1 {
            return diff;
        }

        // Resolve the path up front: ids are the membership test during the
        // sweeps, because coordinates go stale as soon as dots start moving.
        let mut cleared: Vec<Dot> = path.iter().map(|&at| *self.dot_at(at)).collect();
        cleared.sort_by(|a, b| b.coord.row.cmp(&a.coord.row));
        let path_ids: Vec<DotId> = cleared.iter().map(|dot| dot.id).collect();

        for dot in &cleared {
            let gap = dot.coord;
            let gap_idx = self.flat(gap);
            self.cells[gap_idx] = None;
            diff.removed.push(*dot);

            // Sweep the column above the gap; every non-path dot falls one
            // row into the space opened beneath it.
            for row in gap.row + 1..self.height {
                let here = Coord::new(row, gap.col);
                let here_idx = self.flat(here);
                let occupant = match self.cells[here_idx] {
                    Some(dot) if !path_ids.contains(&dot.id) => dot,
                    _ => continue,
                };

                let below = Coord::new(row - 1, gap.col);
                let below_idx = self.flat(below);
                debug_assert!(self.cells[below_idx].is_none());

                let mut fallen = occupant;
                fallen.coord = below;
                self.cells[here_idx] = None;
                self.cells[below_idx] = Some(fallen);
                record_move(&mut diff.moved, occupant, below);
            }
        }

        // Refill every remaining vacancy, row-major.
        for row in 0..self.height {
            for col in 0..self.width {
                let at = Coord::new(row, col);
                if self.get(at).is_none() {
                    let dot = self.create_dot(at);
                    diff.created.push(dot);
                }
            }
        }

        diff
    }
}

/// Fold one unit step into the move list, keyed by dot id.
fn record_move(moves: &mut Vec<MovedDot>, dot: Dot, to: Coord) {
    if let Some(entry) = moves.iter_mut().find(|entry| entry.id == dot.id) {
        entry.to = to;
    } else {
        moves.push(MovedDot {
            id: dot.id,
            kind: dot.kind,
            from: dot.coord,
            to,
        });
    }
}
