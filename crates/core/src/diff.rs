//! Board diff module - the report a clear-and-refill cycle hands back
//!
//! The board never schedules presentation work. Everything a renderer needs
//! to animate one cycle (which dots vanished, which fell where, which are
//! new) is captured in a [`BoardDiff`] snapshot returned synchronously.

use tui_dots_types::{Coord, DotId, DotKind};

use crate::board::Dot;

/// One dot's total displacement within a single clear-and-refill cycle.
///
/// `from` is the dot's coordinate before the cycle and `to` its final
/// coordinate: a dot that fell past several cleared cells in its column
/// still appears exactly once, with the unit steps coalesced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovedDot {
    pub id: DotId,
    pub kind: DotKind,
    pub from: Coord,
    pub to: Coord,
}

/// Everything one `clear_and_refill` call changed.
///
/// `removed` dots carry the coordinate they were cleared from, `created`
/// dots the coordinate they were born into. The three lists are disjoint by
/// id: a dot is removed, moved, or created, never two of those.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardDiff {
    pub removed: Vec<Dot>,
    pub moved: Vec<MovedDot>,
    pub created: Vec<Dot>,
}

impl BoardDiff {
    /// True when the cycle changed nothing (short paths clear nothing).
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.moved.is_empty() && self.created.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_diff_is_empty() {
        let diff = BoardDiff::default();
        assert!(diff.is_empty());
        assert_eq!(diff.removed.len(), 0);
        assert_eq!(diff.moved.len(), 0);
        assert_eq!(diff.created.len(), 0);
    }

    #[test]
    fn test_diff_with_a_move_is_not_empty() {
        let diff = BoardDiff {
            removed: Vec::new(),
            moved: vec![MovedDot {
                id: DotId(4),
                kind: DotKind(0),
                from: Coord::new(2, 1),
                to: Coord::new(1, 1),
            }],
            created: Vec::new(),
        };
        assert!(!diff.is_empty());
    }

    #[test]
    fn test_diffs_compare_by_contents() {
        let step = MovedDot {
            id: DotId(4),
            kind: DotKind(0),
            from: Coord::new(2, 1),
            to: Coord::new(1, 1),
        };
        let a = BoardDiff {
            removed: Vec::new(),
            moved: vec![step],
            created: Vec::new(),
        };
        let b = a.clone();
        assert_eq!(a, b);

        let mut c = b;
        c.moved.clear();
        assert_ne!(a, c);
        assert_eq!(c, BoardDiff::default());
    }
}
