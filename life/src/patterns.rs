// patterns.rs - Named starting patterns, stored as offsets from a top-left origin

use crate::cell::Cell;
use crate::error::{LifeError, Result};
use crate::grid::Board;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

impl Pattern {
    /// Height and width of the pattern's bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

pub fn find(name: &str) -> Result<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
}

/// Clears the interior and draws `pattern` with its top-left corner at `origin`.
/// Cells landing outside the interior are dropped.
pub fn apply_pattern(board: &mut Board, pattern: &Pattern, origin: (usize, usize)) {
    board.clear();
    for &(row, col) in pattern.cells {
        board.set(origin.0 + row, origin.1 + col, Cell::Alive);
    }
}

/// Places `pattern` roughly in the middle of the board.
pub fn apply_centered(board: &mut Board, pattern: &Pattern) {
    let (height, width) = pattern.extent();
    let origin = (
        (board.size().saturating_sub(height) / 2).max(1),
        (board.size().saturating_sub(width) / 2).max(1),
    );
    apply_pattern(board, pattern, origin);
}
