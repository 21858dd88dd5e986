// stability.rs - Comparing two successive snapshots

use std::fmt;
use std::str::FromStr;

use crate::grid::Board;

/// True as soon as any one interior cell has the same state in both boards.
///
/// This is the historical check and it is almost certainly wrong as a
/// convergence test: a board is reported stable if a single cell did not
/// change. Kept verbatim; see [`all_cells_match`] for the strict version.
pub fn any_cell_matches(prior: &Board, current: &Board) -> bool {
    prior.interior().any(|(row, col)| prior.get(row, col) == current.get(row, col))
}

/// True only when every interior cell is unchanged, i.e. a fixed point.
pub fn all_cells_match(prior: &Board, current: &Board) -> bool {
    prior.interior().all(|(row, col)| prior.get(row, col) == current.get(row, col))
}

/// Selects which comparison the run loop uses to stop early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilityRule {
    AnyCellMatches,
    AllCellsMatch,
}

impl StabilityRule {
    pub fn is_stable(self, prior: &Board, current: &Board) -> bool {
        match self {
            StabilityRule::AnyCellMatches => any_cell_matches(prior, current),
            StabilityRule::AllCellsMatch  => all_cells_match(prior, current),
        }
    }
}

impl FromStr for StabilityRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(StabilityRule::AnyCellMatches),
            "all" => Ok(StabilityRule::AllCellsMatch),
            other => Err(format!("expected `any` or `all`, got `{other}`")),
        }
    }
}

impl fmt::Display for StabilityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StabilityRule::AnyCellMatches => "any",
            StabilityRule::AllCellsMatch  => "all",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn single_match_is_enough_for_the_literal_check() {
        let prior = Board::new(4).unwrap();
        let mut current = prior.clone();
        current.set(1, 1, Cell::Alive);
        current.set(1, 2, Cell::Alive);
        current.set(2, 1, Cell::Alive);
        // (2, 2) is still dead in both
        assert!(any_cell_matches(&prior, &current));
        assert!(!all_cells_match(&prior, &current));
    }

    #[test]
    fn literal_check_fails_only_when_every_cell_differs() {
        let prior = Board::new(4).unwrap();
        let mut current = prior.clone();
        for (r, c) in prior.interior() {
            current.set(r, c, Cell::Alive);
        }
        assert!(!any_cell_matches(&prior, &current));
    }

    #[test]
    fn identical_boards_satisfy_both_rules() {
        let board = Board::new(6).unwrap();
        assert!(StabilityRule::AnyCellMatches.is_stable(&board, &board));
        assert!(StabilityRule::AllCellsMatch.is_stable(&board, &board));
    }

    #[test]
    fn parses_rule_names() {
        assert_eq!("any".parse::<StabilityRule>(), Ok(StabilityRule::AnyCellMatches));
        assert_eq!("all".parse::<StabilityRule>(), Ok(StabilityRule::AllCellsMatch));
        assert!("most".parse::<StabilityRule>().is_err());
    }
}
