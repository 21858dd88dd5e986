// step.rs - Double-buffered generation step

use tracing::trace;

use crate::cell::Cell;
use crate::grid::Board;

/// Number of `Cell::Alive` cells in the Moore neighbourhood of an interior cell.
pub fn live_neighbours(board: &Board, row: usize, col: usize) -> u8 {
    let neighbours = [
        (row - 1, col - 1), (row - 1, col), (row - 1, col + 1),
        (row, col - 1),                     (row, col + 1),
        (row + 1, col - 1), (row + 1, col), (row + 1, col + 1),
    ];

    neighbours
        .iter()
        .filter(|&&(nr, nc)| board.get(nr, nc).is_alive())
        .count() as u8
}

/// Next state of a single cell. `None` means the cell keeps its current value.
pub fn transition(cell: Cell, count: u8) -> Option<Cell> {
    match (cell, count) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Some(Cell::Alive),   // Survival
        (Cell::Alive, _)                    => Some(Cell::Dead),    // Under- or overpopulation
        (Cell::Dead, 3)                     => Some(Cell::Alive),   // Birth
        _                                   => None,                // Stays as it was
    }
}

/// Computes the generation after `current` into `next`.
///
/// `next` is first overwritten with `current`, so untouched cells (the border,
/// dead cells without exactly three neighbours, pass-through symbols) keep
/// their value. Every neighbour read sees `current` only.
pub fn step_into(current: &Board, next: &mut Board) {
    next.copy_from(current);
    for (row, col) in current.interior() {
        let count = live_neighbours(current, row, col);
        if let Some(cell) = transition(current.get(row, col), count) {
            next.set(row, col, cell);
        }
    }
}

/// Pure form of [`step_into`].
pub fn step(current: &Board) -> Board {
    let mut next = current.clone();
    step_into(current, &mut next);
    next
}

/// Owns the live board and its snapshot buffer.
#[derive(Debug, Clone)]
pub struct Stepper {
    live: Board,
    snapshot: Board,
    generation: u64,
}

impl Stepper {
    pub fn new(board: Board) -> Self {
        Self {
            snapshot: board.clone(),
            live: board,
            generation: 0,
        }
    }

    /// Runs one generation and commits it to the live board.
    pub fn advance(&mut self) -> &Board {
        step_into(&self.live, &mut self.snapshot);
        self.live.copy_from(&self.snapshot);
        self.generation += 1;
        trace!(generation = self.generation, population = self.live.population(), "advanced");
        &self.live
    }

    pub fn board(&self) -> &Board {
        &self.live
    }

    /// Mutable access for editing between generations (e.g. toggling cells).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.live
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the board and restarts the generation count.
    pub fn reset(&mut self, board: Board) {
        self.snapshot = board.clone();
        self.live = board;
        self.generation = 0;
    }

    pub fn into_board(self) -> Board {
        self.live
    }
}
