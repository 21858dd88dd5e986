// grid.rs - Bordered board for Conway's Game of Life

use crate::cell::Cell;
use crate::error::{LifeError, Result};

pub const MIN_BOARD_SIZE: usize = 3;   // Smallest board that still has an interior cell
pub const GRID_START: usize = 1;       // First interior row/column

/// Square board whose outer ring is permanently `Cell::Wall`.
///
/// Cells are stored row-major. Only the interior `1..size-1` can be written
/// through the public API, so the border cannot be broken after `new`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Allocates a `size` x `size` board with a wall border and a dead interior.
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(LifeError::InvalidSize { size });
        }

        let len = size
            .checked_mul(size)
            .ok_or(LifeError::BoardTooLarge { size })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| LifeError::BoardTooLarge { size })?;
        cells.resize(len, Cell::Dead);

        let last = size - 1;
        for i in 0..size {
            cells[i] = Cell::Wall;                  // top border
            cells[last * size + i] = Cell::Wall;    // bottom border
            cells[i * size] = Cell::Wall;           // left border
            cells[i * size + last] = Cell::Wall;    // right border
        }

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// One past the last interior row/column.
    #[inline]
    pub fn grid_end(&self) -> usize {
        self.size - 1
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.size && col < self.size, "({row}, {col}) is off the board");
        self.cells[row * self.size + col]
    }

    /// Writes an interior cell. Returns `false` and leaves the board untouched
    /// for border or out-of-range positions.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if !self.is_interior(row, col) {
            return false;
        }
        self.cells[row * self.size + col] = cell;
        true
    }

    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row == self.grid_end() || col == self.grid_end()
    }

    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        (GRID_START..self.grid_end()).contains(&row) && (GRID_START..self.grid_end()).contains(&col)
    }

    /// Interior coordinates in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let end = self.grid_end();
        (GRID_START..end).flat_map(move |row| (GRID_START..end).map(move |col| (row, col)))
    }

    /// Rows as slices, border included.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Resets every interior cell to `Cell::Dead`.
    pub fn clear(&mut self) {
        for (row, col) in self.interior() {
            self.cells[row * self.size + col] = Cell::Dead;
        }
    }

    /// Overwrites this board with `other`'s contents without reallocating.
    ///
    /// # Panics
    /// If the two boards differ in size.
    pub fn copy_from(&mut self, other: &Board) {
        assert_eq!(self.size, other.size, "boards must share dimensions");
        self.cells.copy_from_slice(&other.cells);
    }

    /// True when every border cell is a wall.
    pub fn border_intact(&self) -> bool {
        (0..self.size).all(|i| {
            self.get(0, i) == Cell::Wall
                && self.get(self.grid_end(), i) == Cell::Wall
                && self.get(i, 0) == Cell::Wall
                && self.get(i, self.grid_end()) == Cell::Wall
        })
    }
}
