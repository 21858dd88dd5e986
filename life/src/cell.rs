// cell.rs - Cell states and their text symbols

use std::fmt;

pub const WALL_SYMBOL: char = 'l';
pub const ALIVE_SYMBOL: char = 'O';
pub const DEAD_SYMBOL: char = '.';

/// State of a single grid position.
///
/// `Other` keeps seed characters outside the `l`/`O`/`.` alphabet as-is.
/// It never counts as a living neighbour and the transition rule leaves it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Wall,
    Alive,
    #[default]
    Dead,
    Other(char),
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            WALL_SYMBOL  => Cell::Wall,
            ALIVE_SYMBOL => Cell::Alive,
            DEAD_SYMBOL  => Cell::Dead,
            other        => Cell::Other(other),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Wall     => WALL_SYMBOL,
            Cell::Alive    => ALIVE_SYMBOL,
            Cell::Dead     => DEAD_SYMBOL,
            Cell::Other(c) => c,
        }
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
