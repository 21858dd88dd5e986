// error.rs - Error type shared by the library and the binaries

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::grid::MIN_BOARD_SIZE;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Board too small to have an interior.
    #[error("board size must be at least {min}, got {size}", min = MIN_BOARD_SIZE)]
    InvalidSize { size: usize },

    /// Board cell count does not fit in memory.
    #[error("board size {size} is too large")]
    BoardTooLarge { size: usize },

    /// Seed source ran out of tokens before the board was full.
    #[error("seed input holds {found} cells, expected {expected}")]
    MalformedInput { expected: usize, found: usize },

    #[error("File failed to open.")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Wrong command line arity or unusable values.
    #[error("{0}")]
    InvalidArguments(String),

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
