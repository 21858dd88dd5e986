// seed.rs - Populating a board before the first generation

use std::fs;
use std::io::Read;
use std::path::Path;

use rand::Rng;
use tracing::{debug, warn};

use crate::cell::Cell;
use crate::error::{LifeError, Result};
use crate::grid::Board;

/// Fills every interior cell with an independent 50/50 draw from `rng`.
pub fn seed_random<R: Rng>(board: &mut Board, rng: &mut R) {
    for (row, col) in board.interior() {
        board.set(row, col, Cell::from_alive(rng.r#gen::<bool>()));
    }
    debug!(population = board.population(), "seeded board randomly");
}

/// Reads `size * size` single-byte tokens in row-major order.
///
/// Whitespace separates tokens and is otherwise ignored, so `OO` counts as two
/// cells. Every other byte is a token, decoded as Latin-1. Interior tokens are
/// assigned as read, with bytes outside the known alphabet stored as
/// `Cell::Other`. Border positions are the exception: they consume a token but
/// always keep their wall, even when the token is something else (an `O` on the
/// border is not written and never counts as a live neighbour).
pub fn seed_from_bytes(board: &mut Board, bytes: &[u8]) -> Result<()> {
    let size = board.size();
    let expected = size * size;
    let mut tokens = bytes.iter().copied().filter(|&b| !is_separator(b));

    let mut found = 0;
    for row in 0..size {
        for col in 0..size {
            let Some(byte) = tokens.next() else {
                return Err(LifeError::MalformedInput { expected, found });
            };
            found += 1;

            let symbol = char::from(byte);
            let cell = Cell::from_symbol(symbol);
            if board.is_border(row, col) {
                if cell != Cell::Wall {
                    warn!(row, col, %symbol, "border token is not a wall, keeping wall");
                }
                continue;
            }
            if let Cell::Other(_) = cell {
                debug!(row, col, %symbol, "unrecognised cell symbol kept verbatim");
            }
            board.set(row, col, cell);
        }
    }

    Ok(())
}

// ASCII whitespace plus vertical tab.
fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}

/// [`seed_from_bytes`] over the UTF-8 encoding of `text`.
pub fn seed_from_str(board: &mut Board, text: &str) -> Result<()> {
    seed_from_bytes(board, text.as_bytes())
}

pub fn seed_from_reader<R: Read>(board: &mut Board, mut reader: R) -> Result<()> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    seed_from_bytes(board, &bytes)
}

/// Opens and reads a seed file. Only failing to open or read it is a `FileOpen`
/// error; the contents may be any bytes.
pub fn seed_from_file(board: &mut Board, path: &Path) -> Result<()> {
    let bytes = fs::read(path).map_err(|source| LifeError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read seed file");
    seed_from_bytes(board, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_seed_is_reproducible_with_fixed_rng() {
        let mut a = Board::new(12).unwrap();
        let mut b = Board::new(12).unwrap();
        seed_random(&mut a, &mut StdRng::seed_from_u64(7));
        seed_random(&mut b, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.border_intact());
        assert!(a.interior().all(|(r, c)| matches!(a.get(r, c), Cell::Alive | Cell::Dead)));
    }

    #[test]
    fn reads_tokens_row_major() {
        let mut board = Board::new(4).unwrap();
        seed_from_str(&mut board, "l l l l\nl O . l\nl . O l\nl l l l\n").unwrap();
        assert_eq!(board.get(1, 1), Cell::Alive);
        assert_eq!(board.get(1, 2), Cell::Dead);
        assert_eq!(board.get(2, 2), Cell::Alive);
    }

    #[test]
    fn tokens_need_no_separators() {
        let mut board = Board::new(3).unwrap();
        seed_from_str(&mut board, "lll\nlOl\nlll").unwrap();
        assert_eq!(board.get(1, 1), Cell::Alive);
    }

    #[test]
    fn short_input_is_malformed() {
        let mut board = Board::new(4).unwrap();
        let err = seed_from_str(&mut board, "l l l l l O").unwrap_err();
        assert!(matches!(err, LifeError::MalformedInput { expected: 16, found: 6 }));
    }

    #[test]
    fn border_tokens_do_not_break_the_wall() {
        let mut board = Board::new(3).unwrap();
        seed_from_str(&mut board, "O O O O O O O O O").unwrap();
        assert!(board.border_intact());
        assert_eq!(board.get(1, 1), Cell::Alive);
    }

    #[test]
    fn unknown_interior_tokens_pass_through() {
        let mut board = Board::new(3).unwrap();
        seed_from_str(&mut board, "l l l l # l l l l").unwrap();
        assert_eq!(board.get(1, 1), Cell::Other('#'));
    }

    #[test]
    fn latin1_interior_byte_is_kept() {
        let mut board = Board::new(3).unwrap();
        seed_from_bytes(&mut board, b"l l l\nl \xE9 l\nl l l\n").unwrap();
        assert_eq!(board.get(1, 1), Cell::Other('\u{e9}'));
    }

    #[test]
    fn non_utf8_file_is_read_not_refused() {
        let path = std::env::temp_dir().join(format!("life-seed-{}-latin1.txt", std::process::id()));
        fs::write(&path, b"l l l\nl \xE9 l\nl l l\n").unwrap();
        let mut board = Board::new(3).unwrap();
        let result = seed_from_file(&mut board, &path);
        fs::remove_file(&path).ok();
        result.unwrap();
        assert_eq!(board.get(1, 1), Cell::Other('\u{e9}'));
    }

    #[test]
    fn vertical_tab_separates_tokens() {
        let mut board = Board::new(3).unwrap();
        seed_from_bytes(&mut board, b"l\x0bl\x0bl l O l l l l").unwrap();
        assert_eq!(board.get(1, 1), Cell::Alive);
    }

    #[test]
    fn reader_accepts_raw_bytes() {
        let mut board = Board::new(3).unwrap();
        seed_from_reader(&mut board, &b"lllltllll"[..]).unwrap();
        assert_eq!(board.get(1, 1), Cell::Other('t'));
    }

    #[test]
    fn missing_file_is_file_open_error() {
        let mut board = Board::new(3).unwrap();
        let err = seed_from_file(&mut board, Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, LifeError::FileOpen { .. }));
        assert_eq!(err.to_string(), "File failed to open.");
    }
}
