// render.rs - Board to text

use crate::grid::Board;

/// One line per row, symbols separated by a single space, each line ending in `\n`.
pub fn render(board: &Board) -> String {
    let mut out = String::with_capacity(board.size() * board.size() * 2);
    for row in board.rows() {
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                out.push(' ');
            }
            out.push(cell.symbol());
        }
        out.push('\n');
    }
    out
}

/// Header line followed by the rendered board, as shown once per generation.
pub fn render_frame(generation: u64, board: &Board) -> String {
    let mut out = format!("Board after {generation} iterations:\n");
    out.push_str(&render(board));
    out
}
