//! Colored terminal output for boards.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, Stylize};

use crate::board::{Board, Move};

/// Writes the grid with tiles in their goal cell in green, misplaced tiles
/// in yellow and the blank dimmed.
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    let size = board.dimension();
    let width = (size * size - 1).to_string().len();

    for row in 0..size {
        for col in 0..size {
            let value = board.tile(row, col);
            let home = (row * size + col + 1) as u32;
            let cell = format!("{:>width$} ", value, width = width);
            let styled = if value == 0 {
                format!("{:>width$} ", ".", width = width).dim()
            } else if value == home {
                cell.green()
            } else {
                cell.yellow().bold()
            };
            queue!(out, PrintStyledContent(styled))?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Writes one step of a solution: the slide that produced it, then the board.
pub fn write_step<W: Write>(
    out: &mut W,
    index: usize,
    movement: Option<Move>,
    board: &Board,
) -> io::Result<()> {
    match movement {
        Some(m) => queue!(out, PrintStyledContent(format!("Step {}: {}\n", index, m).cyan()))?,
        None => queue!(out, PrintStyledContent("Initial board\n".cyan()))?,
    }
    write_board(out, board)?;
    queue!(out, Print("\n"))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_board_contains_tiles() {
        let board = Board::new(vec![vec![1, 2], vec![0, 3]]).unwrap();
        let mut out = Vec::new();
        write_board(&mut out, &board).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('1'));
        assert!(text.contains('3'));
        assert!(text.contains('.'));
        assert_eq!(text.matches('\n').count(), 2);
    }
}
