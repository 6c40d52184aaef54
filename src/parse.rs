use std::fs;
use std::path::Path;

use crate::board::Board;
use crate::error::{PuzzleError, PuzzleResult};

/// Parses a board in its textual form: the dimension `n` followed by `n * n`
/// tile values, all separated by whitespace.
///
/// Unlike [`Board::new`], this checks that the tiles are a permutation of
/// `0..n*n`.
///
/// ```
/// use slider_puzzle::parse::parse_board;
///
/// let board = parse_board("3\n 1 2 3\n 4 5 6\n 7 0 8").unwrap();
/// assert_eq!(board.manhattan(), 1);
/// assert!(parse_board("2\n 1 1\n 2 0").is_err());
/// ```
pub fn parse_board(input: &str) -> PuzzleResult<Board> {
    let mut tokens = input.split_whitespace();

    let size_token = tokens
        .next()
        .ok_or_else(|| PuzzleError::Parse("missing board dimension".into()))?;
    let size: usize = size_token
        .parse()
        .map_err(|_| PuzzleError::Parse(format!("invalid dimension {:?}", size_token)))?;
    if size < 2 {
        return Err(PuzzleError::InvalidArgument(format!(
            "board dimension must be at least 2, got {}",
            size
        )));
    }

    let cells = size
        .checked_mul(size)
        .ok_or_else(|| PuzzleError::Parse(format!("dimension {} is too large", size)))?;
    let tiles = tokens
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| PuzzleError::Parse(format!("invalid tile {:?}", token)))
        })
        .collect::<PuzzleResult<Vec<u32>>>()?;
    if tiles.len() != cells {
        return Err(PuzzleError::Parse(format!(
            "expected {} tiles for a {}x{} board, found {}",
            cells,
            size,
            size,
            tiles.len()
        )));
    }

    check_permutation(&tiles)?;
    Board::from_flat(size, tiles)
}

pub fn read_board(path: impl AsRef<Path>) -> PuzzleResult<Board> {
    let content = fs::read_to_string(path)?;
    parse_board(&content)
}

fn check_permutation(tiles: &[u32]) -> PuzzleResult<()> {
    let mut seen = vec![false; tiles.len()];
    for &tile in tiles {
        let index = tile as usize;
        if index >= tiles.len() {
            return Err(PuzzleError::InvalidTiles(format!(
                "tile {} is out of range 0..{}",
                tile,
                tiles.len()
            )));
        }
        if seen[index] {
            return Err(PuzzleError::InvalidTiles(format!("tile {} appears twice", tile)));
        }
        seen[index] = true;
    }
    Ok(())
}
