use std::fmt;

use crate::error::{PuzzleError, PuzzleResult};

/// Direction a tile slides into the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// Displacement of the blank, as `(row, col)`.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

// Blank moves left, right, up, down.
const NEIGHBOR_ORDER: [Move; 4] = [Move::Right, Move::Left, Move::Down, Move::Up];

/// One immutable puzzle configuration.
///
/// Tiles are stored row-major; `0` is the blank. The goal has tiles
/// `1..n*n` in order with the blank in the last cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    blank: usize,
}

impl Board {
    /// Builds a board from rows, where `rows[r][c]` is the tile at `(r, c)`.
    ///
    /// Only the shape is checked here. Whether the values form a
    /// permutation of `0..n*n` is up to the caller (see [`crate::parse`]).
    pub fn new(rows: Vec<Vec<u32>>) -> PuzzleResult<Self> {
        let size = rows.len();
        if let Some(r) = rows.iter().position(|row| row.len() != size) {
            return Err(PuzzleError::InvalidArgument(format!(
                "row {} has {} tiles, expected {}",
                r,
                rows[r].len(),
                size
            )));
        }
        Self::from_flat(size, rows.into_iter().flatten().collect())
    }

    pub fn from_flat(size: usize, tiles: Vec<u32>) -> PuzzleResult<Self> {
        if size < 2 {
            return Err(PuzzleError::InvalidArgument(format!(
                "board dimension must be at least 2, got {}",
                size
            )));
        }
        if tiles.len() != size * size {
            return Err(PuzzleError::InvalidArgument(format!(
                "expected {} tiles for a {}x{} board, got {}",
                size * size,
                size,
                size,
                tiles.len()
            )));
        }
        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .ok_or_else(|| PuzzleError::InvalidArgument("board has no blank tile".into()))?;

        Ok(Self { size, tiles, blank })
    }

    pub fn goal(size: usize) -> PuzzleResult<Self> {
        let cells = size * size;
        let tiles = (1..cells as u32).chain(std::iter::once(0)).collect();
        Self::from_flat(size, tiles)
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.size + col]
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Number of tiles out of place. The blank does not count.
    pub fn hamming(&self) -> usize {
        self.tiles[..self.tiles.len() - 1]
            .iter()
            .enumerate()
            .filter(|&(i, &value)| value != i as u32 + 1)
            .count()
    }

    /// Sum of the row and column distances of every tile from its goal cell.
    pub fn manhattan(&self) -> usize {
        let mut distance = 0;
        for (i, &value) in self.tiles.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let (row, col) = (i / self.size, i % self.size);
            let target = value as usize - 1;
            let (target_row, target_col) = (target / self.size, target % self.size);
            distance += row.abs_diff(target_row) + col.abs_diff(target_col);
        }
        distance
    }

    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    /// The board reached by sliding one tile into the blank, if that tile exists.
    pub fn slide(&self, movement: Move) -> Option<Board> {
        let (dr, dc) = movement.as_offset();
        let (row, col) = self.blank();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        let size = self.size as isize;
        if new_row < 0 || new_row >= size || new_col < 0 || new_col >= size {
            return None;
        }

        let target = new_row as usize * self.size + new_col as usize;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Board {
            size: self.size,
            tiles,
            blank: target,
        })
    }

    /// Every board one slide away, in the order blank-left, blank-right,
    /// blank-up, blank-down.
    pub fn neighbors(&self) -> Vec<Board> {
        NEIGHBOR_ORDER
            .iter()
            .filter_map(|&movement| self.slide(movement))
            .collect()
    }

    /// Swaps the first two non-blank tiles in row-major order.
    ///
    /// Exactly one of a board and its twin can reach the goal.
    pub fn twin(&self) -> Board {
        let mut non_blank = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, _)| i);
        // n >= 2 leaves at least three non-blank tiles
        let first = non_blank.next().unwrap_or(0);
        let second = non_blank.next().unwrap_or(1);

        let mut tiles = self.tiles.clone();
        tiles.swap(first, second);
        Board {
            size: self.size,
            tiles,
            blank: self.blank,
        }
    }

    /// The slide that turns `self` into `next`, if they are neighbors.
    pub fn move_to(&self, next: &Board) -> Option<Move> {
        Move::ALL
            .iter()
            .copied()
            .find(|&movement| self.slide(movement).as_ref() == Some(next))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        writeln!(f, "{}", self.size)?;
        for (r, row) in self.tiles.chunks(self.size).enumerate() {
            for (c, &val) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", val, width = width)?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u32]]) -> Board {
        Board::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_goal_board() {
        let goal = Board::goal(3).unwrap();
        assert_eq!(goal, board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]));
        assert!(goal.is_goal());
        assert_eq!(goal.hamming(), 0);
        assert_eq!(goal.manhattan(), 0);
        assert_eq!(goal.blank(), (2, 2));
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert!(matches!(
            Board::new(Vec::new()),
            Err(PuzzleError::InvalidArgument(_))
        ));
        assert!(matches!(
            Board::new(vec![vec![0]]),
            Err(PuzzleError::InvalidArgument(_))
        ));
        assert!(matches!(
            Board::new(vec![vec![1, 2], vec![0]]),
            Err(PuzzleError::InvalidArgument(_))
        ));
        assert!(matches!(
            Board::from_flat(2, vec![1, 2, 3, 4]),
            Err(PuzzleError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_hamming_and_manhattan() {
        // Classic 8-puzzle example: hamming 5, manhattan 10
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        assert_eq!(b.dimension(), 3);
        assert_eq!(b.hamming(), 5);
        assert_eq!(b.manhattan(), 10);
        assert!(!b.is_goal());
    }

    #[test]
    fn test_blank_out_of_place_only() {
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]);
        assert_eq!(b.hamming(), 1);
        assert_eq!(b.manhattan(), 1);
    }

    #[test]
    fn test_equality_checks_dimension() {
        let small = Board::goal(2).unwrap();
        let large = Board::goal(3).unwrap();
        assert_ne!(small, large);
        assert_eq!(small, small.clone());
    }

    #[test]
    fn test_neighbor_counts() {
        let corner = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        let edge = board(&[&[1, 0, 3], &[4, 2, 5], &[7, 8, 6]]);
        let interior = board(&[&[1, 2, 3], &[4, 0, 5], &[7, 8, 6]]);
        assert_eq!(corner.neighbors().len(), 2);
        assert_eq!(edge.neighbors().len(), 3);
        assert_eq!(interior.neighbors().len(), 4);
    }

    #[test]
    fn test_neighbor_order() {
        let b = board(&[&[1, 2, 3], &[4, 0, 5], &[7, 8, 6]]);
        let neighbors = b.neighbors();
        assert_eq!(neighbors[0].blank(), (1, 0));
        assert_eq!(neighbors[1].blank(), (1, 2));
        assert_eq!(neighbors[2].blank(), (0, 1));
        assert_eq!(neighbors[3].blank(), (2, 1));
    }

    #[test]
    fn test_neighbors_are_symmetric_single_swaps() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        for n in b.neighbors() {
            let diff = b
                .tiles()
                .iter()
                .zip(n.tiles())
                .filter(|(x, y)| x != y)
                .count();
            assert_eq!(diff, 2);
            assert!(n.neighbors().contains(&b));
        }
        // original is untouched
        assert_eq!(b, board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]));
    }

    #[test]
    fn test_twin_swaps_first_two_tiles() {
        let b = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        let twin = b.twin();
        assert_eq!(twin, board(&[&[0, 3, 1], &[4, 2, 5], &[7, 8, 6]]));
        assert_eq!(twin, b.twin());
        assert_eq!(twin.dimension(), b.dimension());
        assert_eq!(twin.blank(), b.blank());
        assert_eq!(twin.twin(), b);
    }

    #[test]
    fn test_slide_and_move_to() {
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]);
        let solved = b.slide(Move::Left).unwrap();
        assert!(solved.is_goal());
        assert_eq!(b.move_to(&solved), Some(Move::Left));
        assert_eq!(solved.move_to(&b), Some(Move::Right));
        assert_eq!(b.slide(Move::Down).unwrap().blank(), (1, 1));
        assert!(b.slide(Move::Up).is_none());
        assert_eq!(b.move_to(&b.twin()), None);
    }

    #[test]
    fn test_move_opposite() {
        for m in Move::ALL {
            assert_eq!(m.opposite().opposite(), m);
            let (dr, dc) = m.as_offset();
            assert_eq!(m.opposite().as_offset(), (-dr, -dc));
        }
    }

    #[test]
    fn test_display() {
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]);
        assert_eq!(b.to_string(), "3\n1 2 3\n4 5 6\n7 8 0");

        let wide = Board::goal(4).unwrap();
        assert_eq!(
            wide.to_string(),
            "4\n 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15  0"
        );
    }
}
