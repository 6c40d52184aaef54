//! Optimal solver for the n×n sliding-tile puzzle.
//!
//! ```
//! use slider_puzzle::{Board, Solver};
//!
//! let board = Board::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]).unwrap();
//! let solver = Solver::new(board);
//! assert_eq!(solver.moves(), Some(1));
//! ```

pub mod board;
pub mod error;
pub mod parse;
pub mod render;
pub mod scramble;
pub mod solver;

pub use board::{Board, Move};
pub use error::{PuzzleError, PuzzleResult};
pub use solver::{SearchStats, Solver, TreeStats};
