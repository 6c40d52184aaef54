use thiserror::Error;

/// Errors produced while building boards or running a bounded search.
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("tiles are not a permutation of 0..n^2: {0}")]
    InvalidTiles(String),

    #[error("search limit exceeded after {expanded} expansions")]
    SearchLimit { expanded: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PuzzleResult<T> = Result<T, PuzzleError>;
