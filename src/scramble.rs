use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Move};
use crate::error::PuzzleResult;

/// Walks `steps` random slides away from the goal without undoing the
/// previous slide. The result is always solvable in at most `steps` moves.
pub fn random_walk<R: Rng + ?Sized>(size: usize, steps: usize, rng: &mut R) -> PuzzleResult<Board> {
    let mut board = Board::goal(size)?;
    let mut last_move: Option<Move> = None;

    for _ in 0..steps {
        let candidates: Vec<(Move, Board)> = Move::ALL
            .iter()
            .filter(|&&dir| last_move.map_or(true, |last| dir != last.opposite()))
            .filter_map(|&dir| board.slide(dir).map(|next| (dir, next)))
            .collect();

        // a blank always has at least one slide besides the undo
        if let Some((dir, next)) = candidates.choose(rng).cloned() {
            board = next;
            last_move = Some(dir);
        }
    }

    Ok(board)
}

/// A uniformly shuffled board. About half of these cannot be solved.
pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> PuzzleResult<Board> {
    let mut tiles = Board::goal(size)?.tiles().to_vec();
    tiles.shuffle(rng);
    Board::from_flat(size, tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_steps_is_goal() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_walk(3, 0, &mut rng).unwrap().is_goal());
    }

    #[test]
    fn test_walk_stays_within_step_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        for steps in [1, 5, 12] {
            let board = random_walk(3, steps, &mut rng).unwrap();
            assert_eq!(board.dimension(), 3);
            // each slide changes manhattan distance by exactly one
            assert!(board.manhattan() <= steps);
            assert_eq!(board.manhattan() % 2, steps % 2);
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = random_walk(4, 30, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = random_walk(4, 30, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = shuffled(4, &mut rng).unwrap();
        let mut tiles = board.tiles().to_vec();
        tiles.sort_unstable();
        assert_eq!(tiles, (0..16).collect::<Vec<u32>>());
    }
}
