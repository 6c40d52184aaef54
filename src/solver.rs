//! A* search over board configurations.
//!
//! Two searches run in lockstep: one from the initial board and one from its
//! [`Board::twin`]. Exactly one of the two can reach the goal, so whichever
//! tree dequeues a goal board first decides solvability. The original tree
//! finishing first also yields an optimal path, since Manhattan distance is
//! admissible.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::error::{PuzzleError, PuzzleResult};

struct SearchNode {
    board: Board,
    moves: usize,
    parent: Option<usize>,
}

/// Heap entry pointing into a tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frontier {
    priority: usize,
    heuristic: usize,
    // arena index, doubles as insertion order
    node: usize,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.heuristic.cmp(&other.heuristic))
            .then(self.node.cmp(&other.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters for one search tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub expanded: usize,
    pub enqueued: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub original: TreeStats,
    pub twin: TreeStats,
}

impl SearchStats {
    pub fn expanded(&self) -> usize {
        self.original.expanded + self.twin.expanded
    }
}

enum Step {
    Goal(usize),
    Expanded,
}

/// One best-first search tree. Nodes are kept in an arena and linked to
/// their parent by index.
struct GameTree {
    nodes: Vec<SearchNode>,
    open: BinaryHeap<Reverse<Frontier>>,
    stats: TreeStats,
}

impl GameTree {
    fn new(root: Board) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            stats: TreeStats::default(),
        };
        tree.push(root, 0, None);
        tree
    }

    fn push(&mut self, board: Board, moves: usize, parent: Option<usize>) {
        let heuristic = board.manhattan();
        let node = self.nodes.len();
        self.nodes.push(SearchNode {
            board,
            moves,
            parent,
        });
        self.open.push(Reverse(Frontier {
            priority: moves + heuristic,
            heuristic,
            node,
        }));
        self.stats.enqueued += 1;
    }

    /// Pops the best node and either reports it as the goal or expands it.
    /// Returns `None` once the frontier is empty.
    fn step(&mut self) -> Option<Step> {
        let Reverse(entry) = self.open.pop()?;
        let current = &self.nodes[entry.node];
        if current.board.is_goal() {
            return Some(Step::Goal(entry.node));
        }

        let moves = current.moves;
        let previous = current.parent.map(|p| &self.nodes[p].board);
        let children: Vec<Board> = current
            .board
            .neighbors()
            .into_iter()
            .filter(|board| Some(board) != previous)
            .collect();

        trace!(
            node = entry.node,
            moves,
            priority = entry.priority,
            children = children.len(),
            "expanding"
        );
        for board in children {
            self.push(board, moves + 1, Some(entry.node));
        }
        self.stats.expanded += 1;
        Some(Step::Expanded)
    }

    /// Boards from the root to `node`, inclusive.
    fn path_to(&self, node: usize) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.nodes[node].moves + 1);
        let mut cursor = Some(node);
        while let Some(index) = cursor {
            let current = &self.nodes[index];
            path.push(current.board.clone());
            cursor = current.parent;
        }
        path.reverse();
        path
    }
}

/// Result of solving one initial board.
#[derive(Debug, Clone)]
pub struct Solver {
    solution: Option<Vec<Board>>,
    stats: SearchStats,
}

impl Solver {
    /// Runs the search to completion.
    pub fn new(initial: Board) -> Self {
        match Self::search(initial, None) {
            Ok(solver) => solver,
            // unreachable without a limit
            Err(_) => Self {
                solution: None,
                stats: SearchStats::default(),
            },
        }
    }

    /// Like [`Solver::new`], but gives up once both trees together have
    /// expanded more than `max_expansions` nodes.
    pub fn with_limit(initial: Board, max_expansions: usize) -> PuzzleResult<Self> {
        Self::search(initial, Some(max_expansions))
    }

    fn search(initial: Board, limit: Option<usize>) -> PuzzleResult<Self> {
        debug!(
            dimension = initial.dimension(),
            manhattan = initial.manhattan(),
            hamming = initial.hamming(),
            "starting search"
        );

        let twin = initial.twin();
        let mut original = GameTree::new(initial);
        let mut mirror = GameTree::new(twin);

        let solution = loop {
            let stats = SearchStats {
                original: original.stats,
                twin: mirror.stats,
            };
            if let Some(max) = limit {
                if stats.expanded() > max {
                    debug!(?stats, "search limit reached");
                    return Err(PuzzleError::SearchLimit {
                        expanded: stats.expanded(),
                    });
                }
            }

            match original.step() {
                Some(Step::Goal(node)) => break Some(original.path_to(node)),
                Some(Step::Expanded) => {}
                // every board has at least two neighbors, so only one
                // child is ever filtered and the frontier never drains
                None => break None,
            }
            match mirror.step() {
                Some(Step::Goal(_)) | None => break None,
                Some(Step::Expanded) => {}
            }
        };

        let stats = SearchStats {
            original: original.stats,
            twin: mirror.stats,
        };
        match &solution {
            Some(path) => info!(moves = path.len() - 1, ?stats, "solved"),
            None => info!(?stats, "no solution possible"),
        }

        Ok(Self { solution, stats })
    }

    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Minimum number of slides to reach the goal, `None` if unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    /// Boards along one shortest path, initial and goal included.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
