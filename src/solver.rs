use crate::board::Board;
use crate::heuristic::{Heuristic, Manhattan};
use crate::pqueue::PriorityQueue;

/// Which of the two search roots a node descends from.
///
/// Exactly one of a board and its twin is solvable, so the lineage of the
/// first goal node reached classifies the initial board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lineage {
    Initial,
    Twin,
}

/// One point of the search tree: a board, the arena index of the node it was
/// expanded from, and the move count back to its root.
struct SearchNode {
    board: Board,
    parent: Option<u32>,
    moves: u32,
    lineage: Lineage,
}

/// A* solver for the sliding-tile puzzle.
///
/// The whole search runs inside the constructor. Two search trees, one
/// rooted at the initial board and one at its twin, grow through a single
/// priority queue until either reaches the goal; the winning lineage decides
/// solvability, and the winning node's parent chain is a minimal solution.
pub struct Solver {
    solvable: bool,
    moves: i32,
    solution: Option<Vec<Board>>,
    nodes_explored: usize,
}

impl Solver {
    /// Solve `initial` ordering the frontier by Manhattan distance.
    pub fn new(initial: Board) -> Self {
        Self::with_heuristic(initial, &Manhattan)
    }

    /// Solve `initial` ordering the frontier by `heuristic + moves made`.
    ///
    /// The heuristic must be admissible for `moves` to be minimal.
    pub fn with_heuristic<H: Heuristic>(initial: Board, heuristic: &H) -> Self {
        let twin = initial.twin();

        // Nodes live in an arena and point at their parents by index, so a
        // popped node's whole ancestry stays available for reconstruction.
        let mut arena: Vec<SearchNode> = Vec::new();
        let mut frontier: PriorityQueue<u32> = PriorityQueue::new();

        for (board, lineage) in [(initial, Lineage::Initial), (twin, Lineage::Twin)] {
            let priority = heuristic.estimate(&board);
            arena.push(SearchNode {
                board,
                parent: None,
                moves: 0,
                lineage,
            });
            frontier.push(priority, (arena.len() - 1) as u32);
        }

        let mut nodes_explored = 0;
        let goal = loop {
            let Some(current) = frontier.pop_min() else {
                // One of the two lineages always reaches the goal.
                unreachable!("frontier exhausted");
            };
            nodes_explored += 1;

            if arena[current as usize].board.is_goal() {
                break current;
            }

            let parent = arena[current as usize].parent;
            let moves = arena[current as usize].moves + 1;
            let lineage = arena[current as usize].lineage;
            for neighbor in arena[current as usize].board.neighbors() {
                // Never step straight back to the board this one came from.
                if let Some(p) = parent {
                    if neighbor == arena[p as usize].board {
                        continue;
                    }
                }
                let priority = heuristic.estimate(&neighbor) + moves;
                arena.push(SearchNode {
                    board: neighbor,
                    parent: Some(current),
                    moves,
                    lineage,
                });
                frontier.push(priority, (arena.len() - 1) as u32);
            }
        };

        if arena[goal as usize].lineage == Lineage::Twin {
            return Solver {
                solvable: false,
                moves: -1,
                solution: None,
                nodes_explored,
            };
        }

        // Walk the parent chain back to the root, then flip it so the
        // solution reads initial-to-goal.
        let mut path = Vec::with_capacity(arena[goal as usize].moves as usize + 1);
        let mut at = Some(goal);
        while let Some(idx) = at {
            path.push(arena[idx as usize].board.clone());
            at = arena[idx as usize].parent;
        }
        path.reverse();

        Solver {
            solvable: true,
            moves: (path.len() - 1) as i32,
            solution: Some(path),
            nodes_explored,
        }
    }

    /// Is the initial board solvable?
    pub fn is_solvable(&self) -> bool {
        self.solvable
    }

    /// Minimum number of moves to solve the initial board, or -1 if it is
    /// unsolvable.
    pub fn moves(&self) -> i32 {
        self.moves
    }

    /// The boards of a shortest solution, initial first and goal last, or
    /// `None` if the initial board is unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// Number of search nodes popped off the frontier.
    pub fn nodes_explored(&self) -> usize {
        self.nodes_explored
    }
}
