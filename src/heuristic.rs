use crate::board::Board;

/// Trait for priority functions that estimate the number of moves remaining
/// to reach the goal board.
///
/// Estimates must never exceed the true distance, or the search loses its
/// minimality guarantee.
pub trait Heuristic {
    /// Compute a lower bound on the number of moves from `board` to the goal.
    fn estimate(&self, board: &Board) -> u32;
}

/// Sum of tile grid-distances to their goal cells. The default: tight enough
/// to keep the frontier small on 3x3 and most 4x4 boards.
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, board: &Board) -> u32 {
        board.manhattan()
    }
}

/// Count of misplaced tiles. Admissible but much weaker than [`Manhattan`];
/// mostly useful for comparing explored-state counts between the two.
pub struct Hamming;

impl Heuristic for Hamming {
    fn estimate(&self, board: &Board) -> u32 {
        board.hamming()
    }
}
