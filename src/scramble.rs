use crate::board::Board;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build a random N-by-N board by walking `steps` blank slides away from the
/// goal. Walked boards stay reachable, so every scramble is solvable and its
/// optimal solution is at most `steps` moves long.
///
/// The walk is seeded for reproducibility and never undoes the slide it just
/// made, so short walks wander instead of oscillating in place.
pub fn scramble(n: usize, steps: usize, seed: u64) -> Board {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = Board::goal(n);
    let mut previous: Option<Board> = None;

    for _ in 0..steps {
        let mut candidates: Vec<Board> = board
            .neighbors()
            .into_iter()
            .filter(|b| Some(b) != previous.as_ref())
            .collect();
        let next = candidates.swap_remove(rng.gen_range(0..candidates.len()));
        previous = Some(std::mem::replace(&mut board, next));
    }

    board
}
