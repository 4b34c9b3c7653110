use arrayvec::ArrayVec;
use std::fmt;

/// Largest supported board dimension. Tile values and flat cell indices of a
/// 16x16 board still fit in a u8 (16*16 - 1 = 255).
pub const MAX_DIM: usize = 16;

/// An immutable arrangement of tiles on an N-by-N grid.
///
/// Tiles are numbered 1..N*N-1 with 0 for the blank. The grid is stored
/// row-major; the blank's flat index is cached so neighbor generation never
/// has to scan for it. All derived quantities (hamming, manhattan, goal test)
/// are computed on demand from the grid alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    n: u8,
    tiles: Box<[u8]>,
    blank: u8,
}

impl Board {
    /// Construct a board from a row-major snapshot of tiles, 0 for the blank.
    ///
    /// Takes an independent copy, so later mutation of the caller's slice
    /// never affects the board. The values must form a permutation of
    /// 0..n*n; that invariant is the caller's responsibility (the loader in
    /// `puzzles` enforces it for external input). Structural requirements
    /// the search itself relies on are asserted here.
    pub fn new(n: usize, tiles: &[u8]) -> Self {
        assert!(
            (2..=MAX_DIM).contains(&n),
            "dimension must be between 2 and {}",
            MAX_DIM
        );
        assert!(
            tiles.len() == n * n,
            "expected {} tiles, got {}",
            n * n,
            tiles.len()
        );
        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .expect("board has no blank cell") as u8;

        Board {
            n: n as u8,
            tiles: tiles.into(),
            blank,
        }
    }

    /// The canonical goal arrangement: 1..n*n-1 in row-major order, blank
    /// in the bottom-right corner.
    pub fn goal(n: usize) -> Self {
        assert!(
            (2..=MAX_DIM).contains(&n),
            "dimension must be between 2 and {}",
            MAX_DIM
        );
        let mut tiles: Vec<u8> = (1..=(n * n - 1) as u8).collect();
        tiles.push(0);

        Board {
            n: n as u8,
            tiles: tiles.into(),
            blank: (n * n - 1) as u8,
        }
    }

    /// Board dimension N.
    pub fn dimension(&self) -> usize {
        self.n as usize
    }

    /// Tile value at (row, col); 0 is the blank.
    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * self.n as usize + col]
    }

    /// Number of tiles not on their goal cell, blank excluded.
    ///
    /// Tile value a belongs at flat index a-1, so in the flat representation
    /// this is a single mismatch scan.
    pub fn hamming(&self) -> u32 {
        let mut count = 0;
        for (idx, &a) in self.tiles.iter().enumerate() {
            if a != 0 && idx != (a - 1) as usize {
                count += 1;
            }
        }
        count
    }

    /// Sum of the grid distances between every tile and its goal cell,
    /// blank excluded.
    pub fn manhattan(&self) -> u32 {
        let n = self.dimension();
        let mut sum = 0;
        for (idx, &a) in self.tiles.iter().enumerate() {
            if a == 0 {
                continue;
            }
            let goal = (a - 1) as usize;
            sum += ((idx / n).abs_diff(goal / n) + (idx % n).abs_diff(goal % n)) as u32;
        }
        sum
    }

    /// Is this the goal arrangement?
    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    /// A board with the first two tiles of one row exchanged, choosing a row
    /// that does not contain the blank: row 1 when the blank sits in row 0,
    /// row 0 otherwise.
    ///
    /// Exactly one of a board and its twin is solvable, which is what makes
    /// the twin usable as a solvability oracle.
    pub fn twin(&self) -> Board {
        let n = self.dimension();
        let row = if (self.blank as usize) < n { 1 } else { 0 };
        let mut twin = self.clone();
        twin.tiles.swap(row * n, row * n + 1);
        twin
    }

    /// All boards reachable by sliding one adjacent tile into the blank, in
    /// the fixed order down, right, left, up (slides off the grid skipped).
    ///
    /// Every returned board owns a fresh copy of the grid. A board always
    /// has at least two neighbors for N >= 2.
    pub fn neighbors(&self) -> ArrayVec<Board, 4> {
        let n = self.dimension();
        let blank = self.blank as usize;
        let (row, col) = (blank / n, blank % n);

        let mut neighbors = ArrayVec::new();
        if row != n - 1 {
            neighbors.push(self.with_blank_moved(blank + n));
        }
        if col != n - 1 {
            neighbors.push(self.with_blank_moved(blank + 1));
        }
        if col != 0 {
            neighbors.push(self.with_blank_moved(blank - 1));
        }
        if row != 0 {
            neighbors.push(self.with_blank_moved(blank - n));
        }
        neighbors
    }

    /// A copy of this board with the blank exchanged against the tile at
    /// flat index `to`, which must be grid-adjacent to the blank.
    fn with_blank_moved(&self, to: usize) -> Board {
        let mut next = self.clone();
        next.tiles.swap(self.blank as usize, to);
        next.blank = to as u8;
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension();
        writeln!(f, "{}", n)?;
        for row in 0..n {
            let mut line = String::new();
            for col in 0..n {
                line.push_str(&format!("{:2} ", self.tile(row, col)));
            }
            // Trim trailing spaces so rows round-trip through the loader
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_3x3(tiles: [u8; 9]) -> Board {
        Board::new(3, &tiles)
    }

    #[test]
    fn test_goal_board() {
        let goal = Board::goal(3);
        assert_eq!(goal.dimension(), 3);
        assert_eq!(goal.tile(0, 0), 1);
        assert_eq!(goal.tile(2, 1), 8);
        assert_eq!(goal.tile(2, 2), 0);
        assert!(goal.is_goal());
        assert_eq!(goal.hamming(), 0);
        assert_eq!(goal.manhattan(), 0);
    }

    #[test]
    fn test_hamming_and_manhattan() {
        // Classic fixture: 5 tiles misplaced, total grid distance 10.
        let board = board_3x3([8, 1, 3, 4, 0, 2, 7, 6, 5]);
        assert_eq!(board.hamming(), 5);
        assert_eq!(board.manhattan(), 10);
        assert!(!board.is_goal());
    }

    #[test]
    fn test_manhattan_dominates_hamming() {
        let boards = [
            board_3x3([8, 1, 3, 4, 0, 2, 7, 6, 5]),
            board_3x3([0, 1, 3, 4, 2, 5, 7, 8, 6]),
            board_3x3([1, 2, 3, 4, 5, 6, 8, 7, 0]),
            Board::goal(4),
        ];
        for board in &boards {
            assert!(board.manhattan() >= board.hamming());
        }
    }

    #[test]
    fn test_twin_blank_in_top_row() {
        // Blank in row 0: the exchange must happen in row 1.
        let board = board_3x3([0, 1, 3, 4, 2, 5, 7, 8, 6]);
        let twin = board.twin();
        assert_eq!(twin.tile(0, 0), 0);
        assert_eq!(twin.tile(1, 0), 2);
        assert_eq!(twin.tile(1, 1), 4);
        assert_ne!(twin, board);
    }

    #[test]
    fn test_twin_blank_elsewhere() {
        // Blank in the bottom row: the exchange happens in row 0.
        let board = Board::goal(3);
        let twin = board.twin();
        assert_eq!(twin.tile(0, 0), 2);
        assert_eq!(twin.tile(0, 1), 1);
        assert_eq!(twin.tile(2, 2), 0);
        assert_ne!(twin, board);
    }

    #[test]
    fn test_twin_twice_is_identity() {
        let board = board_3x3([8, 1, 3, 4, 0, 2, 7, 6, 5]);
        assert_eq!(board.twin().twin(), board);
    }

    #[test]
    fn test_neighbors_center_blank() {
        let board = board_3x3([8, 1, 3, 4, 0, 2, 7, 6, 5]);
        let neighbors = board.neighbors();
        assert_eq!(neighbors.len(), 4);

        // Fixed order: down, right, left, up.
        assert_eq!(neighbors[0].tile(1, 1), 6);
        assert_eq!(neighbors[1].tile(1, 1), 2);
        assert_eq!(neighbors[2].tile(1, 1), 4);
        assert_eq!(neighbors[3].tile(1, 1), 1);
    }

    #[test]
    fn test_neighbors_corner_blank() {
        let board = board_3x3([0, 1, 3, 4, 2, 5, 7, 8, 6]);
        let neighbors = board.neighbors();
        assert_eq!(neighbors.len(), 2);

        // Down first, then right.
        assert_eq!(neighbors[0].tile(0, 0), 4);
        assert_eq!(neighbors[1].tile(0, 0), 1);
    }

    #[test]
    fn test_neighbors_edge_blank() {
        let board = board_3x3([1, 0, 3, 4, 2, 5, 7, 8, 6]);
        assert_eq!(board.neighbors().len(), 3);
    }

    #[test]
    fn test_neighbors_differ_by_one_blank_slide() {
        let board = board_3x3([8, 1, 3, 4, 0, 2, 7, 6, 5]);
        for neighbor in board.neighbors() {
            let differing: Vec<usize> = (0..9)
                .filter(|&i| board.tile(i / 3, i % 3) != neighbor.tile(i / 3, i % 3))
                .collect();
            // Exactly two grid-adjacent cells change, and one held the blank.
            assert_eq!(differing.len(), 2);
            let (a, b) = (differing[0], differing[1]);
            assert_eq!((a / 3).abs_diff(b / 3) + (a % 3).abs_diff(b % 3), 1);
            assert!(differing.iter().any(|&i| board.tile(i / 3, i % 3) == 0));
        }
    }

    #[test]
    fn test_equality_structural() {
        let a = board_3x3([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let b = Board::goal(3);
        assert_eq!(a, b);

        let c = board_3x3([1, 2, 3, 4, 5, 6, 8, 7, 0]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_equality_dimension_mismatch() {
        assert_ne!(Board::goal(2), Board::goal(3));
    }

    #[test]
    fn test_constructor_copies_tiles() {
        let mut tiles = vec![1, 2, 3, 4, 5, 6, 7, 8, 0];
        let board = Board::new(3, &tiles);
        tiles[0] = 8;
        assert_eq!(board.tile(0, 0), 1);
        assert!(board.is_goal());
    }

    #[test]
    fn test_display_format() {
        let expected = "3\n 1  2  3\n 4  5  6\n 7  8  0\n";
        assert_eq!(Board::goal(3).to_string(), expected);
    }

    #[test]
    fn test_display_two_digit_tiles() {
        let output = Board::goal(4).to_string();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "4");
        assert_eq!(lines[4], "13 14 15  0");
    }

    #[test]
    #[should_panic(expected = "expected 9 tiles")]
    fn test_wrong_tile_count() {
        Board::new(3, &[1, 2, 3, 0]);
    }

    #[test]
    #[should_panic(expected = "no blank cell")]
    fn test_missing_blank() {
        Board::new(2, &[1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "dimension must be between")]
    fn test_dimension_too_small() {
        Board::new(1, &[0]);
    }
}
