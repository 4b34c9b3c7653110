use crate::board::{Board, MAX_DIM};
use std::fmt;
use std::fs;
use std::io;

/// Error type for puzzle parsing operations.
#[derive(Debug)]
pub enum PuzzleError {
    /// IO error when reading from file
    Io(io::Error),
    /// Invalid puzzle content
    InvalidPuzzle(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::Io(err) => write!(f, "IO error: {}", err),
            PuzzleError::InvalidPuzzle(msg) => write!(f, "Invalid puzzle: {}", msg),
        }
    }
}

impl From<io::Error> for PuzzleError {
    fn from(err: io::Error) -> Self {
        PuzzleError::Io(err)
    }
}

impl From<String> for PuzzleError {
    fn from(err: String) -> Self {
        PuzzleError::InvalidPuzzle(err)
    }
}

/// A collection of sliding-tile puzzles.
#[derive(Debug)]
pub struct Puzzles {
    boards: Vec<Board>,
}

impl Puzzles {
    /// Parse puzzles from a string.
    ///
    /// Each puzzle is a dimension N followed by N*N tile values in row-major
    /// order, 0 standing for the blank, all whitespace separated. Lines
    /// starting with `#` are comments. A file usually holds one puzzle, but
    /// several may be concatenated.
    ///
    /// Every puzzle is checked to be a permutation of 0..N*N before a board
    /// is built, so the solver never sees a malformed grid.
    pub fn from_text(contents: &str) -> Result<Self, PuzzleError> {
        let mut tokens = contents
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(str::split_whitespace);

        let mut boards = Vec::new();
        while let Some(token) = tokens.next() {
            let n: usize = token
                .parse()
                .map_err(|_| format!("expected a board dimension, found '{}'", token))?;
            if !(2..=MAX_DIM).contains(&n) {
                return Err(format!(
                    "dimension must be between 2 and {}, got {}",
                    MAX_DIM, n
                )
                .into());
            }

            let mut tiles = Vec::with_capacity(n * n);
            let mut seen = vec![false; n * n];
            for _ in 0..n * n {
                let token = tokens.next().ok_or_else(|| {
                    format!(
                        "puzzle of dimension {} ends after {} of {} tiles",
                        n,
                        tiles.len(),
                        n * n
                    )
                })?;
                let value: usize = token
                    .parse()
                    .map_err(|_| format!("expected a tile value, found '{}'", token))?;
                if value >= n * n {
                    return Err(format!(
                        "tile value {} out of range for dimension {}",
                        value, n
                    )
                    .into());
                }
                if seen[value] {
                    return Err(format!("duplicate tile value {}", value).into());
                }
                seen[value] = true;
                tiles.push(value as u8);
            }

            boards.push(Board::new(n, &tiles));
        }

        if boards.is_empty() {
            return Err("no puzzles found".to_string().into());
        }

        Ok(Puzzles { boards })
    }

    /// Parse puzzles from a text file.
    pub fn from_file(path: &str) -> Result<Self, PuzzleError> {
        let contents = fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    /// Get the nth puzzle (0-indexed).
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Get the number of puzzles.
    pub fn len(&self) -> usize {
        self.boards.len()
    }
}
