mod board;
mod heuristic;
mod pqueue;
mod puzzles;
mod scramble;
mod solver;

use board::{Board, MAX_DIM};
use clap::{Parser, ValueEnum};
use heuristic::{Hamming, Heuristic, Manhattan};
use puzzles::Puzzles;
use scramble::scramble;
use solver::Solver;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicType {
    Manhattan,
    Hamming,
}

fn print_solution(solver: &Solver) {
    match solver.solution() {
        Some(solution) => {
            println!("Minimum number of moves = {}", solver.moves());
            for board in solution {
                println!("{}", board);
            }
        }
        None => println!("No solution possible"),
    }
}

struct PuzzleStats {
    solved: bool,
    moves: i32,
    states_explored: usize,
    elapsed_ms: u128,
}

fn solve_puzzle_helper<H: Heuristic>(
    name: &str,
    board: Board,
    heuristic: H,
    print: bool,
) -> PuzzleStats {
    let start = Instant::now();
    let solver = Solver::with_heuristic(board, &heuristic);
    let elapsed_ms = start.elapsed().as_millis();

    let solved_char = if solver.is_solvable() { 'Y' } else { 'N' };
    println!(
        "puzzle: {:<20}  solvable: {}  moves: {:<5}  states: {:<10}  elapsed: {} ms",
        name,
        solved_char,
        solver.moves(),
        solver.nodes_explored(),
        elapsed_ms
    );

    if print {
        print_solution(&solver);
    }

    PuzzleStats {
        solved: solver.is_solvable(),
        moves: solver.moves(),
        states_explored: solver.nodes_explored(),
        elapsed_ms,
    }
}

fn solve_puzzle(
    name: &str,
    board: Board,
    heuristic_type: HeuristicType,
    print: bool,
) -> PuzzleStats {
    match heuristic_type {
        HeuristicType::Manhattan => solve_puzzle_helper(name, board, Manhattan, print),
        HeuristicType::Hamming => solve_puzzle_helper(name, board, Hamming, print),
    }
}

#[derive(Parser)]
#[command(name = "taquin")]
#[command(about = "An A* solver for the N-by-N sliding-tile puzzle", long_about = None)]
struct Args {
    /// Puzzle files (dimension N, then N*N tiles in row-major order, 0 for
    /// the blank)
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Print the solution board-by-board
    #[arg(short, long)]
    print_solution: bool,

    /// Heuristic driving the search priority
    #[arg(short = 'H', long, value_enum, default_value = "manhattan")]
    heuristic: HeuristicType,

    /// Solve a scrambled N-by-N board instead of reading files
    #[arg(long, value_name = "N", conflicts_with = "files")]
    random: Option<usize>,

    /// Number of scramble slides for --random
    #[arg(long, default_value = "40")]
    steps: usize,

    /// RNG seed for --random (picked from entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    // Collect the boards to solve, each under a display name
    let mut jobs: Vec<(String, Board)> = Vec::new();

    if let Some(n) = args.random {
        if !(2..=MAX_DIM).contains(&n) {
            eprintln!("Error: --random dimension must be between 2 and {}", MAX_DIM);
            std::process::exit(1);
        }
        let seed = args.seed.unwrap_or_else(rand::random);
        let name = format!("random-{}x{}-seed-{}", n, n, seed);
        jobs.push((name, scramble(n, args.steps, seed)));
    } else {
        if args.files.is_empty() {
            eprintln!("Error: no puzzle files given (use --random N for a scrambled board)");
            std::process::exit(1);
        }
        for file in &args.files {
            let puzzles = match Puzzles::from_file(file) {
                Ok(puzzles) => puzzles,
                Err(e) => {
                    eprintln!("Error loading {}: {}", file, e);
                    std::process::exit(1);
                }
            };
            let multiple = puzzles.len() > 1;
            for index in 0..puzzles.len() {
                let board = puzzles.get(index).unwrap();
                let name = if multiple {
                    format!("{}:{}", file, index + 1)
                } else {
                    file.clone()
                };
                jobs.push((name, board.clone()));
            }
        }
    }

    if args.print_solution && jobs.len() > 1 {
        eprintln!("Error: solution printing only supported when solving a single puzzle");
        std::process::exit(1);
    }

    // Solve each puzzle, accumulating summary statistics
    let num_puzzles = jobs.len();
    let mut total_solved = 0;
    let mut total_moves = 0;
    let mut total_states = 0;
    let mut total_time_ms = 0;

    for (name, board) in jobs {
        let stats = solve_puzzle(&name, board, args.heuristic, args.print_solution);

        if stats.solved {
            total_solved += 1;
            total_moves += stats.moves;
        }
        total_states += stats.states_explored;
        total_time_ms += stats.elapsed_ms;
    }

    // Print summary statistics if multiple puzzles were solved
    if num_puzzles > 1 {
        println!("---");
        println!(
            "solved: {:>3}/{:<3}                            moves: {:<5}  states: {:<10}  elapsed: {} ms",
            total_solved, num_puzzles, total_moves, total_states, total_time_ms
        );
    }
}
