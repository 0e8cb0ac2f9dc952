use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use wavefront::klotski::{legal_moves, Board, Solver, CLASSIC_BOARD};
use wavefront::search::{worker_pool, BfsConfig};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "klotski")]
#[command(about = "klotski - parallel sliding-block puzzle solver")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board with the parallel BFS engine
    Solve {
        /// Path to a board file (the classic layout if omitted)
        board: Option<PathBuf>,

        /// Goal cell for the hero's first cell, as ROW,COL
        #[arg(long, default_value = "3,1")]
        goal: String,

        /// Frontier queue capacity (must cover a full wavefront plus its
        /// marker, or the search can stall)
        #[arg(long)]
        capacity: Option<usize>,

        /// Number of worker threads (all logical CPUs if omitted)
        #[arg(long, short = 'j')]
        workers: Option<usize>,

        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
    /// Print the legal moves of a board position
    Moves {
        /// Path to a board file (the classic layout if omitted)
        board: Option<PathBuf>,
    },
}

fn load_board_text(path: &Option<PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(CLASSIC_BOARD.to_string()),
    }
}

fn parse_goal(text: &str) -> Result<(usize, usize), String> {
    let parts: Vec<&str> = text.split(',').map(|s| s.trim()).collect();
    if parts.len() != 2 {
        return Err(format!("Invalid goal '{}', expected ROW,COL", text));
    }
    let row = parts[0]
        .parse::<usize>()
        .map_err(|_| format!("Invalid goal row: {}", parts[0]))?;
    let col = parts[1]
        .parse::<usize>()
        .map_err(|_| format!("Invalid goal column: {}", parts[1]))?;
    Ok((row, col))
}

// --- Solve Command ---

fn solve_board(
    board_path: &Option<PathBuf>,
    goal: &str,
    capacity: Option<usize>,
    workers: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = load_board_text(board_path)?;
    let (goal_row, goal_col) = parse_goal(goal)?;
    let board = Board::parse_with_goal(&text, goal_row, goal_col)?;

    println!("Solving board ({}x{} cells):", board.cols(), board.rows());
    println!("{}", board.grid());

    let mut config = BfsConfig::default();
    if let Some(capacity) = capacity {
        config = config.with_capacity(capacity);
    }

    let threads = workers.unwrap_or(0);
    let pool = worker_pool(threads)?;
    println!("Workers: {}", pool.current_num_threads());

    let solver = Solver::new(board.clone())
        .with_config(config)
        .with_executor(Arc::new(pool));

    let report = solver.solve()?;

    match report.solution {
        Some(solution) => {
            println!("\nSolution found: {} moves", solution.len());
            for (step, mv) in solution.moves.iter().enumerate() {
                println!(
                    "  {:3}. move '{}' {}",
                    step + 1,
                    mv.piece,
                    mv.direction(board.stride())
                );
            }
            println!("\nPositions:");
            for position in &solution.positions {
                println!("{}", position);
            }
        }
        None => {
            println!("\nNo solution: the reachable state space was exhausted.");
        }
    }

    println!("Search Statistics:");
    print!("{}", report.statistics.format_summary());
    Ok(())
}

// --- Moves Command ---

fn show_moves(board_path: &Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let text = load_board_text(board_path)?;
    let board = Board::parse_with_goal(&text, 0, 0)?;

    println!("{}", board.grid());
    let moves = legal_moves(&board, board.grid());
    println!("{} legal moves:", moves.len());
    for mv in moves {
        println!("  move '{}' {}", mv.piece, mv.direction(board.stride()));
    }
    Ok(())
}

// --- Main Function ---

fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Solve {
            board,
            goal,
            capacity,
            workers,
            verbose,
        } => {
            tracing_subscriber::fmt()
                .with_max_level(if verbose {
                    tracing::Level::DEBUG
                } else {
                    tracing::Level::INFO
                })
                .init();

            if let Err(e) = solve_board(&board, &goal, capacity, workers) {
                eprintln!("Error solving board: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Moves { board } => {
            if let Err(e) = show_moves(&board) {
                eprintln!("Error reading board: {}", e);
                std::process::exit(1);
            }
        }
    }
}
