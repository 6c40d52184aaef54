use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use slider_puzzle::parse::{parse_board, read_board};
use slider_puzzle::render::write_step;
use slider_puzzle::scramble::{random_walk, shuffled};
use slider_puzzle::{Board, PuzzleResult, Solver};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Find a shortest solution to a sliding-tile puzzle", long_about = None)]
struct Args {
    /// Board file: the dimension followed by the tiles, 0 for the blank.
    /// Reads stdin when neither a file nor --random is given.
    board_file: Option<PathBuf>,

    /// Generate a random board of this dimension instead of reading one
    #[clap(short, long, conflicts_with = "board_file")]
    random: Option<usize>,

    /// Number of random slides away from the goal for --random
    #[clap(short, long, default_value_t = 30)]
    steps: usize,

    /// Shuffle the tiles uniformly for --random (may be unsolvable)
    #[clap(long)]
    shuffle: bool,

    /// Seed for --random
    #[clap(long)]
    seed: Option<u64>,

    /// Give up after this many node expansions
    #[clap(short, long)]
    max_expansions: Option<usize>,

    /// Colored output with the slide taken at each step
    #[clap(short, long)]
    pretty: bool,
}

fn load_board(args: &Args) -> PuzzleResult<Board> {
    if let Some(size) = args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        return if args.shuffle {
            shuffled(size, &mut rng)
        } else {
            random_walk(size, args.steps, &mut rng)
        };
    }

    match &args.board_file {
        Some(path) => read_board(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            parse_board(&input)
        }
    }
}

fn run(args: &Args) -> PuzzleResult<()> {
    let initial = load_board(args)?;
    println!("Initial board:\n{}\n", initial);

    let solver = match args.max_expansions {
        Some(limit) => Solver::with_limit(initial, limit)?,
        None => Solver::new(initial),
    };

    let Some(path) = solver.solution() else {
        println!("No solution possible");
        return Ok(());
    };

    println!("Minimum number of moves = {}", path.len() - 1);
    if args.pretty {
        let mut out = io::stdout().lock();
        for (i, board) in path.iter().enumerate() {
            let movement = i.checked_sub(1).and_then(|prev| path[prev].move_to(board));
            write_step(&mut out, i, movement, board)?;
        }
        out.flush()?;
    } else {
        for board in path {
            println!("{}", board);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
