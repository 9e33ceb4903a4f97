use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use sokosolve::{solve_text, Outcome, SearchOptions, SolveReport};

#[derive(Debug, Parser)]
#[command(name = "solve", about = "Optimal Sokoban solver (exhaustive BFS)")]
struct Args {
    /// Puzzle file; reads stdin when omitted
    puzzle: Option<PathBuf>,

    /// Worker threads for frontier expansion (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Emit a JSON report instead of the plain move line
    #[arg(long)]
    json: bool,

    /// Show a progress spinner on stderr while searching
    #[arg(long)]
    progress: bool,

    /// Suppress the stats line on stderr
    #[arg(long)]
    quiet: bool,
}

fn read_puzzle(path: Option<&PathBuf>) -> Result<String, String> {
    match path {
        Some(p) => {
            fs::read_to_string(p).map_err(|e| format!("Failed to read {}: {e}", p.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("Failed to read stdin: {e}"))?;
            Ok(text)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .map_err(|e| format!("Failed to build thread pool: {e}"))?;
    }

    let text = read_puzzle(args.puzzle.as_ref())?;
    let opts = SearchOptions {
        progress: args.progress,
    };

    let start = Instant::now();
    let (outcome, result) = solve_text(&text, opts)?;
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    if !args.quiet {
        eprintln!(
            "[solve] depth={} states={} expanded={} elapsed={elapsed_ms}ms",
            result.depth, result.states_seen, result.expanded
        );
    }

    if args.json {
        let report = SolveReport::new(&outcome, &result, elapsed_ms);
        println!("{}", serde_json::to_string(&report)?);
        if matches!(outcome, Outcome::Unsolvable) {
            std::process::exit(1);
        }
        return Ok(());
    }

    match outcome {
        Outcome::Solved { moves } => {
            println!("{moves}");
            Ok(())
        }
        Outcome::Unsolvable => {
            eprintln!("no solution");
            std::process::exit(1);
        }
    }
}
