#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use cube_four::{
    enumerate_winning_lines, init_logging, run_session, Coordinate, GameEngine, GameStatus,
    LATTICE_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a hot-seat match in the terminal.
    Play,
    /// List every winning line of the lattice.
    Lines {
        #[arg(long, help = "Print the lines as JSON")]
        json: bool,
    },
    /// Replay placements given as x,y,z and print the resulting state as JSON.
    Replay {
        #[arg(value_parser = parse_coordinate, help = "Placements, e.g. 0,0,0 1,0,0")]
        moves: Vec<Coordinate>,
    },
}

#[cfg(feature = "std")]
fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<i32>().map_err(|_| format!("Invalid number '{}'", p)))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [x, y, z] => Ok(Coordinate::new(*x, *y, *z)),
        _ => Err(format!("Expected x,y,z but got '{}'", s)),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => {
            let mut engine = GameEngine::new();
            let stdin = std::io::stdin();
            let status = run_session(&mut engine, stdin.lock(), std::io::stdout())?;
            if status == GameStatus::Playing {
                println!("Match abandoned after {} moves.", engine.move_count());
            }
        }
        Commands::Lines { json } => {
            let lines = enumerate_winning_lines(LATTICE_SIZE);
            if json {
                println!("{}", serde_json::to_string_pretty(&lines)?);
            } else {
                for (i, line) in lines.iter().enumerate() {
                    let cells: Vec<String> = line.cells().iter().map(|c| c.to_string()).collect();
                    println!("{:2} {:?}: {}", i + 1, line.kind(), cells.join(" "));
                }
                println!("{} lines", lines.len());
            }
        }
        Commands::Replay { moves } => {
            let engine = GameEngine::from_history(&moves).map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
    }
    Ok(())
}
