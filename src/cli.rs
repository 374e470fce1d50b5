#![cfg(feature = "std")]

//! Hot-seat terminal session: two people share one keyboard.

use std::io::{self, BufRead, Write};

use crate::ui::{render_help, render_lattice, render_status};
use crate::{Coordinate, GameEngine, GameStatus};

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Drop { x: i32, z: i32 },
    Place(Coordinate),
    Undo,
    Reset,
    Help,
    Quit,
}

/// Parse a command line. Numbers may be separated by spaces or commas.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    match input.to_ascii_lowercase().as_str() {
        "undo" | "u" => return Ok(Command::Undo),
        "reset" | "new" => return Ok(Command::Reset),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let nums = input
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| format!("Invalid number '{}' - type 'help' for commands", s))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match nums.as_slice() {
        [x, z] => Ok(Command::Drop { x: *x, z: *z }),
        [x, y, z] => Ok(Command::Place(Coordinate::new(*x, *y, *z))),
        _ => Err(format!(
            "Expected 2 or 3 numbers, got {} - type 'help' for commands",
            nums.len()
        )),
    }
}

/// Run a session until `quit` or end of input, returning the final status.
pub fn run_session<R: BufRead, W: Write, const N: usize>(
    engine: &mut GameEngine<N>,
    input: R,
    mut out: W,
) -> io::Result<GameStatus> {
    writeln!(out, "{}", render_help())?;
    writeln!(out, "{}", render_lattice(engine))?;
    writeln!(out, "{}", render_status(engine))?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "✗ {}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", render_help())?;
                continue;
            }
            Command::Undo => {
                if engine.undo_last().is_none() {
                    writeln!(out, "✗ Nothing to undo")?;
                    continue;
                }
            }
            Command::Reset => engine.reset(),
            Command::Drop { x, z } => {
                if let Err(e) = engine.drop_in_column(x, z) {
                    writeln!(out, "✗ {}", e)?;
                    continue;
                }
            }
            Command::Place(c) => {
                if let Err(e) = engine.try_place(c, None) {
                    writeln!(out, "✗ {}", e)?;
                    continue;
                }
            }
        }

        writeln!(out, "{}", render_lattice(engine))?;
        writeln!(out, "{}", render_status(engine))?;
    }

    Ok(engine.compute_status())
}
