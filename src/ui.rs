#![cfg(feature = "std")]

//! Plain-text rendering of a match for the terminal front end.

use std::fmt::Write;

use crate::{Coordinate, GameEngine, GameStatus, Player};

fn symbol(owner: Option<Player>, highlighted: bool) -> char {
    match (owner, highlighted) {
        (None, _) => '.',
        (Some(Player::Red), false) => 'r',
        (Some(Player::Yellow), false) => 'y',
        (Some(Player::Red), true) => 'R',
        (Some(Player::Yellow), true) => 'Y',
    }
}

/// Render every layer, top layer first, with `x` across and `z` down.
///
/// Pieces show as `r`/`y`; pieces on a winning line are upper-case.
pub fn render_lattice<const N: usize>(engine: &GameEngine<N>) -> String {
    let winning = engine.winning_cells(engine.compute_status());
    let mut out = String::new();
    let n = N as i32;

    for y in (0..n).rev() {
        let _ = write!(out, "  y={}   ", y);
        for x in 0..n {
            let _ = write!(out, "{} ", x);
        }
        out.push('\n');
        for z in 0..n {
            let _ = write!(out, "   z={}  ", z);
            for x in 0..n {
                let c = Coordinate::new(x, y, z);
                let lit = winning.get(c).unwrap_or(false);
                out.push(symbol(engine.piece_at(c), lit));
                out.push(' ');
            }
            out.push('\n');
        }
    }
    out
}

/// One-line description of the match state.
pub fn render_status<const N: usize>(engine: &GameEngine<N>) -> String {
    match engine.compute_status() {
        GameStatus::Playing => {
            let mut line = format!("{} to move", engine.current_turn());
            if let Some(last) = engine.last_piece() {
                let _ = write!(line, " (last: {} at {})", last.player, last.coord);
            }
            line
        }
        GameStatus::Draw => "Draw: the lattice is full".to_string(),
        status => {
            let lines = engine.winning_lines_for(status).len();
            let winner = status.winner().map(Player::name).unwrap_or("Nobody");
            format!("{} wins with {} line(s)!", winner, lines)
        }
    }
}

/// Help text for the interactive session.
pub fn render_help() -> &'static str {
    "Commands:\n  \
     <x> <z>        drop a piece into column (x, z)\n  \
     <x> <y> <z>    place at an explicit cell\n  \
     undo           take back the last move\n  \
     reset          start a new match\n  \
     help           show this text\n  \
     quit           leave the game\n"
}
