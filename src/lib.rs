#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod bitboard;
#[cfg(feature = "std")]
mod cli;
mod common;
mod config;
mod coord;
mod game;
mod lines;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
#[cfg(feature = "std")]
pub use cli::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use lines::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::*;
