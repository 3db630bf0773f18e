//! The rules engine for the board game 'Connect 4', in its Classic
//! and PopOut variants
//!
//! The engine validates and applies moves, detects four-in-a-row wins
//! and full boards, and tracks whose turn it is. Rendering and input
//! are left to the caller.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{game::{ConnectFour, GameStatus, Move, Variant}, player::Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = ConnectFour::from_moves(Variant::PopOut, "121212")?;
//! let status = game.play(Move::Drop(0))?;
//!
//! assert_eq!(status, GameStatus::Won(Player::One));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod player;

pub mod error;

pub mod game;

pub mod display;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const CONNECT: usize = 4;

// a four-in-a-row must fit on the board in every orientation
const_assert!(CONNECT <= WIDTH);
const_assert!(CONNECT <= HEIGHT);
// move notation uses a single digit per column
const_assert!(WIDTH <= 9);
