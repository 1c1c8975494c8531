//! A depth-bounded minimax agent for playing the board game 'Connect 4'
//!
//! This agent searches the game tree to a fixed depth with alpha-beta
//! pruning and scores the positions left unresolved with a heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::board::{Board, Player};
//! use connect4_minimax::search::{best_move, SearchCounters};
//!
//! let mut board = Board::new();
//! let mut counters = SearchCounters::new();
//! let chosen = best_move(&mut board, 4, Player::Max, &mut counters);
//!
//! assert!(chosen.col >= 0);
//! assert!(board.is_valid_move(chosen.col as usize));
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod eval;

pub mod search;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles that wins the game
pub const CONNECT: usize = 4;

// ensure a winning line fits on the board in every direction
const_assert!(CONNECT <= WIDTH && CONNECT <= HEIGHT);
