//! Heuristic scoring for positions the search does not resolve.
//!
//! Both evaluators score from Max's perspective and return a fixed
//! [`WIN_SCORE`] magnitude as soon as either side has already won, so a
//! decided position always dominates any positional score.

use crate::board::{Board, Cell, Player};
use crate::{HEIGHT, WIDTH};

/// Score of an already-won position; larger in magnitude than anything
/// either heuristic can produce positionally.
pub const WIN_SCORE: i32 = 100_000;

// precomputed weights by distance from the center column
const CENTER_WEIGHTS: [i32; WIDTH] = [1, 2, 3, 4, 3, 2, 1];

fn win_override(board: &Board) -> Option<i32> {
    if board.check_win(Player::Max) {
        Some(WIN_SCORE)
    } else if board.check_win(Player::Min) {
        Some(-WIN_SCORE)
    } else {
        None
    }
}

/// Scores center control: every occupied cell counts its column weight,
/// added for Max tiles and subtracted for Min tiles. Central columns
/// take part in more winning lines.
pub fn center_bias(board: &Board) -> i32 {
    if let Some(score) = win_override(board) {
        return score;
    }

    let mut score = 0;
    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            match board.get(row, col) {
                Cell::Max => score += CENTER_WEIGHTS[col],
                Cell::Min => score -= CENTER_WEIGHTS[col],
                Cell::Empty => {}
            }
        }
    }
    score
}

/// Scores horizontal spread: each column is weighted by how far it sits
/// below the tallest column (`max_height - height + 1`), so tiles in
/// tall stacks count for less than tiles played wide.
pub fn sparse_bias(board: &Board) -> i32 {
    if let Some(score) = win_override(board) {
        return score;
    }

    let mut heights = [0usize; WIDTH];
    let mut max_height = 0;
    for col in 0..WIDTH {
        for row in 0..HEIGHT {
            if board.get(row, col) != Cell::Empty {
                heights[col] += 1;
            }
        }
        max_height = max_height.max(heights[col]);
    }

    let mut score = 0;
    for col in 0..WIDTH {
        let weight = (max_height - heights[col] + 1) as i32;
        for row in 0..HEIGHT {
            match board.get(row, col) {
                Cell::Max => score += weight,
                Cell::Min => score -= weight,
                Cell::Empty => {}
            }
        }
    }
    score
}
