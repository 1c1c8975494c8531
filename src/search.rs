//! Depth-bounded alpha-beta minimax and top-level move selection.

use crate::board::{Board, Move, Player};
use crate::eval::{center_bias, sparse_bias};
use crate::WIDTH;

/// Node counters threaded through the search by reference.
///
/// Every entry into [`minimax`] counts one generated node; entries that
/// go on to enumerate children also count one expanded node. The
/// counters belong to the caller, who resets them before each
/// independent run.
#[derive(Copy, Clone, Debug, Default)]
pub struct SearchCounters {
    pub nodes_generated: u64,
    pub nodes_expanded: u64,
}

impl SearchCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Alpha-beta minimax over a mutable board, restored on the way out.
///
/// `maximizing` says whose turn this call searches; it also selects the
/// leaf evaluator: center bias on maximizing calls, sparse bias on
/// minimizing calls, irrespective of board content. That coupling is
/// load-bearing for the engine's observed play and must not change.
///
/// The prune test uses `beta <= alpha`, so exact ties cut the remaining
/// siblings as well. When no column is playable the maximizing branch
/// falls through to `i32::MIN` and the minimizing branch to `i32::MAX`;
/// callers treat those as "no improvement possible", never as a score.
pub fn minimax(
    board: &mut Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    counters: &mut SearchCounters,
) -> i32 {
    counters.nodes_generated += 1;

    if depth == 0
        || board.check_win(Player::Max)
        || board.check_win(Player::Min)
        || board.is_full()
    {
        return if maximizing {
            center_bias(board)
        } else {
            sparse_bias(board)
        };
    }
    counters.nodes_expanded += 1;

    if maximizing {
        let mut best = i32::MIN;
        for col in 0..WIDTH {
            if !board.is_valid_move(col) {
                continue;
            }
            board.apply_move(col, Player::Max);
            let score = minimax(board, depth - 1, alpha, beta, false, counters);
            board.undo_move(col);

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for col in 0..WIDTH {
            if !board.is_valid_move(col) {
                continue;
            }
            board.apply_move(col, Player::Min);
            let score = minimax(board, depth - 1, alpha, beta, true, counters);
            board.undo_move(col);

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Tries every legal column once for `player` and keeps the strictly
/// best reply.
///
/// Each root move is searched with a fresh unbounded window and the turn
/// flag handed to the other side. The comparison is strict, so equal
/// scores keep the earlier column and ties resolve leftmost. Returns
/// [`Move::none`] only when no column is playable.
pub fn best_move(
    board: &mut Board,
    depth: u32,
    player: Player,
    counters: &mut SearchCounters,
) -> Move {
    let mut best_val = match player {
        Player::Max => i32::MIN,
        Player::Min => i32::MAX,
    };
    let mut best = Move::none();

    for col in 0..WIDTH {
        if !board.is_valid_move(col) {
            continue;
        }
        let row = match board.apply_move(col, player) {
            Some(row) => row,
            None => continue,
        };
        let score = minimax(
            board,
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            player == Player::Min,
            counters,
        );
        board.undo_move(col);

        let improves = match player {
            Player::Max => score > best_val,
            Player::Min => score < best_val,
        };
        if improves {
            best_val = score;
            best = Move {
                row: row as i32,
                col: col as i32,
            };
        }
    }

    best
}
