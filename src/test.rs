#[cfg(test)]
pub mod test {
    use crate::board::{Board, Player};
    use crate::eval::{center_bias, sparse_bias, WIN_SCORE};
    use crate::search::{best_move, minimax, SearchCounters};
    use crate::{HEIGHT, WIDTH};

    fn board_from_moves(moves: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(col, player) in moves {
            board.apply_move(col, player);
        }
        board
    }

    /// Minimax without any pruning, used as the reference the pruned
    /// search must agree with. Terminal handling and leaf evaluator
    /// selection mirror the real search exactly.
    fn minimax_unpruned(board: &mut Board, depth: u32, maximizing: bool) -> i32 {
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

        let player = if maximizing { Player::Max } else { Player::Min };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for col in 0..WIDTH {
            if !board.is_valid_move(col) {
                continue;
            }
            board.apply_move(col, player);
            let score = minimax_unpruned(board, depth - 1, !maximizing);
            board.undo_move(col);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    #[test]
    pub fn pruning_never_changes_the_score() {
        let positions: [&[(usize, Player)]; 3] = [
            &[],
            &[
                (3, Player::Max),
                (2, Player::Min),
                (3, Player::Max),
                (4, Player::Min),
                (5, Player::Max),
                (3, Player::Min),
            ],
            &[
                (0, Player::Max),
                (0, Player::Min),
                (6, Player::Max),
                (6, Player::Min),
                (1, Player::Max),
                (5, Player::Min),
                (2, Player::Max),
            ],
        ];

        for moves in positions.iter() {
            let mut board = board_from_moves(moves);
            for depth in 1..=4 {
                for &maximizing in [true, false].iter() {
                    let mut counters = SearchCounters::new();
                    let pruned = minimax(
                        &mut board,
                        depth,
                        i32::MIN,
                        i32::MAX,
                        maximizing,
                        &mut counters,
                    );
                    let reference = minimax_unpruned(&mut board, depth, maximizing);
                    assert_eq!(
                        pruned, reference,
                        "depth {} maximizing {} diverged",
                        depth, maximizing
                    );
                }
            }
        }
    }

    #[test]
    pub fn search_leaves_the_board_untouched() {
        let mut board = board_from_moves(&[(3, Player::Max), (3, Player::Min), (2, Player::Max)]);
        let before = board.clone();

        let mut counters = SearchCounters::new();
        minimax(&mut board, 5, i32::MIN, i32::MAX, true, &mut counters);
        assert_eq!(board, before);

        best_move(&mut board, 4, Player::Min, &mut counters);
        assert_eq!(board, before);
    }

    #[test]
    pub fn best_move_plays_a_valid_column() {
        let boards = [
            board_from_moves(&[]),
            board_from_moves(&[(0, Player::Max), (0, Player::Min), (4, Player::Max)]),
        ];
        for board in boards.iter() {
            for &player in [Player::Max, Player::Min].iter() {
                let mut board = board.clone();
                let mut counters = SearchCounters::new();
                let mv = best_move(&mut board, 3, player, &mut counters);
                assert!(mv.col >= 0);
                assert!(board.is_valid_move(mv.col as usize));
            }
        }
    }

    #[test]
    pub fn best_move_on_a_full_board_is_the_sentinel() {
        let mut board = Board::new();
        for col in 0..WIDTH {
            for _ in 0..HEIGHT {
                board.apply_move(col, Player::Max);
            }
        }
        let mut counters = SearchCounters::new();
        let mv = best_move(&mut board, 3, Player::Min, &mut counters);
        assert_eq!(mv.col, -1);
        assert_eq!(mv.row, -1);
    }

    #[test]
    pub fn depth_one_ties_resolve_leftmost() {
        // at depth 1 every first move for Max reaches its leaf through a
        // minimizing call, so the sparse evaluator scores them all
        // equally and the strict comparison keeps column 0
        let mut board = Board::new();
        let mut counters = SearchCounters::new();
        let mv = best_move(&mut board, 1, Player::Max, &mut counters);
        assert_eq!(mv.col, 0);
    }

    #[test]
    pub fn best_move_completes_a_win() {
        // Max has three on the bottom row, columns 0..2
        let mut board =
            board_from_moves(&[(0, Player::Max), (1, Player::Max), (2, Player::Max)]);
        let mut counters = SearchCounters::new();
        let mv = best_move(&mut board, 1, Player::Max, &mut counters);
        assert_eq!(mv.col, 3);

        board.apply_move(3, Player::Max);
        assert!(board.check_win(Player::Max));
    }

    #[test]
    pub fn best_move_blocks_an_opponent_win() {
        let mut board =
            board_from_moves(&[(0, Player::Max), (1, Player::Max), (2, Player::Max)]);
        let mut counters = SearchCounters::new();
        let mv = best_move(&mut board, 2, Player::Min, &mut counters);
        assert_eq!(mv.col, 3);
    }

    #[test]
    pub fn evaluators_return_the_win_sentinel() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.apply_move(2, Player::Max);
        }
        assert_eq!(center_bias(&board), WIN_SCORE);
        assert_eq!(sparse_bias(&board), WIN_SCORE);

        let mut board = Board::new();
        for col in 0..4 {
            board.apply_move(col, Player::Min);
        }
        assert_eq!(center_bias(&board), -WIN_SCORE);
        assert_eq!(sparse_bias(&board), -WIN_SCORE);
    }

    #[test]
    pub fn center_bias_weights_by_column() {
        let board = board_from_moves(&[(3, Player::Max)]);
        assert_eq!(center_bias(&board), 4);

        let board = board_from_moves(&[(0, Player::Max), (6, Player::Min)]);
        assert_eq!(center_bias(&board), 0);

        let board = board_from_moves(&[(1, Player::Min)]);
        assert_eq!(center_bias(&board), -2);
    }

    #[test]
    pub fn sparse_bias_prefers_spread_over_stacks() {
        // two tiles in column 0 plus one in column 1: the shorter column
        // carries weight 2, so the spread position outscores the stack
        let spread = board_from_moves(&[(0, Player::Max), (0, Player::Max), (1, Player::Max)]);
        let stack =
            board_from_moves(&[(0, Player::Max), (0, Player::Max), (0, Player::Max)]);
        assert_eq!(sparse_bias(&spread), 4);
        assert_eq!(sparse_bias(&stack), 3);
    }

    #[test]
    pub fn counters_track_generated_and_expanded_nodes() {
        let mut board = Board::new();
        let mut counters = SearchCounters::new();
        minimax(&mut board, 2, i32::MIN, i32::MAX, true, &mut counters);

        // the root and every interior node expand; leaves only generate
        assert!(counters.nodes_generated > counters.nodes_expanded);
        assert!(counters.nodes_expanded >= 1);

        counters.reset();
        assert_eq!(counters.nodes_generated, 0);
        assert_eq!(counters.nodes_expanded, 0);
    }

    #[test]
    pub fn self_play_terminates_within_board_capacity() {
        let mut board = Board::new();
        let mut counters = SearchCounters::new();
        let mut total_moves = 0;

        while !board.is_full() && board.winner().is_none() {
            if !board.check_win(Player::Min) {
                let mv = best_move(&mut board, 2, Player::Max, &mut counters);
                if mv.col >= 0 {
                    board.apply_move(mv.col as usize, Player::Max);
                    total_moves += 1;
                }
            }
            if !board.check_win(Player::Max) {
                let mv = best_move(&mut board, 2, Player::Min, &mut counters);
                if mv.col >= 0 {
                    board.apply_move(mv.col as usize, Player::Min);
                    total_moves += 1;
                }
            }
        }

        assert!(total_moves <= (WIDTH * HEIGHT) as u32);
        assert!(board.is_full() || board.winner().is_some());
    }
}
