use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_minimax::board::{Board, Player};
use connect4_minimax::search::{best_move, SearchCounters};

use crossterm::{
    cursor::MoveTo,
    terminal::{Clear, ClearType},
    QueueableCommand,
};

const DEFAULT_DEPTH: u32 = 4;

fn clear_screen() -> Result<()> {
    let mut stdout = stdout();
    stdout.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    // cutoff depth for the computer's search, overridable from the CLI
    let depth = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u32>())
        .transpose()?
        .unwrap_or(DEFAULT_DEPTH);

    let mut board = Board::new();
    let mut counters = SearchCounters::new();
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop until the board fills or either side wins
    while !board.is_full() && board.winner().is_none() {
        board.render(&mut stdout())?;

        // human (Min) turn
        print!("Enter your move (0-6): ");
        stdout().flush().expect("failed to flush to stdout!");
        let mut input = String::new();
        stdin.read_line(&mut input)?;

        let column = match input.trim().parse::<usize>() {
            Ok(column) => column,
            Err(_) => {
                println!("Invalid number: {}", input.trim());
                continue;
            }
        };
        if let Err(err) = board.play_checked(column, Player::Min) {
            println!("Invalid move: {}. Try again.", err);
            // try the move again
            continue;
        }

        // computer (Max) turn if the game is still open
        if !board.check_win(Player::Min) {
            let reply = best_move(&mut board, depth, Player::Max, &mut counters);
            if reply.col >= 0 {
                board.apply_move(reply.col as usize, Player::Max);
            }
            clear_screen()?;
            println!("Computer move: {}", reply.col);
        }
    }

    // final board print and result
    board.render(&mut stdout())?;
    if board.winner().is_none() {
        println!("It's a Draw!");
    }
    Ok(())
}
