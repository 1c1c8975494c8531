//! Plays one computer-vs-computer game and writes the full transcript,
//! board render plus chosen move per ply, to a file under data/.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Result};

use connect4_minimax::board::{Board, Player};
use connect4_minimax::search::{best_move, SearchCounters};

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        return Err(anyhow!("Usage: {} <minDepth> <maxDepth>", args[0]));
    }
    let min_depth: u32 = args[1]
        .parse()
        .map_err(|_| anyhow!("invalid minDepth: {}", args[1]))?;
    let max_depth: u32 = args[2]
        .parse()
        .map_err(|_| anyhow!("invalid maxDepth: {}", args[2]))?;

    let path = PathBuf::from(format!("data/record-{}-{}.txt", min_depth, max_depth));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| anyhow!("error creating {}: {}", parent.display(), err))?;
    }
    let mut fout = File::create(&path)
        .map_err(|err| anyhow!("error opening {}: {}", path.display(), err))?;

    let mut board = Board::new();
    let mut counters = SearchCounters::new();

    // game loop until the board fills or either side wins
    while !board.is_full() && board.winner().is_none() {
        board.render(&mut fout)?;

        // computer (Max) turn
        if !board.check_win(Player::Min) {
            let mv = best_move(&mut board, max_depth, Player::Max, &mut counters);
            if mv.col >= 0 {
                board.apply_move(mv.col as usize, Player::Max);
                writeln!(fout, "Max Computer move: {}", mv.col)?;
            }
        }

        // computer (Min) turn
        if !board.check_win(Player::Max) {
            let mv = best_move(&mut board, min_depth, Player::Min, &mut counters);
            if mv.col >= 0 {
                board.apply_move(mv.col as usize, Player::Min);
                writeln!(fout, "Min Computer move: {}", mv.col)?;
            }
        }
    }

    // final board print and result
    board.render(&mut fout)?;
    Ok(())
}
