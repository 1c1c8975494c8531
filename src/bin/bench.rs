//! Plays computer-vs-computer games across a grid of depth pairings and
//! tabulates search effort, wall time, peak memory and the winner.

use std::time::Instant;

use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};

use connect4_minimax::board::{Board, Player};
use connect4_minimax::search::{best_move, SearchCounters};

struct Metrics {
    min_depth: u32,
    max_depth: u32,
    nodes_generated: u64,
    nodes_expanded: u64,
    elapsed_secs: f64,
    mem_kb: u64,
    winner: char,
}

/// Peak resident set size in KB, from the kernel's VmHWM accounting.
fn peak_rss_kb() -> Result<u64> {
    let status = std::fs::read_to_string("/proc/self/status")?;
    for line in status.lines() {
        if let Some(rest) = line.strip_prefix("VmHWM:") {
            let kb = rest
                .split_whitespace()
                .next()
                .ok_or_else(|| anyhow!("malformed VmHWM line: {}", line))?
                .parse::<u64>()?;
            return Ok(kb);
        }
    }
    Err(anyhow!("no VmHWM line in /proc/self/status"))
}

/// One full game: Max searches at `max_depth`, Min at `min_depth`.
/// Counters are reset on entry so each run reports its own node totals.
fn run_game(min_depth: u32, max_depth: u32, counters: &mut SearchCounters) -> char {
    counters.reset();
    let mut board = Board::new();

    while !board.is_full() && board.winner().is_none() {
        if !board.check_win(Player::Min) {
            let mv = best_move(&mut board, max_depth, Player::Max, counters);
            if mv.col >= 0 {
                board.apply_move(mv.col as usize, Player::Max);
            }
        }
        if !board.check_win(Player::Max) {
            let mv = best_move(&mut board, min_depth, Player::Min, counters);
            if mv.col >= 0 {
                board.apply_move(mv.col as usize, Player::Min);
            }
        }
    }

    match board.winner() {
        Some(Player::Max) => 'X',
        Some(Player::Min) => 'O',
        None => 'D',
    }
}

fn main() -> Result<()> {
    let combos: [(u32, u32); 9] = [
        (2, 2),
        (2, 4),
        (2, 8),
        (4, 2),
        (4, 4),
        (4, 8),
        (8, 2),
        (8, 4),
        (8, 8),
    ];

    let progress = ProgressBar::new(combos.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Running games: {bar:40.cyan/blue} {pos}/{len} {msg}")
            .progress_chars("█▓▒░  "),
    );

    let mut counters = SearchCounters::new();
    let mut results = Vec::with_capacity(combos.len());

    for &(min_depth, max_depth) in combos.iter() {
        progress.set_message(&format!("minD={} maxD={}", min_depth, max_depth));

        let start = Instant::now();
        let winner = run_game(min_depth, max_depth, &mut counters);
        let elapsed = start.elapsed();

        results.push(Metrics {
            min_depth,
            max_depth,
            nodes_generated: counters.nodes_generated,
            nodes_expanded: counters.nodes_expanded,
            elapsed_secs: elapsed.as_secs_f64(),
            mem_kb: peak_rss_kb()?,
            winner,
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    println!(
        "{:<6}{:<6}{:<18}{:<18}{:<12}{:<10}{:<8}",
        "minD", "maxD", "nodesGenerated", "nodesExpanded", "time(s)", "mem(KB)", "winner"
    );
    for m in results.iter() {
        println!(
            "{:<6}{:<6}{:<18}{:<18}{:<12.3}{:<10}{:<8}",
            m.min_depth,
            m.max_depth,
            m.nodes_generated,
            m.nodes_expanded,
            m.elapsed_secs,
            m.mem_kb,
            m.winner
        );
    }
    Ok(())
}
