use std::io::Write;

use anyhow::{anyhow, Result};

use crate::{CONNECT, HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Max,
    Min,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Max => 'X',
            Cell::Min => 'O',
        }
    }
}

/// One of the two sides: the maximising computer or the minimising
/// opponent. Whose turn it is is never stored on the board; it is
/// threaded through the search explicitly.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    Max,
    Min,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::Max => Cell::Max,
            Player::Min => Cell::Min,
        }
    }
}

/// A column choice; the row the tile landed on is kept for reporting
/// only. `col` is -1 when the selector found no move to make, which
/// cannot happen on a board with at least one open column.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    pub fn none() -> Self {
        Move { row: -1, col: -1 }
    }
}

/// The 6x7 grid, stored row-major with row 0 at the top.
///
/// Columns fill bottom-up, so within a column the occupied cells always
/// form a contiguous block anchored at the bottom row. The grid is
/// mutated in place during search and restored with [`undo_move`];
/// no copy is ever taken.
///
/// [`undo_move`]: Board::undo_move
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    grid: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            grid: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.grid[row][col]
    }

    /// A move is valid iff the topmost cell of the column is empty.
    pub fn is_valid_move(&self, col: usize) -> bool {
        self.grid[0][col] == Cell::Empty
    }

    /// Drops a tile for `player` into the lowest empty cell of `col`,
    /// returning the row it landed on. A full column is left untouched
    /// and returns `None`; callers check validity first.
    pub fn apply_move(&mut self, col: usize, player: Player) -> Option<usize> {
        for row in (0..HEIGHT).rev() {
            if self.grid[row][col] == Cell::Empty {
                self.grid[row][col] = player.cell();
                return Some(row);
            }
        }
        None
    }

    /// Removes the topmost tile of `col`. Called with the same column
    /// immediately after a matching [`apply_move`] this restores the
    /// exact prior grid; that pair is the backtracking mechanism used
    /// throughout the search.
    ///
    /// [`apply_move`]: Board::apply_move
    pub fn undo_move(&mut self, col: usize) {
        for row in 0..HEIGHT {
            if self.grid[row][col] != Cell::Empty {
                self.grid[row][col] = Cell::Empty;
                return;
            }
        }
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|col| self.grid[0][col] != Cell::Empty)
    }

    /// Scans every cell for a line of [`CONNECT`] tiles owned by
    /// `player`: rightward, downward, down-right or down-left from the
    /// cell. Existential, so the scan order does not matter.
    pub fn check_win(&self, player: Player) -> bool {
        let target = player.cell();
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                if self.grid[row][col] != target {
                    continue;
                }
                // horizontal (right)
                if col + CONNECT <= WIDTH
                    && (1..CONNECT).all(|i| self.grid[row][col + i] == target)
                {
                    return true;
                }
                // vertical (down)
                if row + CONNECT <= HEIGHT
                    && (1..CONNECT).all(|i| self.grid[row + i][col] == target)
                {
                    return true;
                }
                // diagonal (down-right)
                if col + CONNECT <= WIDTH
                    && row + CONNECT <= HEIGHT
                    && (1..CONNECT).all(|i| self.grid[row + i][col + i] == target)
                {
                    return true;
                }
                // diagonal (down-left)
                if col + 1 >= CONNECT
                    && row + CONNECT <= HEIGHT
                    && (1..CONNECT).all(|i| self.grid[row + i][col - i] == target)
                {
                    return true;
                }
            }
        }
        false
    }

    pub fn winner(&self) -> Option<Player> {
        if self.check_win(Player::Max) {
            Some(Player::Max)
        } else if self.check_win(Player::Min) {
            Some(Player::Min)
        } else {
            None
        }
    }

    /// Checked move entry for human input. Out-of-range and full columns
    /// are rejected without touching the grid, so the caller can simply
    /// re-prompt.
    pub fn play_checked(&mut self, col: usize, player: Player) -> Result<usize> {
        if col >= WIDTH {
            return Err(anyhow!(
                "column {} out of range, columns must be between 0 and {}",
                col,
                WIDTH - 1
            ));
        }
        if !self.is_valid_move(col) {
            return Err(anyhow!("column {} is full", col));
        }
        self.apply_move(col, player)
            .ok_or_else(|| anyhow!("column {} is full", col))
    }

    /// Writes the board as rows of cell symbols followed by a separator,
    /// the column legend, and a win announcement if either side has won.
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in self.grid.iter() {
            let symbols: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(out, "{}", symbols.join(" "))?;
        }
        writeln!(out, "{}", "-".repeat(2 * WIDTH + 1))?;
        let legend: Vec<String> = (0..WIDTH).map(|col| col.to_string()).collect();
        writeln!(out, "{}", legend.join(" "))?;

        if self.check_win(Player::Max) {
            writeln!(out, "MAX (Computer) Wins!")?;
        } else if self.check_win(Player::Min) {
            writeln!(out, "MIN (You) Wins!")?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
