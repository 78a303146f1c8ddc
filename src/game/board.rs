use crate::error::{Axis, BoardError};

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

/// Characters used when rendering the grid as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub empty: char,
    pub player_one: char,
    pub player_two: char,
}

impl Markers {
    pub fn for_cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::PlayerOne => self.player_one,
            Cell::PlayerTwo => self.player_two,
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            empty: '-',
            player_one: 'o',
            player_two: 'x',
        }
    }
}

/// Grid, per-column fill levels and the player to move.
///
/// `filled[col]` counts the settled pieces of a column, so the next piece
/// lands at row `ROWS - 1 - filled[col]`. Fullness is decided by the top cell,
/// which also covers a piece sitting in row 0 that has not been settled yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    filled: [usize; COLS],
    current_player: Player,
}

impl Board {
    /// Create a new empty board with Player 1 to move
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            filled: [0; COLS],
            current_player: Player::One,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        check_row(row)?;
        check_column(col)?;
        Ok(self.cells[row][col])
    }

    /// Row where the next piece in `col` lands (clamped at the top row).
    pub fn top_fill_row(&self, col: usize) -> Result<usize, BoardError> {
        check_column(col)?;
        Ok(self.landing_row(col))
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> Result<bool, BoardError> {
        check_column(col)?;
        Ok(self.cells[0][col] != Cell::Empty)
    }

    /// Check if the board is completely full
    pub fn is_board_full(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Write the current player's marker into the landing cell of `col`.
    ///
    /// Returns the row the marker landed in. The fill level is left as is
    /// until [`Board::advance_fill_level`] settles the piece, so win checks can
    /// still find the landing row. A full column is rejected without touching
    /// the grid or the turn.
    pub fn place_marker(&mut self, col: usize) -> Result<usize, BoardError> {
        if self.is_column_full(col)? {
            tracing::debug!(column = col, "placement rejected: column full");
            return Err(BoardError::ColumnFull { column: col });
        }

        let row = self.landing_row(col);
        if self.cells[row][col] != Cell::Empty {
            return Err(BoardError::UnsettledColumn { column: col });
        }

        self.cells[row][col] = self.current_player.to_cell();
        tracing::debug!(
            player = self.current_player.number(),
            row,
            column = col,
            "marker placed"
        );
        Ok(row)
    }

    /// Settle the last placement in `col`, moving its landing row up by one.
    ///
    /// No-op when the column is exhausted or nothing is waiting in the
    /// landing cell.
    pub fn advance_fill_level(&mut self, col: usize) -> Result<(), BoardError> {
        check_column(col)?;
        let filled = self.filled[col];
        if filled < ROWS && self.cells[ROWS - 1 - filled][col] != Cell::Empty {
            self.filled[col] = filled + 1;
        }
        Ok(())
    }

    /// Hand the move to the other player
    pub fn switch_turn(&mut self) {
        self.current_player = self.current_player.other();
        tracing::debug!(player = self.current_player.number(), "turn switched");
    }

    /// Text snapshot with the default `-`/`o`/`x` markers
    pub fn render(&self) -> String {
        self.render_with(&Markers::default())
    }

    pub fn render_with(&self, markers: &Markers) -> String {
        let mut display = String::new();
        let header: Vec<String> = (1..=COLS).map(|col| col.to_string()).collect();
        display.push_str(&header.join(" "));
        display.push('\n');

        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|&cell| markers.for_cell(cell).to_string())
                .collect();
            display.push_str(&line.join(" "));
            display.push('\n');
        }
        display
    }

    pub fn current_player_prompt_label(&self) -> String {
        format!(
            "{}, pick a column from 1 to {}: ",
            self.current_player.name(),
            COLS
        )
    }

    fn landing_row(&self, col: usize) -> usize {
        (ROWS - 1).saturating_sub(self.filled[col])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn check_row(row: usize) -> Result<(), BoardError> {
    if row >= ROWS {
        return Err(BoardError::OutOfRange {
            axis: Axis::Row,
            index: row,
        });
    }
    Ok(())
}

fn check_column(col: usize) -> Result<(), BoardError> {
    if col >= COLS {
        return Err(BoardError::OutOfRange {
            axis: Axis::Column,
            index: col,
        });
    }
    Ok(())
}
