//! Win detection anchored at the landing cell of the last move.
//!
//! Any new four-in-a-row has to pass through the piece just played, so only
//! the windows that start or end at the landing cell are checked. Each window
//! has a bounding-box guard that keeps all four cells on the 6×7 grid.

use crate::error::BoardError;

use super::board::{Board, Cell};
use super::player::Player;

const WINDOW: usize = 4;

/// Direction a winning window runs from the landing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Vertical,
    HorizontalLeft,
    HorizontalRight,
    DiagonalDownLeft,
    DiagonalDownRight,
    DiagonalUpLeft,
    DiagonalUpRight,
}

impl Direction {
    /// Evaluation order of the windows.
    pub const ALL: [Direction; 7] = [
        Direction::Vertical,
        Direction::HorizontalLeft,
        Direction::HorizontalRight,
        Direction::DiagonalDownLeft,
        Direction::DiagonalDownRight,
        Direction::DiagonalUpLeft,
        Direction::DiagonalUpRight,
    ];

    /// (row, column) step between consecutive cells. Row grows downward.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::HorizontalLeft => (0, -1),
            Direction::HorizontalRight => (0, 1),
            Direction::DiagonalDownLeft => (1, -1),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalUpLeft => (-1, -1),
            Direction::DiagonalUpRight => (-1, 1),
        }
    }

    /// Whether a window anchored at (row, col) fits on the board.
    fn guard(self, row: usize, col: usize) -> bool {
        match self {
            Direction::Vertical => row <= 2,
            Direction::HorizontalLeft => col >= 3,
            Direction::HorizontalRight => col <= 3,
            Direction::DiagonalDownLeft => row <= 2 && col >= 3,
            Direction::DiagonalDownRight => row <= 2 && col <= 3,
            Direction::DiagonalUpLeft => row >= 3 && col >= 3,
            Direction::DiagonalUpRight => row >= 3 && col <= 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Vertical => "vertical",
            Direction::HorizontalLeft | Direction::HorizontalRight => "horizontal",
            Direction::DiagonalDownLeft | Direction::DiagonalUpRight => "diagonal /",
            Direction::DiagonalDownRight | Direction::DiagonalUpLeft => "diagonal \\",
        }
    }
}

/// Check whether `mover` connected four through the landing cell of `col`.
///
/// Must be called after [`Board::place_marker`] and before the fill level of
/// `col` is advanced, while `top_fill_row` still points at the new piece.
pub fn check_win(board: &Board, col: usize, mover: Player) -> Result<bool, BoardError> {
    Ok(winning_direction(board, col, mover)?.is_some())
}

/// Like [`check_win`], but reports the first window that matched.
pub fn winning_direction(
    board: &Board,
    col: usize,
    mover: Player,
) -> Result<Option<Direction>, BoardError> {
    let row = board.top_fill_row(col)?;
    let target = mover.to_cell();

    for direction in Direction::ALL {
        if direction.guard(row, col) && window_matches(board, row, col, direction, target)? {
            tracing::info!(
                player = mover.number(),
                row,
                column = col,
                direction = direction.name(),
                "four connected"
            );
            return Ok(Some(direction));
        }
    }
    Ok(None)
}

fn window_matches(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    target: Cell,
) -> Result<bool, BoardError> {
    let (dr, dc) = direction.step();
    let mut combo = 0;

    for i in 0..WINDOW as isize {
        let r = row as isize + dr * i;
        let c = col as isize + dc * i;
        if board.cell_at(r as usize, c as usize)? == target {
            combo += 1;
        }
    }

    Ok(combo == WINDOW)
}
