//! Core Connect Four rules: board state and placement, anchored win
//! detection, and a game session that drives the move protocol.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, Markers, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveReport};
pub use win::{check_win, winning_direction, Direction};
