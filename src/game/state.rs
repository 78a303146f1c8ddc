use crate::error::MoveError;

use super::board::{Board, COLS};
use super::player::Player;
use super::win::{winning_direction, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// What happened on an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub player: Player,
    pub row: usize,
    pub column: usize,
    /// Set when the move connected four.
    pub direction: Option<Direction>,
}

/// One game session: the board plus the outcome once the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    outcome: Option<GameOutcome>,
    move_count: usize,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            outcome: None,
            move_count: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of accepted moves so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| matches!(self.board.is_column_full(col), Ok(false)))
            .collect()
    }

    /// Play `column` for the current player.
    ///
    /// Places the marker, checks for a win by the mover, settles the piece,
    /// then ends the game or passes the turn. A rejected move leaves the state
    /// untouched, so the same player moves again.
    pub fn play(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.board.current_player();
        let row = self.board.place_marker(column)?;
        let direction = winning_direction(&self.board, column, mover)?;
        self.board.advance_fill_level(column)?;
        self.move_count += 1;

        if direction.is_some() {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_board_full() {
            tracing::info!(moves = self.move_count, "board full, game drawn");
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.board.switch_turn();
        }

        Ok(MoveReport {
            player: mover,
            row,
            column,
            direction,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::game::board::{Cell, ROWS};

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_play() {
        let mut state = GameState::initial();
        let report = state.play(3).unwrap();

        assert_eq!(report.player, Player::One);
        assert_eq!(report.row, 5);
        assert_eq!(report.direction, None);
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.board().cell_at(5, 3).unwrap(), Cell::PlayerOne);
        assert_eq!(state.board().top_fill_row(3).unwrap(), 4);
    }

    #[test]
    fn test_turn_alternation() {
        let mut state = GameState::initial();
        let columns = [0, 1, 2, 3, 4, 5, 6, 0, 1, 2];
        for (n, &col) in columns.iter().enumerate() {
            state.play(col).unwrap();
            let expected = if (n + 1) % 2 == 0 { Player::One } else { Player::Two };
            assert_eq!(state.current_player(), expected);
        }
    }

    #[test]
    fn test_full_column_keeps_turn() {
        let mut state = GameState::initial();
        for _ in 0..ROWS {
            state.play(2).unwrap();
        }
        let before = state;

        assert_eq!(
            state.play(2),
            Err(MoveError::Board(BoardError::ColumnFull { column: 2 }))
        );
        assert_eq!(state, before);
        assert!(!state.legal_actions().contains(&2));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Player 1 wins with a horizontal line on the floor
        for col in 0..4 {
            let report = state.play(col).unwrap(); // Player 1
            if col < 3 {
                assert!(report.direction.is_none());
                state.play(col).unwrap(); // Player 2 (row above)
            } else {
                assert_eq!(report.direction, Some(Direction::HorizontalLeft));
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::One)));
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.play(5), Err(MoveError::GameOver));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::initial();

        // Column pairs filled in blocks of three never line up four.
        let pattern = [
            0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, // columns 0-1
            2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, // columns 2-3
            4, 5, 4, 5, 4, 5, 5, 4, 5, 4, 5, 4, // columns 4-5
            6, 6, 6, 6, 6, 6,
        ];

        for &col in &pattern {
            let report = state.play(col).unwrap();
            assert!(report.direction.is_none(), "unexpected win at column {col}");
        }

        assert!(state.board().is_board_full());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert_eq!(state.move_count(), 42);
    }
}
