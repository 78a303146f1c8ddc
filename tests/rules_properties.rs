//! Invariants of the board and game session under random move sequences.
//!
//! - Every accepted move lands in the lowest empty cell of its column.
//! - Cells never change once occupied.
//! - The player to move alternates with accepted moves only.
//! - A reported win matches a four-in-a-row found by a full board scan.
use connect_four::error::{BoardError, MoveError};
use connect_four::game::{Board, Cell, GameOutcome, GameState, Player, COLS, ROWS};
use proptest::prelude::*;

fn snapshot(board: &Board) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(ROWS * COLS);
    for row in 0..ROWS {
        for col in 0..COLS {
            cells.push(board.cell_at(row, col).unwrap());
        }
    }
    cells
}

/// Brute-force scan for any four-in-a-row of `cell`.
fn has_four(board: &Board, cell: Cell) -> bool {
    let at = |r: isize, c: isize| -> Option<Cell> {
        if r < 0 || c < 0 {
            return None;
        }
        board.cell_at(r as usize, c as usize).ok()
    };
    for row in 0..ROWS as isize {
        for col in 0..COLS as isize {
            for (dr, dc) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
                if (0..4).all(|i| at(row + dr * i, col + dc * i) == Some(cell)) {
                    return true;
                }
            }
        }
    }
    false
}

fn is_out_of_range<T>(result: Result<T, BoardError>) -> bool {
    matches!(result, Err(BoardError::OutOfRange { .. }))
}

fn expected_player(accepted: usize) -> Player {
    if accepted % 2 == 0 {
        Player::One
    } else {
        Player::Two
    }
}

proptest! {
    #[test]
    fn random_games_keep_board_invariants(moves in prop::collection::vec(0usize..COLS, 0..80)) {
        let mut state = GameState::initial();
        let mut accepted = 0usize;

        for col in moves {
            let before = snapshot(state.board());
            let landing = state.board().top_fill_row(col).unwrap();
            let was_full = state.board().is_column_full(col).unwrap();

            match state.play(col) {
                Ok(report) => {
                    prop_assert!(!was_full);
                    prop_assert_eq!(report.row, landing);
                    prop_assert_eq!(report.player, expected_player(accepted));
                    accepted += 1;

                    let after = snapshot(state.board());
                    let changed: Vec<usize> = (0..before.len())
                        .filter(|&i| before[i] != after[i])
                        .collect();
                    prop_assert_eq!(changed, vec![landing * COLS + col]);
                    prop_assert_eq!(before[landing * COLS + col], Cell::Empty);
                    if landing + 1 < ROWS {
                        prop_assert_ne!(after[(landing + 1) * COLS + col], Cell::Empty);
                    }

                    if report.direction.is_some() {
                        prop_assert!(has_four(state.board(), report.player.to_cell()));
                        prop_assert_eq!(state.outcome(), Some(GameOutcome::Winner(report.player)));
                        break;
                    }
                    if state.is_terminal() {
                        prop_assert_eq!(state.outcome(), Some(GameOutcome::Draw));
                        break;
                    }
                    prop_assert_eq!(state.current_player(), expected_player(accepted));
                }
                Err(MoveError::Board(BoardError::ColumnFull { column })) => {
                    prop_assert!(was_full);
                    prop_assert_eq!(column, col);
                    prop_assert_eq!(snapshot(state.board()), before);
                    prop_assert_eq!(state.current_player(), expected_player(accepted));
                }
                Err(err) => prop_assert!(false, "unexpected error {err}"),
            }
        }

        prop_assert_eq!(state.move_count(), accepted);
    }

    #[test]
    fn fresh_board_lands_every_column_on_the_floor(col in 0usize..COLS) {
        let mut board = Board::new();
        prop_assert_eq!(board.place_marker(col).unwrap(), ROWS - 1);
        prop_assert_eq!(board.cell_at(ROWS - 1, col).unwrap(), Cell::PlayerOne);
    }

    #[test]
    fn out_of_range_indices_are_rejected(row in ROWS..usize::MAX, col in COLS..usize::MAX) {
        let mut board = Board::new();
        prop_assert!(is_out_of_range(board.cell_at(row, 0)));
        prop_assert!(is_out_of_range(board.cell_at(0, col)));
        prop_assert!(is_out_of_range(board.place_marker(col)));
        prop_assert!(is_out_of_range(board.advance_fill_level(col)));
        prop_assert!(is_out_of_range(connect_four::game::check_win(&board, col, Player::One)));
        prop_assert_eq!(board, Board::new());
    }
}

#[test]
fn no_win_before_four_when_no_earlier_line_exists() {
    // A game where nobody wins before the last move only reports the last one.
    let mut state = GameState::initial();
    for col in [3, 3, 2, 2, 4, 4] {
        let report = state.play(col).unwrap();
        assert!(report.direction.is_none());
        assert!(!has_four(state.board(), report.player.to_cell()));
    }
    let report = state.play(5).unwrap();
    assert!(report.direction.is_some());
    assert!(has_four(state.board(), Cell::PlayerOne));
}
