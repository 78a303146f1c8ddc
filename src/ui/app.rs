use crate::error::{BoardError, MoveError};
use crate::game::{GameOutcome, GameState, Markers, COLS};
use crate::shell::winner_message;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    markers: Markers,
}

impl App {
    pub fn new() -> Self {
        Self::with_markers(Markers::default())
    }

    /// Render cells with the configured display markers
    pub fn with_markers(markers: Markers) -> Self {
        App {
            game_state: GameState::initial(),
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
            markers,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game_state = GameState::initial();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game_state.play(self.selected_column) {
            Ok(report) => {
                // Check if game just ended
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match (outcome, report.direction) {
                        (GameOutcome::Winner(player), Some(direction)) => {
                            format!("{} ({})", winner_message(player), direction.name())
                        }
                        (GameOutcome::Winner(player), None) => winner_message(player),
                        (GameOutcome::Draw, _) => "The board is full. It's a draw!".to_string(),
                    });
                }
            }
            Err(MoveError::Board(BoardError::ColumnFull { column })) => {
                self.message = Some(format!(
                    "Column {} is already filled, pick another column.",
                    column + 1
                ));
            }
            Err(MoveError::Board(err)) => {
                self.message = Some(err.to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            &self.markers,
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
