//! Console front end: reads whitespace-separated tokens from a text stream
//! and drives [`GameState`] one column number at a time.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::config::AppConfig;
use crate::error::{BoardError, MoveError};
use crate::game::{GameOutcome, GameState, Markers, Player, COLS};

pub struct Shell<R, W> {
    input: R,
    output: W,
    config: AppConfig,
    markers: Markers,
    tokens: VecDeque<String>,
}

/// Result of one round, decided by the input.
enum Round {
    Finished,
    /// A non-numeric token ended the round; it answers the replay question.
    Interrupted(String),
    EndOfInput,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        let markers = config.display.markers();
        Shell {
            input,
            output,
            config,
            markers,
            tokens: VecDeque::new(),
        }
    }

    /// Run until the player declines another game or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        write!(
            self.output,
            "Welcome to Connect Four. \nPress {} to start playing and type any other key to quit at any time! ",
            self.config.shell.start_key
        )?;
        self.output.flush()?;

        let mut answer = self.next_token()?;
        let mut games = 0usize;
        while let Some(token) = answer.take() {
            if !token.eq_ignore_ascii_case(&self.config.shell.start_key) {
                break;
            }
            games += 1;
            tracing::debug!(game = games, "starting game");

            let pending = match self.play_round()? {
                Round::Finished => None,
                Round::Interrupted(token) => Some(token),
                Round::EndOfInput => break,
            };

            write!(
                self.output,
                "Type {} to start another game. ",
                self.config.shell.start_key
            )?;
            self.output.flush()?;
            answer = match pending {
                Some(token) => Some(token),
                None => self.next_token()?,
            };
        }

        write!(self.output, "Thank you for playing!")?;
        self.output.flush()
    }

    fn play_round(&mut self) -> io::Result<Round> {
        let mut state = GameState::initial();
        write!(
            self.output,
            "GLHF to both players!\n{}\n{}",
            state.board().render_with(&self.markers),
            state.board().current_player_prompt_label()
        )?;
        self.output.flush()?;

        loop {
            let Some(token) = self.next_token()? else {
                return Ok(Round::EndOfInput);
            };
            let Ok(number) = token.parse::<i64>() else {
                return Ok(Round::Interrupted(token));
            };

            let Some(column) = self.column_from_input(number) else {
                write!(
                    self.output,
                    "Column {number} is out of range, pick a column from 1 to {COLS}.\n{}",
                    state.board().current_player_prompt_label()
                )?;
                self.output.flush()?;
                continue;
            };

            match state.play(column) {
                Ok(_) => {
                    writeln!(self.output, "{}", state.board().render_with(&self.markers))?;
                    match state.outcome() {
                        Some(GameOutcome::Winner(player)) => {
                            writeln!(self.output, "{}", winner_message(player))?;
                            return Ok(Round::Finished);
                        }
                        Some(GameOutcome::Draw) => {
                            writeln!(self.output, "The board is full. It's a draw!")?;
                            return Ok(Round::Finished);
                        }
                        None => {}
                    }
                }
                Err(MoveError::Board(BoardError::ColumnFull { column })) => {
                    writeln!(
                        self.output,
                        "Column {} is already filled, pick another column.\n{}",
                        column + 1,
                        state.board().render_with(&self.markers)
                    )?;
                }
                Err(err) => return Err(io::Error::other(err)),
            }

            write!(self.output, "{}", state.board().current_player_prompt_label())?;
            self.output.flush()?;
        }
    }

    /// Map a 1-based column number to a board index.
    fn column_from_input(&self, number: i64) -> Option<usize> {
        let last = COLS as i64;
        if self.config.shell.clamp_columns {
            return Some((number.clamp(1, last) - 1) as usize);
        }
        if (1..=last).contains(&number) {
            Some((number - 1) as usize)
        } else {
            None
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.tokens.pop_front())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

pub fn winner_message(player: Player) -> String {
    format!("Player {} is the winner. Congratulations!", player.number())
}
