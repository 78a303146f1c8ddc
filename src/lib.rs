//! # Connect Four
//!
//! Rules engine for two-player Connect Four on a 6×7 grid, with a console
//! shell and a Ratatui terminal UI on top.
//!
//! ## Modules
//!
//! - [`game`] — Board, player, win detection and the game session
//! - [`shell`] — Console loop reading column numbers from a text stream
//! - [`ui`] — Terminal UI with a column selector
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod shell;
pub mod ui;

#[cfg(test)]
mod test_support;
