//! Terminal UI: a Ratatui game view with a column selector.

mod app;
mod game_view;

pub use app::App;
