//! Terminal UI: the human-vs-AI game session and its Ratatui view.

mod app;
mod game_view;

pub use app::App;
