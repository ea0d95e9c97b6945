//! Core Connect Four game logic: board representation, player types, gravity
//! placement with immutable transitions, and win/draw detection.

mod board;
mod player;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
