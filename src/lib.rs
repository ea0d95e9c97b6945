//! # Connect Four TUI
//!
//! A terminal Connect Four game played against a fixed-depth minimax AI with
//! alpha-beta pruning, built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, gravity placement, win/draw detection
//! - [`ai`] — Heuristic evaluator, minimax search, move selection, difficulty
//! - [`ui`] — Terminal UI: game view and session event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
