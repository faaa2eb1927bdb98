//! # Connect Four Engine
//!
//! Rules engine for two-player Connect Four. The engine owns board and turn
//! state and reports every accepted move as a [`game::MoveOutcome`]; drawing
//! the board and reading input are left to the caller.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, engine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
