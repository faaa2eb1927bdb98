//! Core Connect Four rules: board model, players, win detection and the
//! turn state machine that ties them together.

mod board;
mod engine;
mod player;
pub mod win;

pub use board::{Board, Cell, Position, COLS, ROWS};
pub use engine::{new_game, GameEngine, GameStatus, MoveOutcome};
pub use player::Player;
