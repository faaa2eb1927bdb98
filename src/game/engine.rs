use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::EngineError;

use super::board::{Board, Cell, Position};
use super::player::Player;
use super::win;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// What an accepted move changed. This is everything a presentation layer
/// needs to update its view after a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Cell that was just filled
    pub position: Position,
    /// Who placed the piece
    pub player: Player,
    /// Status after the move
    pub status: GameStatus,
    /// Whose turn it is now; `None` once the game is over
    pub next_player: Option<Player>,
    /// Cells of the winning line when this move won
    pub winning_line: Option<Vec<Position>>,
}

/// Turn state machine for a single game.
///
/// Owns its board exclusively. Terminal games reject every move until
/// [`GameEngine::reset`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<Vec<Position>>,
    moves: Vec<Position>,
}

/// Start a standard 7x6 game with a random starting player.
pub fn new_game() -> GameEngine {
    GameEngine::new(super::board::COLS, super::board::ROWS)
}

impl GameEngine {
    /// Create a game on an empty `width` x `height` board with a random
    /// starting player.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_rng(width, height, &mut rand::rng())
    }

    /// Like [`GameEngine::new`] but draws the starting player from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        Self::with_starting_player(width, height, Player::random(rng))
    }

    /// Create a game where `first` moves first
    pub fn with_starting_player(width: usize, height: usize, first: Player) -> Self {
        debug!(width, height, first = first.name(), "new game");
        GameEngine {
            board: Board::new(width, height),
            current_player: first,
            status: GameStatus::InProgress,
            winning_line: None,
            moves: Vec::new(),
        }
    }

    /// Create a game from configuration; a configured starting player
    /// overrides the random draw.
    pub fn from_config(config: &GameConfig) -> Self {
        match config.starting_player {
            Some(first) => Self::with_starting_player(config.width, config.height, first),
            None => Self::new(config.width, config.height),
        }
    }

    /// Discard the board and start over with a fresh random starting player.
    pub fn reset(&mut self) {
        self.reset_with_rng(&mut rand::rng());
    }

    pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (width, height) = (self.board.width(), self.board.height());
        *self = Self::with_starting_player(width, height, Player::random(rng));
        info!(first = self.current_player.name(), "game reset");
    }

    /// Get current player. Only meaningful while the game is in progress.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Winning cells once the game has been won
    pub fn winning_line(&self) -> Option<&[Position]> {
        self.winning_line.as_deref()
    }

    /// Accepted placements in the order they were made
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Columns that still accept a piece; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    pub fn is_column_full(&self, column: isize) -> Result<bool, EngineError> {
        let col = self.column_index(column)?;
        self.board.is_column_full(col)
    }

    /// Read-only cell query for rendering
    pub fn cell_at(&self, row: isize, column: isize) -> Result<Cell, EngineError> {
        let col = self.column_index(column)?;
        if row < 0 {
            return Err(EngineError::InvalidRow {
                row,
                height: self.board.height(),
            });
        }
        self.board.cell_at(row as usize, col)
    }

    fn column_index(&self, column: isize) -> Result<usize, EngineError> {
        usize::try_from(column)
            .ok()
            .filter(|&col| col < self.board.width())
            .ok_or(EngineError::InvalidColumn {
                column,
                width: self.board.width(),
            })
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Rejected moves leave the game untouched. On success the outcome
    /// reports the filled cell, the resulting status and whose turn is next.
    pub fn drop_piece(&mut self, column: isize) -> Result<MoveOutcome, EngineError> {
        if self.is_terminal() {
            return Err(EngineError::GameAlreadyOver);
        }

        let col = self.column_index(column)?;
        let player = self.current_player;
        let row = self.board.drop_piece(col, player)?;
        let position = Position::new(row, col);
        self.moves.push(position);
        debug!(row, column = col, player = player.name(), "piece placed");

        // Check for win
        if let Some(line) = win::winning_line(&self.board, position) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line.clone());
            info!(winner = player.name(), moves = self.moves.len(), "game won");
            return Ok(MoveOutcome {
                position,
                player,
                status: self.status,
                next_player: None,
                winning_line: Some(line),
            });
        }

        if self.board.is_board_full() {
            self.status = GameStatus::Tied;
            info!(moves = self.moves.len(), "game tied");
            return Ok(MoveOutcome {
                position,
                player,
                status: self.status,
                next_player: None,
                winning_line: None,
            });
        }

        self.current_player = player.other();
        Ok(MoveOutcome {
            position,
            player,
            status: self.status,
            next_player: Some(self.current_player),
            winning_line: None,
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        new_game()
    }
}
