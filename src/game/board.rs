use crate::error::EngineError;

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// Owner of the cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
        }
    }
}

/// A cell coordinate. Row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

/// Grid of cell occupancy, stored row-major with row 0 at the bottom:
///
/// ```text
/// row h-1: [ .. ][ .. ] ... [ .. ]  <- top
///   ...
/// row 0:   [  0 ][  1 ] ... [ w-1]  <- bottom
/// ```
///
/// Pieces only enter through [`Board::drop_piece`], so a cell above an
/// empty cell is always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Create an empty standard 7x6 board
    pub fn standard() -> Self {
        Self::new(COLS, ROWS)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get the cell at a position already known to be in bounds.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`; use [`Board::cell_at`]
    /// for unchecked input.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.height && col < self.width, "cell ({row}, {col}) out of bounds");
        self.cells[self.index(row, col)]
    }

    /// Bounds-checked cell lookup
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        self.check_column(col)?;
        if row >= self.height {
            return Err(EngineError::InvalidRow {
                row: saturating_isize(row),
                height: self.height,
            });
        }
        Ok(self.get(row, col))
    }

    /// Cell lookup that treats anything off the grid as absent.
    pub(crate) fn try_get(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row < self.height && col < self.width {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    fn check_column(&self, col: usize) -> Result<(), EngineError> {
        if col >= self.width {
            return Err(EngineError::InvalidColumn {
                column: saturating_isize(col),
                width: self.width,
            });
        }
        Ok(())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> Result<bool, EngineError> {
        self.check_column(col)?;
        Ok(self.get(self.height - 1, col) != Cell::Empty)
    }

    /// Number of pieces stacked in a column
    pub fn pieces_in_column(&self, col: usize) -> Result<usize, EngineError> {
        self.check_column(col)?;
        Ok((0..self.height)
            .take_while(|&row| self.get(row, col) != Cell::Empty)
            .count())
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// Scans upward from the bottom row for the first empty cell. A full
    /// column is rejected without touching the board.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, EngineError> {
        self.check_column(col)?;

        for row in 0..self.height {
            let idx = self.index(row, col);
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = player.to_cell();
                return Ok(row);
            }
        }

        Err(EngineError::ColumnFull { column: col })
    }

    /// Check if the board is completely full
    pub fn is_board_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Columns that can still accept a piece, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| self.get(self.height - 1, col) == Cell::Empty)
            .collect()
    }

    /// Total number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// True when no occupied cell sits above an empty one.
    pub fn satisfies_gravity(&self) -> bool {
        (0..self.width).all(|col| {
            (1..self.height).all(|row| {
                self.get(row, col) == Cell::Empty || self.get(row - 1, col) != Cell::Empty
            })
        })
    }
}

/// Index as reported in errors; values past `isize::MAX` clamp instead of
/// wrapping negative.
fn saturating_isize(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::win;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::standard();
        assert_eq!(board.width(), COLS);
        assert_eq!(board.height(), ROWS);
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    #[should_panic(expected = "board dimensions must be positive")]
    fn test_zero_width_panics() {
        Board::new(0, 6);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::standard();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Player::Player1).unwrap();
        assert_eq!(row, 0); // Should land at bottom
        assert_eq!(board.get(0, 3), Cell::Player1);

        // Drop second piece in same column
        let row = board.drop_piece(3, Player::Player2).unwrap();
        assert_eq!(row, 1); // Should land on top of first piece
        assert_eq!(board.get(1, 3), Cell::Player2);
        assert_eq!(board.pieces_in_column(3), Ok(2));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_piece(0, Player::Player1).unwrap();
        }

        assert_eq!(board.is_column_full(0), Ok(true));
        assert_eq!(board.is_column_full(1), Ok(false));

        let before = board.clone();
        assert_eq!(
            board.drop_piece(0, Player::Player2),
            Err(EngineError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before);
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::standard();
        assert_eq!(
            board.drop_piece(7, Player::Player1),
            Err(EngineError::InvalidColumn { column: 7, width: 7 })
        );
        assert_eq!(board, Board::standard());
        assert!(board.is_column_full(7).is_err());
        assert!(board.pieces_in_column(100).is_err());
    }

    #[test]
    fn test_cell_at_bounds() {
        let mut board = Board::standard();
        board.drop_piece(2, Player::Player2).unwrap();
        assert_eq!(board.cell_at(0, 2), Ok(Cell::Player2));
        assert_eq!(
            board.cell_at(6, 2),
            Err(EngineError::InvalidRow { row: 6, height: 6 })
        );
        assert!(matches!(
            board.cell_at(0, 7),
            Err(EngineError::InvalidColumn { .. })
        ));
    }

    #[test]
    fn test_huge_indices_reported_without_wrapping() {
        let board = Board::standard();
        assert_eq!(
            board.cell_at(usize::MAX, 0),
            Err(EngineError::InvalidRow {
                row: isize::MAX,
                height: 6
            })
        );
        assert_eq!(
            board.is_column_full(usize::MAX),
            Err(EngineError::InvalidColumn {
                column: isize::MAX,
                width: 7
            })
        );
    }

    #[test]
    fn test_try_get_off_grid() {
        let board = Board::standard();
        assert_eq!(board.try_get(-1, 0), None);
        assert_eq!(board.try_get(0, -1), None);
        assert_eq!(board.try_get(6, 0), None);
        assert_eq!(board.try_get(0, 7), None);
        assert_eq!(board.try_get(5, 6), Some(Cell::Empty));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::standard();
        for col in 0..COLS {
            for _ in 0..ROWS {
                assert!(!board.is_board_full());
                board.drop_piece(col, Player::Player1).unwrap();
            }
        }
        assert!(board.is_board_full());
        assert!(board.legal_columns().is_empty());
        assert_eq!(board.piece_count(), COLS * ROWS);
    }

    #[test]
    fn test_gravity_holds_after_drops() {
        let mut board = Board::new(5, 4);
        for (i, col) in [0, 4, 2, 2, 1, 0, 3, 3, 3, 3].into_iter().enumerate() {
            let player = if i % 2 == 0 { Player::Player1 } else { Player::Player2 };
            board.drop_piece(col, player).unwrap();
            assert!(board.satisfies_gravity());
        }
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::standard();
        // Create horizontal line at bottom row
        for col in 0..4 {
            board.drop_piece(col, Player::Player1).unwrap();
        }
        // Middle of the line
        assert!(win::winning_line(&board, Position::new(0, 2)).is_some());
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.drop_piece(col, Player::Player1).unwrap();
        }
        // Only 3 in a row
        assert!(win::winning_line(&board, Position::new(0, 1)).is_none());
    }

    #[test]
    fn test_cell_player() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::Player1.player(), Some(Player::Player1));
        assert_eq!(Cell::Player2.player(), Some(Player::Player2));
    }
}
