//! Four-in-a-row detection.
//!
//! [`winning_line`] walks outward from the cell that was just filled and is
//! what the engine runs after every move. [`scan_for_win`] checks every
//! fixed-length window on the board; it costs more but needs no knowledge of
//! the last move, which makes it useful for validating arbitrary boards.

use super::board::{Board, Cell, Position};
use super::player::Player;

/// Run length needed to win.
pub const CONNECT: usize = 4;

/// (row step, column step) for horizontal, vertical, diagonal / and
/// diagonal \. Every line through a cell is covered by walking each
/// direction both ways.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Count consecutive cells equal to `cell`, starting one step away from
/// `origin` and stopping at the board edge or the first differing cell.
fn run_from(
    board: &Board,
    origin: Position,
    (dr, dc): (isize, isize),
    cell: Cell,
) -> Vec<Position> {
    let mut run = Vec::new();
    let mut r = origin.row as isize + dr;
    let mut c = origin.column as isize + dc;
    while board.try_get(r, c) == Some(cell) {
        run.push(Position::new(r as usize, c as usize));
        r += dr;
        c += dc;
    }
    run
}

/// The maximal line of four or more through `pos`, if there is one.
///
/// Cells are ordered from the lowest row upward (left to right for a
/// horizontal line). Returns `None` for an empty or off-board cell.
pub fn winning_line(board: &Board, pos: Position) -> Option<Vec<Position>> {
    let cell = board.try_get(pos.row as isize, pos.column as isize)?;
    if cell == Cell::Empty {
        return None;
    }

    for (dr, dc) in DIRECTIONS {
        let mut line = run_from(board, pos, (-dr, -dc), cell);
        line.reverse();
        line.push(pos);
        line.extend(run_from(board, pos, (dr, dc), cell));

        if line.len() >= CONNECT {
            return Some(line);
        }
    }

    None
}

/// Whole-board search for any window of four cells owned by `player`.
///
/// Every occupied cell is tried as the start of a window in each of the
/// four directions; windows that would leave the grid are skipped rather
/// than read.
pub fn scan_for_win(board: &Board, player: Player) -> Option<[Position; CONNECT]> {
    let target = player.to_cell();

    for row in 0..board.height() {
        for col in 0..board.width() {
            if board.get(row, col) != target {
                continue;
            }
            for (dr, dc) in DIRECTIONS {
                if let Some(window) = window_at(board, Position::new(row, col), (dr, dc), target) {
                    return Some(window);
                }
            }
        }
    }

    None
}

fn window_at(
    board: &Board,
    start: Position,
    (dr, dc): (isize, isize),
    target: Cell,
) -> Option<[Position; CONNECT]> {
    let mut window = [start; CONNECT];
    for (step, slot) in window.iter_mut().enumerate() {
        let r = start.row as isize + dr * step as isize;
        let c = start.column as isize + dc * step as isize;
        if board.try_get(r, c)? != target {
            return None;
        }
        *slot = Position::new(r as usize, c as usize);
    }
    Some(window)
}
