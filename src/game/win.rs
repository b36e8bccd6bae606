//! Four-in-a-row detection around the most recently placed piece.

use super::board::{Board, Cell, COLS, ROWS};

/// Pieces in a row needed to win.
pub const WIN_AMOUNT: usize = 4;
/// No line of four can exist until this many rounds have been played.
pub const MIN_ROUNDS: u32 = 6;
/// Rounds needed to fill the board.
pub const MAX_ROUNDS: u32 = (COLS * ROWS) as u32;

/// The four lines through a cell, each walked as seven offsets from -3 to +3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
    /// top-left to bottom-right, `\`
    Falling,
    /// bottom-left to top-right, `/`
    Rising,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Row,
        Direction::Column,
        Direction::Falling,
        Direction::Rising,
    ];

    /// Unit step as `(dx, dy)`, with y growing downwards
    fn step(self) -> (i32, i32) {
        match self {
            Direction::Row => (1, 0),
            Direction::Column => (0, 1),
            Direction::Falling => (1, 1),
            Direction::Rising => (1, -1),
        }
    }

    /// The seven `(dx, dy)` offsets centred on the origin cell, in scan order
    pub fn offsets(self) -> [(i32, i32); 7] {
        let (dx, dy) = self.step();
        let mut offsets = [(0, 0); 7];
        for (slot, k) in offsets.iter_mut().zip(-3..=3) {
            *slot = (dx * k, dy * k);
        }
        offsets
    }
}

/// Longest contiguous run of `cell` along `direction` through `(x, y)`.
///
/// Off-board offsets read as empty and break the run like any other gap.
pub fn longest_run(board: &Board, x: i32, y: i32, direction: Direction, cell: Cell) -> usize {
    let mut run = 0;
    let mut longest = 0;
    for (dx, dy) in direction.offsets() {
        if board.get(x + dx, y + dy) == cell {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}

/// First direction in which the piece at `(x, y)` completes a line for `cell`.
pub fn winning_direction(board: &Board, x: i32, y: i32, cell: Cell) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&direction| longest_run(board, x, y, direction, cell) >= WIN_AMOUNT)
}
