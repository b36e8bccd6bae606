use std::fmt;
use std::str::FromStr;

use crate::error::BoardParseError;
use crate::LINE_SEPARATOR;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Character used when rendering the board
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::PlayerOne => 'r',
            Cell::PlayerTwo => 'y',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            ' ' => Some(Cell::Empty),
            'r' => Some(Cell::PlayerOne),
            'y' => Some(Cell::PlayerTwo),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Why a cell could not be claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    OutOfRange,
    Occupied,
}

/// Fixed 7x6 grid, stored row-major (`cells[y][x]`), row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Whether the 0-based coordinate lies on the board
    pub fn is_in_range(x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < COLS && y >= 0 && (y as usize) < ROWS
    }

    /// Read a cell by 0-based coordinate. Off-board probes read as `Cell::Empty`
    /// so the win scan can walk past the edges without bounds checks.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if Self::is_in_range(x, y) {
            self.cells[y as usize][x as usize]
        } else {
            Cell::Empty
        }
    }

    /// Claim an empty cell. A cell goes from empty to occupied exactly once.
    pub fn occupy(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), PlaceError> {
        if !Self::is_in_range(x, y) {
            return Err(PlaceError::OutOfRange);
        }

        let slot = &mut self.cells[y as usize][x as usize];
        if !slot.is_empty() {
            return Err(PlaceError::Occupied);
        }
        *slot = cell;
        Ok(())
    }

    /// Number of occupied cells in a 0-based column (0 for off-board columns)
    pub fn column_count(&self, x: i32) -> usize {
        if x < 0 || x as usize >= COLS {
            return 0;
        }
        self.cells
            .iter()
            .filter(|row| !row[x as usize].is_empty())
            .count()
    }

    /// 1-based row a piece dropped into the 1-based `column` would land on.
    ///
    /// A full column yields 0, which the range check then rejects.
    pub fn landing_row(&self, column: i32) -> i32 {
        ROWS as i32 - self.column_count(column.saturating_sub(1)) as i32
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.occupied_count() == ROWS * COLS
    }

    /// Render the grid top row first. With `header`, a line of column numbers
    /// is prepended and every row is prefixed with its 1-based row number.
    ///
    /// ```text
    ///   1234567
    /// 1[       ]
    /// ...
    /// 6[rryyyry]
    /// ```
    pub fn render(&self, header: bool) -> String {
        let mut lines = Vec::with_capacity(ROWS + 1);
        if header {
            let numbers: String = (1..=COLS).map(|c| c.to_string()).collect();
            lines.push(format!("  {numbers}"));
        }

        for (y, row) in self.cells.iter().enumerate() {
            let cells: String = row.iter().map(|cell| cell.to_char()).collect();
            if header {
                lines.push(format!("{}[{cells}]", y + 1));
            } else {
                lines.push(format!("[{cells}]"));
            }
        }

        lines.join(LINE_SEPARATOR)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse either form produced by [`Board::render`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .filter(|line| line.contains('['))
            .collect();
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (y, line) in rows.iter().enumerate() {
            let (open, close) = match (line.find('['), line.rfind(']')) {
                (Some(open), Some(close)) if open < close => (open, close),
                _ => return Err(BoardParseError::MissingBrackets(y + 1)),
            };
            let body: Vec<char> = line[open + 1..close].chars().collect();
            if body.len() != COLS {
                return Err(BoardParseError::RowWidth {
                    row: y + 1,
                    width: body.len(),
                });
            }
            for (x, c) in body.into_iter().enumerate() {
                board.cells[y][x] = Cell::from_char(c).ok_or(BoardParseError::UnknownCell {
                    row: y + 1,
                    found: c,
                })?;
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_into(board: &mut Board, column: i32, cell: Cell) -> i32 {
        let row = board.landing_row(column);
        board.occupy(column - 1, row - 1, cell).unwrap();
        row
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for y in 0..ROWS as i32 {
            for x in 0..COLS as i32 {
                assert_eq!(board.get(x, y), Cell::Empty);
            }
        }
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_is_in_range() {
        assert!(Board::is_in_range(0, 0));
        assert!(Board::is_in_range(6, 5));
        assert!(!Board::is_in_range(-1, 0));
        assert!(!Board::is_in_range(0, -1));
        assert!(!Board::is_in_range(7, 0));
        assert!(!Board::is_in_range(0, 6));
    }

    #[test]
    fn test_out_of_range_reads_empty() {
        let mut board = Board::new();
        board.occupy(0, 0, Cell::PlayerOne).unwrap();
        assert_eq!(board.get(-1, 0), Cell::Empty);
        assert_eq!(board.get(0, -1), Cell::Empty);
        assert_eq!(board.get(COLS as i32, 0), Cell::Empty);
        assert_eq!(board.get(0, ROWS as i32), Cell::Empty);
    }

    #[test]
    fn test_occupy_once() {
        let mut board = Board::new();
        board.occupy(3, 2, Cell::PlayerOne).unwrap();
        assert_eq!(board.get(3, 2), Cell::PlayerOne);
        assert_eq!(board.occupy(3, 2, Cell::PlayerTwo), Err(PlaceError::Occupied));
        assert_eq!(board.get(3, 2), Cell::PlayerOne);
    }

    #[test]
    fn test_occupy_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.occupy(7, 0, Cell::PlayerOne), Err(PlaceError::OutOfRange));
        assert_eq!(board.occupy(0, -1, Cell::PlayerOne), Err(PlaceError::OutOfRange));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_landing_row_stacks_from_bottom() {
        let mut board = Board::new();
        assert_eq!(drop_into(&mut board, 3, Cell::PlayerOne), 6);
        assert_eq!(drop_into(&mut board, 3, Cell::PlayerTwo), 5);
        assert_eq!(board.get(2, 5), Cell::PlayerOne);
        assert_eq!(board.get(2, 4), Cell::PlayerTwo);
        assert_eq!(board.column_count(2), 2);
    }

    #[test]
    fn test_full_column_lands_off_board() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            drop_into(&mut board, 1, Cell::PlayerOne);
        }
        assert_eq!(board.landing_row(1), 0);
        assert!(!Board::is_in_range(0, board.landing_row(1) - 1));
    }

    #[test]
    fn test_landing_row_for_invalid_column() {
        let board = Board::new();
        assert_eq!(board.landing_row(8), ROWS as i32);
        assert_eq!(board.landing_row(0), ROWS as i32);
        assert_eq!(board.landing_row(i32::MIN), ROWS as i32);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for column in 1..=COLS as i32 {
            for _ in 0..ROWS {
                drop_into(&mut board, column, Cell::PlayerTwo);
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_render_with_and_without_header() {
        let mut board = Board::new();
        drop_into(&mut board, 1, Cell::PlayerOne);
        drop_into(&mut board, 7, Cell::PlayerTwo);

        let expected_plain = [
            "[       ]",
            "[       ]",
            "[       ]",
            "[       ]",
            "[       ]",
            "[r     y]",
        ]
        .join(LINE_SEPARATOR);
        assert_eq!(board.render(false), expected_plain);
        assert_eq!(board.to_string(), expected_plain);

        let rendered = board.render(true);
        let lines: Vec<&str> = rendered.split(LINE_SEPARATOR).collect();
        assert_eq!(lines.len(), ROWS + 1);
        assert_eq!(lines[0], "  1234567");
        assert_eq!(lines[1], "1[       ]");
        assert_eq!(lines[6], "6[r     y]");
    }

    #[test]
    fn test_render_parse_roundtrip() {
        let mut board = Board::new();
        for (column, cell) in [(4, Cell::PlayerOne), (4, Cell::PlayerTwo), (2, Cell::PlayerOne)] {
            drop_into(&mut board, column, cell);
        }

        let parsed: Board = board.render(true).parse().unwrap();
        assert_eq!(parsed, board);
        let parsed: Board = board.render(false).parse().unwrap();
        assert_eq!(parsed, board);
        assert_eq!(parsed.get(3, 5), Cell::PlayerOne);
        assert_eq!(parsed.get(3, 4), Cell::PlayerTwo);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "[       ]".parse::<Board>(),
            Err(BoardParseError::RowCount(1))
        );

        let mut rows = vec!["[       ]"; ROWS];
        rows[2] = "[  x    ]";
        assert_eq!(
            rows.join("\n").parse::<Board>(),
            Err(BoardParseError::UnknownCell { row: 3, found: 'x' })
        );

        rows[2] = "[   ]";
        assert_eq!(
            rows.join("\n").parse::<Board>(),
            Err(BoardParseError::RowWidth { row: 3, width: 3 })
        );
    }
}
