use anyhow::{anyhow, Result};

use std::fmt;

use crate::{CONNECT, HEIGHT, WIDTH};

/// (row, column) steps of the four line orientations a win can lie on
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal, rising to the right
    (-1, 1), // diagonal, falling to the right
];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// The numeric form of a cell: 0 for empty, otherwise the player number
    pub fn number(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::PlayerOne => 1,
            Cell::PlayerTwo => 2,
        }
    }

    fn from_number(number: u8) -> Option<Self> {
        match number {
            0 => Some(Cell::Empty),
            1 => Some(Cell::PlayerOne),
            2 => Some(Cell::PlayerTwo),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// The fixed `HEIGHT` x `WIDTH` grid of a Connect 4 game
///
/// Rows are stored bottom-to-top, so row 0 is where dropped coins come to rest.
/// Every operation on the board keeps coins stacked from the bottom of their
/// column, no empty cell ever sits below an occupied one.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Creates a board from rows of player numbers (0 = empty), bottom row first
    ///
    /// Fails if a value is not 0, 1 or 2 or if a coin would float above an empty cell.
    pub fn from_rows(rows: &[[u8; WIDTH]; HEIGHT]) -> Result<Self> {
        let mut board = Self::new();

        for (row, values) in rows.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                let cell = Cell::from_number(value).ok_or_else(|| anyhow!(
                    "invalid cell value {} at row {}, column {}",
                    value,
                    row,
                    column + 1
                ))?;
                if !cell.is_empty() && row > 0 && board.cells[row - 1][column].is_empty() {
                    return Err(anyhow!(
                        "invalid position, coin floating at row {}, column {}",
                        row,
                        column + 1
                    ));
                }
                board.cells[row][column] = cell;
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// All rows of the board, bottom row first
    pub fn rows(&self) -> &[[Cell; WIDTH]; HEIGHT] {
        &self.cells
    }

    /// Returns the board as rows of player numbers, bottom row first
    pub fn to_numbers(&self) -> [[u8; WIDTH]; HEIGHT] {
        let mut numbers = [[0; WIDTH]; HEIGHT];
        for (row, cells) in self.cells.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                numbers[row][column] = cell.number();
            }
        }
        numbers
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    pub fn coin_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        !self.cells[HEIGHT - 1][column].is_empty()
    }

    /// The coin resting at the bottom of `column`
    pub fn bottom(&self, column: usize) -> Cell {
        self.cells[0][column]
    }

    /// Places `cell` in the lowest empty row of `column` and returns that row,
    /// or `None` if the column is full
    pub fn drop_coin(&mut self, column: usize, cell: Cell) -> Option<usize> {
        let row = (0..HEIGHT).find(|&row| self.cells[row][column].is_empty())?;
        self.cells[row][column] = cell;
        Some(row)
    }

    /// Removes the bottom coin of `column`, shifting the rest of the column
    /// down by one, and returns the removed cell
    pub fn pop_coin(&mut self, column: usize) -> Cell {
        let popped = self.cells[0][column];
        for row in 0..HEIGHT - 1 {
            self.cells[row][column] = self.cells[row + 1][column];
        }
        self.cells[HEIGHT - 1][column] = Cell::Empty;
        popped
    }

    /// Checks for `CONNECT` or more aligned `cell`s in any orientation
    pub fn has_connection(&self, cell: Cell) -> bool {
        if cell.is_empty() {
            return false;
        }

        for &(d_row, d_column) in DIRECTIONS.iter() {
            for row in 0..HEIGHT as i32 {
                for column in 0..WIDTH as i32 {
                    // only start from positions where the whole line stays on the board
                    let end_row = row + d_row * (CONNECT as i32 - 1);
                    let end_column = column + d_column * (CONNECT as i32 - 1);
                    if end_row < 0
                        || end_row >= HEIGHT as i32
                        || end_column < 0
                        || end_column >= WIDTH as i32
                    {
                        continue;
                    }

                    if (0..CONNECT as i32).all(|step| {
                        self.cells[(row + d_row * step) as usize][(column + d_column * step) as usize]
                            == cell
                    }) {
                        return true;
                    }
                }
            }
        }

        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Plain-text rendering, top row first: `.` empty, `X` player one, `O` player two
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        writeln!(f, "{}", header)?;
        for cells in self.cells.iter().rev() {
            let line: String = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::PlayerOne => 'X',
                    Cell::PlayerTwo => 'O',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
