//! The Letter Grid Table and 100km grid squares.
//!
//! Both letters of a square code are drawn from the same 5x5 block of 25
//! letters (A-Z without I), read west to east and north to south:
//!
//! ```text
//! A B C D E
//! F G H J K
//! L M N O P
//! Q R S T U
//! V W X Y Z
//! ```
//!
//! The first letter picks a 500km square, the second a 100km square inside
//! it. The first letter's block is shifted two columns west and one row south
//! so that `SV` sits on the false origin.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::error::GridError;
use crate::limits::{
    EASTING_SQUARES, FALSE_ORIGIN_COLUMNS, FALSE_ORIGIN_ROWS, LETTERS_PER_SIDE, NORTHING_SQUARES,
    SQUARE_SIZE,
};
use crate::model::Coordinate;

/// Letters used by the grid, in table order.
pub const GRID_LETTERS: [u8; 25] = *b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

lazy_static! {
    static ref LETTER_GRID: LetterGrid = LetterGrid::build();
}

/// Returns the shared Letter Grid Table.
pub fn letter_grid() -> &'static LetterGrid {
    &LETTER_GRID
}

/// Bidirectional mapping between grid letters and their (column, row) cell
/// in a 5x5 block. Row 0 is the southern row.
#[derive(Debug, Clone)]
pub struct LetterGrid {
    cells: [Option<(u8, u8)>; 26],
    letters: [[u8; LETTERS_PER_SIDE as usize]; LETTERS_PER_SIDE as usize],
}

impl LetterGrid {
    fn build() -> Self {
        let side = LETTERS_PER_SIDE as usize;
        let mut cells = [None; 26];
        let mut letters = [[0u8; LETTERS_PER_SIDE as usize]; LETTERS_PER_SIDE as usize];
        for (index, &letter) in GRID_LETTERS.iter().enumerate() {
            let column = index % side;
            let row = side - 1 - index / side;
            cells[(letter - b'A') as usize] = Some((column as u8, row as u8));
            letters[row][column] = letter;
        }
        Self { cells, letters }
    }

    /// Returns the (column, row) cell of an uppercase letter, or `None` for
    /// `I` and anything that is not an uppercase ASCII letter.
    pub fn cell(&self, letter: u8) -> Option<(u8, u8)> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        self.cells[(letter - b'A') as usize]
    }

    /// Returns the letter at a (column, row) cell.
    pub fn letter(&self, column: u8, row: u8) -> Option<u8> {
        self.letters
            .get(row as usize)
            .and_then(|letters| letters.get(column as usize))
            .copied()
    }
}

/// A compass direction between adjacent squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Step in (easting, northing) square indices.
    fn step(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

/// A two-letter 100km square code.
///
/// Any pair of grid letters is a valid code; indices are signed because most
/// of the table lies outside the defined grid (see [`GridSquare::is_within_grid`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSquare {
    letters: [u8; 2],
    easting_index: i32,
    northing_index: i32,
}

impl GridSquare {
    /// Builds a square from two letters (case-insensitive).
    pub fn from_letters(first: char, second: char) -> Result<Self, GridError> {
        let first = validate_letter(first, 0)?;
        let second = validate_letter(second, 1)?;
        let table = letter_grid();
        // validate_letter guarantees both cells exist
        let (c1, r1) = table.cell(first).unwrap_or_default();
        let (c2, r2) = table.cell(second).unwrap_or_default();

        let side = i32::from(LETTERS_PER_SIDE);
        let easting_index = (i32::from(c1) - FALSE_ORIGIN_COLUMNS) * side + i32::from(c2);
        let northing_index = (i32::from(r1) - FALSE_ORIGIN_ROWS) * side + i32::from(r2);

        Ok(Self {
            letters: [first, second],
            easting_index,
            northing_index,
        })
    }

    /// Builds a square from its 100km indices relative to the false origin.
    pub fn from_indices(easting_index: i32, northing_index: i32) -> Result<Self, GridError> {
        let side = i32::from(LETTERS_PER_SIDE);
        let out_of_range = || GridError::IndicesOutOfRange {
            easting_index,
            northing_index,
        };

        let c1 = easting_index.div_euclid(side) + FALSE_ORIGIN_COLUMNS;
        let r1 = northing_index.div_euclid(side) + FALSE_ORIGIN_ROWS;
        if !(0..side).contains(&c1) || !(0..side).contains(&r1) {
            return Err(out_of_range());
        }
        let c2 = easting_index.rem_euclid(side);
        let r2 = northing_index.rem_euclid(side);

        let table = letter_grid();
        let first = table.letter(c1 as u8, r1 as u8).ok_or_else(out_of_range)?;
        let second = table.letter(c2 as u8, r2 as u8).ok_or_else(out_of_range)?;

        Ok(Self {
            letters: [first, second],
            easting_index,
            northing_index,
        })
    }

    /// Returns the two letters, uppercase.
    pub fn letters(&self) -> (char, char) {
        (char::from(self.letters[0]), char::from(self.letters[1]))
    }

    /// Returns the 100km easting index relative to the false origin.
    pub fn easting_index(&self) -> i32 {
        self.easting_index
    }

    /// Returns the 100km northing index relative to the false origin.
    pub fn northing_index(&self) -> i32 {
        self.northing_index
    }

    /// Returns true if the square lies inside the 700km x 1300km grid.
    pub fn is_within_grid(&self) -> bool {
        (0..EASTING_SQUARES as i32).contains(&self.easting_index)
            && (0..NORTHING_SQUARES as i32).contains(&self.northing_index)
    }

    /// Returns the adjacent square in `direction`.
    ///
    /// Both squares must lie inside the defined grid; stepping off its edge
    /// fails with an out-of-range error.
    pub fn neighbour(&self, direction: Direction) -> Result<Self, GridError> {
        let (east, north) = direction.step();
        let easting_index = self.easting_index + east;
        let northing_index = self.northing_index + north;
        let neighbour = Self::from_indices(easting_index, northing_index)?;
        if !self.is_within_grid() || !neighbour.is_within_grid() {
            return Err(GridError::IndicesOutOfRange {
                easting_index,
                northing_index,
            });
        }
        Ok(neighbour)
    }

    /// Returns the south-west corner of the square.
    pub fn origin(&self) -> Result<Coordinate, GridError> {
        if !self.is_within_grid() {
            return Err(GridError::SquareOutOfRange {
                square: self.to_string(),
            });
        }
        Ok(Coordinate::new(
            self.easting_index as u32 * SQUARE_SIZE,
            self.northing_index as u32 * SQUARE_SIZE,
        ))
    }
}

fn validate_letter(letter: char, position: usize) -> Result<u8, GridError> {
    let upper = letter.to_ascii_uppercase();
    if upper == 'I' {
        return Err(GridError::LetterI { position });
    }
    if !upper.is_ascii_uppercase() {
        return Err(GridError::InvalidLetter {
            position,
            found: letter,
        });
    }
    Ok(upper as u8)
}

impl fmt::Display for GridSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = self.letters();
        write!(f, "{}{}", first, second)
    }
}

impl FromStr for GridSquare {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars
            .next()
            .ok_or(GridError::UnexpectedEnd { context: "first grid letter" })?;
        let second = chars
            .next()
            .ok_or(GridError::UnexpectedEnd { context: "second grid letter" })?;
        if let Some(found) = chars.next() {
            return Err(GridError::UnexpectedChar { position: 2, found });
        }
        Self::from_letters(first, second)
    }
}
