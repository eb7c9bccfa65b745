//! Error types for grid reference parsing, decoding and encoding.

use thiserror::Error;

use crate::model::Quadrant;

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// G001: Malformed or wrong-length reference string
    InvalidFormat,
    /// G002: Coordinate or letter pair outside the defined grid
    OutOfRange,
    /// G003: Compass sub-cell inapplicable at the requested precision
    InvalidSubCell,
    /// G004: Parameter outside its valid domain
    InvalidArgument,
}

impl ErrorKind {
    /// Returns the error code string (e.g., "G001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "G001",
            ErrorKind::OutOfRange => "G002",
            ErrorKind::InvalidSubCell => "G003",
            ErrorKind::InvalidArgument => "G004",
        }
    }
}

/// Error raised by any grid operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    // === G001: Invalid format ===
    #[error("[G001] grid reference is empty")]
    Empty,

    #[error("[G001] grid reference length {len} exceeds maximum {max}")]
    TooLong { len: usize, max: usize },

    #[error("[G001] unexpected end of input while reading {context}")]
    UnexpectedEnd { context: &'static str },

    #[error("[G001] expected a grid letter at position {position}, found {found:?}")]
    InvalidLetter { position: usize, found: char },

    #[error("[G001] letter 'I' is not used in grid references (position {position})")]
    LetterI { position: usize },

    #[error("[G001] unexpected character {found:?} at position {position}")]
    UnexpectedChar { position: usize, found: char },

    #[error("[G001] odd digit count {count}: easting and northing need the same number of digits")]
    OddDigitCount { count: usize },

    #[error("[G001] {count} digits exceeds maximum {max}")]
    TooManyDigits { count: usize, max: usize },

    #[error("[G001] invalid compass sub-cell {found:?} (expected NE, NW, SE or SW)")]
    InvalidQuadrant { found: String },

    // === G002: Out of range ===
    #[error("[G002] grid square {square} lies outside the 700km x 1300km grid")]
    SquareOutOfRange { square: String },

    #[error("[G002] coordinate ({easting}, {northing}) lies outside the 700km x 1300km grid")]
    CoordinateOutOfRange { easting: i64, northing: i64 },

    #[error("[G002] square indices ({easting_index}, {northing_index}) have no letters")]
    IndicesOutOfRange { easting_index: i32, northing_index: i32 },

    #[error("[G002] 5km cell ({row}, {column}) outside the {rows} x {columns} matrix")]
    CellOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    // === G003: Invalid sub-cell ===
    #[error("[G003] a {cell_size}m cell cannot be split into compass sub-cells")]
    NoSubdivision { cell_size: u32 },

    #[error("[G003] reference already carries sub-cell {existing}")]
    SubCellAlreadySet { existing: Quadrant },

    // === G004: Invalid argument ===
    #[error("[G004] digit pairs {digit_pairs} outside [0, {max}]")]
    InvalidDigitPairs { digit_pairs: u8, max: u8 },

    #[error("[G004] digit value {value} does not fit in {digit_pairs} digits")]
    DigitsOverflow { value: u32, digit_pairs: u8 },

    #[error("[G004] expected a {expected}m cell, found {found}m")]
    UnexpectedPrecision { expected: u32, found: u32 },

    #[error("[G004] invalid corner {found:?} (expected SW, NW, NE, SE, MID or SWNE)")]
    InvalidCorner { found: String },
}

impl GridError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GridError::SquareOutOfRange { .. }
            | GridError::CoordinateOutOfRange { .. }
            | GridError::IndicesOutOfRange { .. }
            | GridError::CellOutOfRange { .. } => ErrorKind::OutOfRange,
            GridError::NoSubdivision { .. } | GridError::SubCellAlreadySet { .. } => {
                ErrorKind::InvalidSubCell
            }
            GridError::InvalidDigitPairs { .. }
            | GridError::DigitsOverflow { .. }
            | GridError::UnexpectedPrecision { .. }
            | GridError::InvalidCorner { .. } => ErrorKind::InvalidArgument,
            _ => ErrorKind::InvalidFormat,
        }
    }
}
