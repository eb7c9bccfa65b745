//! Fixed dimensions of the lettered grid and parser limits.

/// Side of a lettered 100km square, in metres.
pub const SQUARE_SIZE: u32 = 100_000;

/// Side of a 500km square (first letter), in metres.
pub const SUPER_SQUARE_SIZE: u32 = 500_000;

/// Letters per side of each 5x5 letter block.
pub const LETTERS_PER_SIDE: u8 = 5;

/// The first letter's block is shifted so that `SV` sits on the false origin.
pub const FALSE_ORIGIN_COLUMNS: i32 = 2;
pub const FALSE_ORIGIN_ROWS: i32 = 1;

/// Maximum digits per axis.
pub const MAX_DIGIT_PAIRS: u8 = 5;

/// Maximum digits in a reference (both axes together).
pub const MAX_DIGITS: usize = 10;

/// Easting extent of the defined grid, exclusive.
pub const GRID_EASTING_EXTENT: u32 = 700_000;

/// Northing extent of the defined grid, exclusive.
pub const GRID_NORTHING_EXTENT: u32 = 1_300_000;

/// Number of 100km squares along each axis of the defined grid.
pub const EASTING_SQUARES: u32 = GRID_EASTING_EXTENT / SQUARE_SIZE;
pub const NORTHING_SQUARES: u32 = GRID_NORTHING_EXTENT / SQUARE_SIZE;

/// Longest input accepted before parsing (after trimming).
pub const MAX_REFERENCE_LEN: usize = 32;
