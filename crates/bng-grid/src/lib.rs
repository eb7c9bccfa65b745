//! British National Grid references: conversion between alphanumeric grid
//! references (`NZ20NE`) and numeric easting/northing coordinates.
//!
//! # Overview
//!
//! A reference is two letters naming a 100km square, an even number of digits
//! (up to ten) split between easting and northing, and an optional compass
//! sub-cell (`NE`, `NW`, `SE`, `SW`) that halves the cell:
//!
//! | Reference      | Cell  |
//! |----------------|-------|
//! | `NZ`           | 100km |
//! | `NZNE`         | 50km  |
//! | `NZ20`         | 10km  |
//! | `NZ20NE`       | 5km   |
//! | `NZ2000`       | 1km   |
//! | `NZ2000000000` | 1m    |
//!
//! # Quick Start
//!
//! ```rust
//! use bng_grid::{decode, encode, encode_with_quadrant, Coordinate};
//!
//! // Decode to the south-west corner of the cell
//! let decoded = decode("NZ20NE").unwrap();
//! assert_eq!(decoded.coordinate, Coordinate::new(425_000, 505_000));
//! assert_eq!(decoded.precision.metres(), 5_000);
//!
//! // Encode back, truncating to the requested digits
//! let reference = encode(Coordinate::new(425_000, 505_000), 1).unwrap();
//! assert_eq!(reference.to_string(), "NZ20");
//!
//! let reference = encode_with_quadrant(Coordinate::new(425_000, 505_000), 1).unwrap();
//! assert_eq!(reference.to_string(), "NZ20NE");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Grid squares, the Letter Grid Table, coordinates, references
//! - [`codec`]: Parsing, decoding and encoding
//! - [`policy`]: Sub-cell placement and the 20km / 2km groupings
//! - [`grids`]: Labels at every export resolution for one coordinate
//! - [`matrix`]: The 5km cell matrix over the whole grid
//! - [`error`]: Error types
//! - [`limits`]: Grid dimensions and parser limits
//!
//! Every operation is a pure function of its inputs and the immutable letter
//! table, so all of them can be called from any thread.

pub mod codec;
pub mod error;
pub mod grids;
pub mod limits;
pub mod matrix;
pub mod model;
pub mod policy;

// Re-export commonly used types at crate root
pub use codec::{
    decode, decode_corner, decode_reference, decode_sub_cell, encode, encode_string,
    encode_with_quadrant, parse_reference, CornerPoint, Decoded,
};
pub use error::{ErrorKind, GridError};
pub use grids::{GridLabels, GridOptions};
pub use model::{
    letter_grid, BoundingBox, Coordinate, Corner, Direction, GridReference, GridSquare,
    LetterGrid, Precision, Quadrant,
};
pub use policy::{SubCellOffsetPolicy, TwentyKmGroupingPolicy, TwoKmGroupingPolicy};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
