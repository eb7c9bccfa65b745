//! Data model types for grid references.
//!
//! - Grid squares and the Letter Grid Table
//! - Numeric coordinates and bounding boxes
//! - Parsed references, precisions, compass sub-cells and corners

pub mod coordinate;
pub mod reference;
pub mod square;

pub use coordinate::{BoundingBox, Coordinate};
pub use reference::{Corner, GridReference, Precision, Quadrant};
pub use square::{letter_grid, Direction, GridSquare, LetterGrid, GRID_LETTERS};
