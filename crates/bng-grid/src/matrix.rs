//! The 5km cell matrix covering the whole grid.
//!
//! Cells are laid out row-major from the north-west corner, so row 0 runs
//! from `HL09NW` eastwards and the last cell is `TW90SE`.

use crate::codec::{decode_reference, encode_with_quadrant};
use crate::error::GridError;
use crate::limits::{GRID_EASTING_EXTENT, GRID_NORTHING_EXTENT};
use crate::model::{Coordinate, GridReference};

/// Side of a matrix cell, in metres.
pub const CELL_SIZE: u32 = 5_000;

/// Matrix columns, west to east.
pub const COLUMNS: usize = (GRID_EASTING_EXTENT / CELL_SIZE) as usize;

/// Matrix rows, north to south.
pub const ROWS: usize = (GRID_NORTHING_EXTENT / CELL_SIZE) as usize;

/// Returns the 5km reference at a matrix position.
pub fn five_km_cell(row: usize, column: usize) -> Result<GridReference, GridError> {
    if row >= ROWS || column >= COLUMNS {
        return Err(GridError::CellOutOfRange {
            row,
            column,
            rows: ROWS,
            columns: COLUMNS,
        });
    }
    let coordinate = Coordinate::new(
        column as u32 * CELL_SIZE,
        (ROWS - 1 - row) as u32 * CELL_SIZE,
    );
    encode_with_quadrant(coordinate, 1)
}

/// Returns the (row, column) matrix position of a 5km reference such as `NZ20NE`.
pub fn five_km_index(reference: &GridReference) -> Result<(usize, usize), GridError> {
    let decoded = decode_reference(reference)?;
    let found = decoded.precision.metres();
    if found != CELL_SIZE {
        return Err(GridError::UnexpectedPrecision {
            expected: CELL_SIZE,
            found,
        });
    }
    let Coordinate { easting, northing } = decoded.coordinate;
    let row = ROWS - 1 - (northing / CELL_SIZE) as usize;
    let column = (easting / CELL_SIZE) as usize;
    Ok((row, column))
}

/// Builds the full matrix of 5km references.
pub fn five_km_matrix() -> Result<Vec<Vec<GridReference>>, GridError> {
    (0..ROWS)
        .map(|row| {
            (0..COLUMNS)
                .map(|column| five_km_cell(row, column))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse_reference;

    #[test]
    fn test_dimensions() {
        assert_eq!((ROWS, COLUMNS), (260, 140));
    }

    #[test]
    fn test_corner_cells() {
        assert_eq!(five_km_cell(0, 0).unwrap().to_string(), "HL09NW");
        assert_eq!(five_km_cell(ROWS - 1, COLUMNS - 1).unwrap().to_string(), "TW90SE");
        assert_eq!(five_km_cell(ROWS - 1, 0).unwrap().to_string(), "SV00SW");
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            five_km_cell(ROWS, 0),
            Err(GridError::CellOutOfRange { row: 260, column: 0, .. })
        ));
        assert!(five_km_cell(0, COLUMNS).is_err());
    }

    #[test]
    fn test_index() {
        let reference = parse_reference("NZ20NE").unwrap();
        // (425000, 505000)
        let (row, column) = five_km_index(&reference).unwrap();
        assert_eq!((row, column), (ROWS - 1 - 101, 85));
        assert_eq!(five_km_cell(row, column).unwrap(), reference);
    }

    #[test]
    fn test_index_rejects_other_precisions() {
        let reference = parse_reference("NZ20").unwrap();
        assert_eq!(
            five_km_index(&reference),
            Err(GridError::UnexpectedPrecision { expected: 5_000, found: 10_000 })
        );
    }

    #[test]
    fn test_matrix_roundtrip() {
        let matrix = five_km_matrix().unwrap();
        assert_eq!(matrix.len(), ROWS);
        for (row, cells) in matrix.iter().enumerate().step_by(13) {
            assert_eq!(cells.len(), COLUMNS);
            for (column, cell) in cells.iter().enumerate().step_by(7) {
                assert_eq!(five_km_index(cell).unwrap(), (row, column));
            }
        }
    }
}
