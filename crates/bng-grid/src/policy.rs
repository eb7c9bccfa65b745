//! Grouping conventions that are not a plain power-of-ten split of a cell.
//!
//! Compass sub-cells halve a cell; the 20km and 2km groupings merge cells
//! into blocks that the digit layout of a reference cannot express directly,
//! so each block is labelled by one of its member cells.

use crate::error::GridError;
use crate::model::{Coordinate, GridReference, Quadrant};

/// Placement of compass sub-cells inside a cell.
///
/// A sub-cell is half the enclosing cell on each axis. `E` moves it half a
/// cell east of the south-west corner and `N` half a cell north; `W` and `S`
/// leave that axis on the corner. So `NZ20NE` starts at (425000, 505000).
#[derive(Debug, Clone, Copy, Default)]
pub struct SubCellOffsetPolicy;

impl SubCellOffsetPolicy {
    /// Half of `cell_size`, or an error if the cell cannot be split in whole metres.
    pub fn half(cell_size: u32) -> Result<u32, GridError> {
        if cell_size < 2 || cell_size % 2 != 0 {
            return Err(GridError::NoSubdivision { cell_size });
        }
        Ok(cell_size / 2)
    }

    /// Offset of the quadrant's south-west corner from the cell's south-west corner.
    pub fn offset(quadrant: Quadrant, cell_size: u32) -> Result<(u32, u32), GridError> {
        let half = Self::half(cell_size)?;
        let east = if quadrant.is_east() { half } else { 0 };
        let north = if quadrant.is_north() { half } else { 0 };
        Ok((east, north))
    }

    /// Quadrant containing a point at the given offset inside the cell.
    pub fn classify(east: u32, north: u32, cell_size: u32) -> Result<Quadrant, GridError> {
        let half = Self::half(cell_size)?;
        Ok(Quadrant::from_halves(east >= half, north >= half))
    }
}

/// 20km blocks: the 100km remainder is floored to a 20000m boundary on each
/// axis and labelled as the 10km cell in the block's south-west corner, so
/// both digits are always even (`NZ24`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TwentyKmGroupingPolicy;

impl TwentyKmGroupingPolicy {
    pub const CELL_SIZE: u32 = 20_000;

    pub fn label(coordinate: Coordinate) -> Result<GridReference, GridError> {
        let square = coordinate.square()?;
        let (easting, northing) = coordinate.within_square();
        let digit = |remainder: u32| (remainder - remainder % Self::CELL_SIZE) / 10_000;
        GridReference::new(square, 1, digit(easting), digit(northing), None)
    }
}

/// 2km blocks: pairs of 1km cells merged on each axis. The label keeps the
/// 1km layout with both digit pairs forced odd (`NZ2301`), i.e. the block is
/// named after its north-east 1km cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoKmGroupingPolicy;

impl TwoKmGroupingPolicy {
    pub const CELL_SIZE: u32 = 2_000;

    pub fn label(coordinate: Coordinate) -> Result<GridReference, GridError> {
        let square = coordinate.square()?;
        let (easting, northing) = coordinate.within_square();
        let digits = |remainder: u32| (remainder / 1_000) | 1;
        GridReference::new(square, 2, digits(easting), digits(northing), None)
    }

    /// South-west corner of the 2km block a label names.
    pub fn block_origin(label: &GridReference) -> Result<Coordinate, GridError> {
        let origin = label.square().origin()?;
        Ok(Coordinate::new(
            origin.easting + (label.easting_digits() & !1) * 1_000,
            origin.northing + (label.northing_digits() & !1) * 1_000,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_cell_offsets() {
        assert_eq!(SubCellOffsetPolicy::offset(Quadrant::NE, 10_000), Ok((5_000, 5_000)));
        assert_eq!(SubCellOffsetPolicy::offset(Quadrant::NW, 10_000), Ok((0, 5_000)));
        assert_eq!(SubCellOffsetPolicy::offset(Quadrant::SE, 10_000), Ok((5_000, 0)));
        assert_eq!(SubCellOffsetPolicy::offset(Quadrant::SW, 10_000), Ok((0, 0)));
        assert_eq!(
            SubCellOffsetPolicy::offset(Quadrant::NE, 1),
            Err(GridError::NoSubdivision { cell_size: 1 })
        );
    }

    #[test]
    fn test_sub_cell_classify_inverts_offset() {
        for quadrant in Quadrant::ALL {
            let (east, north) = SubCellOffsetPolicy::offset(quadrant, 100_000).unwrap();
            assert_eq!(
                SubCellOffsetPolicy::classify(east, north, 100_000),
                Ok(quadrant)
            );
        }
    }

    #[test]
    fn test_twenty_km_label() {
        let label = TwentyKmGroupingPolicy::label(Coordinate::new(425_678, 559_999)).unwrap();
        assert_eq!(label.to_string(), "NZ24");

        let label = TwentyKmGroupingPolicy::label(Coordinate::new(499_999, 500_000)).unwrap();
        assert_eq!(label.to_string(), "NZ80");
    }

    #[test]
    fn test_two_km_label() {
        let label = TwoKmGroupingPolicy::label(Coordinate::new(422_500, 500_999)).unwrap();
        assert_eq!(label.to_string(), "NZ2301");
        assert_eq!(
            TwoKmGroupingPolicy::block_origin(&label).unwrap(),
            Coordinate::new(422_000, 500_000)
        );

        // the last 1km cell stays in the square
        let label = TwoKmGroupingPolicy::label(Coordinate::new(499_999, 599_999)).unwrap();
        assert_eq!(label.to_string(), "NZ9999");
    }

    #[test]
    fn test_grouping_out_of_range() {
        assert!(TwentyKmGroupingPolicy::label(Coordinate::new(800_000, 0)).is_err());
        assert!(TwoKmGroupingPolicy::label(Coordinate::new(0, 1_400_000)).is_err());
    }
}
