//! Numeric easting/northing coordinates.

use std::fmt;

use crate::error::GridError;
use crate::limits::{GRID_EASTING_EXTENT, GRID_NORTHING_EXTENT, SQUARE_SIZE};
use crate::model::{GridSquare, Precision};

/// An (easting, northing) pair in metres from the false origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub easting: u32,
    pub northing: u32,
}

impl Coordinate {
    pub const fn new(easting: u32, northing: u32) -> Self {
        Self { easting, northing }
    }

    /// Converts signed metres, as produced by an upstream projection, rejecting
    /// anything outside the defined grid.
    pub fn try_from_signed(easting: i64, northing: i64) -> Result<Self, GridError> {
        let in_range = (0..i64::from(GRID_EASTING_EXTENT)).contains(&easting)
            && (0..i64::from(GRID_NORTHING_EXTENT)).contains(&northing);
        if !in_range {
            return Err(GridError::CoordinateOutOfRange { easting, northing });
        }
        Ok(Self::new(easting as u32, northing as u32))
    }

    /// Returns true if the coordinate lies inside the 700km x 1300km grid.
    pub fn is_within_grid(&self) -> bool {
        self.easting < GRID_EASTING_EXTENT && self.northing < GRID_NORTHING_EXTENT
    }

    /// Returns the 100km square containing this coordinate.
    pub fn square(&self) -> Result<GridSquare, GridError> {
        if !self.is_within_grid() {
            return Err(GridError::CoordinateOutOfRange {
                easting: i64::from(self.easting),
                northing: i64::from(self.northing),
            });
        }
        GridSquare::from_indices(
            (self.easting / SQUARE_SIZE) as i32,
            (self.northing / SQUARE_SIZE) as i32,
        )
    }

    /// Returns the offset from the south-west corner of the enclosing 100km square.
    pub fn within_square(&self) -> (u32, u32) {
        (self.easting % SQUARE_SIZE, self.northing % SQUARE_SIZE)
    }

    /// Floors both axes to the south-west corner of the cell at `precision`.
    pub fn floor_to(&self, precision: Precision) -> Self {
        let cell_size = precision.metres();
        Self::new(
            self.easting - self.easting % cell_size,
            self.northing - self.northing % cell_size,
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.easting, self.northing)
    }
}

/// An axis-aligned box between two coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// South-west corner.
    pub min: Coordinate,
    /// North-east corner.
    pub max: Coordinate,
}

impl BoundingBox {
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (self.min.easting..self.max.easting).contains(&coordinate.easting)
            && (self.min.northing..self.max.northing).contains(&coordinate.northing)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(425_000, 505_000).to_string(), "425000, 505000");
    }

    #[test]
    fn test_try_from_signed() {
        assert_eq!(
            Coordinate::try_from_signed(699_999, 1_299_999),
            Ok(Coordinate::new(699_999, 1_299_999))
        );
        assert_eq!(
            Coordinate::try_from_signed(-1, 0),
            Err(GridError::CoordinateOutOfRange { easting: -1, northing: 0 })
        );
        assert!(Coordinate::try_from_signed(700_000, 0).is_err());
        assert!(Coordinate::try_from_signed(0, 1_300_000).is_err());
    }

    #[test]
    fn test_square() {
        let square = Coordinate::new(425_000, 505_000).square().unwrap();
        assert_eq!(square.to_string(), "NZ");
        assert!(matches!(
            Coordinate::new(700_000, 0).square(),
            Err(GridError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_floor_to() {
        let c = Coordinate::new(425_678, 505_432);
        let km = Precision::from_digit_pairs(2).unwrap();
        assert_eq!(c.floor_to(km), Coordinate::new(425_000, 505_000));
        assert_eq!(c.floor_to(km.halved().unwrap()), Coordinate::new(425_500, 505_000));
        assert_eq!(c.floor_to(Precision::from_digit_pairs(5).unwrap()), c);
    }

    #[test]
    fn test_bounding_box_contains() {
        let bounds = BoundingBox {
            min: Coordinate::new(420_000, 500_000),
            max: Coordinate::new(430_000, 510_000),
        };
        assert!(bounds.contains(&Coordinate::new(425_000, 505_000)));
        assert!(!bounds.contains(&Coordinate::new(430_000, 505_000)));
        assert_eq!(bounds.to_string(), "420000, 500000, 430000, 510000");
    }
}
