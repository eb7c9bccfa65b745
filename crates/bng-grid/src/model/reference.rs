//! Alphanumeric grid references and their parts.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::limits::{MAX_DIGIT_PAIRS, SQUARE_SIZE};
use crate::model::GridSquare;

/// A compass quadrant of a grid cell.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NE,
    NW,
    SE,
    SW,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::NE, Quadrant::NW, Quadrant::SE, Quadrant::SW];

    /// Picks the quadrant from which halves of the cell a point falls in.
    pub fn from_halves(east: bool, north: bool) -> Self {
        match (east, north) {
            (true, true) => Quadrant::NE,
            (false, true) => Quadrant::NW,
            (true, false) => Quadrant::SE,
            (false, false) => Quadrant::SW,
        }
    }

    pub fn is_east(&self) -> bool {
        matches!(self, Quadrant::NE | Quadrant::SE)
    }

    pub fn is_north(&self) -> bool {
        matches!(self, Quadrant::NE | Quadrant::NW)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::NE => "NE",
            Quadrant::NW => "NW",
            Quadrant::SE => "SE",
            Quadrant::SW => "SW",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quadrant {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NE" => Ok(Quadrant::NE),
            "NW" => Ok(Quadrant::NW),
            "SE" => Ok(Quadrant::SE),
            "SW" => Ok(Quadrant::SW),
            _ => Err(GridError::InvalidQuadrant { found: s.to_string() }),
        }
    }
}

/// The point of a decoded cell to report.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Corner {
    #[default]
    SW,
    NW,
    NE,
    SE,
    /// Centre of the cell.
    MID,
    /// The whole cell as a bounding box.
    SWNE,
}

impl FromStr for Corner {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SW" => Ok(Corner::SW),
            "NW" => Ok(Corner::NW),
            "NE" => Ok(Corner::NE),
            "SE" => Ok(Corner::SE),
            "MID" => Ok(Corner::MID),
            "SWNE" => Ok(Corner::SWNE),
            _ => Err(GridError::InvalidCorner { found: s.to_string() }),
        }
    }
}

/// Resolution of a grid cell, as its side in metres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Precision(u32);

impl Precision {
    /// Cell side for a number of digits per axis (100km at zero digits, 1m at five).
    pub fn from_digit_pairs(digit_pairs: u8) -> Result<Self, GridError> {
        if digit_pairs > MAX_DIGIT_PAIRS {
            return Err(GridError::InvalidDigitPairs {
                digit_pairs,
                max: MAX_DIGIT_PAIRS,
            });
        }
        Ok(Self(SQUARE_SIZE / 10u32.pow(u32::from(digit_pairs))))
    }

    pub fn metres(&self) -> u32 {
        self.0
    }

    /// The precision of a compass sub-cell of this cell.
    pub fn halved(&self) -> Result<Self, GridError> {
        if self.0 < 2 || self.0 % 2 != 0 {
            return Err(GridError::NoSubdivision { cell_size: self.0 });
        }
        Ok(Self(self.0 / 2))
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 1000 {
            write!(f, "{}km", self.0 / 1000)
        } else {
            write!(f, "{}m", self.0)
        }
    }
}

/// A parsed grid reference: square letters, digits per axis and an optional
/// compass sub-cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridReference {
    square: GridSquare,
    digit_pairs: u8,
    easting_digits: u32,
    northing_digits: u32,
    quadrant: Option<Quadrant>,
}

impl GridReference {
    /// Builds a reference, checking that the digit values fit in `digit_pairs`
    /// digits and that the cell can carry a sub-cell.
    pub fn new(
        square: GridSquare,
        digit_pairs: u8,
        easting_digits: u32,
        northing_digits: u32,
        quadrant: Option<Quadrant>,
    ) -> Result<Self, GridError> {
        let precision = Precision::from_digit_pairs(digit_pairs)?;
        let limit = 10u32.pow(u32::from(digit_pairs));
        for value in [easting_digits, northing_digits] {
            if value >= limit {
                return Err(GridError::DigitsOverflow { value, digit_pairs });
            }
        }
        if quadrant.is_some() {
            precision.halved()?;
        }
        Ok(Self {
            square,
            digit_pairs,
            easting_digits,
            northing_digits,
            quadrant,
        })
    }

    pub fn square(&self) -> GridSquare {
        self.square
    }

    pub fn digit_pairs(&self) -> u8 {
        self.digit_pairs
    }

    /// Returns the easting digits as a number (e.g. 5 for "05").
    pub fn easting_digits(&self) -> u32 {
        self.easting_digits
    }

    pub fn northing_digits(&self) -> u32 {
        self.northing_digits
    }

    pub fn quadrant(&self) -> Option<Quadrant> {
        self.quadrant
    }

    /// Returns a copy carrying the given sub-cell.
    pub fn with_quadrant(&self, quadrant: Quadrant) -> Result<Self, GridError> {
        if let Some(existing) = self.quadrant {
            return Err(GridError::SubCellAlreadySet { existing });
        }
        Self::new(
            self.square,
            self.digit_pairs,
            self.easting_digits,
            self.northing_digits,
            Some(quadrant),
        )
    }

    /// Resolution of the cell this reference denotes, sub-cell included.
    pub fn precision(&self) -> Precision {
        // digit_pairs and quadrant were validated on construction
        let base = Precision(SQUARE_SIZE / 10u32.pow(u32::from(self.digit_pairs)));
        match self.quadrant {
            Some(_) => Precision(base.0 / 2),
            None => base,
        }
    }
}

impl fmt::Display for GridReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.square)?;
        if self.digit_pairs > 0 {
            let width = self.digit_pairs as usize;
            write!(
                f,
                "{:0width$}{:0width$}",
                self.easting_digits,
                self.northing_digits,
                width = width
            )?;
        }
        if let Some(quadrant) = self.quadrant {
            write!(f, "{}", quadrant)?;
        }
        Ok(())
    }
}

impl FromStr for GridReference {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::parse_reference(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz() -> GridSquare {
        "NZ".parse().unwrap()
    }

    #[test]
    fn test_quadrant_parse() {
        assert_eq!("ne".parse::<Quadrant>().unwrap(), Quadrant::NE);
        assert_eq!("SW".parse::<Quadrant>().unwrap(), Quadrant::SW);
        assert!(matches!(
            "N".parse::<Quadrant>(),
            Err(GridError::InvalidQuadrant { .. })
        ));
    }

    #[test]
    fn test_quadrant_halves() {
        for quadrant in Quadrant::ALL {
            assert_eq!(
                Quadrant::from_halves(quadrant.is_east(), quadrant.is_north()),
                quadrant
            );
        }
    }

    #[test]
    fn test_corner_parse() {
        assert_eq!("mid".parse::<Corner>().unwrap(), Corner::MID);
        assert_eq!("SWNE".parse::<Corner>().unwrap(), Corner::SWNE);
        assert!(matches!(
            "centre".parse::<Corner>(),
            Err(GridError::InvalidCorner { .. })
        ));
    }

    #[test]
    fn test_precision_values() {
        let sizes: Vec<u32> = (0..=5)
            .map(|n| Precision::from_digit_pairs(n).unwrap().metres())
            .collect();
        assert_eq!(sizes, vec![100_000, 10_000, 1_000, 100, 10, 1]);
        assert!(matches!(
            Precision::from_digit_pairs(6),
            Err(GridError::InvalidDigitPairs { digit_pairs: 6, .. })
        ));
    }

    #[test]
    fn test_precision_halved() {
        let p = Precision::from_digit_pairs(1).unwrap().halved().unwrap();
        assert_eq!(p.metres(), 5_000);
        assert_eq!(p.to_string(), "5km");
        assert_eq!(
            Precision::from_digit_pairs(5).unwrap().halved(),
            Err(GridError::NoSubdivision { cell_size: 1 })
        );
    }

    #[test]
    fn test_display_pads_digits() {
        let reference = GridReference::new(nz(), 2, 5, 70, None).unwrap();
        assert_eq!(reference.to_string(), "NZ0570");

        let reference = GridReference::new(nz(), 1, 2, 0, Some(Quadrant::NE)).unwrap();
        assert_eq!(reference.to_string(), "NZ20NE");

        let reference = GridReference::new(nz(), 0, 0, 0, None).unwrap();
        assert_eq!(reference.to_string(), "NZ");
    }

    #[test]
    fn test_digits_overflow() {
        assert_eq!(
            GridReference::new(nz(), 1, 10, 0, None),
            Err(GridError::DigitsOverflow { value: 10, digit_pairs: 1 })
        );
    }

    #[test]
    fn test_with_quadrant() {
        let reference = GridReference::new(nz(), 1, 2, 0, None).unwrap();
        let with = reference.with_quadrant(Quadrant::SW).unwrap();
        assert_eq!(with.precision().metres(), 5_000);
        assert_eq!(
            with.with_quadrant(Quadrant::NE),
            Err(GridError::SubCellAlreadySet { existing: Quadrant::SW })
        );

        let metre = GridReference::new(nz(), 5, 0, 0, None).unwrap();
        assert!(matches!(
            metre.with_quadrant(Quadrant::NE),
            Err(GridError::NoSubdivision { cell_size: 1 })
        ));
    }
}
