//! Grid reference decoding.
//!
//! Parses an alphanumeric reference such as `NZ20NE` and resolves it to the
//! south-west corner of the cell it denotes, plus the cell's precision.

use std::fmt;

use crate::codec::scanner::{digits_value, Scanner};
use crate::error::GridError;
use crate::limits::{MAX_DIGIT_PAIRS, MAX_DIGITS, MAX_REFERENCE_LEN};
use crate::model::{
    BoundingBox, Coordinate, Corner, GridReference, GridSquare, Precision, Quadrant,
};
use crate::policy::SubCellOffsetPolicy;

// =============================================================================
// PARSING
// =============================================================================

/// Parses a reference string into its parts without resolving coordinates.
///
/// Accepts lowercase, surrounding whitespace, and whitespace between the
/// letters, the digits and the sub-cell suffix (`nz 20 ne`).
pub fn parse_reference(input: &str) -> Result<GridReference, GridError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GridError::Empty);
    }
    if trimmed.len() > MAX_REFERENCE_LEN {
        return Err(GridError::TooLong {
            len: trimmed.len(),
            max: MAX_REFERENCE_LEN,
        });
    }
    if let Some((position, found)) = trimmed.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(GridError::UnexpectedChar { position, found });
    }

    let mut scanner = Scanner::new(trimmed.as_bytes());
    let first = scanner.read_letter("first grid letter")?;
    let second = scanner.read_letter("second grid letter")?;
    let square = GridSquare::from_letters(char::from(first), char::from(second))?;

    scanner.skip_whitespace();
    let digits = scanner.read_digits();
    if digits.len() > MAX_DIGITS {
        return Err(GridError::TooManyDigits {
            count: digits.len(),
            max: MAX_DIGITS,
        });
    }
    if digits.len() % 2 != 0 {
        return Err(GridError::OddDigitCount { count: digits.len() });
    }
    let (easting, northing) = digits.split_at(digits.len() / 2);

    scanner.skip_whitespace();
    let quadrant = if scanner.is_empty() {
        None
    } else {
        Some(read_quadrant(&scanner)?)
    };

    let digit_pairs = (digits.len() / 2) as u8;
    debug_assert!(digit_pairs <= MAX_DIGIT_PAIRS);
    GridReference::new(
        square,
        digit_pairs,
        digits_value(easting),
        digits_value(northing),
        quadrant,
    )
}

/// Reads the sub-cell suffix, which must be the rest of the input.
fn read_quadrant(scanner: &Scanner<'_>) -> Result<Quadrant, GridError> {
    let rest = scanner.remaining();
    if !matches!(rest[0].to_ascii_uppercase(), b'N' | b'S') {
        return Err(GridError::UnexpectedChar {
            position: scanner.position(),
            found: char::from(rest[0]),
        });
    }
    // the input was checked to be ASCII
    let suffix = std::str::from_utf8(rest).map_err(|_| GridError::UnexpectedChar {
        position: scanner.position(),
        found: char::from(rest[0]),
    })?;
    suffix.parse()
}

// =============================================================================
// DECODING
// =============================================================================

/// A decoded reference: the south-west corner of its cell and the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoded {
    pub coordinate: Coordinate,
    pub precision: Precision,
}

impl Decoded {
    /// Returns the whole cell.
    pub fn bounds(&self) -> BoundingBox {
        let size = self.precision.metres();
        BoundingBox {
            min: self.coordinate,
            max: Coordinate::new(self.coordinate.easting + size, self.coordinate.northing + size),
        }
    }

    /// Returns the centre of the cell, rounded down to whole metres.
    pub fn centre(&self) -> Coordinate {
        let half = self.precision.metres() / 2;
        Coordinate::new(self.coordinate.easting + half, self.coordinate.northing + half)
    }

    /// Returns the requested point of the cell.
    pub fn corner(&self, corner: Corner) -> CornerPoint {
        let Coordinate { easting, northing } = self.coordinate;
        let size = self.precision.metres();
        let point = match corner {
            Corner::SW => self.coordinate,
            Corner::NW => Coordinate::new(easting, northing + size),
            Corner::NE => Coordinate::new(easting + size, northing + size),
            Corner::SE => Coordinate::new(easting + size, northing),
            Corner::MID => self.centre(),
            Corner::SWNE => return CornerPoint::Bounds(self.bounds()),
        };
        CornerPoint::Point(point)
    }
}

/// A point or the full cell, as selected by a [`Corner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerPoint {
    Point(Coordinate),
    Bounds(BoundingBox),
}

impl fmt::Display for CornerPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CornerPoint::Point(point) => write!(f, "{}", point),
            CornerPoint::Bounds(bounds) => write!(f, "{}", bounds),
        }
    }
}

/// Decodes a reference string.
///
/// ```
/// use bng_grid::{decode, Coordinate};
///
/// let decoded = decode("NZ2000").unwrap();
/// assert_eq!(decoded.coordinate, Coordinate::new(420_000, 500_000));
/// assert_eq!(decoded.precision.metres(), 1_000);
/// ```
pub fn decode(input: &str) -> Result<Decoded, GridError> {
    let reference = parse_reference(input)?;
    decode_reference(&reference)
}

/// Decodes a reference string, selecting the given compass sub-cell of it.
///
/// The reference itself must not carry a sub-cell suffix.
pub fn decode_sub_cell(input: &str, quadrant: Quadrant) -> Result<Decoded, GridError> {
    let reference = parse_reference(input)?;
    decode_reference(&reference.with_quadrant(quadrant)?)
}

/// Decodes a reference string and reports the requested point of its cell.
pub fn decode_corner(input: &str, corner: Corner) -> Result<CornerPoint, GridError> {
    Ok(decode(input)?.corner(corner))
}

/// Resolves a parsed reference to coordinates.
pub fn decode_reference(reference: &GridReference) -> Result<Decoded, GridError> {
    let origin = reference.square().origin()?;
    let scale = 10u32.pow(u32::from(MAX_DIGIT_PAIRS - reference.digit_pairs()));
    let mut easting = origin.easting + reference.easting_digits() * scale;
    let mut northing = origin.northing + reference.northing_digits() * scale;

    if let Some(quadrant) = reference.quadrant() {
        let (east, north) = SubCellOffsetPolicy::offset(quadrant, scale)?;
        easting += east;
        northing += north;
    }

    Ok(Decoded {
        coordinate: Coordinate::new(easting, northing),
        precision: reference.precision(),
    })
}
