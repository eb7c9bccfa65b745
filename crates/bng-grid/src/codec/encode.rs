//! Grid reference encoding.
//!
//! Quantizes a coordinate to the cell containing it at the requested number
//! of digits per axis. Digits are truncated, never rounded.

use crate::error::GridError;
use crate::limits::MAX_DIGIT_PAIRS;
use crate::model::{Coordinate, GridReference, Precision};
use crate::policy::SubCellOffsetPolicy;

/// Encodes a coordinate with `digit_pairs` digits per axis (0 to 5).
///
/// ```
/// use bng_grid::{encode, Coordinate};
///
/// let reference = encode(Coordinate::new(425_678, 505_432), 2).unwrap();
/// assert_eq!(reference.to_string(), "NZ2505");
/// ```
pub fn encode(coordinate: Coordinate, digit_pairs: u8) -> Result<GridReference, GridError> {
    if digit_pairs > MAX_DIGIT_PAIRS {
        return Err(GridError::InvalidDigitPairs {
            digit_pairs,
            max: MAX_DIGIT_PAIRS,
        });
    }
    let square = coordinate.square()?;
    let (easting, northing) = coordinate.within_square();
    let scale = 10u32.pow(u32::from(MAX_DIGIT_PAIRS - digit_pairs));
    GridReference::new(square, digit_pairs, easting / scale, northing / scale, None)
}

/// Encodes a coordinate straight to its reference string.
pub fn encode_string(coordinate: Coordinate, digit_pairs: u8) -> Result<String, GridError> {
    Ok(encode(coordinate, digit_pairs)?.to_string())
}

/// Encodes a coordinate and appends the compass sub-cell it falls in.
///
/// The result denotes a cell half the size of the plain `digit_pairs` cell,
/// e.g. 5km for one digit pair. Fails at five digit pairs, where the 1m cell
/// has no sub-cells.
pub fn encode_with_quadrant(
    coordinate: Coordinate,
    digit_pairs: u8,
) -> Result<GridReference, GridError> {
    let reference = encode(coordinate, digit_pairs)?;
    let cell = Precision::from_digit_pairs(digit_pairs)?.metres();
    let (easting, northing) = coordinate.within_square();
    let quadrant = SubCellOffsetPolicy::classify(easting % cell, northing % cell, cell)?;
    reference.with_quadrant(quadrant)
}
