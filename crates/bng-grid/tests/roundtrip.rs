//! Property tests for decode/encode round trips.

use bng_grid::{
    decode, encode, encode_with_quadrant, parse_reference, Coordinate, ErrorKind, GridLabels,
    GridOptions, Precision, TwoKmGroupingPolicy,
};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (0u32..700_000, 0u32..1_300_000).prop_map(|(e, n)| Coordinate::new(e, n))
}

fn letters_with_i() -> impl Strategy<Value = String> {
    (prop::sample::select(b"ABCDEFGHJKLMNOPQRSTUVWXYZ".to_vec()), any::<bool>()).prop_map(
        |(letter, i_first)| {
            let letter = char::from(letter);
            if i_first {
                format!("I{}", letter)
            } else {
                format!("{}I", letter)
            }
        },
    )
}

proptest! {
    #[test]
    fn full_precision_roundtrip(c in coordinate()) {
        let reference = encode(c, 5).unwrap().to_string();
        let decoded = decode(&reference).unwrap();
        prop_assert_eq!(decoded.coordinate, c);
        prop_assert_eq!(decoded.precision.metres(), 1);
        prop_assert_eq!(encode(decoded.coordinate, 5).unwrap().to_string(), reference);
    }

    #[test]
    fn reduced_precision_quantizes(c in coordinate(), digit_pairs in 0u8..=5) {
        let precision = Precision::from_digit_pairs(digit_pairs).unwrap();
        let reference = encode(c, digit_pairs).unwrap();
        let decoded = decode(&reference.to_string()).unwrap();
        prop_assert_eq!(decoded.coordinate, c.floor_to(precision));
        prop_assert_eq!(decoded.precision, precision);
        prop_assert!(decoded.bounds().contains(&c));
        // re-encoding the corner is idempotent
        prop_assert_eq!(encode(decoded.coordinate, digit_pairs).unwrap(), reference);
    }

    #[test]
    fn quadrant_quantizes_to_half_cell(c in coordinate(), digit_pairs in 0u8..5) {
        let half = Precision::from_digit_pairs(digit_pairs).unwrap().halved().unwrap();
        let reference = encode_with_quadrant(c, digit_pairs).unwrap();
        let decoded = decode(&reference.to_string()).unwrap();
        prop_assert_eq!(decoded.coordinate, c.floor_to(half));
        prop_assert_eq!(decoded.precision, half);
        prop_assert!(decoded.bounds().contains(&c));
    }

    #[test]
    fn letter_i_is_invalid_format(letters in letters_with_i(), digits in "([0-9]{2}){0,5}") {
        let err = decode(&format!("{}{}", letters, digits)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn odd_digit_count_is_invalid_format(digits in "[0-9]{1,9}") {
        prop_assume!(digits.len() % 2 == 1);
        let err = decode(&format!("NZ{}", digits)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn too_many_digits_is_invalid_format(digits in "[0-9]{11,20}") {
        let err = decode(&format!("NZ{}", digits)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn out_of_grid_is_out_of_range(e in 700_000u32.., n in 0u32..1_300_000, digit_pairs in 0u8..=5) {
        let err = encode(Coordinate::new(e, n), digit_pairs).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::OutOfRange);
        let err = encode(Coordinate::new(n % 700_000, e.saturating_add(600_000)), digit_pairs).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn grid_labels_contain_coordinate(c in coordinate()) {
        let labels = GridLabels::for_coordinate(c, GridOptions::default()).unwrap();
        for label in [&labels.grid_100km, &labels.grid_50km, &labels.grid_10km, &labels.grid_5km, &labels.grid_1km] {
            let decoded = decode(label).unwrap();
            prop_assert!(decoded.bounds().contains(&c), "{} does not contain {}", label, c);
        }
        // the 20km label names the south-west 10km cell of its block
        let corner = decode(&labels.grid_20km).unwrap().coordinate;
        prop_assert!(corner.easting <= c.easting && c.easting - corner.easting < 20_000);
        prop_assert!(corner.northing <= c.northing && c.northing - corner.northing < 20_000);
    }

    #[test]
    fn two_km_block_contains_coordinate(c in coordinate()) {
        let labels = GridLabels::for_coordinate(c, GridOptions::default().with_2km(true)).unwrap();
        let label = parse_reference(labels.grid_2km.as_deref().unwrap()).unwrap();
        let origin = TwoKmGroupingPolicy::block_origin(&label).unwrap();
        let size = TwoKmGroupingPolicy::CELL_SIZE;
        prop_assert!(origin.easting <= c.easting && c.easting - origin.easting < size);
        prop_assert!(origin.northing <= c.northing && c.northing - origin.northing < size);
        prop_assert_eq!(origin.easting % size, 0);
        prop_assert_eq!(origin.northing % size, 0);
    }
}

#[test]
fn canonical_fixture() {
    let decoded = decode("NZ20NE").unwrap();
    assert_eq!(decoded.coordinate.to_string(), "425000, 505000");
    assert_eq!(
        encode_with_quadrant(decoded.coordinate, 1).unwrap().to_string(),
        "NZ20NE"
    );
}
