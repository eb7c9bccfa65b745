//! Conversion between grid references and coordinates.

pub mod decode;
pub mod encode;
pub mod scanner;

pub use decode::{
    decode, decode_corner, decode_reference, decode_sub_cell, parse_reference, CornerPoint,
    Decoded,
};
pub use encode::{encode, encode_string, encode_with_quadrant};
pub use scanner::Scanner;
