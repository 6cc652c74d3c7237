//! Grid notation parser — decodes `"SO 514 398"`-style text into symbols.
//!
//! No unit conversion happens here; see [`crate::grid::encoder::to_meters`].

use crate::error::GridError;
use crate::grid::squares::GridSquare;

/// Largest number of digits per axis (1 m resolution).
pub const MAX_PRECISION: u8 = 5;

/// A decoded grid reference: lettered square plus per-axis digit values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridNotation {
    pub square: GridSquare,
    /// Easting digits as an integer, e.g. `514` for `"SO514398"`.
    pub easting_digits: u32,
    /// Northing digits as an integer.
    pub northing_digits: u32,
    /// Digits supplied per axis, 1..=5.
    pub precision: u8,
}

/// Strip all whitespace and uppercase ASCII letters.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Decode a textual grid reference.
///
/// Accepts two letters followed by an even run of 2 to 10 digits, with arbitrary
/// whitespace and letter case.
pub fn decode(text: &str) -> Result<GridNotation, GridError> {
    let clean = normalize(text);
    let bytes = clean.as_bytes();

    if bytes.len() < 3
        || !bytes[..2].iter().all(u8::is_ascii_alphabetic)
        || !bytes[2..].iter().all(u8::is_ascii_digit)
    {
        return Err(GridError::Malformed(text.to_string()));
    }

    let (letters, digits) = clean.split_at(2);
    let digit_count = digits.len();
    if digit_count > 2 * MAX_PRECISION as usize {
        return Err(GridError::PrecisionOverflow(digit_count));
    }
    if digit_count % 2 != 0 {
        return Err(GridError::OddDigitCount(digit_count));
    }

    let square = GridSquare::from_letters(letters)
        .ok_or_else(|| GridError::UnknownGridSquare(letters.to_string()))?;

    let half = digit_count / 2;
    let (easting, northing) = digits.split_at(half);

    Ok(GridNotation {
        square,
        easting_digits: digit_value(easting),
        northing_digits: digit_value(northing),
        precision: half as u8,
    })
}

fn digit_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
