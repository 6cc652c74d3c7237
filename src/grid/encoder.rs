//! National Grid encoder: lettered square + digits ↔ full OSGB36 metres.

use crate::error::GridError;
use crate::grid::notation::{GridNotation, MAX_PRECISION};
use crate::grid::squares::{GridSquare, SQUARE_SIZE_M};
use crate::grid::GridReference;

/// Grid extent in metres (easting, northing), exclusive.
pub const GRID_EXTENT: (u32, u32) = (700_000, 1_300_000);

/// Metres represented by one unit of the least significant digit.
pub(crate) fn resolution(precision: u8) -> u32 {
    10u32.pow(u32::from(MAX_PRECISION - precision))
}

/// Convert decoded notation to full easting/northing metres.
pub fn to_meters(notation: &GridNotation) -> GridReference {
    let unit = resolution(notation.precision);
    let (e0, n0) = notation.square.origin();
    GridReference {
        easting: e0 + notation.easting_digits * unit,
        northing: n0 + notation.northing_digits * unit,
        precision: notation.precision,
    }
}

/// Split metres into a lettered square and per-axis digits truncated to `precision`.
fn split(easting: u32, northing: u32, precision: u8) -> Result<GridNotation, GridError> {
    if !(1..=MAX_PRECISION).contains(&precision) {
        return Err(GridError::InvalidPrecision(precision));
    }
    let out_of_grid = || GridError::OutOfGrid {
        easting: f64::from(easting),
        northing: f64::from(northing),
    };
    if easting >= GRID_EXTENT.0 || northing >= GRID_EXTENT.1 {
        return Err(out_of_grid());
    }
    let square = GridSquare::from_indices(easting / SQUARE_SIZE_M, northing / SQUARE_SIZE_M)
        .ok_or_else(out_of_grid)?;
    let unit = resolution(precision);
    Ok(GridNotation {
        square,
        easting_digits: (easting % SQUARE_SIZE_M) / unit,
        northing_digits: (northing % SQUARE_SIZE_M) / unit,
        precision,
    })
}

fn render(notation: &GridNotation, separator: &str) -> String {
    let width = notation.precision as usize;
    format!(
        "{letters}{separator}{e:0width$}{separator}{n:0width$}",
        letters = notation.square.letters(),
        e = notation.easting_digits,
        n = notation.northing_digits,
    )
}

/// Encode metres as a compact reference such as `"SO514398"`.
///
/// Offsets finer than the requested precision are truncated, never rounded.
pub fn from_meters(easting: u32, northing: u32, precision: u8) -> Result<String, GridError> {
    split(easting, northing, precision).map(|n| render(&n, ""))
}

/// Encode metres in the spaced display form, e.g. `"SO 514 398"`.
pub fn format_spaced(easting: u32, northing: u32, precision: u8) -> Result<String, GridError> {
    split(easting, northing, precision).map(|n| render(&n, " "))
}

/// Canonical notation for a reference already known to be valid.
pub(crate) fn notation_of(reference: &GridReference) -> GridNotation {
    let square = GridSquare::from_indices(
        reference.easting / SQUARE_SIZE_M,
        reference.northing / SQUARE_SIZE_M,
    )
    .unwrap_or(GridSquare { column: 0, row: 12 });
    let unit = resolution(reference.precision);
    GridNotation {
        square,
        easting_digits: (reference.easting % SQUARE_SIZE_M) / unit,
        northing_digits: (reference.northing % SQUARE_SIZE_M) / unit,
        precision: reference.precision,
    }
}

pub(crate) fn render_reference(reference: &GridReference, separator: &str) -> String {
    render(&notation_of(reference), separator)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::grid::notation::decode;
    use proptest::prelude::*;

    #[test]
    fn test_to_meters_hereford() {
        let r = to_meters(&decode("SO 514 398").unwrap());
        assert_eq!(r.easting(), 351_400);
        assert_eq!(r.northing(), 239_800);
        assert_eq!(r.precision(), 3);
    }

    #[test]
    fn test_to_meters_row_inversion() {
        // Top-left square of the table is the far north-west of the grid.
        let r = to_meters(&decode("HL 1 2").unwrap());
        assert_eq!((r.easting(), r.northing()), (10_000, 1_220_000));

        // Bottom-left square is the false origin.
        let r = to_meters(&decode("SV 1 2").unwrap());
        assert_eq!((r.easting(), r.northing()), (10_000, 20_000));

        // Shetland and the Channel sit 11 bands apart within the same column.
        let hu = to_meters(&decode("HU 00").unwrap());
        let su = to_meters(&decode("SU 00").unwrap());
        assert_eq!(hu.easting(), su.easting());
        assert_eq!(hu.northing() - su.northing(), 1_000_000);
    }

    #[test]
    fn test_from_meters_hereford() {
        assert_eq!(from_meters(351_400, 239_800, 3).unwrap(), "SO514398");
        assert_eq!(format_spaced(351_400, 239_800, 3).unwrap(), "SO 514 398");
    }

    #[test]
    fn test_from_meters_truncates_and_pads() {
        assert_eq!(from_meters(351_499, 239_899, 3).unwrap(), "SO514398");
        assert_eq!(from_meters(351_400, 239_800, 5).unwrap(), "SO5140039800");
        assert_eq!(from_meters(300_050, 200_007, 4).unwrap(), "SO00050000");
        assert_eq!(from_meters(351_400, 239_800, 1).unwrap(), "SO53");
    }

    #[test]
    fn test_from_meters_rejects_bad_input() {
        assert_eq!(from_meters(351_400, 239_800, 0), Err(GridError::InvalidPrecision(0)));
        assert_eq!(from_meters(351_400, 239_800, 6), Err(GridError::InvalidPrecision(6)));
        assert!(matches!(
            from_meters(700_000, 0, 3),
            Err(GridError::OutOfGrid { .. })
        ));
        assert!(matches!(
            from_meters(0, 1_300_000, 3),
            Err(GridError::OutOfGrid { .. })
        ));
    }

    #[test]
    fn test_grid_corners() {
        assert_eq!(from_meters(0, 0, 5).unwrap(), "SV0000000000");
        assert_eq!(from_meters(699_999, 1_299_999, 5).unwrap(), "JM9999999999");
    }

    prop_compose! {
        /// Compact reference text with its digit values and precision.
        pub(crate) fn arb_reference()(
            column in 0u32..7,
            northing_index in 0u32..13,
            precision in 1u8..=5,
            e_frac in 0.0f64..1.0,
            n_frac in 0.0f64..1.0,
        ) -> (String, u32, u32, u8) {
            let limit = 10u32.pow(u32::from(precision));
            let e = ((e_frac * f64::from(limit)) as u32).min(limit - 1);
            let n = ((n_frac * f64::from(limit)) as u32).min(limit - 1);
            let letters = GridSquare::from_indices(column, northing_index).unwrap().letters();
            let width = precision as usize;
            (format!("{letters}{e:0width$}{n:0width$}"), e, n, precision)
        }
    }

    proptest! {
        #[test]
        fn test_round_trip((text, e, n, precision) in arb_reference()) {
            let parsed = to_meters(&decode(&text).unwrap());
            let encoded = from_meters(parsed.easting(), parsed.northing(), precision).unwrap();
            prop_assert_eq!(&encoded, &text);

            let reparsed = decode(&encoded).unwrap();
            prop_assert_eq!(reparsed.square.letters(), &text[..2]);
            prop_assert_eq!(reparsed.easting_digits, e);
            prop_assert_eq!(reparsed.northing_digits, n);
        }

        #[test]
        fn test_precision_monotonicity(
            easting in 0u32..700_000,
            northing in 0u32..1_300_000,
            low in 1u8..=5,
            extra in 0u8..=4,
        ) {
            let high = (low + extra).min(MAX_PRECISION);
            let coarse = from_meters(easting, northing, low).unwrap();
            let fine = from_meters(easting, northing, high).unwrap();
            let (lo, hi) = (low as usize, high as usize);
            prop_assert_eq!(&coarse[..2], &fine[..2]);
            // Leading digits of each axis are fixed once a coarser precision sets them.
            prop_assert_eq!(&coarse[2..2 + lo], &fine[2..2 + lo]);
            prop_assert_eq!(&coarse[2 + lo..], &fine[2 + hi..2 + hi + lo]);
        }

        #[test]
        fn test_meters_are_multiples_of_resolution((text, _e, _n, precision) in arb_reference()) {
            let r = to_meters(&decode(&text).unwrap());
            let unit = resolution(precision);
            prop_assert_eq!(r.easting() % unit, 0);
            prop_assert_eq!(r.northing() % unit, 0);
            prop_assert!(r.easting() < GRID_EXTENT.0);
            prop_assert!(r.northing() < GRID_EXTENT.1);
        }
    }
}
