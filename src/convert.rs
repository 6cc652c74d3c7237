//! Text-level conversions between grid references and WGS84 coordinates.

use crate::error::GridError;
use crate::grid::notation::MAX_PRECISION;
use crate::grid::GridReference;
use crate::proj::{GeodeticPoint, NATIONAL_GRID};

/// Convert a grid reference to WGS84 latitude/longitude.
///
/// The south-west corner of the referenced square is converted, as the Ordnance
/// Survey convention reads a reference as the corner rather than the centre.
pub fn to_lat_lng(text: &str) -> Result<GeodeticPoint, GridError> {
    let reference = GridReference::parse(text)?;
    reference_to_lat_lng(&reference)
}

pub fn reference_to_lat_lng(reference: &GridReference) -> Result<GeodeticPoint, GridError> {
    let point = NATIONAL_GRID.grid_to_wgs84(
        f64::from(reference.easting()),
        f64::from(reference.northing()),
    )?;
    Ok(point)
}

/// Convert many references, keeping positions. Failures become `None`.
pub fn to_lat_lng_batch<S: AsRef<str>>(texts: &[S]) -> Vec<Option<GeodeticPoint>> {
    texts
        .iter()
        .map(|text| {
            let text = text.as_ref();
            match to_lat_lng(text) {
                Ok(point) => Some(point),
                Err(e) => {
                    tracing::debug!(grid_ref = text, error = %e, "no location for grid reference");
                    None
                }
            }
        })
        .collect()
}

/// Find the grid reference of the given precision containing a WGS84 position.
pub fn from_lat_lng(lat: f64, lng: f64, precision: u8) -> Result<GridReference, GridError> {
    if !(1..=MAX_PRECISION).contains(&precision) {
        return Err(GridError::InvalidPrecision(precision));
    }
    let (easting, northing) = NATIONAL_GRID.wgs84_to_grid(lat, lng)?;
    // Round to the millimetre first so that 351399.9999 truncates to 351400.
    let easting = (easting * 1000.0).round() / 1000.0;
    let northing = (northing * 1000.0).round() / 1000.0;
    if !(0.0..700_000.0).contains(&easting) || !(0.0..1_300_000.0).contains(&northing) {
        return Err(GridError::OutOfGrid { easting, northing });
    }
    GridReference::new(easting.floor() as u32, northing.floor() as u32, precision)
}

/// Canonical display form (`"SO 514 398"`). Unparseable text is returned unchanged.
pub fn format(text: &str) -> String {
    match GridReference::parse(text) {
        Ok(reference) => reference.to_string(),
        Err(_) => text.to_string(),
    }
}

/// Resolution of a reference in metres: 10 000 for `"SO53"`, 1 for ten digits.
pub fn precision_meters(text: &str) -> Option<u32> {
    GridReference::parse(text).ok().map(|r| r.resolution_m())
}
