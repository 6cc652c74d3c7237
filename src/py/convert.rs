//! PyO3 bindings for grid reference ↔ WGS84 conversion.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::bounds;
use crate::convert;

/// Convert a grid reference to WGS84.
///
/// Returns:
///     Tuple of (lat, lng) in degrees, or None when the reference has no location.
#[pyfunction]
pub fn grid_ref_to_lat_lng(grid_ref: &str) -> Option<(f64, f64)> {
    convert::to_lat_lng(grid_ref)
        .ok()
        .map(|p| (p.lat(), p.lng()))
}

/// Convert a list of grid references to WGS84.
///
/// Args:
///     grid_refs: List of reference strings.
///
/// Returns:
///     Tuple of (lat, lng) 1D arrays. Entries that fail to convert are NaN.
#[pyfunction]
#[allow(clippy::type_complexity)]
pub fn grid_refs_to_lat_lng<'py>(
    py: Python<'py>,
    grid_refs: Vec<String>,
) -> (Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>) {
    let points = py.allow_threads(move || convert::to_lat_lng_batch(&grid_refs));

    let (lats, lngs): (Vec<f64>, Vec<f64>) = points
        .into_iter()
        .map(|p| p.map_or((f64::NAN, f64::NAN), |p| (p.lat(), p.lng())))
        .unzip();

    (
        PyArray1::from_owned_array(py, ndarray::Array1::from(lats)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(lngs)),
    )
}

/// Grid reference containing a WGS84 position.
///
/// Args:
///     lat: Latitude in degrees.
///     lng: Longitude in degrees.
///     precision: Digits per axis, 1 to 5. Defaults to 3 (100 m).
///
/// Raises:
///     ValueError: if the position lies outside the National Grid.
#[pyfunction]
#[pyo3(signature = (lat, lng, precision=3))]
pub fn lat_lng_to_grid_ref(lat: f64, lng: f64, precision: u8) -> PyResult<String> {
    convert::from_lat_lng(lat, lng, precision)
        .map(|r| r.to_string())
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Check whether a grid reference falls inside Herefordshire.
#[pyfunction]
pub fn is_in_herefordshire(grid_ref: &str) -> bool {
    bounds::is_in_herefordshire(grid_ref)
}
