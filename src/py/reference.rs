//! PyO3 bindings for parsing, validating and formatting grid references.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::bounds;
use crate::convert;
use crate::grid::GridReference;

/// Parse a grid reference into full National Grid metres.
///
/// Args:
///     grid_ref: Reference text, e.g. "SO 514 398". Spacing and case are ignored.
///
/// Returns:
///     Tuple of (easting, northing, precision), precision being digits per axis.
///
/// Raises:
///     ValueError: if the text is not a valid grid reference.
#[pyfunction]
pub fn parse_grid_reference(grid_ref: &str) -> PyResult<(u32, u32, u8)> {
    let r = GridReference::parse(grid_ref).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((r.easting(), r.northing(), r.precision()))
}

/// Check whether text is a valid grid reference.
#[pyfunction]
pub fn is_valid_grid_reference(grid_ref: &str) -> bool {
    bounds::is_valid(grid_ref)
}

/// Canonical "LL EEE NNN" form. Invalid input is returned unchanged.
#[pyfunction]
pub fn format_grid_reference(grid_ref: &str) -> String {
    convert::format(grid_ref)
}

/// Resolution of a grid reference in metres, or None if invalid.
#[pyfunction]
pub fn grid_reference_precision(grid_ref: &str) -> Option<u32> {
    convert::precision_meters(grid_ref)
}
