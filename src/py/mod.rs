use pyo3::prelude::*;

mod convert;
mod reference;

/// Register all Python-visible functions and types.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(reference::parse_grid_reference, m)?)?;
    m.add_function(wrap_pyfunction!(reference::is_valid_grid_reference, m)?)?;
    m.add_function(wrap_pyfunction!(reference::format_grid_reference, m)?)?;
    m.add_function(wrap_pyfunction!(reference::grid_reference_precision, m)?)?;
    m.add_function(wrap_pyfunction!(convert::grid_ref_to_lat_lng, m)?)?;
    m.add_function(wrap_pyfunction!(convert::grid_refs_to_lat_lng, m)?)?;
    m.add_function(wrap_pyfunction!(convert::lat_lng_to_grid_ref, m)?)?;
    m.add_function(wrap_pyfunction!(convert::is_in_herefordshire, m)?)?;
    Ok(())
}
