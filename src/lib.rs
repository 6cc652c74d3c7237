pub mod bounds;
pub mod convert;
pub mod error;
pub mod grid;
pub mod proj;
#[cfg(feature = "python")]
mod py;

pub use bounds::{contained_in, is_in_herefordshire, is_valid, BoundingBox, HEREFORDSHIRE};
pub use convert::{format, from_lat_lng, precision_meters, to_lat_lng, to_lat_lng_batch};
pub use error::{GridError, ProjError};
pub use grid::GridReference;
pub use proj::{Datum, GeodeticPoint};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_surface() {
        assert!(is_valid("SO 514 398"));
        assert!(is_in_herefordshire("SO 514 398"));
        assert!(contained_in("SO 514 398", &HEREFORDSHIRE));
        assert_eq!(format("so514398"), "SO 514 398");
    }
}
