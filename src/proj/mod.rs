pub mod common;
pub mod ellipsoid;
pub mod geocentric;
pub mod helmert;
pub mod pipeline;
pub mod point;
pub mod transverse_mercator;

pub use pipeline::{GridPipeline, NATIONAL_GRID};
pub use point::{Datum, GeodeticPoint};

use crate::error::ProjError;

/// Trait for map projections supporting forward and inverse transforms.
pub trait Projection: Send + Sync {
    /// Forward: (lon_rad, lat_rad) -> (easting, northing)
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError>;

    /// Inverse: (easting, northing) -> (lon_rad, lat_rad)
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError>;

    /// Batch forward transform.
    fn forward_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.forward(c.0, c.1)?;
        }
        Ok(())
    }

    /// Batch inverse transform.
    fn inverse_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.inverse(c.0, c.1)?;
        }
        Ok(())
    }

    fn ellipsoid(&self) -> &ellipsoid::Ellipsoid;
}

/// Grid metres → OSGB36 latitude/longitude on the National Grid.
pub fn project(easting: f64, northing: f64) -> Result<GeodeticPoint, ProjError> {
    NATIONAL_GRID.project(easting, northing)
}

/// OSGB36 → WGS84 with the Ordnance Survey Helmert parameters.
pub fn shift_datum(point: GeodeticPoint) -> GeodeticPoint {
    NATIONAL_GRID.shift_datum(point)
}
