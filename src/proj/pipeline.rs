//! Pipeline — National Grid metres ↔ WGS84 latitude/longitude.
//!
//! grid (E, N) → inverse Transverse Mercator → OSGB36 lat/lon (Airy 1830)
//!   → geocentric XYZ → Helmert → geocentric XYZ → WGS84 lat/lon.

use crate::error::ProjError;
use crate::proj::ellipsoid::{Ellipsoid, AIRY_1830, WGS84};
use crate::proj::geocentric::{from_cartesian, to_cartesian};
use crate::proj::helmert::{Helmert, OSGB36_TO_WGS84};
use crate::proj::point::{Datum, GeodeticPoint};
use crate::proj::transverse_mercator::{Convergence, TransverseMercator};
use crate::proj::Projection;

/// Height refinements when going back from WGS84 to the grid.
const HEIGHT_STEPS: usize = 3;

/// Projection plus datum shift for one grid.
#[derive(Clone, Copy, Debug)]
pub struct GridPipeline {
    projection: TransverseMercator,
    source: Ellipsoid,
    target: Ellipsoid,
    helmert: Helmert,
}

/// The British National Grid on OSGB36, shifted to WGS84.
pub const NATIONAL_GRID: GridPipeline = GridPipeline::national_grid();

impl Default for GridPipeline {
    fn default() -> Self {
        NATIONAL_GRID
    }
}

impl GridPipeline {
    pub const fn national_grid() -> Self {
        Self {
            projection: TransverseMercator::national_grid(),
            source: AIRY_1830,
            target: WGS84,
            helmert: OSGB36_TO_WGS84,
        }
    }

    pub const fn with_convergence(mut self, convergence: Convergence) -> Self {
        self.projection = self.projection.with_convergence(convergence);
        self
    }

    pub fn projection(&self) -> &TransverseMercator {
        &self.projection
    }

    /// Grid metres → latitude/longitude on the grid's own datum (OSGB36).
    pub fn project(&self, easting: f64, northing: f64) -> Result<GeodeticPoint, ProjError> {
        let (lon, lat) = self.projection.inverse(easting, northing)?;
        Ok(GeodeticPoint::from_radians(lat, lon, Datum::Osgb36))
    }

    /// Shift an OSGB36 point to WGS84. WGS84 input is returned unchanged.
    pub fn shift_datum(&self, point: GeodeticPoint) -> GeodeticPoint {
        if point.datum() == Datum::Wgs84 {
            return point;
        }
        let c = to_cartesian(
            &self.source,
            point.lat().to_radians(),
            point.lng().to_radians(),
            0.0,
        );
        let (lat, lon, _) = from_cartesian(&self.target, &self.helmert.apply(&c));
        GeodeticPoint::from_radians(lat, lon, Datum::Wgs84)
    }

    /// Grid metres → WGS84 latitude/longitude.
    pub fn grid_to_wgs84(&self, easting: f64, northing: f64) -> Result<GeodeticPoint, ProjError> {
        self.project(easting, northing).map(|p| self.shift_datum(p))
    }

    /// WGS84 latitude/longitude (degrees) → grid metres.
    pub fn wgs84_to_grid(&self, lat: f64, lng: f64) -> Result<(f64, f64), ProjError> {
        if !(-90.0..=90.0).contains(&lat) || !lng.is_finite() {
            return Err(ProjError::InvalidParameter(format!(
                "latitude/longitude out of range: ({lat}, {lng})"
            )));
        }
        let (lat, lng) = (lat.to_radians(), lng.to_radians());
        // Grid points sit at zero OSGB36 height; solve for the WGS84 height that lands there.
        let mut height = 0.0;
        let mut osgb = (lat, lng);
        for _ in 0..HEIGHT_STEPS {
            let c = to_cartesian(&self.target, lat, lng, height);
            let (phi, lambda, h) = from_cartesian(&self.source, &self.helmert.apply_inverse(&c));
            osgb = (phi, lambda);
            height -= h;
        }
        self.projection.forward(osgb.1, osgb.0)
    }

    /// Batch grid → WGS84. Points that fail to convert come back as `None`.
    pub fn grid_to_wgs84_batch(&self, coords: &[(f64, f64)]) -> Vec<Option<GeodeticPoint>> {
        coords
            .iter()
            .map(|&(e, n)| self.grid_to_wgs84(e, n).ok())
            .collect()
    }
}
