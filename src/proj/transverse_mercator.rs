//! Transverse Mercator projection in the Ordnance Survey series form.
//!
//! Forward and inverse follow the formulas published for the National Grid
//! (Redfearn's series to Δλ⁶ / ΔE⁷). The inverse first recovers the footpoint
//! latitude by iterating on the meridional arc, then applies the series corrections.

use serde::{Deserialize, Serialize};

use crate::error::ProjError;
use crate::proj::common::{meridional_arc, radii_of_curvature};
use crate::proj::ellipsoid::{Ellipsoid, AIRY_1830};
use crate::proj::Projection;

/// Iteration limits for the footpoint latitude search.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Convergence {
    /// Stop once the latitude update is smaller than this (radians).
    pub tolerance_rad: f64,
    /// Give up with [`ProjError::ProjectionDivergence`] after this many updates.
    pub max_iterations: usize,
}

impl Default for Convergence {
    fn default() -> Self {
        Self {
            tolerance_rad: 1e-12,
            max_iterations: 32,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TransverseMercator {
    ellipsoid: Ellipsoid,
    lon0: f64,
    lat0: f64,
    k0: f64,
    false_easting: f64,
    false_northing: f64,
    convergence: Convergence,
}

impl TransverseMercator {
    pub const fn new(
        ellipsoid: Ellipsoid,
        lon0: f64,
        lat0: f64,
        k0: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        Self {
            ellipsoid,
            lon0,
            lat0,
            k0,
            false_easting,
            false_northing,
            convergence: Convergence {
                tolerance_rad: 1e-12,
                max_iterations: 32,
            },
        }
    }

    /// The British National Grid: Airy 1830, true origin 49°N 2°W,
    /// false origin 400 km west and 100 km north of it.
    pub const fn national_grid() -> Self {
        const DEG: f64 = std::f64::consts::PI / 180.0;
        Self::new(
            AIRY_1830,
            -2.0 * DEG,
            49.0 * DEG,
            0.999_601_271_7,
            400_000.0,
            -100_000.0,
        )
    }

    pub const fn with_convergence(mut self, convergence: Convergence) -> Self {
        self.convergence = convergence;
        self
    }

    pub fn convergence(&self) -> Convergence {
        self.convergence
    }

    fn arc(&self, phi: f64) -> f64 {
        meridional_arc(&self.ellipsoid, self.k0, self.lat0, phi)
    }

    /// Latitude whose meridional arc from the true origin equals the northing offset.
    fn footpoint_latitude(&self, northing: f64) -> Result<f64, ProjError> {
        let scaled_a = self.ellipsoid.a * self.k0;
        let target = northing - self.false_northing;
        let mut phi = self.lat0 + target / scaled_a;

        for _ in 0..self.convergence.max_iterations {
            let dphi = (target - self.arc(phi)) / scaled_a;
            phi += dphi;
            if dphi.abs() < self.convergence.tolerance_rad {
                return Ok(phi);
            }
        }

        tracing::warn!(
            northing,
            iterations = self.convergence.max_iterations,
            "footpoint latitude did not converge"
        );
        Err(ProjError::ProjectionDivergence {
            iterations: self.convergence.max_iterations,
        })
    }
}

impl Projection for TransverseMercator {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(ProjError::InvalidParameter(format!(
                "non-finite coordinate ({lon}, {lat})"
            )));
        }
        let (nu, rho, eta2) = radii_of_curvature(&self.ellipsoid, self.k0, lat);
        let (sin_phi, cos_phi) = lat.sin_cos();
        let cos3 = cos_phi * cos_phi * cos_phi;
        let cos5 = cos3 * cos_phi * cos_phi;
        let t2 = lat.tan().powi(2);
        let t4 = t2 * t2;

        let i = self.arc(lat) + self.false_northing;
        let ii = nu / 2.0 * sin_phi * cos_phi;
        let iii = nu / 24.0 * sin_phi * cos3 * (5.0 - t2 + 9.0 * eta2);
        let iiia = nu / 720.0 * sin_phi * cos5 * (61.0 - 58.0 * t2 + t4);
        let iv = nu * cos_phi;
        let v = nu / 6.0 * cos3 * (nu / rho - t2);
        let vi = nu / 120.0 * cos5 * (5.0 - 18.0 * t2 + t4 + 14.0 * eta2 - 58.0 * t2 * eta2);

        let dl = lon - self.lon0;
        let dl2 = dl * dl;

        let northing = i + dl2 * (ii + dl2 * (iii + dl2 * iiia));
        let easting = self.false_easting + dl * (iv + dl2 * (v + dl2 * vi));
        Ok((easting, northing))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ProjError::InvalidParameter(format!(
                "non-finite coordinate ({x}, {y})"
            )));
        }
        let phi = self.footpoint_latitude(y)?;

        let (nu, rho, eta2) = radii_of_curvature(&self.ellipsoid, self.k0, phi);
        let t = phi.tan();
        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t4 * t2;
        let sec = 1.0 / phi.cos();
        let nu3 = nu * nu * nu;
        let nu5 = nu3 * nu * nu;
        let nu7 = nu5 * nu * nu;

        let vii = t / (2.0 * rho * nu);
        let viii = t / (24.0 * rho * nu3) * (5.0 + 3.0 * t2 + eta2 - 9.0 * t2 * eta2);
        let ix = t / (720.0 * rho * nu5) * (61.0 + 90.0 * t2 + 45.0 * t4);
        let x1 = sec / nu;
        let xi = sec / (6.0 * nu3) * (nu / rho + 2.0 * t2);
        let xii = sec / (120.0 * nu5) * (5.0 + 28.0 * t2 + 24.0 * t4);
        let xiia = sec / (5040.0 * nu7) * (61.0 + 662.0 * t2 + 1320.0 * t4 + 720.0 * t6);

        let de = x - self.false_easting;
        let de2 = de * de;

        let lat = phi - de2 * (vii - de2 * (viii - de2 * ix));
        let lon = self.lon0 + de * (x1 - de2 * (xi - de2 * (xii - de2 * xiia)));
        Ok((lon, lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}
