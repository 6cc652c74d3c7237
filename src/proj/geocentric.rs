//! Geodetic ↔ geocentric (earth-centred Cartesian) conversion.
//!
//! Geodetic latitude is measured along the ellipsoid normal, so the same point has
//! different latitude/longitude on different ellipsoids. Datum shifts are therefore
//! applied in Cartesian space: geodetic → XYZ on the source ellipsoid, Helmert,
//! XYZ → geodetic on the target ellipsoid.

use super::ellipsoid::Ellipsoid;

/// Earth-centred, earth-fixed Cartesian coordinates in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Geodetic (radians, metres above the ellipsoid) to Cartesian.
pub fn to_cartesian(ellipsoid: &Ellipsoid, lat: f64, lon: f64, height: f64) -> Cartesian {
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    let nu = ellipsoid.a / (1.0 - ellipsoid.e2 * sin_lat * sin_lat).sqrt();

    Cartesian {
        x: (nu + height) * cos_lat * cos_lon,
        y: (nu + height) * cos_lat * sin_lon,
        z: ((1.0 - ellipsoid.e2) * nu + height) * sin_lat,
    }
}

/// Cartesian to geodetic `(lat, lon, height)` using Bowring's closed form.
///
/// Sub-millimetre for points near the ellipsoid surface, no iteration.
pub fn from_cartesian(ellipsoid: &Ellipsoid, c: &Cartesian) -> (f64, f64, f64) {
    let (a, b, e2) = (ellipsoid.a, ellipsoid.b, ellipsoid.e2);
    let ep2 = ellipsoid.ep2();

    let p = c.x.hypot(c.y);
    let r = p.hypot(c.z);

    // Parametric latitude β
    let tan_beta = (b * c.z) / (a * p) * (1.0 + ep2 * b / r);
    let cos_beta = 1.0 / (1.0 + tan_beta * tan_beta).sqrt();
    let sin_beta = tan_beta * cos_beta;

    let lat = if p == 0.0 {
        std::f64::consts::FRAC_PI_2.copysign(c.z)
    } else {
        (c.z + ep2 * b * sin_beta.powi(3)).atan2(p - e2 * a * cos_beta.powi(3))
    };
    let lon = c.y.atan2(c.x);

    let (sin_lat, cos_lat) = lat.sin_cos();
    let nu = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
    let height = p * cos_lat + c.z * sin_lat - a * a / nu;

    (lat, lon, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::{AIRY_1830, WGS84};
    use approx::assert_relative_eq;

    #[test]
    fn test_equator_prime_meridian() {
        let c = to_cartesian(&WGS84, 0.0, 0.0, 0.0);
        assert_relative_eq!(c.x, WGS84.a, epsilon = 1e-6);
        assert_relative_eq!(c.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(c.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_north_pole() {
        let c = to_cartesian(&WGS84, std::f64::consts::FRAC_PI_2, 0.0, 0.0);
        assert_relative_eq!(c.z, WGS84.b, epsilon = 1e-6);
        let (lat, _, h) = from_cartesian(&WGS84, &Cartesian { x: 0.0, y: 0.0, z: WGS84.b });
        assert_relative_eq!(lat, std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(h, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_roundtrip_over_britain() {
        let cases: &[(f64, f64, f64)] = &[
            (52.054, -2.710, 0.0),
            (49.9, -6.3, 120.0),
            (60.8, -0.8, -30.0),
            (51.5, 1.7, 1_000.0),
        ];
        for ellipsoid in [AIRY_1830, WGS84] {
            for &(lat_deg, lon_deg, h) in cases {
                let (lat, lon) = (lat_deg.to_radians(), lon_deg.to_radians());
                let c = to_cartesian(&ellipsoid, lat, lon, h);
                let (lat2, lon2, h2) = from_cartesian(&ellipsoid, &c);
                assert_relative_eq!(lat2, lat, epsilon = 1e-11);
                assert_relative_eq!(lon2, lon, epsilon = 1e-12);
                assert_relative_eq!(h2, h, epsilon = 1e-4);
            }
        }
    }
}
