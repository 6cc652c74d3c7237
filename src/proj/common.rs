//! Common helpers for projection math (meridional arc, radii of curvature).

use super::ellipsoid::Ellipsoid;

/// Meridional arc length from latitude `phi0` to `phi`, scaled by `k0`.
///
/// Uses the series in the third flattening n given by the Ordnance Survey for the
/// National Grid (accurate to well below a millimetre over Great Britain).
pub fn meridional_arc(ellipsoid: &Ellipsoid, k0: f64, phi0: f64, phi: f64) -> f64 {
    let n = ellipsoid.n;
    let n2 = n * n;
    let n3 = n2 * n;

    let d = phi - phi0;
    let s = phi + phi0;

    let ma = (1.0 + n + 5.0 / 4.0 * n2 + 5.0 / 4.0 * n3) * d;
    let mb = (3.0 * n + 3.0 * n2 + 21.0 / 8.0 * n3) * d.sin() * s.cos();
    let mc = (15.0 / 8.0 * n2 + 15.0 / 8.0 * n3) * (2.0 * d).sin() * (2.0 * s).cos();
    let md = 35.0 / 24.0 * n3 * (3.0 * d).sin() * (3.0 * s).cos();

    ellipsoid.b * k0 * (ma - mb + mc - md)
}

/// Scaled radii of curvature at latitude `phi`.
///
/// Returns `(nu, rho, eta2)`: transverse radius, meridional radius and
/// `nu / rho - 1`, each already multiplied by the scale factor `k0`.
pub fn radii_of_curvature(ellipsoid: &Ellipsoid, k0: f64, phi: f64) -> (f64, f64, f64) {
    let sin_phi = phi.sin();
    let w = 1.0 - ellipsoid.e2 * sin_phi * sin_phi;
    let nu = ellipsoid.a * k0 / w.sqrt();
    let rho = ellipsoid.a * k0 * (1.0 - ellipsoid.e2) / (w * w.sqrt());
    (nu, rho, nu / rho - 1.0)
}
