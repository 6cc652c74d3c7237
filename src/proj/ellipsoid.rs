/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Semi-minor axis (metres)
    pub b: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// First eccentricity squared: (a² - b²) / a²
    pub e2: f64,
    /// Third flattening: (a - b) / (a + b)
    pub n: f64,
}

impl Ellipsoid {
    /// Define an ellipsoid by semi-major axis and flattening.
    pub const fn new(a: f64, f: f64) -> Self {
        let b = a * (1.0 - f);
        Self {
            a,
            b,
            f,
            e2: 2.0 * f - f * f,
            n: f / (2.0 - f),
        }
    }

    /// Define an ellipsoid by both semi-axes, as the Ordnance Survey publishes Airy 1830.
    pub const fn from_axes(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            f: (a - b) / a,
            e2: (a * a - b * b) / (a * a),
            n: (a - b) / (a + b),
        }
    }

    /// Get the first eccentricity.
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }

    /// Second eccentricity squared: e² / (1 - e²).
    pub fn ep2(&self) -> f64 {
        self.e2 / (1.0 - self.e2)
    }
}

/// Airy 1830, the ellipsoid of the OSGB36 datum.
pub const AIRY_1830: Ellipsoid = Ellipsoid::from_axes(6_377_563.396, 6_356_256.909);

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);
