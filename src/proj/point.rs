use serde::Serialize;

/// Geodetic datum a [`GeodeticPoint`] is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Datum {
    /// Ordnance Survey 1936, on the Airy 1830 ellipsoid.
    Osgb36,
    Wgs84,
}

/// Latitude/longitude in decimal degrees. Only the transform pipeline creates these.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeodeticPoint {
    lat: f64,
    lng: f64,
    datum: Datum,
}

impl GeodeticPoint {
    pub(crate) fn new(lat: f64, lng: f64, datum: Datum) -> Self {
        Self { lat, lng, datum }
    }

    pub(crate) fn from_radians(lat: f64, lon: f64, datum: Datum) -> Self {
        Self::new(lat.to_degrees(), lon.to_degrees(), datum)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn datum(&self) -> Datum {
        self.datum
    }
}
