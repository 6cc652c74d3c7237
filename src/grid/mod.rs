//! British National Grid references: lettered squares, notation and metres.

pub mod encoder;
pub mod notation;
pub mod squares;

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use encoder::{resolution, GRID_EXTENT};
use notation::MAX_PRECISION;
use squares::GridSquare;

/// A grid reference resolved to full OSGB36 easting/northing metres.
///
/// `easting` and `northing` are always multiples of the resolution implied by
/// `precision` (10 km for one digit per axis, 1 m for five).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridReference {
    easting: u32,
    northing: u32,
    precision: u8,
}

impl GridReference {
    /// Build a reference from metres, dropping any offset finer than `precision`.
    pub fn new(easting: u32, northing: u32, precision: u8) -> Result<Self, GridError> {
        if !(1..=MAX_PRECISION).contains(&precision) {
            return Err(GridError::InvalidPrecision(precision));
        }
        if easting >= GRID_EXTENT.0 || northing >= GRID_EXTENT.1 {
            return Err(GridError::OutOfGrid {
                easting: f64::from(easting),
                northing: f64::from(northing),
            });
        }
        let unit = resolution(precision);
        Ok(Self {
            easting: easting - easting % unit,
            northing: northing - northing % unit,
            precision,
        })
    }

    /// Parse free text such as `"so 514 398"`.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        notation::decode(text).map(|n| encoder::to_meters(&n))
    }

    pub fn easting(&self) -> u32 {
        self.easting
    }

    pub fn northing(&self) -> u32 {
        self.northing
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Size of the referenced square in metres.
    pub fn resolution_m(&self) -> u32 {
        resolution(self.precision)
    }

    pub fn square(&self) -> GridSquare {
        encoder::notation_of(self).square
    }

    /// Compact form without separators, e.g. `"SO514398"`.
    pub fn compact(&self) -> String {
        encoder::render_reference(self, "")
    }

    /// Centre of the referenced square in metres, used when a single point stands in
    /// for the whole cell.
    pub fn centre(&self) -> (f64, f64) {
        let half = f64::from(self.resolution_m()) / 2.0;
        (f64::from(self.easting) + half, f64::from(self.northing) + half)
    }
}

impl fmt::Display for GridReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoder::render_reference(self, " "))
    }
}

impl FromStr for GridReference {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
