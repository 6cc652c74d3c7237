use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Malformed grid reference: {0:?}")]
    Malformed(String),

    #[error("Odd digit count: {0} digits cannot split into easting and northing")]
    OddDigitCount(usize),

    #[error("Unknown grid square: {0}")]
    UnknownGridSquare(String),

    #[error("Precision overflow: {0} digits supplied, at most 10 allowed")]
    PrecisionOverflow(usize),

    #[error("Invalid precision: {0} (expected 1 to 5 digits per axis)")]
    InvalidPrecision(u8),

    #[error("Coordinates outside the National Grid: E {easting}, N {northing}")]
    OutOfGrid { easting: f64, northing: f64 },

    #[error("Projection error: {0}")]
    Projection(#[from] ProjError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    #[error("Inverse projection did not converge after {iterations} iterations")]
    ProjectionDivergence { iterations: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
