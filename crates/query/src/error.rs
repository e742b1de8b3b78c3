//! Result and Error types for nuchart-query

use nuchart_nudat::UnrecognisedUnit;

/// Type alias for Result<T, query::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `nuchart-query` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failure to (de)serialise criteria or rows
    #[error("failed to (de)serialise")]
    FailedSerde(#[from] serde_json::Error),

    /// Half-life bound in a unit that is not a time unit
    #[error("half-life bound can not be converted to seconds")]
    InvalidBound(#[from] UnrecognisedUnit),

    /// Half-life bounds with min >= max
    #[error("half-life range is empty, min {min} s >= max {max} s")]
    EmptyRange { min: f64, max: f64 },
}
