//! Result and Error types for nuchart-chart

/// Type alias for Result<T, chart::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `nuchart-chart` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to (de)serialise chart cells
    #[error("failed to (de)serialise chart cells")]
    FailedSerde(#[from] serde_json::Error),

    /// Chart area with min > max on one axis
    #[error("chart area is empty, {axis} min {min} > max {max}")]
    EmptyArea {
        axis: char,
        min: u32,
        max: u32,
    },
}
