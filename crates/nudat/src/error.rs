//! Result and Error types for the NuDat data module

/// Type alias for `Result<T, nudat::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nuchart-nudat`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to deserialise the NuDat JSON export
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Generic error type for nom parser results
    #[error("parser failed: {0}")]
    ParseError(String),

    /// A record breaks the A = Z + N invariant
    #[error("\"{symbol}\" has A={a} but Z={z} and N={n}")]
    MassNumberMismatch { symbol: String, z: u32, n: u32, a: u32 },

    /// The same nuclide symbol appears more than once
    #[error("duplicate nuclide \"{0}\" in dataset")]
    DuplicateNuclide(String),
}
