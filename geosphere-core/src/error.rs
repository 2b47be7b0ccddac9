//! Error types for geosphere

use thiserror::Error;

/// Main error type for geosphere operations
///
/// Every variant is recoverable: a failed call never leaves a
/// [`GeodesicSession`](crate::GeodesicSession) half-updated.
#[derive(Error, Debug)]
pub enum Error {
    /// The raw vector had zero length, so it has no direction to project
    #[error("origin has no defined direction onto the sphere")]
    DegenerateInput,

    /// Coordinate text did not have the `x,y,z` shape
    #[error("Invalid format: {0}")]
    Format(String),

    /// A coordinate component was not a finite real number
    #[error("Invalid number: {0}")]
    Numeric(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::InvalidConfig(e.to_string())
    }
}

/// Result type alias for geosphere operations
pub type Result<T> = std::result::Result<T, Error>;
