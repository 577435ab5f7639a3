//! Error types for capture trajectory generation

use thiserror::Error;

/// The main error type for trajectory generation
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Box edges violate the axis-alignment precondition. Fatal:
    /// the caller supplied malformed geometry.
    #[error("box edges not axis-aligned: {0}")]
    MisalignedEdges(String),

    /// A configuration parameter is out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// A specialized Result type for trajectory generation
pub type Result<T> = std::result::Result<T, CaptureError>;
