//! Error types for the core mesh types.

use thiserror::Error;

/// Errors raised when constructing core mesh types from raw data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshTypesError {
    /// Float buffer length is not a whole number of triangles.
    #[error("triangle buffer length {len} is not a multiple of 9")]
    InvalidStride {
        /// Number of floats supplied.
        len: usize,
    },
}

/// Error returned when a string or character does not name a mirror axis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid axis {input:?}: expected one of x, y, z")]
pub struct ParseAxisError {
    /// The rejected input.
    pub input: String,
}

impl ParseAxisError {
    /// Create a parse error for the given input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
