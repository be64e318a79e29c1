//! Error types for topology construction.

use thiserror::Error;

/// Result type for topology operations.
pub type TopologyResult<T> = Result<T, TopologyError>;

/// Errors that can occur while building a topology index.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    /// Coincidence tolerance is zero, negative, or not finite.
    #[error("invalid epsilon {epsilon}: must be finite and greater than zero")]
    InvalidEpsilon {
        /// The rejected tolerance.
        epsilon: f64,
    },
}
