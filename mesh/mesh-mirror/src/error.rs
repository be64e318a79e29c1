//! Error types for mirror operations.

use thiserror::Error;

/// Result type for mirror operations.
pub type MirrorResult<T> = Result<T, MirrorError>;

/// Errors that can occur while mirroring a triangle buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MirrorError {
    /// An excluded triangle index does not exist in the buffer.
    #[error("excluded triangle index {index} out of range (buffer has {triangle_count} triangles)")]
    ExcludedIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of triangles in the buffer.
        triangle_count: usize,
    },
}
