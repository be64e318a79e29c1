//! Error types for the mirror engine.

use mesh_io::IoError;
use mesh_mirror::MirrorError;
use mesh_topology::TopologyError;
use mesh_types::ParseAxisError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors reported by the mirror engine.
///
/// No operation returns partial output alongside an error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input bytes are not a valid STL file.
    #[error("malformed STL: {0}")]
    Format(#[from] IoError),

    /// Axis is not one of x, y, z.
    #[error(transparent)]
    InvalidAxis(#[from] ParseAxisError),

    /// Input holds no triangles.
    #[error("mesh has no triangles to mirror")]
    EmptyMesh,

    /// Mirror parameters are out of range.
    #[error("invalid mirror parameters: {reason}")]
    InvalidParams {
        /// What was wrong.
        reason: String,
    },

    /// Mirror stage rejected the exclusion list.
    #[error(transparent)]
    Mirror(#[from] MirrorError),
}

impl From<TopologyError> for EngineError {
    fn from(err: TopologyError) -> Self {
        Self::InvalidParams {
            reason: err.to_string(),
        }
    }
}
