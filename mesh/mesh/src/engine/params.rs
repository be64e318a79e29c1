//! Parameters for the mirror engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use mesh_topology::DEFAULT_EPSILON;

use super::error::{EngineError, EngineResult};

/// Default cluster size at or below which triangles are left unmirrored.
pub const DEFAULT_THRESHOLD: usize = 3;

/// Parameters for a mirror request.
///
/// # Example
///
/// ```
/// use mesh::engine::MirrorParams;
///
/// let params = MirrorParams::default().with_threshold(8);
/// assert_eq!(params.threshold, 8);
/// assert!(params.validate().is_ok());
///
/// assert!(MirrorParams::default().with_epsilon(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MirrorParams {
    /// Connected components with at most this many triangles are excluded
    /// from mirroring. 0 mirrors everything. Default: 3
    pub threshold: usize,

    /// Vertex coincidence tolerance in model units. Must be finite and
    /// positive. Default: 1e-6
    pub epsilon: f64,
}

impl Default for MirrorParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl MirrorParams {
    /// Create params with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror every triangle regardless of cluster size.
    #[must_use]
    pub fn preserve_nothing() -> Self {
        Self {
            threshold: 0,
            ..Default::default()
        }
    }

    /// Set the exclusion threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the coincidence tolerance.
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Check that the parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParams`] if `epsilon` is not finite or
    /// not strictly positive.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(EngineError::InvalidParams {
                reason: format!(
                    "epsilon must be finite and greater than zero, got {}",
                    self.epsilon
                ),
            });
        }
        Ok(())
    }
}
