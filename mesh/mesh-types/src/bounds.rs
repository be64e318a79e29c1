//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (AABB).
///
/// Display collaborators use it to frame a loaded or mirrored mesh.
///
/// # Example
///
/// ```
/// use mesh_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 10.0, 10.0),
/// );
///
/// assert_eq!(aabb.size().x, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f32>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f32>,
}

impl Aabb {
    /// Create a new AABB from minimum and maximum corners.
    ///
    /// The corners are automatically corrected if min > max for any axis.
    #[must_use]
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create an empty (invalid) AABB.
    ///
    /// An empty AABB has min > max, which is useful as a starting point
    /// for expanding to include points.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Grow the box to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<f32>) {
        self.min = Point3::new(
            self.min.x.min(point.x),
            self.min.y.min(point.y),
            self.min.z.min(point.z),
        );
        self.max = Point3::new(
            self.max.x.max(point.x),
            self.max.y.max(point.y),
            self.max.z.max(point.z),
        );
    }

    /// Check if the AABB is empty (has no valid volume).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Get the size (dimensions) of the AABB.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
