//! Triangle type for geometric calculations.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cross-product magnitude below which a triangle is treated as degenerate.
const DEGENERATE_NORMAL_EPSILON: f64 = 1e-12;

/// A triangle with concrete vertex positions.
///
/// This is a value view over one 9-float record of a
/// [`TriangleBuffer`](crate::TriangleBuffer). Positions are stored as `f32`
/// like the STL format; derived quantities are computed in `f64`.
///
/// Winding is **counter-clockwise (CCW) when viewed from the front**
/// (normal points toward viewer).
///
/// # Example
///
/// ```
/// use mesh_types::{Triangle, Point3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// assert!(!tri.is_degenerate());
///
/// let normal = tri.normal().unwrap();
/// assert!((normal.z - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f32>,
    /// Second vertex.
    pub v1: Point3<f32>,
    /// Third vertex.
    pub v2: Point3<f32>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f32>, v1: Point3<f32>, v2: Point3<f32>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Create a triangle from coordinate arrays.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_arrays(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> Self {
        Self {
            v0: Point3::new(v0[0], v0[1], v0[2]),
            v1: Point3::new(v1[0], v1[1], v1[2]),
            v2: Point3::new(v2[0], v2[1], v2[2]),
        }
    }

    /// Create a triangle from one 9-float buffer record.
    #[inline]
    #[must_use]
    pub fn from_record(r: &[f32; 9]) -> Self {
        Self::from_arrays([r[0], r[1], r[2]], [r[3], r[4], r[5]], [r[6], r[7], r[8]])
    }

    /// Flatten into a 9-float buffer record.
    #[inline]
    #[must_use]
    pub fn to_record(&self) -> [f32; 9] {
        [
            self.v0.x, self.v0.y, self.v0.z, self.v1.x, self.v1.y, self.v1.z, self.v2.x,
            self.v2.y, self.v2.z,
        ]
    }

    /// The three vertices in winding order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f32>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// The same triangle with opposite winding (`v0, v1, v2 -> v2, v1, v0`).
    ///
    /// ```
    /// use mesh_types::Triangle;
    ///
    /// let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    /// let flipped = tri.reversed();
    /// assert_eq!(flipped.v0, tri.v2);
    /// assert_eq!(flipped.v2, tri.v0);
    /// assert!(flipped.normal().unwrap().z < 0.0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            v0: self.v2,
            v1: self.v1,
            v2: self.v0,
        }
    }

    /// Compute the (unnormalized) face normal via cross product.
    ///
    /// The direction follows the right-hand rule with CCW winding.
    /// The magnitude equals twice the triangle's area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let v0 = self.v0.cast::<f64>();
        let e1 = self.v1.cast::<f64>() - v0;
        let e2 = self.v2.cast::<f64>() - v0;
        e1.cross(&e2)
    }

    /// Compute the unit face normal.
    ///
    /// Returns `None` for degenerate triangles (near-zero area) and for
    /// triangles with non-finite coordinates.
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f32>> {
        let n = self.normal_unnormalized();
        if !n.iter().all(|c| c.is_finite()) {
            return None;
        }
        n.try_normalize(DEGENERATE_NORMAL_EPSILON)
            .map(|unit| unit.cast::<f32>())
    }

    /// Unit face normal, or the zero vector for degenerate triangles.
    ///
    /// This is the value written into STL facet records.
    #[inline]
    #[must_use]
    pub fn normal_or_zero(&self) -> Vector3<f32> {
        self.normal().unwrap_or_else(Vector3::zeros)
    }

    /// Check whether the triangle has (near-)zero area.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.normal().is_none()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_right_triangle() -> Triangle {
        Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])
    }

    #[test]
    fn record_roundtrip() {
        let tri = unit_right_triangle();
        assert_eq!(Triangle::from_record(&tri.to_record()), tri);
    }

    #[test]
    fn normal_follows_right_hand_rule() {
        let n = unit_right_triangle().normal();
        assert!(n.is_some());
        let n = n.unwrap_or_else(Vector3::zeros);
        assert_relative_eq!(n.z, 1.0, epsilon = 1e-6);
        assert_relative_eq!(n.x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn reversed_flips_normal() {
        let tri = unit_right_triangle();
        let n = tri.reversed().normal_or_zero();
        assert_relative_eq!(n.z, -1.0, epsilon = 1e-6);
        assert_eq!(tri.reversed().reversed(), tri);
    }

    #[test]
    fn degenerate_collinear_has_no_normal() {
        let degen = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        assert!(degen.is_degenerate());
        assert_eq!(degen.normal_or_zero(), Vector3::zeros());
    }

    #[test]
    fn non_finite_vertex_has_no_normal() {
        let bad = Triangle::from_arrays([f32::NAN, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(bad.normal().is_none());
    }

    #[test]
    fn cross_product_magnitude_is_twice_area() {
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 3.0, 0.0]);
        assert_relative_eq!(tri.normal_unnormalized().norm(), 9.0, epsilon = 1e-10);
        assert!(!tri.is_degenerate());
    }
}
