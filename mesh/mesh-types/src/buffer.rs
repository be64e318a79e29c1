//! Flat, fixed-stride triangle buffer.

use crate::{Aabb, MeshTypesError, Triangle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of `f32` values per triangle (three vertices of `x, y, z`).
pub const FLOATS_PER_TRIANGLE: usize = 9;

/// A flat triangle soup.
///
/// This is the primary mesh type of the engine. Triangles are stored
/// contiguously as 9 floats each (`v0.xyz, v1.xyz, v2.xyz`); a triangle's
/// identity is its index. Vertices are never shared between triangles, as in
/// the STL format, so connectivity has to be recovered spatially.
///
/// # Invariant
///
/// The inner vector's length is always a multiple of
/// [`FLOATS_PER_TRIANGLE`].
///
/// # Example
///
/// ```
/// use mesh_types::{TriangleBuffer, Triangle};
///
/// let mut buffer = TriangleBuffer::new();
/// buffer.push_triangle(&Triangle::from_arrays(
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
/// ));
///
/// assert_eq!(buffer.triangle_count(), 1);
/// assert_eq!(buffer.as_slice().len(), 9);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f32>", into = "Vec<f32>"))]
pub struct TriangleBuffer {
    data: Vec<f32>,
}

impl TriangleBuffer {
    /// Create an empty buffer.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty buffer with room for `triangles` triangles.
    #[inline]
    #[must_use]
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            data: Vec::with_capacity(triangles.saturating_mul(FLOATS_PER_TRIANGLE)),
        }
    }

    /// Wrap a flat float vector.
    ///
    /// # Errors
    ///
    /// Returns [`MeshTypesError::InvalidStride`] if the length is not a
    /// multiple of 9.
    ///
    /// ```
    /// use mesh_types::TriangleBuffer;
    ///
    /// assert!(TriangleBuffer::from_floats(vec![0.0; 18]).is_ok());
    /// assert!(TriangleBuffer::from_floats(vec![0.0; 10]).is_err());
    /// ```
    pub fn from_floats(data: Vec<f32>) -> Result<Self, MeshTypesError> {
        if data.len() % FLOATS_PER_TRIANGLE != 0 {
            return Err(MeshTypesError::InvalidStride { len: data.len() });
        }
        Ok(Self { data })
    }

    /// Build a buffer from triangles.
    #[must_use]
    pub fn from_triangles<I>(triangles: I) -> Self
    where
        I: IntoIterator<Item = Triangle>,
    {
        let iter = triangles.into_iter();
        let mut buffer = Self::with_capacity(iter.size_hint().0);
        for tri in iter {
            buffer.push_triangle(&tri);
        }
        buffer
    }

    /// Append one triangle.
    #[inline]
    pub fn push_triangle(&mut self, triangle: &Triangle) {
        self.push_record(&triangle.to_record());
    }

    /// Append one raw 9-float record.
    #[inline]
    pub fn push_record(&mut self, record: &[f32; FLOATS_PER_TRIANGLE]) {
        self.data.extend_from_slice(record);
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.data.len() / FLOATS_PER_TRIANGLE
    }

    /// True when the buffer holds no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The flat float data.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consume the buffer and return the flat float data.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<f32> {
        self.data
    }

    /// The raw 9-float record of triangle `index`.
    #[must_use]
    pub fn record(&self, index: usize) -> Option<&[f32; FLOATS_PER_TRIANGLE]> {
        let start = index.checked_mul(FLOATS_PER_TRIANGLE)?;
        let end = start.checked_add(FLOATS_PER_TRIANGLE)?;
        self.data.get(start..end)?.try_into().ok()
    }

    /// Triangle `index` as a geometric view.
    #[must_use]
    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        self.record(index).map(Triangle::from_record)
    }

    /// Iterate over raw 9-float records.
    pub fn records(&self) -> impl Iterator<Item = &[f32; FLOATS_PER_TRIANGLE]> + '_ {
        // chunks_exact never yields a short chunk, so the conversion cannot fail
        self.data
            .chunks_exact(FLOATS_PER_TRIANGLE)
            .filter_map(|chunk| <&[f32; FLOATS_PER_TRIANGLE]>::try_from(chunk).ok())
    }

    /// Iterate over triangles.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.records().map(Triangle::from_record)
    }

    /// Bounding box of all vertices.
    ///
    /// Returns an empty AABB for an empty buffer.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let mut aabb = Aabb::empty();
        for tri in self.triangles() {
            for v in &tri.vertices() {
                aabb.expand_to_include(v);
            }
        }
        aabb
    }

    /// Per-triangle unit normals, 3 floats per triangle.
    ///
    /// Normals follow the stored vertex order. Degenerate triangles get a
    /// zero normal.
    #[must_use]
    pub fn face_normals(&self) -> Vec<f32> {
        let mut normals = Vec::with_capacity(self.triangle_count() * 3);
        for tri in self.triangles() {
            let n = tri.normal_or_zero();
            normals.extend_from_slice(&[n.x, n.y, n.z]);
        }
        normals
    }
}

impl TryFrom<Vec<f32>> for TriangleBuffer {
    type Error = MeshTypesError;

    fn try_from(data: Vec<f32>) -> Result<Self, Self::Error> {
        Self::from_floats(data)
    }
}

impl From<TriangleBuffer> for Vec<f32> {
    fn from(buffer: TriangleBuffer) -> Self {
        buffer.data
    }
}

impl FromIterator<Triangle> for TriangleBuffer {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self::from_triangles(iter)
    }
}
