//! Epsilon-grid vertex grouping and triangle adjacency.

use hashbrown::HashMap;
use mesh_types::{Axis, Point3, TriangleBuffer};
use tracing::debug;

use crate::error::{TopologyError, TopologyResult};

/// Default coincidence tolerance, in model units.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Grid cell of a vertex snapped with cell size `epsilon`.
///
/// Each coordinate maps to `round(c / epsilon)`. Rounding is symmetric about
/// zero, so the key of a reflected point is the reflected key, and a fully
/// mirrored mesh groups its vertices exactly as the original did. After a
/// partial mirror, reflected vertices may land on the keys of unmirrored ones.
///
/// # Example
///
/// ```
/// use mesh_topology::VertexKey;
/// use mesh_types::{Axis, Point3};
///
/// let p = Point3::new(0.25_f32, -1.0, 3.0);
/// let key = VertexKey::from_point(&p, 0.5).unwrap();
/// assert_eq!(key.cell(), [1, -2, 6]);
///
/// let mirrored = VertexKey::from_point(&Axis::X.reflect(&p), 0.5).unwrap();
/// assert_eq!(mirrored, key.mirrored(Axis::X));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey([i64; 3]);

impl VertexKey {
    /// Snap a point onto the grid.
    ///
    /// Returns `None` if any coordinate is NaN or infinite. Such vertices are
    /// coincident with nothing.
    #[must_use]
    pub fn from_point(point: &Point3<f32>, epsilon: f64) -> Option<Self> {
        let mut cell = [0_i64; 3];
        for (slot, &c) in cell.iter_mut().zip(point.iter()) {
            if !c.is_finite() {
                return None;
            }
            // Truncation: saturates only for coordinates beyond i64 cells,
            // which no real model reaches at any usable epsilon.
            #[allow(clippy::cast_possible_truncation)]
            {
                *slot = (f64::from(c) / epsilon).round() as i64;
            }
        }
        Some(Self(cell))
    }

    /// Grid coordinates of this key.
    #[inline]
    #[must_use]
    pub const fn cell(self) -> [i64; 3] {
        self.0
    }

    /// Key of the reflected cell across the plane orthogonal to `axis`.
    #[must_use]
    pub fn mirrored(self, axis: Axis) -> Self {
        let mut cell = self.0;
        cell[axis.index()] = -cell[axis.index()];
        Self(cell)
    }
}

/// Triangle adjacency recovered from spatial coincidence.
///
/// Two triangles are adjacent when at least one vertex of each falls in the
/// same [`VertexKey`] cell. Sharing a single corner is enough; no edge is
/// required.
///
/// The index is a pure lookup structure over one buffer. It is rebuilt for
/// every mirror request and never mutated after construction.
#[derive(Debug, Clone)]
pub struct TriangleAdjacency {
    epsilon: f64,
    /// Distinct keys per triangle. Repeated or non-finite corners are `None`.
    triangle_keys: Vec<[Option<VertexKey>; 3]>,
    /// Triangles touching each key, ascending, each listed once.
    buckets: HashMap<VertexKey, Vec<usize>>,
}

impl TriangleAdjacency {
    /// Build the adjacency index for a triangle buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidEpsilon`] unless `epsilon` is finite and
    /// strictly positive.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_topology::TriangleAdjacency;
    /// use mesh_types::TriangleBuffer;
    ///
    /// assert!(TriangleAdjacency::build(&TriangleBuffer::new(), 0.0).is_err());
    /// ```
    pub fn build(buffer: &TriangleBuffer, epsilon: f64) -> TopologyResult<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(TopologyError::InvalidEpsilon { epsilon });
        }

        let mut triangle_keys = Vec::with_capacity(buffer.triangle_count());
        let mut buckets: HashMap<VertexKey, Vec<usize>> = HashMap::new();

        for (index, triangle) in buffer.triangles().enumerate() {
            let mut keys = triangle
                .vertices()
                .map(|v| VertexKey::from_point(&v, epsilon));

            // Collapse corners that snap to the same cell.
            if keys[1] == keys[0] {
                keys[1] = None;
            }
            if keys[2] == keys[0] || keys[2] == keys[1] {
                keys[2] = None;
            }

            for key in keys.iter().flatten() {
                buckets.entry(*key).or_default().push(index);
            }
            triangle_keys.push(keys);
        }

        debug!(
            triangles = triangle_keys.len(),
            vertex_groups = buckets.len(),
            epsilon,
            "built triangle adjacency"
        );

        Ok(Self {
            epsilon,
            triangle_keys,
            buckets,
        })
    }

    /// Tolerance the index was built with.
    #[inline]
    #[must_use]
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Number of triangles indexed.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangle_keys.len()
    }

    /// Number of distinct vertex keys (coincident vertex groups).
    #[inline]
    #[must_use]
    pub fn vertex_group_count(&self) -> usize {
        self.buckets.len()
    }

    /// Distinct keys of a triangle's vertices.
    ///
    /// Yields nothing for an out-of-range index. A degenerate triangle whose
    /// corners coincide yields fewer than three keys.
    pub fn keys_of(&self, triangle: usize) -> impl Iterator<Item = VertexKey> + '_ {
        self.triangle_keys
            .get(triangle)
            .into_iter()
            .flat_map(|keys| keys.iter().flatten().copied())
    }

    /// Triangles with a vertex in the given cell, in ascending order.
    #[must_use]
    pub fn triangles_at(&self, key: VertexKey) -> &[usize] {
        self.buckets.get(&key).map_or(&[], Vec::as_slice)
    }

    /// Triangles sharing at least one vertex key with `triangle`.
    ///
    /// The result is sorted, deduplicated, and never contains `triangle`.
    #[must_use]
    pub fn neighbors(&self, triangle: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .keys_of(triangle)
            .flat_map(|key| self.triangles_at(key).iter().copied())
            .filter(|&other| other != triangle)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// True if two distinct triangles share a vertex key.
    #[must_use]
    pub fn shares_vertex(&self, a: usize, b: usize) -> bool {
        a != b
            && self
                .keys_of(a)
                .any(|key| self.keys_of(b).any(|other| other == key))
    }

    /// Iterate over every key and the triangles touching it.
    pub fn buckets(&self) -> impl Iterator<Item = (VertexKey, &[usize])> + '_ {
        self.buckets
            .iter()
            .map(|(key, triangles)| (*key, triangles.as_slice()))
    }
}
