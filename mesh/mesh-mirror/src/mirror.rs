//! Mirror transform with winding correction.

use mesh_types::{Axis, FLOATS_PER_TRIANGLE, TriangleBuffer};
use tracing::debug;

use crate::error::{MirrorError, MirrorResult};

/// A mirrored triangle buffer with freshly computed face normals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MirroredMesh {
    /// Output triangles, same count and order as the input.
    pub triangles: TriangleBuffer,
    /// Unit face normals, three floats per triangle. Degenerate triangles get
    /// a zero vector.
    pub normals: Vec<f32>,
}

impl MirroredMesh {
    /// Number of triangles in the output.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.triangle_count()
    }

    /// Normal of one triangle, if the index is in range.
    #[must_use]
    pub fn normal(&self, triangle: usize) -> Option<[f32; 3]> {
        let start = triangle.checked_mul(3)?;
        let end = start.checked_add(3)?;
        let slice = self.normals.get(start..end)?;
        slice.try_into().ok()
    }
}

/// Build a per-triangle exclusion mask, validating every index.
fn exclusion_mask(triangle_count: usize, excluded: &[usize]) -> MirrorResult<Vec<bool>> {
    let mut mask = vec![false; triangle_count];
    for &index in excluded {
        let slot = mask
            .get_mut(index)
            .ok_or(MirrorError::ExcludedIndexOutOfRange {
                index,
                triangle_count,
            })?;
        *slot = true;
    }
    Ok(mask)
}

/// Reflect one triangle record across `axis` and reverse its winding.
fn mirror_record(record: &[f32; FLOATS_PER_TRIANGLE], axis: Axis) -> [f32; FLOATS_PER_TRIANGLE] {
    let mut out = [0.0; FLOATS_PER_TRIANGLE];
    // v0, v1, v2 -> v2, v1, v0
    for (dst, src) in [(0, 6), (3, 3), (6, 0)] {
        out[dst..dst + 3].copy_from_slice(&record[src..src + 3]);
        out[dst + axis.index()] = -out[dst + axis.index()];
    }
    out
}

/// Mirror every non-excluded triangle across the plane orthogonal to `axis`.
///
/// Mirrored triangles have the axis coordinate of each vertex negated and
/// their vertex order reversed, so outward faces stay outward. Excluded
/// triangles are copied verbatim. Triangle count and order are preserved.
/// Duplicate entries in `excluded` are harmless.
///
/// # Errors
///
/// Returns [`MirrorError::ExcludedIndexOutOfRange`] if any excluded index is
/// not a valid triangle index.
///
/// # Example
///
/// ```
/// use mesh_mirror::mirror_triangles;
/// use mesh_types::{Axis, Triangle, TriangleBuffer};
///
/// let buffer = TriangleBuffer::from_triangles([
///     Triangle::from_arrays([0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]),
///     Triangle::from_arrays([0.0, 0.0, 2.0], [1.0, 0.0, 2.0], [0.0, 1.0, 2.0]),
/// ]);
///
/// let out = mirror_triangles(&buffer, Axis::Z, &[1]).unwrap();
/// assert_eq!(out.triangle(0).unwrap().v0.z, -1.0);
/// assert_eq!(out.triangle(1), buffer.triangle(1));
/// ```
pub fn mirror_triangles(
    buffer: &TriangleBuffer,
    axis: Axis,
    excluded: &[usize],
) -> MirrorResult<TriangleBuffer> {
    let triangle_count = buffer.triangle_count();
    let mask = exclusion_mask(triangle_count, excluded)?;

    let mut out = TriangleBuffer::with_capacity(triangle_count);
    for (record, &keep) in buffer.records().zip(&mask) {
        if keep {
            out.push_record(record);
        } else {
            out.push_record(&mirror_record(record, axis));
        }
    }

    debug!(
        triangles = triangle_count,
        mirrored = mask.iter().filter(|&&keep| !keep).count(),
        axis = %axis,
        "mirrored triangles"
    );

    Ok(out)
}

/// Mirror a buffer and recompute face normals over the whole output.
///
/// Normals are `(v1 - v0) x (v2 - v0)` normalized, or zero for triangles with
/// near-zero area.
///
/// # Errors
///
/// Same as [`mirror_triangles`].
pub fn mirror_mesh(
    buffer: &TriangleBuffer,
    axis: Axis,
    excluded: &[usize],
) -> MirrorResult<MirroredMesh> {
    let triangles = mirror_triangles(buffer, axis, excluded)?;
    let normals = triangles.face_normals();
    Ok(MirroredMesh { triangles, normals })
}
