//! Result types for mirror requests.

use std::fmt;

use mesh_cluster::ClusterSummary;
use mesh_types::{Aabb, Axis, TriangleBuffer};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counts describing one mirror request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MirrorSummary {
    /// Triangles in the input (and output).
    pub triangle_count: usize,
    /// Connected components found.
    pub component_count: usize,
    /// Components left unmirrored.
    pub excluded_component_count: usize,
    /// Triangles left unmirrored.
    pub excluded_triangle_count: usize,
    /// Size of the largest component.
    pub largest_component: usize,
    /// Output triangles with near-zero area, written with zero normals.
    pub degenerate_count: usize,
    /// Axis the mesh was mirrored across.
    pub axis: Axis,
}

impl MirrorSummary {
    /// Combine cluster counts with the mirror axis.
    ///
    /// `degenerate_count` starts at 0; see [`Self::with_degenerate_count`].
    #[must_use]
    pub const fn new(clusters: &ClusterSummary, axis: Axis) -> Self {
        Self {
            triangle_count: clusters.triangle_count,
            component_count: clusters.component_count,
            excluded_component_count: clusters.excluded_component_count,
            excluded_triangle_count: clusters.excluded_triangle_count,
            largest_component: clusters.largest_component,
            degenerate_count: 0,
            axis,
        }
    }

    /// Set the number of degenerate output triangles.
    #[must_use]
    pub const fn with_degenerate_count(mut self, count: usize) -> Self {
        self.degenerate_count = count;
        self
    }

    /// Number of triangles that were mirrored.
    #[must_use]
    pub const fn mirrored_triangle_count(&self) -> usize {
        self.triangle_count - self.excluded_triangle_count
    }
}

impl fmt::Display for MirrorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mirror across {}: {} of {} triangles mirrored, {} of {} components preserved ({} triangles)",
            self.axis,
            self.mirrored_triangle_count(),
            self.triangle_count,
            self.excluded_component_count,
            self.component_count,
            self.excluded_triangle_count
        )
    }
}

/// Output of [`mirror`](super::mirror).
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorOutcome {
    /// Mirrored triangles, same count and order as the input.
    pub triangles: TriangleBuffer,
    /// Unit face normals of the output, three floats per triangle.
    pub normals: Vec<f32>,
    /// Indices of triangles left unmirrored, ascending.
    pub excluded: Vec<usize>,
    /// Bounding box of the output, for framing it in a viewer.
    pub bounds: Aabb,
    /// Counts for reporting.
    pub summary: MirrorSummary,
}

/// Output of [`run`](super::run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// Binary STL bytes of the mirrored mesh.
    pub bytes: Vec<u8>,
    /// Indices of triangles left unmirrored, ascending.
    pub excluded: Vec<usize>,
    /// Counts for reporting.
    pub summary: MirrorSummary,
}
