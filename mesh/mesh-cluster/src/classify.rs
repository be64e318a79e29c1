//! Threshold classification of connected components.

use std::fmt;

use mesh_topology::TriangleAdjacency;
use tracing::debug;

use crate::components::find_components;

/// A connected group of triangles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Position of this component in [`Classification::components`].
    pub id: usize,
    /// Member triangle indices, ascending.
    pub triangles: Vec<usize>,
    /// True if the component is small enough to be left unmirrored.
    pub excluded: bool,
}

impl Component {
    /// Number of triangles in the component.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// True if the component holds no triangles.
    ///
    /// Components built by [`classify`] are never empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Per-triangle component assignment and the exclusion decision.
///
/// The components partition the triangle set: every triangle index belongs to
/// exactly one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Component id of each triangle.
    pub component_of: Vec<usize>,
    /// All components, ordered by their lowest triangle index.
    pub components: Vec<Component>,
    /// Triangles belonging to excluded components, ascending.
    pub excluded_triangles: Vec<usize>,
    /// Inclusive size limit used for exclusion.
    pub threshold: usize,
}

impl Classification {
    /// Number of triangles classified.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.component_of.len()
    }

    /// Number of connected components.
    #[inline]
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Number of excluded triangles.
    #[inline]
    #[must_use]
    pub fn excluded_count(&self) -> usize {
        self.excluded_triangles.len()
    }

    /// Number of excluded components.
    #[must_use]
    pub fn excluded_component_count(&self) -> usize {
        self.components.iter().filter(|c| c.excluded).count()
    }

    /// True if the triangle belongs to an excluded component.
    ///
    /// Out-of-range indices are reported as not excluded.
    #[must_use]
    pub fn is_excluded(&self, triangle: usize) -> bool {
        self.component_of
            .get(triangle)
            .and_then(|&id| self.components.get(id))
            .is_some_and(|c| c.excluded)
    }

    /// Size of the largest component, or 0 for an empty mesh.
    #[must_use]
    pub fn largest_component_size(&self) -> usize {
        self.components.iter().map(Component::len).max().unwrap_or(0)
    }

    /// Counts describing this classification.
    #[must_use]
    pub fn summary(&self) -> ClusterSummary {
        ClusterSummary {
            triangle_count: self.triangle_count(),
            component_count: self.component_count(),
            excluded_component_count: self.excluded_component_count(),
            excluded_triangle_count: self.excluded_count(),
            largest_component: self.largest_component_size(),
            threshold: self.threshold,
        }
    }
}

/// Counts describing a [`Classification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClusterSummary {
    /// Triangles classified.
    pub triangle_count: usize,
    /// Connected components found.
    pub component_count: usize,
    /// Components at or below the threshold.
    pub excluded_component_count: usize,
    /// Triangles in excluded components.
    pub excluded_triangle_count: usize,
    /// Size of the largest component.
    pub largest_component: usize,
    /// Inclusive size limit used for exclusion.
    pub threshold: usize,
}

impl fmt::Display for ClusterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Clusters: {} triangles in {} components, {} excluded ({} triangles, threshold {})",
            self.triangle_count,
            self.component_count,
            self.excluded_component_count,
            self.excluded_triangle_count,
            self.threshold
        )
    }
}

/// Find connected components and mark those with at most `threshold`
/// triangles as excluded.
///
/// The threshold is inclusive. A threshold of 0 excludes nothing, since no
/// component is empty.
///
/// # Example
///
/// ```
/// use mesh_cluster::classify;
/// use mesh_topology::{DEFAULT_EPSILON, TriangleAdjacency};
/// use mesh_types::{Triangle, TriangleBuffer};
///
/// let buffer = TriangleBuffer::from_triangles([
///     Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
/// ]);
/// let adjacency = TriangleAdjacency::build(&buffer, DEFAULT_EPSILON).unwrap();
///
/// assert!(classify(&adjacency, 1).is_excluded(0));
/// assert!(!classify(&adjacency, 0).is_excluded(0));
/// ```
#[must_use]
pub fn classify(adjacency: &TriangleAdjacency, threshold: usize) -> Classification {
    let mut component_of = vec![0; adjacency.triangle_count()];
    let mut excluded_triangles = Vec::new();

    let components: Vec<Component> = find_components(adjacency)
        .into_iter()
        .enumerate()
        .map(|(id, triangles)| {
            let excluded = triangles.len() <= threshold;
            for &t in &triangles {
                component_of[t] = id;
            }
            if excluded {
                excluded_triangles.extend_from_slice(&triangles);
            }
            Component {
                id,
                triangles,
                excluded,
            }
        })
        .collect();

    excluded_triangles.sort_unstable();

    let classification = Classification {
        component_of,
        components,
        excluded_triangles,
        threshold,
    };

    debug!(
        triangles = classification.triangle_count(),
        components = classification.component_count(),
        excluded_components = classification.excluded_component_count(),
        excluded_triangles = classification.excluded_count(),
        threshold,
        "classified clusters"
    );

    classification
}
