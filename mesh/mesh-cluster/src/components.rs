//! Breadth-first connected components.

use std::collections::VecDeque;

use mesh_topology::TriangleAdjacency;

/// Find connected components of the triangle adjacency graph.
///
/// Every triangle is visited exactly once. Triangles with no neighbors become
/// singleton components. Components are ordered by their lowest triangle index
/// and each component's index list is ascending.
///
/// # Example
///
/// ```
/// use mesh_cluster::find_components;
/// use mesh_topology::{DEFAULT_EPSILON, TriangleAdjacency};
/// use mesh_types::{Triangle, TriangleBuffer};
///
/// let buffer = TriangleBuffer::from_triangles([
///     Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
///     Triangle::from_arrays([9.0, 9.0, 9.0], [8.0, 9.0, 9.0], [9.0, 8.0, 9.0]),
///     Triangle::from_arrays([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]),
/// ]);
/// let adjacency = TriangleAdjacency::build(&buffer, DEFAULT_EPSILON).unwrap();
///
/// assert_eq!(find_components(&adjacency), vec![vec![0, 2], vec![1]]);
/// ```
#[must_use]
pub fn find_components(adjacency: &TriangleAdjacency) -> Vec<Vec<usize>> {
    let triangle_count = adjacency.triangle_count();
    let mut visited = vec![false; triangle_count];
    let mut components = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    for seed in 0..triangle_count {
        if visited[seed] {
            continue;
        }

        visited[seed] = true;
        queue.push_back(seed);
        let mut component = Vec::new();

        while let Some(current) = queue.pop_front() {
            component.push(current);

            for key in adjacency.keys_of(current) {
                for &next in adjacency.triangles_at(key) {
                    if !visited[next] {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    components
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mesh_topology::DEFAULT_EPSILON;
    use mesh_types::{Triangle, TriangleBuffer};

    fn adjacency(triangles: &[Triangle]) -> TriangleAdjacency {
        let buffer = TriangleBuffer::from_triangles(triangles.iter().copied());
        TriangleAdjacency::build(&buffer, DEFAULT_EPSILON).unwrap()
    }

    /// Strip of `n` triangles where each shares an edge with the next.
    fn strip(n: usize, offset: f32) -> Vec<Triangle> {
        (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let x = i as f32;
                Triangle::from_arrays(
                    [x, offset, 0.0],
                    [x + 1.0, offset, 0.0],
                    [x + 0.5, offset + 1.0, 0.0],
                )
            })
            .collect()
    }

    #[test]
    fn empty_adjacency_has_no_components() {
        assert!(find_components(&adjacency(&[])).is_empty());
    }

    #[test]
    fn strip_is_one_component() {
        let components = find_components(&adjacency(&strip(10, 0.0)));
        assert_eq!(components, vec![(0..10).collect::<Vec<_>>()]);
    }

    #[test]
    fn isolated_triangles_are_singletons() {
        let tris: Vec<Triangle> = (0..4)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let z = i as f32 * 10.0;
                Triangle::from_arrays([0.0, 0.0, z], [1.0, 0.0, z], [0.0, 1.0, z])
            })
            .collect();
        let components = find_components(&adjacency(&tris));
        assert_eq!(components, vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn interleaved_components_are_ordered_by_lowest_index() {
        let a = strip(3, 0.0);
        let b = strip(2, 100.0);
        // Order: b0, a0, b1, a1, a2
        let tris = [b[0], a[0], b[1], a[1], a[2]];
        let components = find_components(&adjacency(&tris));
        assert_eq!(components, vec![vec![0, 2], vec![1, 3, 4]]);
    }

    #[test]
    fn transitive_connection_joins_components() {
        // Triangles 0 and 2 share nothing directly but both touch triangle 1.
        let tris = [
            Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Triangle::from_arrays([5.0, 5.0, 0.0], [6.0, 5.0, 0.0], [5.0, 6.0, 0.0]),
            Triangle::from_arrays([1.0, 0.0, 0.0], [3.0, 3.0, 0.0], [5.0, 5.0, 0.0]),
        ];
        let components = find_components(&adjacency(&tris));
        assert_eq!(components, vec![vec![0, 1, 2]]);
    }
}
