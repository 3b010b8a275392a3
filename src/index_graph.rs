use std::ops::Index;
use std::slice::Iter as SliceIter;

/// An adjacency-list-based graph data structure
///
/// Stores graph vertices as lists of incoming and outgoing edges by their
/// index in the graph. No additional data is stored per vertex. Parallel
/// edges are stored once per insertion.
#[derive(Debug, Clone, Default)]
pub struct IndexGraph {
    vertices: Vec<Vertex>,
    edge_count: usize,
}

/// Incoming and outgoing edges of a single vertex, by index
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    pub in_edges: Vec<usize>,
    pub out_edges: Vec<usize>,
}

impl Vertex {
    /// Number of incoming edges, counting parallel edges separately
    pub fn in_degree(&self) -> usize {
        self.in_edges.len()
    }

    /// Number of outgoing edges, counting parallel edges separately
    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }
}

// progress of a vertex through the two passes of Kosaraju's algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Discovered,
    Assigned,
}

impl IndexGraph {
    /// Create a new graph with no vertices
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new graph with `len` vertices and no edges
    pub fn with_vertices(len: usize) -> Self {
        let mut vertices = Vec::with_capacity(len);
        vertices.resize_with(len, Default::default);

        IndexGraph { vertices, edge_count: 0 }
    }

    /// Append a vertex without edges and return its index
    pub fn add_vertex(&mut self) -> usize {
        self.vertices.push(Vertex::default());
        self.vertices.len() - 1
    }

    /// Add a new edge to the graph
    ///
    /// This method does not check for duplicate edges.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is not a vertex index of this graph.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.vertices[from].out_edges.push(to);
        self.vertices[to].in_edges.push(from);
        self.edge_count += 1;
    }

    /// Returns the number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of edges, counting parallel edges separately
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns an iterator over the contained vertices
    pub fn iter(&self) -> SliceIter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Returns the in-degree of every vertex, indexed like the graph
    pub fn in_degrees(&self) -> Vec<usize> {
        self.vertices.iter().map(Vertex::in_degree).collect()
    }

    /// Find the strongly connected components that contain a cycle
    ///
    /// Uses Kosaraju's algorithm in `O(V + E)` time. A component is returned
    /// if it has more than one vertex, or if its single vertex has a
    /// self-loop. Vertices within a component are sorted by index and
    /// components are sorted by their smallest index.
    pub fn cyclic_components(&self) -> Vec<Vec<usize>> {
        let mut marks = vec![Mark::Unvisited; self.vertices.len()];
        let mut post_order = Vec::with_capacity(self.vertices.len());
        let mut dfs_stack = Vec::new();

        // depth-first search along out-edges from every unvisited vertex,
        // recording vertices in post-order
        for root_idx in 0..self.vertices.len() {
            if marks[root_idx] != Mark::Unvisited {
                continue
            }

            marks[root_idx] = Mark::Discovered;
            dfs_stack.push((root_idx, 0));

            while let Some((idx, edge_idx)) = dfs_stack.pop() {
                if edge_idx < self.vertices[idx].out_edges.len() {
                    dfs_stack.push((idx, edge_idx + 1));

                    let next_idx = self.vertices[idx].out_edges[edge_idx];
                    if marks[next_idx] == Mark::Unvisited {
                        marks[next_idx] = Mark::Discovered;
                        dfs_stack.push((next_idx, 0));
                    }
                } else {
                    post_order.push(idx);
                }
            }
        }

        // collect components by depth-first search in opposite edge
        // direction, taking roots in reverse post-order
        let mut components = Vec::new();
        while let Some(root_idx) = post_order.pop() {
            if marks[root_idx] == Mark::Assigned {
                continue
            }

            let mut component = Vec::new();

            dfs_stack.push((root_idx, 0));

            while let Some((idx, edge_idx)) = dfs_stack.pop() {
                if edge_idx < self.vertices[idx].in_edges.len() {
                    dfs_stack.push((idx, edge_idx + 1));

                    let next_idx = self.vertices[idx].in_edges[edge_idx];
                    if marks[next_idx] == Mark::Discovered {
                        marks[next_idx] = Mark::Assigned;
                        dfs_stack.push((next_idx, 0));
                        component.push(next_idx);
                    }
                }
            }

            // the root is only reached again if it lies on a cycle
            if marks[root_idx] == Mark::Assigned {
                component.sort_unstable();
                components.push(component);
            } else {
                marks[root_idx] = Mark::Assigned;
            }
        }

        components.sort_unstable_by_key(|component| component[0]);
        components
    }
}

impl Index<usize> for IndexGraph {
    type Output = Vertex;

    fn index(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }
}

impl<'g> IntoIterator for &'g IndexGraph {
    type Item = &'g Vertex;
    type IntoIter = SliceIter<'g, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
