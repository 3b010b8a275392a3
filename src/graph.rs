use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::slice::Iter as SliceIter;

use tracing::trace;

use crate::error::Error;
use crate::error::Result;
use crate::index_graph::IndexGraph;

/// A directed graph over labelled vertices
///
/// Vertices are kept in insertion order, which makes every derived ordering
/// (neighbors, cycle groups, topological order) deterministic. Labels are
/// mapped to dense indices into an `IndexGraph`, on which the algorithms run.
///
/// # Example
///
/// ```rust
/// use depgraph_scc::DirectedGraph;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_vertex("main.c");
/// graph.add_vertex("util.h");
///
/// graph.add_edge("util.h", "main.c").unwrap();
///
/// assert_eq!(graph.neighbors("util.h").unwrap(), vec![&"main.c"]);
/// assert!(graph.add_edge("util.h", "libfoo.so").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    labels: Vec<V>,
    indices: HashMap<V, usize>,
    edges: Vec<(usize, usize)>,
    graph: IndexGraph,
}

impl<V> DirectedGraph<V>
    where V: Eq + Hash + Clone + fmt::Debug
{
    /// Create an empty graph
    pub fn new() -> Self {
        DirectedGraph {
            labels: Vec::new(),
            indices: HashMap::new(),
            edges: Vec::new(),
            graph: IndexGraph::new()
        }
    }

    /// Create an empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            labels: Vec::with_capacity(vertices),
            indices: HashMap::with_capacity(vertices),
            edges: Vec::new(),
            graph: IndexGraph::new()
        }
    }

    /// Add a vertex if it is not already present
    ///
    /// Returns `true` if the vertex was inserted and `false` if it already
    /// existed, in which case the graph is unchanged.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.indices.contains_key(&vertex) {
            return false
        }

        let idx = self.graph.add_vertex();
        self.indices.insert(vertex.clone(), idx);
        self.labels.push(vertex);

        true
    }

    /// Add an edge from `from` to `to`
    ///
    /// Both endpoints must have been added with `add_vertex()` before. If
    /// either is missing, `Error::UnknownVertex` names the first missing one
    /// (source before target) and the graph is left unchanged.
    ///
    /// This method does not check for duplicate edges. Parallel edges are
    /// counted by `edge_count()` but behave like a single edge everywhere else.
    pub fn add_edge<Q>(&mut self, from: &Q, to: &Q) -> Result<()>
        where V: Borrow<Q>, Q: Hash + Eq + fmt::Debug + ?Sized
    {
        let (from_idx, to_idx) = match (self.index_of(from), self.index_of(to)) {
            (Some(from_idx), Some(to_idx)) => (from_idx, to_idx),
            (from_idx, _) => {
                let missing = if from_idx.is_none() { from } else { to };
                trace!(vertex = ?missing, "rejected edge with unknown endpoint");
                return Err(Error::unknown_vertex(missing))
            }
        };

        self.graph.add_edge(from_idx, to_idx);
        self.edges.push((from_idx, to_idx));

        Ok(())
    }

    /// Returns the distinct targets of all edges leaving `vertex`
    ///
    /// Targets are listed in the order their first edge was added.
    pub fn neighbors<Q>(&self, vertex: &Q) -> Result<Vec<&V>>
        where V: Borrow<Q>, Q: Hash + Eq + fmt::Debug + ?Sized
    {
        let idx = self.index_of(vertex).ok_or_else(|| Error::vertex_not_found(vertex))?;

        let mut seen = HashSet::new();
        let neighbors = self.graph[idx].out_edges.iter()
            .filter(|&&next_idx| seen.insert(next_idx))
            .map(|&next_idx| &self.labels[next_idx])
            .collect();

        Ok(neighbors)
    }

    /// Returns `true` if `vertex` was added to this graph
    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
        where V: Borrow<Q>, Q: Hash + Eq + ?Sized
    {
        self.indices.contains_key(vertex)
    }

    pub(crate) fn index_of<Q>(&self, vertex: &Q) -> Option<usize>
        where V: Borrow<Q>, Q: Hash + Eq + ?Sized
    {
        self.indices.get(vertex).copied()
    }
}

impl<V> DirectedGraph<V> {
    /// Returns an iterator over all vertices in insertion order
    pub fn vertices(&self) -> SliceIter<'_, V> {
        self.labels.iter()
    }

    /// Returns an iterator over all edges in insertion order
    ///
    /// Parallel edges are yielded once per insertion.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.edges.iter()
            .map(move |&(from, to)| (&self.labels[from], &self.labels[to]))
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of edges, counting parallel edges separately
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns a reference to the underlying `IndexGraph`
    ///
    /// Vertex indices in the `IndexGraph` follow insertion order.
    pub fn index_graph(&self) -> &IndexGraph {
        &self.graph
    }

    pub(crate) fn label(&self, idx: usize) -> &V {
        &self.labels[idx]
    }
}

impl<V> Default for DirectedGraph<V>
    where V: Eq + Hash + Clone + fmt::Debug
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'g, V> IntoIterator for &'g DirectedGraph<V> {
    type Item = &'g V;
    type IntoIter = SliceIter<'g, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

/// Formats the graph as `([a, b, c], [(a,b), (b,c)])`
impl<V: fmt::Display> fmt::Display for DirectedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("([")?;
        for (idx, vertex) in self.labels.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", vertex)?;
        }

        f.write_str("], [")?;
        for (idx, &(from, to)) in self.edges.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({},{})", self.labels[from], self.labels[to])?;
        }

        f.write_str("])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> DirectedGraph<&'static str> {
        let mut graph = DirectedGraph::new();
        for vertex in ["a", "b", "c"] {
            graph.add_vertex(vertex);
        }
        graph
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut graph = abc();

        assert!(!graph.add_vertex("b"));
        assert!(graph.add_vertex("d"));
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn added_edge_shows_up_in_neighbors() {
        let mut graph = abc();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("a", "c").unwrap();

        assert_eq!(graph.neighbors("a").unwrap(), vec![&"b", &"c"]);
        assert!(graph.neighbors("b").unwrap().is_empty());
    }

    #[test]
    fn unknown_endpoint_leaves_graph_unchanged() {
        let mut graph = abc();
        graph.add_edge("a", "b").unwrap();

        let err = graph.add_edge("a", "z").unwrap_err();
        assert_eq!(err, Error::UnknownVertex { vertex: "\"z\"".to_string() });

        let err = graph.add_edge("y", "z").unwrap_err();
        assert_eq!(err, Error::UnknownVertex { vertex: "\"y\"".to_string() });

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.vertex_count(), 3);
        assert!(!graph.contains_vertex("z"));
        assert_eq!(graph.neighbors("a").unwrap(), vec![&"b"]);
        assert_eq!(graph.index_graph().edge_count(), 1);
    }

    #[test]
    fn parallel_edges_are_kept_but_neighbors_are_distinct() {
        let mut graph = abc();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("a", "b").unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges().count(), 2);
        assert_eq!(graph.neighbors("a").unwrap(), vec![&"b"]);
    }

    #[test]
    fn self_loop_is_its_own_neighbor() {
        let mut graph = abc();
        graph.add_edge("c", "c").unwrap();

        assert_eq!(graph.neighbors("c").unwrap(), vec![&"c"]);
        assert_eq!(graph.index_graph()[2].out_edges, vec![2]);
    }

    #[test]
    fn neighbors_of_unknown_vertex_fail() {
        let graph = abc();

        assert!(matches!(graph.neighbors("q"), Err(Error::VertexNotFound { .. })));
    }

    #[test]
    fn owned_labels_can_be_queried_by_str() {
        let mut graph: DirectedGraph<String> = DirectedGraph::with_capacity(2);
        graph.add_vertex("x".to_string());
        graph.add_vertex("y".to_string());
        graph.add_edge("x", "y").unwrap();

        assert!(graph.contains_vertex("x"));
        assert_eq!(graph.neighbors("x").unwrap(), vec![&"y".to_string()]);
    }

    #[test]
    fn errors_carry_debug_rendered_labels() {
        let mut graph: DirectedGraph<String> = DirectedGraph::new();
        graph.add_vertex("a".to_string());

        let err = graph.add_edge("a", "b").unwrap_err();
        assert_eq!(err, Error::UnknownVertex { vertex: "\"b\"".to_string() });
        assert_eq!(err.to_string(), "unknown vertex \"b\": add it before adding edges to it");

        let mut numbered: DirectedGraph<u32> = DirectedGraph::new();
        numbered.add_vertex(1);
        assert_eq!(
            numbered.add_edge(&1, &2),
            Err(Error::UnknownVertex { vertex: "2".to_string() })
        );
        assert_eq!(
            numbered.neighbors(&3),
            Err(Error::VertexNotFound { vertex: "3".to_string() })
        );
    }

    #[test]
    fn display_lists_vertices_then_edges() {
        let mut graph = abc();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("b", "b").unwrap();

        assert_eq!(graph.to_string(), "([a, b, c], [(a,b), (b,b)])");
        assert_eq!(DirectedGraph::<&str>::new().to_string(), "([], [])");
    }
}
