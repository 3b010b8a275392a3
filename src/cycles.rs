//! Cycle detection based on strongly connected components.
//!
//! A vertex lies on a cycle exactly when its strongly connected component
//! has more than one vertex, or when it has an edge to itself. Each such
//! component forms one cycle group. Individual simple cycles are not
//! enumerated.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::graph::DirectedGraph;

/// Cycle analysis of a `DirectedGraph`
///
/// The strongly connected components are computed once, when the analyzer
/// is created, and every query is answered from that result. The analyzer
/// borrows the graph, so the graph cannot change while the analysis is
/// alive; create a new analyzer after mutating the graph.
///
/// # Example
///
/// ```rust
/// use depgraph_scc::CycleAnalyzer;
/// use depgraph_scc::DirectedGraph;
///
/// let mut graph = DirectedGraph::new();
/// for vertex in ["a", "b", "c", "d"] {
///     graph.add_vertex(vertex);
/// }
/// graph.add_edge("a", "b").unwrap();
/// graph.add_edge("b", "c").unwrap();
/// graph.add_edge("c", "a").unwrap();
/// graph.add_edge("c", "d").unwrap();
///
/// let analyzer = CycleAnalyzer::new(&graph);
///
/// assert!(analyzer.has_cycle());
/// assert_eq!(analyzer.all_cycle_groups(), vec![vec![&"a", &"b", &"c"]]);
/// assert!(analyzer.cycle_group_containing("d").unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct CycleAnalyzer<'g, V> {
    graph: &'g DirectedGraph<V>,
    groups: Vec<Vec<usize>>,
    membership: Vec<Option<usize>>,
}

impl<'g, V> CycleAnalyzer<'g, V>
    where V: Eq + Hash + Clone + fmt::Debug
{
    /// Analyze `graph`, computing its cycle groups
    pub fn new(graph: &'g DirectedGraph<V>) -> Self {
        let groups = graph.index_graph().cyclic_components();

        let mut membership = vec![None; graph.vertex_count()];
        for (group_idx, group) in groups.iter().enumerate() {
            for &idx in group {
                membership[idx] = Some(group_idx);
            }
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            cycle_groups = groups.len(),
            "analyzed graph for cycles"
        );

        CycleAnalyzer { graph, groups, membership }
    }

    /// Returns `true` if the graph contains at least one cycle
    pub fn has_cycle(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Returns the number of disjoint cycle groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns every vertex that lies on at least one cycle
    pub fn cycle_vertices(&self) -> HashSet<&'g V> {
        let graph = self.graph;
        self.groups.iter()
            .flatten()
            .map(|&idx| graph.label(idx))
            .collect()
    }

    /// Returns `true` if `vertex` lies on a cycle
    ///
    /// Fails with `Error::VertexNotFound` if `vertex` is not in the graph.
    pub fn is_on_cycle<Q>(&self, vertex: &Q) -> Result<bool>
        where V: Borrow<Q>, Q: Hash + Eq + fmt::Debug + ?Sized
    {
        let idx = self.graph.index_of(vertex).ok_or_else(|| Error::vertex_not_found(vertex))?;

        Ok(self.membership[idx].is_some())
    }

    /// Returns the cycle group that contains `vertex`
    ///
    /// The group is empty if `vertex` is in the graph but not on any cycle.
    /// Fails with `Error::VertexNotFound` if `vertex` is not in the graph.
    pub fn cycle_group_containing<Q>(&self, vertex: &Q) -> Result<Vec<&'g V>>
        where V: Borrow<Q>, Q: Hash + Eq + fmt::Debug + ?Sized
    {
        let idx = self.graph.index_of(vertex).ok_or_else(|| Error::vertex_not_found(vertex))?;

        let group = match self.membership[idx] {
            Some(group_idx) => self.labels(&self.groups[group_idx]),
            None => Vec::new(),
        };

        Ok(group)
    }

    /// Returns all cycle groups
    ///
    /// The groups are pairwise disjoint and together contain exactly the
    /// vertices of `cycle_vertices()`. Vertices within a group are listed in
    /// insertion order, and groups are ordered by their earliest inserted
    /// vertex.
    pub fn all_cycle_groups(&self) -> Vec<Vec<&'g V>> {
        self.groups.iter()
            .map(|group| self.labels(group))
            .collect()
    }

    fn labels(&self, group: &[usize]) -> Vec<&'g V> {
        let graph = self.graph;
        group.iter().map(|&idx| graph.label(idx)).collect()
    }
}
