//! Topological ordering with Kahn's algorithm.

use std::collections::VecDeque as Queue;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::graph::DirectedGraph;

/// Produces topological orderings of a `DirectedGraph`
///
/// Every call to `iter()` or `order()` starts a fresh computation, so a
/// sequencer can be reused any number of times. If the graph contains a
/// cycle, the computation fails with `Error::CyclicGraph` instead of
/// returning a partial order.
///
/// Vertices that become ready at the same time are emitted in the order
/// they became ready, starting from the sources in insertion order.
///
/// # Example
///
/// ```rust
/// use depgraph_scc::DirectedGraph;
/// use depgraph_scc::TopologicalSequencer;
///
/// let mut graph = DirectedGraph::new();
/// for vertex in ["shirt", "tie", "jacket", "belt"] {
///     graph.add_vertex(vertex);
/// }
/// graph.add_edge("shirt", "tie").unwrap();
/// graph.add_edge("tie", "jacket").unwrap();
/// graph.add_edge("belt", "jacket").unwrap();
///
/// let order = TopologicalSequencer::new(&graph).order().unwrap();
/// assert_eq!(order, vec![&"shirt", &"belt", &"tie", &"jacket"]);
///
/// graph.add_edge("jacket", "shirt").unwrap();
/// assert!(TopologicalSequencer::new(&graph).order().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TopologicalSequencer<'g, V> {
    graph: &'g DirectedGraph<V>,
}

/// Lifecycle of a `TopologicalIter`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// More vertices may still be emitted
    Ready,
    /// Every vertex has been emitted
    Exhausted,
    /// A cycle stopped the computation
    Failed,
}

/// A lazy topological ordering of a `DirectedGraph`
///
/// Yields `Ok(vertex)` for each vertex in order. If a cycle prevents some
/// vertices from ever becoming ready, yields a single
/// `Err(Error::CyclicGraph)` listing them and then ends.
#[derive(Debug, Clone)]
pub struct TopologicalIter<'g, V> {
    graph: &'g DirectedGraph<V>,
    in_degrees: Vec<usize>,
    queue: Queue<usize>,
    emitted: usize,
    state: SequencerState,
}

impl<'g, V> TopologicalSequencer<'g, V>
    where V: Eq + Hash + Clone + fmt::Debug
{
    /// Create a sequencer for `graph`
    pub fn new(graph: &'g DirectedGraph<V>) -> Self {
        TopologicalSequencer { graph }
    }

    /// Start a new lazy topological ordering
    pub fn iter(&self) -> TopologicalIter<'g, V> {
        let in_degrees = self.graph.index_graph().in_degrees();

        // enqueue vertices with in-degree zero
        let queue = in_degrees.iter()
            .enumerate()
            .filter(|&(_, &in_degree)| in_degree == 0)
            .map(|(idx, _)| idx)
            .collect();

        TopologicalIter {
            graph: self.graph,
            in_degrees,
            queue,
            emitted: 0,
            state: SequencerState::Ready
        }
    }

    /// Compute a complete topological ordering
    ///
    /// Fails with `Error::CyclicGraph` if the graph contains a cycle. No
    /// partial order is returned in that case.
    pub fn order(&self) -> Result<Vec<&'g V>> {
        self.iter().collect()
    }
}

impl<'g, V> TopologicalIter<'g, V> {
    /// Returns the current state of the computation
    pub fn state(&self) -> SequencerState {
        self.state
    }

    fn remaining(&self) -> Vec<String>
        where V: fmt::Debug
    {
        // vertices never emitted are exactly those with edges left over
        self.in_degrees.iter()
            .enumerate()
            .filter(|&(_, &in_degree)| in_degree > 0)
            .map(|(idx, _)| format!("{:?}", self.graph.label(idx)))
            .collect()
    }
}

impl<'g, V> Iterator for TopologicalIter<'g, V>
    where V: fmt::Debug
{
    type Item = Result<&'g V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != SequencerState::Ready {
            return None
        }

        let graph = self.graph;

        // emit the next ready vertex, decrement the in-degree of its
        // successors and enqueue those that reach zero
        if let Some(idx) = self.queue.pop_front() {
            for &next_idx in &graph.index_graph()[idx].out_edges {
                self.in_degrees[next_idx] -= 1;
                if self.in_degrees[next_idx] == 0 {
                    self.queue.push_back(next_idx);
                }
            }

            self.emitted += 1;
            return Some(Ok(graph.label(idx)))
        }

        // if every vertex was emitted, the sort is complete
        if self.emitted == self.in_degrees.len() {
            self.state = SequencerState::Exhausted;
            return None
        }

        self.state = SequencerState::Failed;
        let remaining = self.remaining();

        debug!(
            emitted = self.emitted,
            remaining = remaining.len(),
            "topological order blocked by a cycle"
        );

        Some(Err(Error::CyclicGraph { remaining }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            // one slot for a possible error
            SequencerState::Ready => (self.queue.len(), Some(self.in_degrees.len() - self.emitted + 1)),
            _ => (0, Some(0)),
        }
    }
}

impl<V: fmt::Debug> FusedIterator for TopologicalIter<'_, V> {}
