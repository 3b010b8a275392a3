use std::fmt;
use std::hash::Hash;

use id_arena::Arena;
use id_arena::ArenaBehavior;

use crate::error::Result;
use crate::graph::DirectedGraph;

/// A builder object that allows to easily add edges to a graph
///
/// It stores an arena id, so that edges can be added specifying only the
/// target or source vertex.
///
/// See `DirectedGraph::from_arena()` for usage examples
#[derive(Debug)]
pub struct ArenaGraphBuilder<'g, Id> {
    graph: &'g mut DirectedGraph<Id>,
    id: Id
}

impl<Id> ArenaGraphBuilder<'_, Id>
    where Id: Copy + Eq + Hash + fmt::Debug
{
    /// Returns a reference to the graph being built
    pub fn as_graph(&self) -> &DirectedGraph<Id> {
        self.graph
    }

    /// Returns the stored id
    pub fn id(&self) -> Id {
        self.id
    }

    /// Add an edge from the stored id to the passed id
    ///
    /// Fails with `Error::UnknownVertex` if `id` belongs to another arena.
    /// This method does not check for duplicate edges.
    pub fn add_out_edge(&mut self, id: Id) -> Result<()> {
        self.graph.add_edge(&self.id, &id)
    }

    /// Add an edge from the passed id to the stored id
    ///
    /// Fails with `Error::UnknownVertex` if `id` belongs to another arena.
    /// This method does not check for duplicate edges.
    pub fn add_in_edge(&mut self, id: Id) -> Result<()> {
        self.graph.add_edge(&id, &self.id)
    }
}

impl<Id> DirectedGraph<Id>
    where Id: Copy + Eq + Hash + fmt::Debug
{
    /// Create a new graph from an existing `Arena`-based graph-like data
    /// structure
    ///
    /// Every id of `arena` becomes a vertex, in arena order. The given
    /// closure is then called once for every element, with an
    /// `ArenaGraphBuilder` instance so that edges can be easily added. The
    /// first error returned by the closure aborts construction.
    ///
    /// # Example
    ///
    /// This example creates a graph of dependencies in a hypothetical compiler
    /// or build tool, with edges from a dependency to the targets that use
    /// them, and checks that the build has no dependency cycle.
    ///
    /// ```rust
    /// use id_arena::Arena;
    /// use id_arena::Id;
    /// use depgraph_scc::CycleAnalyzer;
    /// use depgraph_scc::DirectedGraph;
    /// use depgraph_scc::TopologicalSequencer;
    ///
    /// // a target during compilation, having a name and dependencies
    /// struct Target { name: &'static str, deps: Vec<Id<Target>> }
    /// impl Target {
    ///     fn new(name: &'static str) -> Self {
    ///         Target { name, deps: Vec::new() }
    ///     }
    /// }
    ///
    /// # fn main() -> Result<(), depgraph_scc::Error> {
    /// let mut arena: Arena<Target> = Arena::new();
    ///
    /// let program = arena.alloc(Target::new("program"));
    /// let main_c = arena.alloc(Target::new("main.c"));
    /// let util_c = arena.alloc(Target::new("util.c"));
    /// let util_h = arena.alloc(Target::new("util.h"));
    /// let libfoo_so = arena.alloc(Target::new("libfoo_so"));
    ///
    /// arena[program].deps.extend_from_slice(&[main_c, util_c, libfoo_so]);
    /// arena[main_c].deps.push(util_h);
    /// arena[util_c].deps.push(util_h);
    ///
    /// let graph = DirectedGraph::from_arena(&arena, |mut builder, target| {
    ///     for &dep in &target.deps {
    ///         builder.add_in_edge(dep)?;
    ///     }
    ///     Ok(())
    /// })?;
    ///
    /// assert!(!CycleAnalyzer::new(&graph).has_cycle());
    ///
    /// let build_order = TopologicalSequencer::new(&graph).order()?;
    /// assert_eq!(arena[*build_order[0]].name, "util.h");
    /// assert_eq!(arena[**build_order.last().unwrap()].name, "program");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_arena<T, A, F>(arena: &Arena<T, A>, mut f: F) -> Result<Self>
        where A: ArenaBehavior<Id = Id>, F: FnMut(ArenaGraphBuilder<'_, Id>, &T) -> Result<()>
    {
        let mut graph = Self::with_capacity(arena.len());

        for (id, _) in arena.iter() {
            graph.add_vertex(id);
        }

        for (id, element) in arena.iter() {
            f(ArenaGraphBuilder { graph: &mut graph, id }, element)?;
        }

        Ok(graph)
    }
}
