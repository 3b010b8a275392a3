// Copyright 2020 Ferdinand Bachmann
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Cycle detection and topological ordering for dependency graphs, built on
//! [Kosaraju's algorithm](https://en.wikipedia.org/wiki/Kosaraju%27s_algorithm)
//! for strongly connected components and
//! [Kahn's algorithm](https://en.wikipedia.org/wiki/Topological_sorting)
//! for topological sorting.
//!
//! This crate provides:
//!
//! - `DirectedGraph`, a directed graph over arbitrary hashable vertex labels
//!   that keeps vertices in insertion order
//! - `CycleAnalyzer`, which finds every vertex that lies on a cycle and groups
//!   them by strongly connected component in `O(V + E)` time
//! - `TopologicalSequencer`, which lazily produces a topological ordering in
//!   `O(V + E)` time and fails with `Error::CyclicGraph` on cyclic graphs
//! - `IndexGraph`, the adjacency-list graph over dense indices that the
//!   algorithms run on
//!
//! The `id-arena` feature adds `DirectedGraph::from_arena()`, which builds a
//! graph keyed by ids of an existing arena-based data structure.
//!
//! # Example
//!
//! ```rust
//! use depgraph_scc::CycleAnalyzer;
//! use depgraph_scc::DirectedGraph;
//! use depgraph_scc::TopologicalSequencer;
//!
//! let mut graph = DirectedGraph::new();
//! for vertex in ["Dev_GetInfo", "Dev_Reset", "Dev_ModPower"] {
//!     graph.add_vertex(vertex);
//! }
//! graph.add_edge("Dev_GetInfo", "Dev_Reset").unwrap();
//! graph.add_edge("Dev_Reset", "Dev_ModPower").unwrap();
//!
//! let analyzer = CycleAnalyzer::new(&graph);
//! if analyzer.has_cycle() {
//!     for group in analyzer.all_cycle_groups() {
//!         println!("cycle: {:?}", group);
//!     }
//! } else {
//!     for vertex in TopologicalSequencer::new(&graph).iter() {
//!         println!("{}", vertex.unwrap());
//!     }
//! }
//! ```

mod error;
mod index_graph;
mod graph;
mod cycles;
mod toposort;

#[cfg(feature = "id-arena")]
mod arena_graph;

#[cfg(test)]
mod random_graph;

pub use error::*;
pub use index_graph::*;
pub use graph::*;
pub use cycles::*;
pub use toposort::*;

#[cfg(feature = "id-arena")]
pub use arena_graph::*;
