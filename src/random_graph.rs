//! Seeded random graphs and a brute-force reachability oracle for tests.

use crate::graph::DirectedGraph;

/// Marsaglia xorshift64, so every test run sees the same graphs
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        // a zero state would only ever produce zeros
        XorShift(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1)
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

/// Builds a graph on vertices `0..n` with up to `2n` random edges
///
/// Self-loops and parallel edges occur naturally. With `acyclic`, every edge
/// points from a larger to a smaller label and self-loops are skipped, so
/// insertion order is never a valid topological order once edges exist.
pub fn random_graph(rng: &mut XorShift, acyclic: bool) -> (DirectedGraph<u32>, Vec<(u32, u32)>) {
    let n = 1 + rng.below(12) as u32;
    let edge_count = rng.below(2 * n as u64 + 1);

    let mut graph = DirectedGraph::with_capacity(n as usize);
    for vertex in 0..n {
        graph.add_vertex(vertex);
    }

    let mut edges = Vec::new();
    for _ in 0..edge_count {
        let from = rng.below(n as u64) as u32;
        let to = rng.below(n as u64) as u32;

        let edge = if !acyclic {
            (from, to)
        } else if from == to {
            continue
        } else {
            (from.max(to), from.min(to))
        };

        graph.add_edge(&edge.0, &edge.1).unwrap();
        edges.push(edge);
    }

    (graph, edges)
}

/// `reach[u][v]` is `true` if a path of one or more edges leads from `u` to `v`
pub fn reachability(n: usize, edges: &[(u32, u32)]) -> Vec<Vec<bool>> {
    let mut reach = vec![vec![false; n]; n];
    for &(from, to) in edges {
        reach[from as usize][to as usize] = true;
    }

    // Floyd-Warshall transitive closure
    for k in 0..n {
        for i in 0..n {
            if reach[i][k] {
                for j in 0..n {
                    if reach[k][j] {
                        reach[i][j] = true;
                    }
                }
            }
        }
    }

    reach
}
