//! Dijkstra's single-source shortest paths
//!
//! This module computes shortest distances and paths from an origin node to
//! every reachable node of a non-negatively weighted directed graph, using
//! the indexed heap as the frontier: nodes waiting to be finalized sit in the
//! heap keyed by their best known distance, and a shorter path discovered
//! later lowers their priority in place.
//!
//! The graph is supplied by the caller through the [`Graph`] trait; the
//! algorithm never mutates it. [`AdjacencyGraph`] is a ready-made
//! adjacency-list implementation for tests and small programs.
//!
//! Negative edge weights are outside the algorithm's contract and are not
//! validated; with them the reported distances are meaningless.
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::shortest_paths::{AdjacencyGraph, ShortestPaths};
//!
//! let mut graph = AdjacencyGraph::new();
//! graph.add_edge("a", "b", 1.0);
//! graph.add_edge("b", "c", 2.0);
//! graph.add_edge("a", "c", 4.0);
//!
//! let mut paths = ShortestPaths::new();
//! paths.compute(&graph, "a");
//!
//! assert_eq!(paths.shortest_path_length(&"c"), 3.0);
//! assert_eq!(paths.shortest_path(&"c"), Some(vec!["a", "b", "c"]));
//! ```

use crate::indexed_binary::IndexedBinaryHeap;
use crate::traits::KeyedHeap;
use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Trait for graphs the shortest-path computation can walk
///
/// Implement this for your graph representation. Nodes are cheap-to-clone
/// identifiers; edges are directed and carry non-negative `f64` weights.
pub trait Graph {
    /// Node identifier type
    type Node: Clone + Eq + Hash;

    /// Outgoing edges of `node` as (neighbor, weight) pairs.
    ///
    /// Nodes absent from the graph have no outgoing edges.
    fn out_edges(&self, node: &Self::Node) -> Vec<(Self::Node, f64)>;
}

/// Directed adjacency-list graph
///
/// A convenience [`Graph`] implementation: nodes of any hashable id type,
/// edges appended in insertion order. Parallel edges are kept; the shortest
/// one wins during relaxation.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N> {
    adjacency: FxHashMap<N, Vec<(N, f64)>>,
}

impl<N> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self {
            adjacency: FxHashMap::default(),
        }
    }
}

impl<N: Clone + Eq + Hash> AdjacencyGraph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `node` with no edges. Adding an existing node is a no-op.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Adds a directed edge. Both endpoints are created if absent.
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency.entry(from).or_default().push((to, weight));
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Iterator over all node ids.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }
}

impl<N: Clone + Eq + Hash> Graph for AdjacencyGraph<N> {
    type Node = N;

    fn out_edges(&self, node: &N) -> Vec<(N, f64)> {
        self.adjacency.get(node).cloned().unwrap_or_default()
    }
}

/// Per-node record: best known distance from the origin and the previous
/// node on that path (`None` for the origin itself).
#[derive(Debug, Clone)]
struct PathData<N> {
    distance: f64,
    predecessor: Option<N>,
}

/// Single-source shortest distances and paths
///
/// [`compute`](Self::compute) fills the structure for one origin; the query
/// methods then answer for any destination. Each `compute` call discards all
/// results of the previous one.
///
/// # Example
///
/// ```rust
/// use indexed_heap::shortest_paths::{AdjacencyGraph, ShortestPaths};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge(1, 2, 2.5);
/// graph.add_node(3);
///
/// let mut paths = ShortestPaths::new();
/// paths.compute(&graph, 1);
/// assert_eq!(paths.shortest_path_length(&2), 2.5);
/// assert_eq!(paths.shortest_path_length(&3), f64::INFINITY);
/// assert_eq!(paths.shortest_path(&3), None);
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPaths<N> {
    paths: FxHashMap<N, PathData<N>>,
}

impl<N: Clone + Eq + Hash> Default for ShortestPaths<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash> ShortestPaths<N> {
    /// Creates an empty instance. Until [`compute`](Self::compute) runs,
    /// every destination reports as unreachable.
    pub fn new() -> Self {
        Self {
            paths: FxHashMap::default(),
        }
    }

    /// Computes shortest paths from `origin` to every reachable node,
    /// using the default indexed binary heap as the frontier.
    pub fn compute<G>(&mut self, graph: &G, origin: N)
    where
        G: Graph<Node = N>,
    {
        self.compute_with_frontier::<G, IndexedBinaryHeap<N, OrderedFloat<f64>>>(graph, origin);
    }

    /// Computes shortest paths from `origin` with a caller-chosen frontier
    /// heap.
    ///
    /// Any [`KeyedHeap`] over `OrderedFloat<f64>` priorities works; the
    /// algorithm only inserts, extracts the minimum, and decreases
    /// priorities of pending nodes.
    pub fn compute_with_frontier<G, H>(&mut self, graph: &G, origin: N)
    where
        G: Graph<Node = N>,
        H: KeyedHeap<N, OrderedFloat<f64>>,
    {
        self.paths.clear();
        let mut frontier = H::new();

        self.paths.insert(
            origin.clone(),
            PathData {
                distance: 0.0,
                predecessor: None,
            },
        );
        let _ = frontier.insert(origin, OrderedFloat(0.0));

        // Each extraction finalizes one node: with non-negative weights its
        // recorded distance can no longer improve, so it never re-enters the
        // frontier.
        while let Ok(current) = frontier.extract_min() {
            let current_distance = self.paths[&current].distance;
            for (neighbor, weight) in graph.out_edges(&current) {
                let candidate = current_distance + weight;
                let improved = match self.paths.get(&neighbor) {
                    Some(known) => candidate < known.distance,
                    None => true,
                };
                if !improved {
                    continue;
                }
                self.paths.insert(
                    neighbor.clone(),
                    PathData {
                        distance: candidate,
                        predecessor: Some(current.clone()),
                    },
                );
                if frontier.contains(&neighbor) {
                    let _ = frontier.change_priority(&neighbor, OrderedFloat(candidate));
                } else {
                    let _ = frontier.insert(neighbor, OrderedFloat(candidate));
                }
            }
        }
    }

    /// Length of the shortest path from the origin to `destination`, or
    /// `f64::INFINITY` if no path exists.
    pub fn shortest_path_length(&self, destination: &N) -> f64 {
        self.paths
            .get(destination)
            .map_or(f64::INFINITY, |data| data.distance)
    }

    /// The nodes along the shortest path from the origin to `destination`,
    /// both inclusive, or `None` if no path exists. When the destination is
    /// the origin the path holds that single node.
    pub fn shortest_path(&self, destination: &N) -> Option<Vec<N>> {
        if !self.paths.contains_key(destination) {
            return None;
        }
        let mut path = Vec::new();
        let mut current = destination;
        loop {
            path.push(current.clone());
            match &self.paths[current].predecessor {
                Some(previous) => current = previous,
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }

    /// Iterator over every reachable node and its shortest distance.
    pub fn reachable(&self) -> impl Iterator<Item = (&N, f64)> {
        self.paths.iter().map(|(node, data)| (node, data.distance))
    }
}
