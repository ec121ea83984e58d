//! Indexed Binary Min-Heap with Dijkstra Shortest Paths
//!
//! This crate provides a binary min-heap keyed by value, so that any element's
//! priority can be changed in logarithmic time, plus a single-source shortest
//! path computation built on top of it.
//!
//! # Features
//!
//! - **Indexed Binary Heap**: O(log n) insert, extract-min, and
//!   `change_priority`; O(1) peek and average-case membership test. A
//!   value-to-index position map keeps every element addressable without a
//!   linear scan.
//! - **Pluggable position maps**: the value-to-index map is a generic
//!   parameter; a hash-backed default and a tree-backed alternative are
//!   provided (see [`position`]).
//! - **Shortest paths**: Dijkstra's algorithm over non-negatively weighted
//!   directed graphs, with distance and full-path queries to every reachable
//!   node (see [`shortest_paths`]).
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::indexed_binary::IndexedBinaryHeap;
//! use indexed_heap::KeyedHeap;
//!
//! let mut heap = IndexedBinaryHeap::new();
//! heap.insert("walk", 5).unwrap();
//! heap.insert("bike", 3).unwrap();
//! heap.insert("train", 8).unwrap();
//!
//! // "walk" becomes the cheapest option
//! heap.change_priority(&"walk", 1).unwrap();
//! assert_eq!(heap.peek_min(), Ok(&"walk"));
//! assert_eq!(heap.extract_min(), Ok("walk"));
//! assert_eq!(heap.extract_min(), Ok("bike"));
//! ```

pub mod indexed_binary;
pub mod position;
pub mod shortest_paths;
pub mod traits;

// Re-export the main trait and error type for convenience
pub use traits::{HeapError, KeyedHeap};
