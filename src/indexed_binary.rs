//! Indexed binary min-heap
//!
//! A complete binary min-heap stored in a dense, zero-indexed vector,
//! augmented with a value-to-index position map so that any element can be
//! found and have its priority changed without a linear scan.
//!
//! # Time Complexity
//!
//! With the default hash-backed position map:
//!
//! | Operation         | Complexity          |
//! |-------------------|---------------------|
//! | `insert`          | O(log n) expected   |
//! | `extract_min`     | O(log n)            |
//! | `peek_min`        | O(1)                |
//! | `contains`        | O(1) average        |
//! | `change_priority` | O(log n)            |
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::indexed_binary::IndexedBinaryHeap;
//! use indexed_heap::KeyedHeap;
//!
//! let mut heap = IndexedBinaryHeap::new();
//! heap.insert("red", 3).unwrap();
//! heap.insert("green", 1).unwrap();
//! heap.insert("blue", 2).unwrap();
//!
//! assert!(heap.contains(&"blue"));
//! assert_eq!(heap.extract_min(), Ok("green"));
//! assert_eq!(heap.extract_min(), Ok("blue"));
//! assert_eq!(heap.extract_min(), Ok("red"));
//! ```

use crate::position::{HashPositionMap, PositionMap};
use crate::traits::{HeapError, KeyedHeap};

/// An entry pairs a value with its priority.
#[derive(Debug, Clone)]
struct Entry<V, P> {
    value: V,
    priority: P,
}

/// A binary min-heap over distinct values with value-keyed priority updates
///
/// `entries` holds a complete binary tree in the usual dense layout:
/// `entries[0]` is the root, the children of `entries[i]` are
/// `entries[2i + 1]` and `entries[2i + 2]`, and the parent of a non-root
/// `entries[i]` is `entries[(i - 1) / 2]`.
///
/// Invariants:
///
/// 1. The tree is complete: indices `0..len` are all occupied.
/// 2. Heap order: every non-root entry's priority is greater than or equal
///    to its parent's priority.
/// 3. Values are distinct; duplicate priorities are allowed.
/// 4. `positions` tracks exactly the values in `entries`, so
///    `positions.len() == entries.len()`.
/// 5. For every entry at index `i`, `positions.get(&entries[i].value)` is
///    `Some(i)`.
///
/// Invariants 4 and 5 hold because every structural move goes through
/// [`Self::swap_entries`], which updates both slots of the map in the same
/// step.
///
/// The position map type `M` is a generic parameter; see
/// [`crate::position`] for the provided backends. Values are cloned into the
/// map, so `V` should be cheap to clone (an id, a small string, an integer).
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<V, P, M = HashPositionMap<V>> {
    entries: Vec<Entry<V, P>>,
    positions: M,
}

impl<V, P> IndexedBinaryHeap<V, P> {
    /// Creates an empty heap with the default hash-backed position map.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V, P, M: Default> Default for IndexedBinaryHeap<V, P, M> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: M::default(),
        }
    }
}

impl<V, P, M> KeyedHeap<V, P> for IndexedBinaryHeap<V, P, M>
where
    V: Clone,
    P: Ord,
    M: PositionMap<V>,
{
    fn new() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, value: V, priority: P) -> Result<(), HeapError> {
        if self.positions.contains_key(&value) {
            return Err(HeapError::DuplicateValue);
        }
        self.positions.insert(value.clone(), self.entries.len());
        self.entries.push(Entry { value, priority });
        self.bubble_up(self.entries.len() - 1);
        Ok(())
    }

    fn peek_min(&self) -> Result<&V, HeapError> {
        self.entries
            .first()
            .map(|entry| &entry.value)
            .ok_or(HeapError::Empty)
    }

    fn extract_min(&mut self) -> Result<V, HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.entries.len() - 1;
        self.swap_entries(0, last);
        // The old root now sits in the last slot.
        let entry = self.entries.pop().ok_or(HeapError::Empty)?;
        self.positions.remove(&entry.value);
        if !self.entries.is_empty() {
            self.bubble_down(0);
        }
        Ok(entry.value)
    }

    fn contains(&self, value: &V) -> bool {
        self.positions.contains_key(value)
    }

    fn change_priority(&mut self, value: &V, priority: P) -> Result<(), HeapError> {
        let index = self.positions.get(value).ok_or(HeapError::ValueNotFound)?;
        let decreased = priority < self.entries[index].priority;
        self.entries[index].priority = priority;
        if decreased {
            self.bubble_up(index);
        } else {
            // equal priorities take this path; bubble_down's non-strict
            // comparison leaves the arrangement untouched
            self.bubble_down(index);
        }
        Ok(())
    }
}

impl<V, P, M> IndexedBinaryHeap<V, P, M>
where
    V: Clone,
    P: Ord,
    M: PositionMap<V>,
{
    /// Swap `entries[h]` and `entries[k]` and rewrite both position-map
    /// slots in the same step. All restructuring routes position changes
    /// through here, so the map never disagrees with storage.
    fn swap_entries(&mut self, h: usize, k: usize) {
        self.entries.swap(h, k);
        self.positions.insert(self.entries[h].value.clone(), h);
        self.positions.insert(self.entries[k].value.clone(), k);
    }

    /// Move `entries[k]` toward the root until its parent's priority is no
    /// greater than its own.
    fn bubble_up(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.entries[k].priority >= self.entries[parent].priority {
                break;
            }
            self.swap_entries(k, parent);
            k = parent;
        }
    }

    /// Move `entries[k]` toward the leaves until no child has a strictly
    /// smaller priority.
    fn bubble_down(&mut self, mut k: usize) {
        while 2 * k + 1 < self.entries.len() {
            let child = self.smaller_child(k);
            if self.entries[k].priority <= self.entries[child].priority {
                break;
            }
            self.swap_entries(k, child);
            k = child;
        }
    }

    /// Index of the child of `k` with the smaller priority. When both
    /// children exist and their priorities are equal, the right child wins.
    /// Precondition: the left child exists.
    fn smaller_child(&self, k: usize) -> usize {
        let left = 2 * k + 1;
        let right = 2 * k + 2;
        if right >= self.entries.len() || self.entries[left].priority < self.entries[right].priority
        {
            left
        } else {
            right
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::TreePositionMap;

    impl<V, P, M> IndexedBinaryHeap<V, P, M>
    where
        V: Clone,
        P: Ord,
        M: PositionMap<V>,
    {
        /// Check heap order and storage/map agreement after a mutation.
        fn assert_invariants(&self) {
            assert_eq!(self.positions.len(), self.entries.len());
            for (i, entry) in self.entries.iter().enumerate() {
                assert_eq!(self.positions.get(&entry.value), Some(i));
                if i > 0 {
                    let parent = (i - 1) / 2;
                    assert!(self.entries[parent].priority <= entry.priority);
                }
            }
        }

        fn values_in_storage_order(&self) -> Vec<V> {
            self.entries.iter().map(|e| e.value.clone()).collect()
        }
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: IndexedBinaryHeap<&str, i32> = IndexedBinaryHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek_min(), Err(HeapError::Empty));
        assert_eq!(heap.extract_min(), Err(HeapError::Empty));
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = IndexedBinaryHeap::new();
        heap.insert("five", 5).unwrap();
        heap.insert("one", 1).unwrap();
        heap.insert("ten", 10).unwrap();
        heap.insert("three", 3).unwrap();
        heap.assert_invariants();

        assert_eq!(heap.len(), 4);
        assert_eq!(heap.peek_min(), Ok(&"one"));

        assert_eq!(heap.extract_min(), Ok("one"));
        heap.assert_invariants();
        assert_eq!(heap.extract_min(), Ok("three"));
        assert_eq!(heap.extract_min(), Ok("five"));
        assert_eq!(heap.extract_min(), Ok("ten"));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_singleton_insert_then_extract() {
        let mut heap = IndexedBinaryHeap::new();
        heap.insert("only", 7).unwrap();
        assert_eq!(heap.extract_min(), Ok("only"));
        assert!(heap.is_empty());
        assert!(!heap.contains(&"only"));
    }

    #[test]
    fn test_duplicate_insert_leaves_heap_unchanged() {
        let mut heap = IndexedBinaryHeap::new();
        heap.insert("a", 1).unwrap();
        heap.insert("b", 2).unwrap();

        assert_eq!(heap.insert("a", 99), Err(HeapError::DuplicateValue));
        assert_eq!(heap.len(), 2);
        heap.assert_invariants();

        assert_eq!(heap.extract_min(), Ok("a"));
        assert_eq!(heap.extract_min(), Ok("b"));
    }

    #[test]
    fn test_contains_tracks_membership() {
        let mut heap = IndexedBinaryHeap::new();
        assert!(!heap.contains(&"x"));
        heap.insert("x", 4).unwrap();
        assert!(heap.contains(&"x"));
        heap.extract_min().unwrap();
        assert!(!heap.contains(&"x"));
    }

    #[test]
    fn test_change_priority_absent_value() {
        let mut heap = IndexedBinaryHeap::new();
        heap.insert("a", 1).unwrap();
        assert_eq!(
            heap.change_priority(&"missing", 0),
            Err(HeapError::ValueNotFound)
        );
        assert_eq!(heap.len(), 1);
        heap.assert_invariants();
    }

    #[test]
    fn test_change_priority_moves_both_directions() {
        let mut heap = IndexedBinaryHeap::new();
        heap.insert("a", 10).unwrap();
        heap.insert("b", 20).unwrap();
        heap.insert("c", 30).unwrap();

        // decrease to the top
        heap.change_priority(&"c", 1).unwrap();
        heap.assert_invariants();
        assert_eq!(heap.peek_min(), Ok(&"c"));

        // increase away from the top
        heap.change_priority(&"c", 40).unwrap();
        heap.assert_invariants();
        assert_eq!(heap.peek_min(), Ok(&"a"));

        assert_eq!(heap.extract_min(), Ok("a"));
        assert_eq!(heap.extract_min(), Ok("b"));
        assert_eq!(heap.extract_min(), Ok("c"));
    }

    #[test]
    fn test_extract_min_tie_break_prefers_right_child() {
        let mut heap = IndexedBinaryHeap::new();
        // Builds storage [A(1), B(5), C(5), D(9)] with no bubbling.
        heap.insert("A", 1).unwrap();
        heap.insert("B", 5).unwrap();
        heap.insert("C", 5).unwrap();
        heap.insert("D", 9).unwrap();
        assert_eq!(heap.values_in_storage_order(), vec!["A", "B", "C", "D"]);

        // Extracting A moves D to the root; its children B and C have equal
        // priority, so the right child C must rise.
        assert_eq!(heap.extract_min(), Ok("A"));
        heap.assert_invariants();
        assert_eq!(heap.peek_min(), Ok(&"C"));
        assert_eq!(heap.values_in_storage_order(), vec!["C", "B", "D"]);
    }

    #[test]
    fn test_change_priority_tie_break_prefers_right_child() {
        let mut heap = IndexedBinaryHeap::new();
        heap.insert("A", 1).unwrap();
        heap.insert("B", 5).unwrap();
        heap.insert("C", 5).unwrap();
        heap.insert("D", 9).unwrap();

        // Raising A forces a bubble_down choosing between the equal-priority
        // children B (left) and C (right); C must win.
        heap.change_priority(&"A", 9).unwrap();
        heap.assert_invariants();
        assert_eq!(heap.peek_min(), Ok(&"C"));
        assert_eq!(heap.values_in_storage_order(), vec!["C", "B", "A", "D"]);
    }

    #[test]
    fn test_change_priority_to_equal_value_is_a_no_op() {
        let mut heap = IndexedBinaryHeap::new();
        heap.insert("A", 1).unwrap();
        heap.insert("B", 5).unwrap();
        heap.insert("C", 5).unwrap();
        heap.insert("D", 9).unwrap();

        heap.change_priority(&"B", 5).unwrap();
        assert_eq!(heap.values_in_storage_order(), vec!["A", "B", "C", "D"]);
        heap.assert_invariants();
    }

    #[test]
    fn test_duplicate_priorities_all_surface() {
        let mut heap = IndexedBinaryHeap::new();
        heap.insert("a", 1).unwrap();
        heap.insert("b", 1).unwrap();
        heap.insert("c", 1).unwrap();

        let mut drained = vec![
            heap.extract_min().unwrap(),
            heap.extract_min().unwrap(),
            heap.extract_min().unwrap(),
        ];
        drained.sort_unstable();
        assert_eq!(drained, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_heap_sort_property_with_many_elements() {
        let mut heap = IndexedBinaryHeap::new();
        for i in 0..100u32 {
            // scattered insertion order
            let priority = (i * 37) % 101;
            heap.insert(i, priority).unwrap();
            heap.assert_invariants();
        }

        let mut last = 0;
        while !heap.is_empty() {
            let value = heap.extract_min().unwrap();
            heap.assert_invariants();
            let priority = (value * 37) % 101;
            assert!(priority >= last);
            last = priority;
        }
    }

    #[test]
    fn test_tree_backed_heap() {
        let mut heap: IndexedBinaryHeap<String, i32, TreePositionMap<String>> =
            IndexedBinaryHeap::default();
        heap.insert("left".to_string(), 2).unwrap();
        heap.insert("right".to_string(), 1).unwrap();
        heap.change_priority(&"left".to_string(), 0).unwrap();
        heap.assert_invariants();

        assert_eq!(heap.extract_min(), Ok("left".to_string()));
        assert_eq!(heap.extract_min(), Ok("right".to_string()));
    }

    #[test]
    fn test_reinsert_after_extract() {
        let mut heap = IndexedBinaryHeap::new();
        heap.insert("a", 3).unwrap();
        assert_eq!(heap.extract_min(), Ok("a"));
        // the value is free again once extracted
        heap.insert("a", 1).unwrap();
        assert_eq!(heap.peek_min(), Ok(&"a"));
        heap.assert_invariants();
    }
}
