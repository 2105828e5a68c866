//! Indexed binary min-heap with decrease-key.
//!
//! Items are identified by a stable `usize` index (for the router, a
//! vertex's arena index). A side table maps each index to its current slot
//! in the heap array, so a priority can be lowered in O(log n) without
//! searching for the item.

/// Errors from heap operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// Extract on an empty heap
    #[error("heap is empty")]
    Empty,

    /// The item is not currently in the heap
    #[error("item {0} is not in the heap")]
    NotPresent(usize),

    /// The item is already in the heap
    #[error("item {0} is already in the heap")]
    AlreadyPresent(usize),

    /// decrease_key was asked to raise a priority
    #[error("new priority for item {0} is greater than the current one")]
    KeyIncreased(usize),
}

/// A binary min-heap over `(item, priority)` pairs.
///
/// For every item in the heap, `positions[item]` is the slot in `entries`
/// holding it. Every swap updates both sides together.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P> {
    entries: Vec<(usize, P)>,
    positions: Vec<Option<usize>>,
}

impl<P: Ord> Default for IndexedMinHeap<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord> IndexedMinHeap<P> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Create an empty heap sized for items `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    /// Number of items in the heap.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap holds no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `item` is currently in the heap.
    pub fn contains(&self, item: usize) -> bool {
        self.position(item).is_some()
    }

    /// Add `item` with the given priority.
    pub fn insert(&mut self, item: usize, priority: P) -> Result<(), HeapError> {
        if self.contains(item) {
            return Err(HeapError::AlreadyPresent(item));
        }
        if item >= self.positions.len() {
            self.positions.resize(item + 1, None);
        }

        let slot = self.entries.len();
        self.entries.push((item, priority));
        self.positions[item] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Remove and return the entry with the smallest priority.
    pub fn extract_min(&mut self) -> Result<(usize, P), HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty);
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let (item, priority) = self.entries.pop().ok_or(HeapError::Empty)?;
        self.positions[item] = None;
        self.sift_down(0);
        Ok((item, priority))
    }

    /// Lower the priority of an item already in the heap.
    ///
    /// The heap is only repaired upwards, so raising a priority is rejected
    /// with [`HeapError::KeyIncreased`] and leaves the heap unchanged.
    pub fn decrease_key(&mut self, item: usize, priority: P) -> Result<(), HeapError> {
        let slot = self.position(item).ok_or(HeapError::NotPresent(item))?;
        if priority > self.entries[slot].1 {
            return Err(HeapError::KeyIncreased(item));
        }

        self.entries[slot].1 = priority;
        self.sift_up(slot);
        Ok(())
    }

    fn position(&self, item: usize) -> Option<usize> {
        self.positions.get(item).copied().flatten()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].0] = Some(a);
        self.positions[self.entries[b].0] = Some(b);
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.entries[child].1 >= self.entries[parent].1 {
                break;
            }
            self.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * parent + 1;
            let right = left + 1;
            let mut smallest = parent;

            if left < len && self.entries[left].1 < self.entries[smallest].1 {
                smallest = left;
            }
            if right < len && self.entries[right].1 < self.entries[smallest].1 {
                smallest = right;
            }
            if smallest == parent {
                break;
            }

            self.swap(parent, smallest);
            parent = smallest;
        }
    }

    /// Check the heap order and the position table. Test helper.
    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let ordered = (1..self.entries.len())
            .all(|slot| self.entries[(slot - 1) / 2].1 <= self.entries[slot].1);
        let mapped = self
            .entries
            .iter()
            .enumerate()
            .all(|(slot, (item, _))| self.positions[*item] == Some(slot));
        let no_stale = self
            .positions
            .iter()
            .enumerate()
            .filter_map(|(item, slot)| slot.map(|s| (item, s)))
            .all(|(item, slot)| self.entries.get(slot).is_some_and(|(i, _)| *i == item));

        ordered && mapped && no_stale
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(usize, u32),
        Decrease(usize, u32),
        Extract,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..16, 0u32..1000).prop_map(|(i, p)| Op::Insert(i, p)),
            (0usize..16, 0u32..1000).prop_map(|(i, d)| Op::Decrease(i, d)),
            Just(Op::Extract),
        ]
    }

    proptest! {
        /// After any operation sequence the heap is ordered, the position
        /// table agrees with the array, and extract_min returns the minimum.
        #[test]
        fn invariants_hold(ops in proptest::collection::vec(op(), 0..200)) {
            let mut heap = IndexedMinHeap::new();
            let mut model: std::collections::HashMap<usize, u32> = Default::default();

            for op in ops {
                match op {
                    Op::Insert(item, p) => {
                        let res = heap.insert(item, p);
                        if model.contains_key(&item) {
                            prop_assert_eq!(res, Err(HeapError::AlreadyPresent(item)));
                        } else {
                            prop_assert!(res.is_ok());
                            model.insert(item, p);
                        }
                    }
                    Op::Decrease(item, delta) => {
                        match model.get(&item).copied() {
                            Some(current) => {
                                let p = current.saturating_sub(delta);
                                prop_assert!(heap.decrease_key(item, p).is_ok());
                                model.insert(item, p);
                            }
                            None => {
                                prop_assert_eq!(
                                    heap.decrease_key(item, 0),
                                    Err(HeapError::NotPresent(item))
                                );
                            }
                        }
                    }
                    Op::Extract => match heap.extract_min() {
                        Ok((item, p)) => {
                            prop_assert!(model.values().all(|other| p <= *other));
                            prop_assert_eq!(model.remove(&item), Some(p));
                        }
                        Err(e) => {
                            prop_assert_eq!(e, HeapError::Empty);
                            prop_assert!(model.is_empty());
                        }
                    },
                }
                prop_assert!(heap.is_consistent());
                prop_assert_eq!(heap.len(), model.len());
            }
        }
    }
}
