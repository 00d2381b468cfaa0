//! Heap-backed slab allocator addressed by [`NodeId`].
//!
//! Removed slots are threaded onto a freelist and reused by later inserts, so
//! a `NodeId` stays stable for as long as its node is alive.

use std::ops::{Index, IndexMut};

use super::index_types::NodeId;

#[derive(Debug, Clone)]
enum Slot<T> {
    /// Free slot linking to the next free one.
    Free { next: usize },
    Taken(T),
}

/// Slab of values with stable `NodeId` keys.
#[derive(Debug, Clone)]
pub struct Slab<T> {
    slots: Vec<Slot<T>>,
    /// Logical element count (occupied slots only).
    len: usize,
    /// Head of the freelist (index of the next available slot).
    next: usize,
}

impl<T> Default for Slab<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Slab<T> {
    /// Creates an empty slab.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            next: 0,
        }
    }

    /// Inserts a value, returning its stable index.
    pub fn insert(&mut self, value: T) -> NodeId {
        let key = self.next;
        if let Some(Slot::Free { next }) = self.slots.get(key) {
            self.next = *next;
            self.slots[key] = Slot::Taken(value);
        } else {
            self.slots.push(Slot::Taken(value));
            self.next = self.slots.len();
        }
        self.len += 1;
        NodeId::new(key)
    }

    /// Gets a reference to the value at `index`.
    pub fn get(&self, index: NodeId) -> Option<&T> {
        match self.slots.get(index.get()) {
            Some(Slot::Taken(value)) => Some(value),
            _ => None,
        }
    }

    /// Gets a mutable reference to the value at `index`.
    pub fn get_mut(&mut self, index: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(index.get()) {
            Some(Slot::Taken(value)) => Some(value),
            _ => None,
        }
    }

    /// Removes the value at `index`, returning it if present.
    pub fn try_remove(&mut self, index: NodeId) -> Option<T> {
        let key = index.get();
        let slot = self.slots.get_mut(key)?;
        if matches!(slot, Slot::Free { .. }) {
            return None;
        }
        match std::mem::replace(slot, Slot::Free { next: self.next }) {
            Slot::Taken(value) => {
                self.next = key;
                self.len -= 1;
                Some(value)
            }
            Slot::Free { .. } => None,
        }
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the slab is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Taken(value) => Some((NodeId::new(index), value)),
                Slot::Free { .. } => None,
            })
    }
}

impl<T> Index<NodeId> for Slab<T> {
    type Output = T;

    fn index(&self, index: NodeId) -> &Self::Output {
        match self.get(index) {
            Some(value) => value,
            None => panic!("no node at {index:?}"),
        }
    }
}

impl<T> IndexMut<NodeId> for Slab<T> {
    fn index_mut(&mut self, index: NodeId) -> &mut Self::Output {
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("no node at {index:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slab_basic_operations() {
        let mut slab = Slab::<i32>::new();
        assert!(slab.is_empty());

        let idx = slab.insert(42);
        assert_eq!(slab.get(idx), Some(&42));
        assert_eq!(slab[idx], 42);
        assert_eq!(slab.len(), 1);

        let removed = slab.try_remove(idx);
        assert_eq!(removed, Some(42));
        assert!(slab.is_empty());
        assert_eq!(slab.try_remove(idx), None);
    }

    #[test]
    fn slab_reuses_vacant_slots() {
        let mut slab = Slab::new();
        let a = slab.insert("a");
        let b = slab.insert("b");
        let c = slab.insert("c");

        slab.try_remove(b);
        let d = slab.insert("d");
        assert_eq!(d, b);

        let order = slab.iter().map(|(_, value)| *value).collect::<Vec<_>>();
        assert_eq!(order, vec!["a", "d", "c"]);
        assert_eq!(slab[a], "a");
        assert_eq!(slab[c], "c");
    }
}
