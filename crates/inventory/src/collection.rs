//! Insertion-ordered, capacity-bounded entity storage.

use stockroom_core::{DomainError, DomainResult, Entity, Identifier};

/// An ordered sequence of entities with an enforced maximum size.
///
/// Lookups are linear and compare identifiers case-insensitively.
#[derive(Debug, Clone)]
pub struct BoundedCollection<T> {
    label: &'static str,
    capacity: usize,
    entries: Vec<T>,
}

impl<T: Entity> BoundedCollection<T> {
    pub fn new(label: &'static str, capacity: usize) -> Self {
        Self {
            label,
            capacity,
            entries: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Fails with `CapacityExceeded` when full.
    pub fn ensure_room(&self) -> DomainResult<()> {
        if self.is_full() {
            return Err(DomainError::capacity_exceeded(self.label, self.capacity));
        }
        Ok(())
    }

    /// Append an entry after checking capacity.
    pub fn push(&mut self, entry: T) -> DomainResult<()> {
        self.ensure_room()?;
        self.entries.push(entry);
        Ok(())
    }

    /// First entry (in insertion order) whose identifier matches `key`.
    pub fn find(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.id().matches(key))
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut T> {
        self.entries.iter_mut().find(|e| e.id().matches(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}
